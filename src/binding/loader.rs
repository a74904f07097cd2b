//! Dynamic Library Loader
//!
//! Safe wrapper around libloading with the two-step search the binding
//! uses: a conventional local directory first, then the platform loader's
//! standard resolution (system paths, loader cache).

use std::env;
use std::ffi::CString;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use libloading::Library;

use super::{trace, BindingError};

/// Environment variable naming an extra directory searched before the
/// conventional local one.
pub const LIBRARY_PATH_ENV: &str = "RAYBIND_LIBRARY_PATH";

/// Process-wide count of load attempts, one per underlying `dlopen`-level
/// call. Cheap observable for verifying that repeated initialization does
/// the load work at most once.
static LOAD_ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

/// A dynamically loaded native library.
///
/// Owns the platform handle exclusively; dropping the value releases the
/// library. At most one of these exists per bound native library for the
/// lifetime of its binding context.
pub struct SharedLibrary {
    /// Logical name, e.g. "raylib".
    name: String,
    /// The location that actually loaded.
    path: PathBuf,
    /// The loaded library handle.
    library: Library,
}

impl SharedLibrary {
    /// Open a library by logical name.
    ///
    /// Search order:
    /// 1. the platform filename inside [`LIBRARY_PATH_ENV`], if set;
    /// 2. the platform filename in the local directory `./`;
    /// 3. the bare platform filename, resolved by the system loader.
    ///
    /// On failure every attempted location is recorded in the error and
    /// on the trace channel; no handle is retained.
    pub fn open(name: &str) -> Result<Self, BindingError> {
        let file = library_filename(name);
        let mut attempts: Vec<String> = Vec::new();

        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(dir) = env::var(LIBRARY_PATH_ENV) {
            candidates.push(Path::new(&dir).join(&file));
        }
        candidates.push(Path::new(".").join(&file));
        // Bare filename: the platform loader applies its own search rule.
        candidates.push(PathBuf::from(&file));

        for candidate in candidates {
            match Self::try_load(&candidate) {
                Ok(library) => {
                    trace!("loaded '{}' from {}", name, candidate.display());
                    return Ok(Self {
                        name: name.to_string(),
                        path: candidate,
                        library,
                    });
                }
                Err(reason) => attempts.push(reason),
            }
        }

        trace!("load failed for '{}': {}", name, attempts.join("; "));
        Err(BindingError::LibraryNotFound {
            name: name.to_string(),
            attempts,
        })
    }

    /// Open a library from an explicit path or loader-resolvable filename,
    /// bypassing the search.
    pub fn open_at(name: &str, path: impl AsRef<Path>) -> Result<Self, BindingError> {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(library) => {
                trace!("loaded '{}' from {}", name, path.display());
                Ok(Self {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    library,
                })
            }
            Err(reason) => Err(BindingError::LibraryNotFound {
                name: name.to_string(),
                attempts: vec![reason],
            }),
        }
    }

    fn try_load(path: &Path) -> Result<Library, String> {
        LOAD_ATTEMPTS.fetch_add(1, Ordering::Relaxed);

        // Safety: loading a native library runs arbitrary initializer
        // code. The library is the one the binding was built for; the
        // host asked for it by name.
        unsafe { Library::new(path) }.map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Number of load attempts made by this process so far.
    pub fn load_attempts() -> usize {
        LOAD_ATTEMPTS.load(Ordering::Relaxed)
    }

    /// Logical name this library was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location that satisfied the load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve an exported symbol into a typed value (usually a function
    /// pointer).
    ///
    /// # Safety
    ///
    /// `T` must match the export's actual ABI. A mismatch is undefined
    /// behavior at call time, not at resolution time; the symbol tables
    /// pin the signatures in one declarative place for exactly this
    /// reason.
    pub unsafe fn symbol<T: Copy>(&self, name: &str) -> Result<T, BindingError> {
        let c_name =
            CString::new(name).map_err(|_| BindingError::InvalidString(name.to_string()))?;

        match self.library.get::<T>(c_name.as_bytes_with_nul()) {
            Ok(symbol) => Ok(*symbol),
            Err(e) => {
                trace!(
                    "symbol '{}' not found in '{}': {}",
                    name,
                    self.path.display(),
                    e
                );
                Err(BindingError::SymbolsMissing {
                    library: self.name.clone(),
                    symbols: vec![name.to_string()],
                })
            }
        }
    }
}

impl std::fmt::Debug for SharedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLibrary")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Construct the platform-specific shared-library filename for a logical
/// name ("raylib" becomes `libraylib.so`, `libraylib.dylib` or
/// `raylib.dll`). Names that already carry the platform decoration pass
/// through unchanged.
pub fn library_filename(name: &str) -> String {
    #[cfg(target_os = "linux")]
    {
        if name.starts_with("lib") && name.contains(".so") {
            name.to_string()
        } else {
            format!("lib{}.so", name)
        }
    }

    #[cfg(target_os = "macos")]
    {
        if name.starts_with("lib") && name.ends_with(".dylib") {
            name.to_string()
        } else {
            format!("lib{}.dylib", name)
        }
    }

    #[cfg(target_os = "windows")]
    {
        if name.ends_with(".dll") {
            name.to_string()
        } else {
            format!("{}.dll", name)
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        name.to_string()
    }
}
