//! Dynamic Library Binding Bootstrap
//!
//! The one part of this crate with design substance: locate and load a
//! native shared library, resolve a fixed set of exported symbols into
//! typed callable slots, and tear everything down again.
//!
//! # Architecture
//!
//! ```text
//! symbol_table! declaration (slot name + exported name + signature)
//!       │
//!       ▼
//! resolve-all loop (every missing symbol recorded)
//!       │
//!       ├── any missing ──▶ SymbolsMissing, library released, no table
//!       ▼
//! fully populated slot struct, owned by a binding context
//! ```
//!
//! Resolution is all-or-nothing: a partially resolved table is never
//! observable, because a binding with unpredictable missing functions is
//! strictly worse than one that fails fast. Teardown clears every slot
//! before the library handle is released, so a forwarding call that
//! somehow outlives its binding surfaces as [`BindingError::NotReady`]
//! instead of a null function-pointer call.

/// Conditional diagnostic trace on stderr.
///
/// Compiled to a no-op branch unless the `trace` cargo feature is on.
/// Informational only; not a stable machine-readable interface.
macro_rules! trace {
    ($($arg:tt)*) => {
        if cfg!(feature = "trace") {
            eprintln!("[raybind] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use trace;

mod error;
mod loader;
mod session;
mod symbols;

pub use error::BindingError;
pub use loader::{library_filename, SharedLibrary, LIBRARY_PATH_ENV};
pub use session::Session;

#[cfg(test)]
mod tests;
