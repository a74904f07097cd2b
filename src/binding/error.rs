//! Binding error taxonomy.

use thiserror::Error;

/// Error type for the binding bootstrap and forwarding layer.
///
/// The host-facing session layer collapses these to the host's boolean
/// convention; within the crate they propagate as ordinary results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Neither the conventional local directory nor the platform loader
    /// produced the library. Every attempted location is recorded.
    #[error("library '{name}' not found ({})", .attempts.join("; "))]
    LibraryNotFound {
        /// Logical library name, e.g. "raylib".
        name: String,
        /// One entry per failed load attempt, in search order.
        attempts: Vec<String>,
    },

    /// The library loaded but one or more required exports are absent.
    /// The usual cause is an API version skew between the binding and the
    /// installed library build.
    #[error("library '{library}' is missing {} required symbol(s): {}", .symbols.len(), .symbols.join(", "))]
    SymbolsMissing {
        /// Logical name of the library that was probed.
        library: String,
        /// Every export that failed to resolve, in table order.
        symbols: Vec<String>,
    },

    /// A forwarding call reached a slot that is unset (cleared by
    /// teardown, or belonging to a table that never resolved).
    #[error("symbol '{symbol}' is not resolved; initialize the binding first")]
    NotReady {
        /// Exported name of the slot that was hit.
        symbol: &'static str,
    },

    /// A session-level call was made before the binding was initialized.
    #[error("binding not initialized")]
    Uninitialized,

    /// A host buffer did not match the native struct layout it was
    /// supposed to carry.
    #[error("buffer size mismatch for {type_name}: expected {expected} bytes, got {got}")]
    BufferMismatch {
        /// Native struct type the buffer was interpreted as.
        type_name: &'static str,
        /// Required size in bytes.
        expected: usize,
        /// Actual buffer size in bytes.
        got: usize,
    },

    /// A symbol name or host string contained an interior NUL byte.
    #[error("invalid C string: {0}")]
    InvalidString(String),
}
