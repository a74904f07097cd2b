//! Raybind - Dynamic raylib/physac Binding Layer for BASIC Hosts
//!
//! A foreign-function binding layer: raybind loads the native raylib (and
//! physac) shared library at runtime, resolves every required export by
//! symbol name into a typed function-pointer slot, and exposes thin
//! forwarding functions shaped for a BASIC-dialect host runtime.
//!
//! There is no algorithmic content here - no rendering, no physics, no
//! resource management. Every forwarding function has the same shape:
//! reinterpret untyped host buffers as native structs, call through a
//! resolved function pointer, translate the result back into the host's
//! conventions (all-bits-set booleans, by-reference composite returns).
//!
//! # Features
//!
//! - **All-or-nothing bootstrap**: either every required symbol resolves or
//!   the library is released and nothing is observable
//! - **Declarative symbol tables**: one `symbol_table!` source per library,
//!   expanded into typed slots with per-entry failure recording
//! - **Explicit binding contexts**: raylib and physac are independent
//!   context values with deterministic RAII teardown
//! - **Guarded session layer**: flat, mutex-guarded entry points for hosts
//!   that cannot hold a context value themselves
//! - **Checked marshalling**: host buffers become native structs only
//!   through size-asserted pack/unpack helpers
//!
//! # Architecture
//!
//! ```text
//! BASIC host program
//!       │
//!       ▼
//! session::init() / forwarding call
//!       │
//!       ▼
//! Binding context (Raylib / Physics)
//!       │
//!       ▼
//! Symbol table (typed slots, all-or-nothing resolve)
//!       │
//!       ▼
//! Dynamic loader (libloading)
//!       │
//!       ▼
//! Native function call
//! ```
//!
//! # Example
//!
//! ```no_run
//! use raybind::{host, Raylib};
//!
//! fn main() -> Result<(), raybind::BindingError> {
//!     let rl = Raylib::init()?;
//!     let title = host::to_c_string("raybind demo")?;
//!     unsafe { rl.init_window(800, 450, title.as_ptr())? };
//!     rl.set_target_fps(60)?;
//!     while !host::from_host_bool(rl.window_should_close()?) {
//!         rl.begin_drawing()?;
//!         rl.clear_background(host::color::to_rgba(245, 245, 245, 255))?;
//!         rl.end_drawing()?;
//!     }
//!     rl.close_window()?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod binding;
pub mod host;
pub mod physics;
pub mod raw;
pub mod raylib;
pub mod session;

// Re-export commonly used types
pub use binding::{BindingError, Session, SharedLibrary};
pub use physics::Physics;
pub use raylib::Raylib;
