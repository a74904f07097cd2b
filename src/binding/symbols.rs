//! Declarative symbol tables.
//!
//! [`symbol_table!`](crate::symbol_table) expands a single declarative
//! source - one `slot: "ExportedName" => fn(args) -> ret;` line per entry -
//! into a struct of typed `Option<fn>` slots with:
//!
//! - `resolve()`: attempts every entry, recording each missing symbol, and
//!   produces the table only when all of them resolved;
//! - `clear()`: nulls every slot (teardown runs this before the library
//!   handle is released);
//! - one checked accessor per slot, the per-call readiness guard.
//!
//! The table is the reusable template for every binding in this crate:
//! raylib and physac both instantiate it, and tests instantiate it over
//! ordinary system libraries to get a stand-in native library.

/// Declare a typed symbol table for a dynamically loaded library.
///
/// Each entry names a slot, the exact exported symbol, and the native
/// signature the export is expected to have. Slots are write-once per
/// resolve and either all populated or all absent - partial tables are
/// not representable outside of `resolve` itself.
///
/// # Example
///
/// ```no_run
/// use raybind::binding::SharedLibrary;
///
/// raybind::symbol_table! {
///     pub struct MathApi {
///         cos: "cos" => fn(f64) -> f64;
///         sin: "sin" => fn(f64) -> f64;
///     }
/// }
///
/// # fn main() -> Result<(), raybind::BindingError> {
/// let lib = SharedLibrary::open_at("m", "libm.so.6")?;
/// let api = MathApi::resolve(&lib)?;
/// let cos = api.cos()?;
/// assert_eq!(unsafe { cos(0.0) }, 1.0);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident {
            $(
                $(#[$slot_meta:meta])*
                $slot:ident: $name:literal => fn($($arg:ty),* $(,)?) $(-> $ret:ty)?;
            )+
        }
    ) => {
        $(#[$meta])*
        $vis struct $table {
            $(
                $(#[$slot_meta])*
                $slot: ::core::option::Option<unsafe extern "C" fn($($arg),*) $(-> $ret)?>,
            )+
        }

        impl $table {
            /// Exported names this table requires, in declaration order.
            pub const SYMBOL_NAMES: &'static [&'static str] = &[$($name),+];

            /// A table with every slot unset.
            pub fn unresolved() -> Self {
                Self {
                    $($slot: ::core::option::Option::None,)+
                }
            }

            /// Resolve every required symbol from `lib`.
            ///
            /// Every entry is attempted even after a failure, so the
            /// error names the complete set of missing exports rather
            /// than the first one. Either the whole table resolves or no
            /// table is produced.
            pub fn resolve(
                lib: &$crate::binding::SharedLibrary,
            ) -> ::core::result::Result<Self, $crate::BindingError> {
                let mut table = Self::unresolved();
                let mut missing: ::std::vec::Vec<::std::string::String> =
                    ::std::vec::Vec::new();
                $(
                    // Safety: the declared signature is the single source
                    // of truth for this export's ABI.
                    match unsafe {
                        lib.symbol::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>($name)
                    } {
                        ::core::result::Result::Ok(f) => {
                            table.$slot = ::core::option::Option::Some(f);
                        }
                        ::core::result::Result::Err(_) => {
                            missing.push(::std::string::String::from($name));
                        }
                    }
                )+
                if missing.is_empty() {
                    ::core::result::Result::Ok(table)
                } else {
                    table.clear();
                    ::core::result::Result::Err($crate::BindingError::SymbolsMissing {
                        library: ::std::string::String::from(lib.name()),
                        symbols: missing,
                    })
                }
            }

            /// Null out every slot.
            pub fn clear(&mut self) {
                $(self.$slot = ::core::option::Option::None;)+
            }

            /// True when every slot is resolved.
            pub fn is_complete(&self) -> bool {
                true $(&& self.$slot.is_some())+
            }

            $(
                $(#[$slot_meta])*
                #[inline]
                $vis fn $slot(
                    &self,
                ) -> ::core::result::Result<
                    unsafe extern "C" fn($($arg),*) $(-> $ret)?,
                    $crate::BindingError,
                > {
                    self.$slot
                        .ok_or($crate::BindingError::NotReady { symbol: $name })
                }
            )+
        }
    };
}
