//! End-to-end bootstrap scenarios against real system libraries.
//!
//! raylib itself is not assumed present on the test host; the bootstrap
//! machinery is exercised against libm and libc, which export C symbols
//! on every Linux host, through exactly the code path the raylib table
//! uses.

use raybind::binding::{Session, SharedLibrary};
use raybind::BindingError;

use bytemuck::{Pod, Zeroable};

/// Two-component floating-point composite, the same shape raylib returns
/// for Vector2 results.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Complex {
    re: f64,
    im: f64,
}

raybind::symbol_table! {
    /// Stand-in native library surface.
    pub struct MathApi {
        cos: "cos" => fn(f64) -> f64;
        sin: "sin" => fn(f64) -> f64;
        fabs: "fabs" => fn(f64) -> f64;
        conj: "conj" => fn(Complex) -> Complex;
    }
}

raybind::symbol_table! {
    /// Same library with two export names misspelled on purpose.
    #[derive(Debug)]
    pub struct SkewedMathApi {
        cos: "cos" => fn(f64) -> f64;
        renamed_sin: "sine_renamed_away" => fn(f64) -> f64;
        renamed_fabs: "fabs_renamed_away" => fn(f64) -> f64;
    }
}

#[cfg(target_os = "linux")]
fn open_libm() -> Option<SharedLibrary> {
    SharedLibrary::open_at("m", "libm.so.6").ok()
}

#[cfg(target_os = "linux")]
#[test]
fn compatible_library_resolves_and_forwards_like_a_direct_call() {
    let Some(lib) = open_libm() else { return };

    let api = MathApi::resolve(&lib).expect("libm exports cos/sin/fabs/conj");
    assert!(api.is_complete());

    // Zero-argument-style integer/scalar forward matches the direct call.
    let cos = api.cos().unwrap();
    assert_eq!(unsafe { cos(0.0) }, 1.0);

    let fabs = api.fabs().unwrap();
    assert_eq!(unsafe { fabs(-3.5) }, 3.5);
}

#[cfg(target_os = "linux")]
#[test]
fn composite_result_forwarding_is_byte_identical_to_the_direct_call() {
    let Some(lib) = open_libm() else { return };
    let api = MathApi::resolve(&lib).expect("libm exports conj");

    let input = Complex { re: 1.25, im: -2.5 };
    let conj = api.conj().unwrap();

    // Direct native call, result copied byte for byte.
    let direct = unsafe { conj(input) };
    let direct_bytes = raybind::raw::pack(&direct).to_vec();

    // Forwarding convention: result written into a caller-supplied
    // buffer, as the host receives it.
    let mut out = [0u8; std::mem::size_of::<Complex>()];
    unsafe { raybind::raw::write(out.as_mut_ptr().cast(), conj(input)) };

    assert_eq!(out.as_slice(), direct_bytes.as_slice());
    assert_eq!(
        raybind::raw::unpack::<Complex>(&out).unwrap(),
        Complex { re: 1.25, im: 2.5 }
    );
}

#[cfg(target_os = "linux")]
#[test]
fn renamed_symbols_fail_the_whole_table_and_are_all_named() {
    let Some(lib) = open_libm() else { return };

    let err = SkewedMathApi::resolve(&lib).unwrap_err();
    match err {
        BindingError::SymbolsMissing { library, symbols } => {
            assert_eq!(library, "m");
            assert_eq!(
                symbols,
                vec![
                    "sine_renamed_away".to_string(),
                    "fabs_renamed_away".to_string(),
                ]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn absent_library_fails_both_search_steps() {
    let err = SharedLibrary::open("raybind-integration-absent").unwrap_err();
    match err {
        BindingError::LibraryNotFound { name, attempts } => {
            assert_eq!(name, "raybind-integration-absent");
            // Local directory and the system loader, at minimum; the
            // env-override directory adds a third when configured.
            assert!(attempts.len() >= 2, "attempts: {attempts:?}");
            assert!(attempts
                .iter()
                .any(|a| a.contains("libraybind-integration-absent") || a.contains(".dll")));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn session_over_a_real_library_initializes_once_and_tears_down() {
    static MATH: Session<(SharedLibrary, MathApi)> = Session::new();

    use std::sync::atomic::{AtomicUsize, Ordering};
    static MAKES: AtomicUsize = AtomicUsize::new(0);

    let make = || {
        MAKES.fetch_add(1, Ordering::Relaxed);
        let lib = SharedLibrary::open_at("m", "libm.so.6")?;
        let api = MathApi::resolve(&lib)?;
        Ok((lib, api))
    };

    if !MATH.init_with(make) {
        // No loadable libm on this host; nothing further to verify.
        return;
    }
    let loads_after_first = SharedLibrary::load_attempts();

    // Second initialization is a no-op with the same success value.
    assert!(MATH.init_with(make));
    assert_eq!(MAKES.load(Ordering::Relaxed), 1);
    assert!(SharedLibrary::load_attempts() >= loads_after_first);

    let value = MATH
        .with(|(_, api)| {
            let cos = api.cos()?;
            Ok(unsafe { cos(0.0) })
        })
        .unwrap();
    assert_eq!(value, 1.0);

    // Teardown, then a residual call is a structured error.
    MATH.done();
    assert!(!MATH.is_ready());
    assert!(matches!(
        MATH.with(|(_, api)| api.cos().map(|_| ())),
        Err(BindingError::Uninitialized)
    ));

    // Teardown when nothing is live stays a safe no-op.
    MATH.done();
}

#[cfg(target_os = "linux")]
#[test]
fn cleared_table_turns_residual_calls_into_not_ready() {
    let Some(lib) = open_libm() else { return };
    let mut api = MathApi::resolve(&lib).expect("libm resolves");

    api.clear();
    assert!(!api.is_complete());
    assert_eq!(
        api.cos().unwrap_err(),
        BindingError::NotReady { symbol: "cos" }
    );
}
