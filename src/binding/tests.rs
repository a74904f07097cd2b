//! Bootstrap unit tests.

use super::*;

crate::symbol_table! {
    /// Stand-in table used to exercise the macro without a live library.
    struct ProbeApi {
        first: "first_export" => fn() -> i32;
        second: "second_export" => fn(i32, i32) -> i32;
        third: "third_export" => fn(f64);
    }
}

#[test]
fn symbol_names_follow_declaration_order() {
    assert_eq!(
        ProbeApi::SYMBOL_NAMES,
        &["first_export", "second_export", "third_export"]
    );
}

#[test]
fn unresolved_table_guards_every_slot() {
    let table = ProbeApi::unresolved();
    assert!(!table.is_complete());
    assert_eq!(
        table.first().unwrap_err(),
        BindingError::NotReady {
            symbol: "first_export"
        }
    );
    assert_eq!(
        table.second().unwrap_err(),
        BindingError::NotReady {
            symbol: "second_export"
        }
    );
    assert_eq!(
        table.third().unwrap_err(),
        BindingError::NotReady {
            symbol: "third_export"
        }
    );
}

#[test]
fn clear_is_idempotent() {
    let mut table = ProbeApi::unresolved();
    table.clear();
    table.clear();
    assert!(!table.is_complete());
}

#[cfg(target_os = "linux")]
#[test]
fn linux_filenames_gain_the_lib_prefix_and_so_suffix() {
    assert_eq!(library_filename("raylib"), "libraylib.so");
    assert_eq!(library_filename("physac"), "libphysac.so");
    assert_eq!(library_filename("libraylib.so"), "libraylib.so");
    assert_eq!(library_filename("libc.so.6"), "libc.so.6");
}

#[test]
fn absent_library_records_every_attempt() {
    let before = SharedLibrary::load_attempts();
    let err = SharedLibrary::open("raybind-no-such-library").unwrap_err();
    let after = SharedLibrary::load_attempts();

    match err {
        BindingError::LibraryNotFound { name, attempts } => {
            assert_eq!(name, "raybind-no-such-library");
            // Local directory plus the system loader, at minimum.
            assert!(attempts.len() >= 2, "attempts: {:?}", attempts);
            assert!(after >= before + attempts.len());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_messages_name_the_failure() {
    let err = BindingError::SymbolsMissing {
        library: "raylib".to_string(),
        symbols: vec!["InitWindow".to_string(), "CloseWindow".to_string()],
    };
    let text = err.to_string();
    assert!(text.contains("raylib"));
    assert!(text.contains("2 required symbol(s)"));
    assert!(text.contains("InitWindow"));
    assert!(text.contains("CloseWindow"));

    let err = BindingError::NotReady {
        symbol: "BeginDrawing",
    };
    assert!(err.to_string().contains("BeginDrawing"));
}

#[cfg(target_os = "linux")]
mod live {
    use super::*;

    crate::symbol_table! {
        struct LibcApi {
            getpid: "getpid" => fn() -> i32;
        }
    }

    crate::symbol_table! {
        #[derive(Debug)]
        struct BrokenLibcApi {
            getpid: "getpid" => fn() -> i32;
            bogus: "raybind_no_such_export" => fn() -> i32;
        }
    }

    fn open_libc() -> Option<SharedLibrary> {
        // libc.so.6 resolves through the system loader on every glibc host.
        SharedLibrary::open_at("c", "libc.so.6").ok()
    }

    #[test]
    fn full_table_resolves_and_forwards() {
        let Some(lib) = open_libc() else { return };
        let api = LibcApi::resolve(&lib).expect("libc exports getpid");
        assert!(api.is_complete());

        let getpid = api.getpid().unwrap();
        let pid = unsafe { getpid() };
        assert_eq!(pid as u32, std::process::id());
    }

    #[test]
    fn one_missing_export_fails_the_whole_table() {
        let Some(lib) = open_libc() else { return };
        let err = BrokenLibcApi::resolve(&lib).unwrap_err();
        assert_eq!(
            err,
            BindingError::SymbolsMissing {
                library: "c".to_string(),
                symbols: vec!["raybind_no_such_export".to_string()],
            }
        );
    }

    #[test]
    fn cleared_table_reports_not_ready_instead_of_crashing() {
        let Some(lib) = open_libc() else { return };
        let mut api = LibcApi::resolve(&lib).expect("libc exports getpid");
        api.clear();
        assert_eq!(
            api.getpid().unwrap_err(),
            BindingError::NotReady { symbol: "getpid" }
        );
    }
}
