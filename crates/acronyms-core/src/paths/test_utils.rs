//! Scoped override of the data-root variable for path tests.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use super::DATA_DIR_ENV;

// Held for the whole of every override; the process environment is shared
// by all test threads.
static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `ACRONYMS_DATA_DIR` pointing at `dir`.
///
/// The previous value (or its absence) is put back before returning.
#[allow(unsafe_code)]
pub fn with_data_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let _held = DATA_DIR_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let saved: Option<OsString> = env::var_os(DATA_DIR_ENV);

    // SAFETY: DATA_DIR_LOCK serializes every test that touches the variable.
    unsafe { env::set_var(DATA_DIR_ENV, dir) };
    let result = f();
    match saved {
        Some(value) => unsafe { env::set_var(DATA_DIR_ENV, value) },
        None => unsafe { env::remove_var(DATA_DIR_ENV) },
    }
    result
}
