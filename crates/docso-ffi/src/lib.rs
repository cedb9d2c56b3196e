// Callers must pass valid pointers; each function documents its contract.
#![allow(clippy::missing_safety_doc)]

// docso-ffi: C-compatible FFI layer for DocsoHandle.
//
// Memory management rules:
// - Opaque `DocsoHandle` pointer: created by `docso_new`, freed by `docso_free`.
// - Returned `char*` strings: caller must free with `docso_free_str`.
// - Carrier names and the version string are static: do NOT free them.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use docso_vi::handle::DocsoHandle;
use docso_vi::number::Dialect;
use docso_vi::phone::Provider;

/// Returned by `docso_validate_phone` when the arguments are unusable.
pub const DOCSO_PHONE_ERROR: c_int = -3;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new docso handle with default options.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `docso_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_new(error_out: *mut *mut c_char) -> *mut DocsoHandle {
    match DocsoHandle::new() {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a DocsoHandle created by `docso_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_free(handle: *mut DocsoHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Number spelling ─────────────────────────────────────────────

/// Spell an unsigned 64-bit number.
///
/// Returns a heap-allocated string, or NULL if `handle` is NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_spell_number(handle: *const DocsoHandle, n: u64) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.spell_number(n))
}

/// Parse and spell a decimal number string.
///
/// Returns NULL on error; if `error_out` is non-NULL it then receives a
/// heap-allocated message (negative, fractional or malformed input).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_spell_number_str(
    handle: *const DocsoHandle,
    input: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(input) = cstr_to_str(input) else {
        set_error(error_out, "input is null or not UTF-8");
        return ptr::null_mut();
    };
    match handle.spell_number_str(input) {
        Ok(words) => str_to_c(&words),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

// ── Phone numbers ───────────────────────────────────────────────

/// Validate a phone number.
///
/// Returns -2 (too short), -1 (too long), 0 (invalid), 1 (valid), or
/// `DOCSO_PHONE_ERROR` for NULL arguments.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_validate_phone(
    handle: *const DocsoHandle,
    raw: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return DOCSO_PHONE_ERROR;
    };
    let Some(raw) = cstr_to_str(raw) else {
        return DOCSO_PHONE_ERROR;
    };
    handle.validate_phone(raw).code()
}

/// Carrier name of a phone number.
///
/// Returns a static string (do NOT free), or NULL when unknown.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_detect_carrier(
    handle: *const DocsoHandle,
    raw: *const c_char,
) -> *const c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null();
    };
    let Some(raw) = cstr_to_str(raw) else {
        return ptr::null();
    };
    match handle.detect_carrier(raw) {
        Some(p) => provider_name(p).as_ptr(),
        None => ptr::null(),
    }
}

/// Mask all but the last three digits. Caller frees the result.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_mask_phone(
    handle: *const DocsoHandle,
    raw: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(raw) = cstr_to_str(raw) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.mask_phone(raw))
}

/// Group a ten-digit phone number. Caller frees the result.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_format_phone(
    handle: *const DocsoHandle,
    raw: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(raw) = cstr_to_str(raw) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.format_phone(raw))
}

// ── Clock times ─────────────────────────────────────────────────

/// Spell a 12-hour clock time in English.
///
/// Returns NULL when the hour or minute is out of range.
#[unsafe(no_mangle)]
pub extern "C" fn docso_time_in_words(hour: c_int, minute: c_int) -> *mut c_char {
    let (Ok(hour), Ok(minute)) = (u8::try_from(hour), u8::try_from(minute)) else {
        return ptr::null_mut();
    };
    match docso_en::time_in_words(hour, minute) {
        Ok(phrase) => str_to_c(&phrase),
        Err(_) => ptr::null_mut(),
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Select the reading style: 0 = northern, non-zero = southern.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_set_southern(handle: *mut DocsoHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        let dialect = if value != 0 {
            Dialect::Southern
        } else {
            Dialect::Northern
        };
        handle.set_dialect(dialect);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn docso_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast()
}

/// Free a heap-allocated C string returned by docso functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn docso_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn provider_name(p: Provider) -> &'static CStr {
    match p {
        Provider::Viettel => c"VIETTEL",
        Provider::Vinaphone => c"VINAPHONE",
        Provider::Mobifone => c"MOBIFONE",
        Provider::Vietnamobile => c"VIETNAMOBILE",
        Provider::Gmobile => c"GMOBILE",
        Provider::Mobicast => c"MOBICAST",
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}
