//! C ABI over the pace engine for mobile and desktop front ends.
//!
//! Every call uses the default engine constants. History crosses the
//! boundary as a JSON array of periods in the same camelCase shape the
//! domain types serialize to.

use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_double, c_int},
    ptr,
    sync::OnceLock,
};

use pace_domain::{BarCalculation, BarStatus, HistoricalSpendingPeriod};

use crate::{engine, errors::PaceError};

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

pub const PACE_OK: c_int = 0;
pub const PACE_ERR_NULL_ARGUMENT: c_int = 1;
pub const PACE_ERR_INVALID_STRING: c_int = 2;
pub const PACE_ERR_INVALID_HISTORY: c_int = 3;

/// Pace calculation laid out for C callers.
///
/// `status` uses the codes under=0, good=1, onTrack=2, warning=3, over=4.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FfiBarCalculation {
    pub bar: c_double,
    pub status: c_int,
    pub expected_spent: c_double,
    pub actual_spent: c_double,
    pub remaining: c_double,
    pub days_remaining: u32,
}

impl From<&BarCalculation> for FfiBarCalculation {
    fn from(calc: &BarCalculation) -> Self {
        Self {
            bar: calc.bar,
            status: calc.status.code(),
            expected_spent: calc.expected_spent,
            actual_spent: calc.actual_spent,
            remaining: calc.remaining,
            days_remaining: calc.days_remaining,
        }
    }
}

#[no_mangle]
pub extern "C" fn pace_calculate(
    days_elapsed: c_int,
    total_days: c_int,
    actual_spent: c_double,
    total_budget: c_double,
) -> FfiBarCalculation {
    let calc = engine::calculate(days_elapsed, total_days, actual_spent, total_budget, None);
    FfiBarCalculation::from(&calc)
}

/// Calculates pace with optional history supplied as JSON.
///
/// A null or blank `history_json` means no history. On failure a non-zero
/// code is returned and, when `out_error` is non-null, it receives a message
/// that must be released with [`pace_string_free`].
///
/// # Safety
///
/// `history_json` must be null or a valid NUL-terminated string, `out` must
/// point to writable memory for one [`FfiBarCalculation`], and `out_error`
/// must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn pace_calculate_with_history(
    days_elapsed: c_int,
    total_days: c_int,
    actual_spent: c_double,
    total_budget: c_double,
    history_json: *const c_char,
    out: *mut FfiBarCalculation,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if out.is_null() {
        write_error(out_error, "output pointer is null");
        return PACE_ERR_NULL_ARGUMENT;
    }

    let history = match optional_c_string(history_json) {
        Ok(Some(raw)) => match parse_history(&raw) {
            Ok(periods) => Some(periods),
            Err(err) => {
                tracing::debug!(error = %err, "rejecting history payload");
                write_error(out_error, &err.to_string());
                return PACE_ERR_INVALID_HISTORY;
            }
        },
        Ok(None) => None,
        Err(err) => {
            write_error(out_error, &err.to_string());
            return PACE_ERR_INVALID_STRING;
        }
    };

    let calc = engine::calculate(
        days_elapsed,
        total_days,
        actual_spent,
        total_budget,
        history.as_deref(),
    );
    *out = FfiBarCalculation::from(&calc);
    PACE_OK
}

/// Returns the message for a status code, or null for an unknown code.
#[no_mangle]
pub extern "C" fn pace_status_message(status: c_int) -> *const c_char {
    static MESSAGES: OnceLock<Vec<CString>> = OnceLock::new();
    let messages = MESSAGES.get_or_init(|| {
        BarStatus::ALL
            .iter()
            .filter_map(|status| CString::new(status.message()).ok())
            .collect()
    });
    BarStatus::from_code(status)
        .and_then(|status| messages.get(status.code() as usize))
        .map_or(ptr::null(), |message| message.as_ptr())
}

/// Releases a string previously handed out by this library.
///
/// # Safety
///
/// `value` must be null or a pointer returned through `out_error` that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn pace_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    drop(CString::from_raw(value));
}

/// Returns the core (Rust) semantic version as a C string.
#[no_mangle]
pub extern "C" fn pace_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Returns the FFI interface semantic version as a C string.
#[no_mangle]
pub extern "C" fn pace_ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).unwrap_or_default())
        .as_ptr()
}

fn parse_history(raw: &str) -> Result<Vec<HistoricalSpendingPeriod>, PaceError> {
    Ok(serde_json::from_str(raw)?)
}

unsafe fn clear_error(out_error: *mut *mut c_char) {
    if out_error.is_null() {
        return;
    }
    *out_error = ptr::null_mut();
}

unsafe fn write_error(out_error: *mut *mut c_char, message: &str) {
    if out_error.is_null() {
        return;
    }
    if let Ok(cstring) = CString::new(message) {
        *out_error = cstring.into_raw();
    }
}

unsafe fn optional_c_string(value: *const c_char) -> Result<Option<String>, PaceError> {
    if value.is_null() {
        return Ok(None);
    }
    let raw = CStr::from_ptr(value)
        .to_str()
        .map_err(|err| PaceError::InvalidInput(format!("history is not UTF-8: {err}")))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
