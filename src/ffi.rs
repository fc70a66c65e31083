//! C entry points loaded by the host simulator.
//!
//! The host drives a single, process-wide [DriverModel]. Every entry point
//! returns `1` on success and `0` if the selector or command is unsupported.

use crate::protocol::DriverModel;
use crate::selector::Value;
use crate::vehicle::IdmParameters;
use once_cell::sync::Lazy;
use std::ffi::CStr;
use std::os::raw::{c_char, c_double, c_int, c_long};
use std::sync::{Mutex, PoisonError};

/// The environment variable naming a JSON file of [IdmParameters].
pub const PARAMS_ENV: &str = "IDM_DRIVER_PARAMS";

static DRIVER_MODEL: Lazy<Mutex<DriverModel>> =
    Lazy::new(|| Mutex::new(DriverModel::new(&load_params())));

fn load_params() -> IdmParameters {
    params_from(std::env::var(PARAMS_ENV).ok())
}

/// Reads parameters from the JSON file at `path`, falling back to the defaults
/// if there is no path or the file cannot be loaded.
#[cfg(feature = "serde")]
fn params_from(path: Option<String>) -> IdmParameters {
    let path = match path {
        Some(path) => path,
        None => return IdmParameters::default(),
    };
    match IdmParameters::load(&path) {
        Ok(params) => {
            log::info!("loaded driver model parameters from {}", path);
            params
        }
        Err(err) => {
            log::warn!("using default parameters, failed to load {}: {}", path, err);
            IdmParameters::default()
        }
    }
}

#[cfg(not(feature = "serde"))]
fn params_from(path: Option<String>) -> IdmParameters {
    if let Some(path) = path {
        log::warn!("ignoring {}, parameter files need the serde feature", path);
    }
    IdmParameters::default()
}

fn with_model<T>(f: impl FnOnce(&mut DriverModel) -> T) -> T {
    let mut model = DRIVER_MODEL
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut model)
}

/// Sets the value of the data object selected by `type_`, `index1` and `index2`.
///
/// # Safety
/// `string_value` must be null or point to a nul-terminated string.
#[no_mangle]
pub unsafe extern "C" fn DriverModelSetValue(
    type_: c_long,
    index1: c_long,
    index2: c_long,
    long_value: c_long,
    double_value: c_double,
    string_value: *mut c_char,
) -> c_int {
    let text = if string_value.is_null() {
        None
    } else {
        CStr::from_ptr(string_value).to_str().ok()
    };
    let result = with_model(|model| {
        model.set_value(
            type_ as i64,
            index1 as i64,
            index2 as i64,
            long_value as i64,
            double_value,
            text,
        )
    });
    result.is_ok() as c_int
}

/// Gets the value of the data object selected by `type_`, `index1` and `index2`,
/// writing it to `long_value` or `double_value`.
///
/// # Safety
/// `long_value` and `double_value` must each be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn DriverModelGetValue(
    type_: c_long,
    index1: c_long,
    index2: c_long,
    long_value: *mut c_long,
    double_value: *mut c_double,
    _string_value: *mut *mut c_char,
) -> c_int {
    let result = with_model(|model| model.get_value(type_ as i64, index1 as i64, index2 as i64));
    match result {
        Ok(Value::Long(v)) => {
            if let Some(out) = long_value.as_mut() {
                *out = v as c_long;
            }
            1
        }
        Ok(Value::Double(v)) => {
            if let Some(out) = double_value.as_mut() {
                *out = v;
            }
            1
        }
        Err(_) => 0,
    }
}

/// Executes the command `number`.
#[no_mangle]
pub extern "C" fn DriverModelExecuteCommand(number: c_long) -> c_int {
    with_model(|model| model.execute_command(number as i64)).is_ok() as c_int
}
