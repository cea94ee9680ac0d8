//! C ABI for hosts that exchange JSON.
//!
//! Strings returned by this module are owned by Rust and must be released
//! with [`taxi_fare_free_string`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde_json::json;

use crate::calculator::calculate;
use crate::models::TripInput;

fn calculate_json(input: &str) -> String {
    let response = match serde_json::from_str::<TripInput>(input) {
        Ok(trip) => match calculate(&trip) {
            Ok(fare) => json!({ "ok": fare }),
            Err(e) => json!({ "error": e.to_string() }),
        },
        Err(e) => json!({ "error": format!("malformed trip: {e}") }),
    };
    response.to_string()
}

/// Prices a JSON-encoded trip (`{"distanceKm": 7.9, "nightRate": true, ...}`).
///
/// Returns `{"ok": <breakdown>}` or `{"error": "<message>"}`, or null when
/// `input` is null or not valid UTF-8.
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn taxi_fare_calculate_json(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }
    let Ok(input) = CStr::from_ptr(input).to_str() else {
        return ptr::null_mut();
    };
    match CString::new(calculate_json(input)) {
        Ok(out) => out.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a string returned by [`taxi_fare_calculate_json`].
///
/// # Safety
///
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn taxi_fare_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn call(input: &str) -> Value {
        let c_input = CString::new(input).expect("no interior NUL");
        unsafe {
            let out = taxi_fare_calculate_json(c_input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_owned();
            taxi_fare_free_string(out);
            serde_json::from_str(&text).expect("json")
        }
    }

    #[test]
    fn test_ok_response() {
        let v = call(r#"{"distanceKm": 7.9, "waitingMinutes": 3, "baggageCount": 2, "nightRate": true}"#);
        assert_eq!(v["ok"]["total"], 10.94);
        assert_eq!(v["ok"]["baggageCost"], 2.0);
    }

    #[test]
    fn test_invalid_distance_response() {
        let v = call(r#"{"distanceKm": -1}"#);
        assert!(v["error"].as_str().expect("message").contains("invalid distance"));
        assert!(v.get("ok").is_none());
    }

    #[test]
    fn test_malformed_response() {
        let v = call("not json");
        assert!(v["error"].as_str().expect("message").starts_with("malformed trip"));
    }

    #[test]
    fn test_null_input() {
        unsafe {
            assert!(taxi_fare_calculate_json(ptr::null()).is_null());
            taxi_fare_free_string(ptr::null_mut());
        }
    }
}
