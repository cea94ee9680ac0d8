//! WebAssembly bindings for browser fare forms.
//!
//! Both functions take the raw text of the form fields and perform the
//! same parsing as [`FareForm`](crate::form::FareForm).

use wasm_bindgen::prelude::*;

use crate::calculator::FareCalculator;
use crate::error::FareError;
use crate::form::FareForm;
use crate::models::{FareBreakdown, TripInput};
use crate::receipt::Receipt;

fn to_js_error(err: FareError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn price(
    distance: &str,
    waiting_time: &str,
    baggage: &str,
    night_rate: bool,
) -> Result<(FareForm, TripInput, FareBreakdown), JsValue> {
    let form = FareForm::new(distance)
        .with_waiting_time(waiting_time)
        .with_baggage(baggage)
        .with_night_rate(night_rate);
    let trip = form.parse().map_err(to_js_error)?;
    let fare = FareCalculator::official()
        .calculate(&trip)
        .map_err(to_js_error)?;
    Ok((form, trip, fare))
}

/// Prices a trip and returns the breakdown as a plain JS object
/// (`{ baseFare, distanceCost, waitingCost, subtotal, baggageCost, total, nightRate }`).
///
/// Throws an `Error` when the distance is blank, unreadable, or negative.
#[wasm_bindgen(js_name = calculateFare)]
pub fn calculate_fare(
    distance: &str,
    waiting_time: &str,
    baggage: &str,
    night_rate: bool,
) -> Result<JsValue, JsValue> {
    let (_, _, fare) = price(distance, waiting_time, baggage, night_rate)?;
    serde_wasm_bindgen::to_value(&fare).map_err(JsValue::from)
}

/// Prices a trip and returns the receipt as a plain JS object
/// (`{ total, lines: [{ label, amount }] }`).
#[wasm_bindgen(js_name = formatReceipt)]
pub fn format_receipt(
    distance: &str,
    waiting_time: &str,
    baggage: &str,
    night_rate: bool,
) -> Result<JsValue, JsValue> {
    let calculator = FareCalculator::official();
    let (form, trip, fare) = price(distance, waiting_time, baggage, night_rate)?;
    let receipt = Receipt::from_form(&form, &trip, &fare, calculator.tariff());
    serde_wasm_bindgen::to_value(&receipt).map_err(JsValue::from)
}
