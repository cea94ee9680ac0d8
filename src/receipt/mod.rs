//! Human-readable fare receipts.
//!
//! Formats a [`FareBreakdown`] the way a fare display shows it: every
//! amount with three decimals and the currency code, and a line for each
//! component only when the rider actually entered it.

use std::fmt;

use serde::Serialize;

use crate::form::FareForm;
use crate::models::{valid_positive, FareBreakdown, TripInput};
use crate::rounding::round3;
use crate::tariff::{Tariff, CURRENCY};

/// Formats an amount with exactly three decimals and the currency code.
///
/// The amount is rounded with [`round3`] first, so every line of a
/// receipt follows the same tie rule as the total.
///
/// # Examples
///
/// ```
/// use taxi_fare::receipt::format_amount;
///
/// assert_eq!(format_amount(0.9), "0.900 TND");
/// assert_eq!(format_amount(10.94), "10.940 TND");
/// assert_eq!(format_amount(1.0625), "1.063 TND");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.3} {CURRENCY}", round3(value))
}

/// One labelled amount on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub label: String,
    pub amount: String,
}

impl ReceiptLine {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            amount: format_amount(value),
        }
    }
}

/// A formatted fare: the total plus the component lines that apply.
///
/// # Examples
///
/// ```
/// use taxi_fare::{calculate, models::TripInput, receipt::Receipt, tariff::Tariff};
///
/// let trip = TripInput::new(0.0).with_baggage_count(1.0);
/// let fare = calculate(&trip).unwrap();
/// let receipt = Receipt::build(&trip, &fare, &Tariff::official());
///
/// assert_eq!(receipt.total(), "1.900 TND");
/// let labels: Vec<_> = receipt.lines().iter().map(|l| l.label.as_str()).collect();
/// assert_eq!(labels, ["Base fare", "Baggage (1 package)"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    total: String,
    lines: Vec<ReceiptLine>,
}

impl Receipt {
    /// Builds the receipt for a priced trip.
    ///
    /// The base fare is always listed. Distance, waiting, and baggage lines
    /// appear only for positive inputs; the night line shows the surcharged
    /// subtotal and appears only when the night rate was applied. Labels
    /// show the parsed numbers.
    pub fn build(input: &TripInput, fare: &FareBreakdown, tariff: &Tariff) -> Self {
        Self::assemble(input, fare, tariff, None)
    }

    /// Builds the receipt for a trip parsed from `form`.
    ///
    /// Same lines as [`Receipt::build`], but labels echo the text the rider
    /// typed, so `"7.90"` stays `7.90 km`.
    pub fn from_form(
        form: &FareForm,
        input: &TripInput,
        fare: &FareBreakdown,
        tariff: &Tariff,
    ) -> Self {
        Self::assemble(input, fare, tariff, Some(form))
    }

    fn assemble(
        input: &TripInput,
        fare: &FareBreakdown,
        tariff: &Tariff,
        form: Option<&FareForm>,
    ) -> Self {
        let mut lines = vec![ReceiptLine::new("Base fare", fare.base_fare())];

        let distance = input.distance_km();
        if distance > 0.0 {
            let km = label_number(form.map(|f| f.distance.as_str()), distance);
            lines.push(ReceiptLine::new(
                format!("Distance ({km} km)"),
                fare.distance_cost(),
            ));
        }

        if let Some(minutes) = valid_positive(input.waiting_minutes()) {
            let min = label_number(form.map(|f| f.waiting_time.as_str()), minutes);
            lines.push(ReceiptLine::new(
                format!("Waiting ({min} min)"),
                fare.waiting_cost(),
            ));
        }

        if fare.night_rate() {
            lines.push(ReceiptLine::new(
                format!("Night rate (+{}%)", tariff.night_surcharge_percent()),
                fare.subtotal(),
            ));
        }

        if let Some(count) = valid_positive(input.baggage_count()) {
            let unit = if count > 1.0 { "packages" } else { "package" };
            let n = label_number(form.map(|f| f.baggage.as_str()), count);
            lines.push(ReceiptLine::new(
                format!("Baggage ({n} {unit})"),
                fare.baggage_cost(),
            ));
        }

        Self {
            total: format_amount(fare.total()),
            lines,
        }
    }

    /// Formatted total.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Formatted component lines, in display order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }
}

/// Typed text when available, otherwise the parsed number.
fn label_number(typed: Option<&str>, parsed: f64) -> String {
    match typed {
        Some(text) => text.trim().to_owned(),
        None => parsed.to_string(),
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated total: {}", self.total)?;
        for line in &self.lines {
            writeln!(f, "  {}: {}", line.label, line.amount)?;
        }
        Ok(())
    }
}
