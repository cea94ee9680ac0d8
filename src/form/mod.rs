//! Raw form input.
//!
//! A fare form supplies text fields. This module turns them into a typed
//! [`TripInput`] before anything is priced, keeping parsing separate from
//! the calculator.

mod number;

pub use number::parse_number;

use serde::{Deserialize, Serialize};

use crate::calculator::FareCalculator;
use crate::error::FareError;
use crate::models::{FareBreakdown, TripInput};

/// Text fields as entered in a fare form.
///
/// # Examples
///
/// ```
/// use taxi_fare::form::FareForm;
///
/// let form = FareForm::new("7.9").with_waiting_time("3").with_night_rate(true);
/// let trip = form.parse().unwrap();
/// assert_eq!(trip.distance_km(), 7.9);
/// assert_eq!(trip.waiting_minutes(), Some(3.0));
/// assert_eq!(trip.baggage_count(), None);
///
/// assert!(FareForm::new("").parse().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FareForm {
    /// Distance in kilometers.
    pub distance: String,
    /// Waiting time in minutes; may be blank.
    pub waiting_time: String,
    /// Large package count; may be blank.
    pub baggage: String,
    /// Night rate toggle.
    pub night_rate: bool,
}

impl FareForm {
    /// Creates a form with the given distance text and blank optional fields.
    pub fn new(distance: impl Into<String>) -> Self {
        Self {
            distance: distance.into(),
            ..Self::default()
        }
    }

    /// Sets the waiting time text.
    pub fn with_waiting_time(mut self, text: impl Into<String>) -> Self {
        self.waiting_time = text.into();
        self
    }

    /// Sets the baggage count text.
    pub fn with_baggage(mut self, text: impl Into<String>) -> Self {
        self.baggage = text.into();
        self
    }

    /// Sets the night rate toggle.
    pub fn with_night_rate(mut self, night: bool) -> Self {
        self.night_rate = night;
        self
    }

    /// Parses the fields into a [`TripInput`].
    ///
    /// Fails only when the distance is blank, unreadable, or negative.
    /// Unreadable optional fields are treated as blank.
    pub fn parse(&self) -> Result<TripInput, FareError> {
        let distance = parse_number(&self.distance).ok_or_else(|| {
            FareError::invalid_distance(format!("`{}` is not a number", self.distance))
        })?;
        if distance < 0.0 {
            return Err(FareError::invalid_distance(format!(
                "distance cannot be negative, got {distance}"
            )));
        }

        let mut trip = TripInput::new(distance).with_night_rate(self.night_rate);
        if let Some(minutes) = parse_number(&self.waiting_time) {
            trip = trip.with_waiting_minutes(minutes);
        }
        if let Some(count) = parse_number(&self.baggage) {
            trip = trip.with_baggage_count(count);
        }
        Ok(trip)
    }

    /// Parses the form and prices the resulting trip.
    pub fn calculate(&self, calculator: &FareCalculator) -> Result<FareBreakdown, FareError> {
        let trip = self.parse()?;
        calculator.calculate(&trip)
    }
}
