//! Trip parameters entered by the rider.

use serde::{Deserialize, Serialize};

/// The numeric inputs of a fare estimate.
///
/// Values are stored as given. The calculator rejects a bad distance and
/// treats a missing, NaN, or non-positive waiting time or baggage count
/// as contributing nothing.
///
/// # Examples
///
/// ```
/// use taxi_fare::models::TripInput;
///
/// let trip = TripInput::new(7.9)
///     .with_waiting_minutes(3.0)
///     .with_baggage_count(2.0)
///     .with_night_rate(true);
/// assert_eq!(trip.distance_km(), 7.9);
/// assert_eq!(trip.waiting_minutes(), Some(3.0));
/// assert_eq!(trip.baggage_count(), Some(2.0));
/// assert!(trip.night_rate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    distance_km: f64,
    #[serde(default)]
    waiting_minutes: Option<f64>,
    #[serde(default)]
    baggage_count: Option<f64>,
    #[serde(default)]
    night_rate: bool,
}

impl TripInput {
    /// Creates a day-rate trip with no waiting time and no baggage.
    pub fn new(distance_km: f64) -> Self {
        Self {
            distance_km,
            waiting_minutes: None,
            baggage_count: None,
            night_rate: false,
        }
    }

    /// Sets the time spent waiting, in minutes.
    pub fn with_waiting_minutes(mut self, minutes: f64) -> Self {
        self.waiting_minutes = Some(minutes);
        self
    }

    /// Sets the number of large packages.
    pub fn with_baggage_count(mut self, count: f64) -> Self {
        self.baggage_count = Some(count);
        self
    }

    /// Enables or disables the night surcharge.
    pub fn with_night_rate(mut self, night: bool) -> Self {
        self.night_rate = night;
        self
    }

    /// Trip distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Waiting time in minutes, if entered.
    pub fn waiting_minutes(&self) -> Option<f64> {
        self.waiting_minutes
    }

    /// Large package count, if entered.
    pub fn baggage_count(&self) -> Option<f64> {
        self.baggage_count
    }

    /// Whether the night surcharge applies.
    pub fn night_rate(&self) -> bool {
        self.night_rate
    }
}

/// Returns the value if it is finite and strictly positive.
pub(crate) fn valid_positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
