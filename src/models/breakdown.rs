//! Priced fare breakdown.

use serde::Serialize;

use crate::rounding::to_millimes;

/// The priced components of a single fare estimate.
///
/// `subtotal` already includes the night surcharge when it applied;
/// `baggage_cost` never does. `total` is `subtotal + baggage_cost`
/// rounded to the millime.
///
/// # Examples
///
/// ```
/// use taxi_fare::{calculate, models::TripInput};
///
/// let fare = calculate(&TripInput::new(0.0).with_baggage_count(2.0)).unwrap();
/// assert_eq!(fare.baggage_cost(), 2.0);
/// assert_eq!(fare.total(), 2.9);
/// assert_eq!(fare.total_millimes(), 2900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    base_fare: f64,
    distance_cost: f64,
    waiting_cost: f64,
    subtotal: f64,
    baggage_cost: f64,
    total: f64,
    night_rate: bool,
}

impl FareBreakdown {
    pub(crate) fn new(
        base_fare: f64,
        distance_cost: f64,
        waiting_cost: f64,
        subtotal: f64,
        baggage_cost: f64,
        total: f64,
        night_rate: bool,
    ) -> Self {
        Self {
            base_fare,
            distance_cost,
            waiting_cost,
            subtotal,
            baggage_cost,
            total,
            night_rate,
        }
    }

    /// Flat pickup charge.
    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Metered distance charge.
    pub fn distance_cost(&self) -> f64 {
        self.distance_cost
    }

    /// Metered waiting charge (zero when no valid waiting time was given).
    pub fn waiting_cost(&self) -> f64 {
        self.waiting_cost
    }

    /// Base + distance + waiting, after the night surcharge if applied.
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Package fees, never surcharged.
    pub fn baggage_cost(&self) -> f64 {
        self.baggage_cost
    }

    /// Final fare rounded to three decimals.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Final fare in millimes.
    pub fn total_millimes(&self) -> i64 {
        to_millimes(self.total)
    }

    /// Whether the night surcharge was applied to the subtotal.
    pub fn night_rate(&self) -> bool {
        self.night_rate
    }
}
