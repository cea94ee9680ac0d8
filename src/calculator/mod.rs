//! Fare calculation.
//!
//! Turns a [`TripInput`](crate::models::TripInput) into a
//! [`FareBreakdown`](crate::models::FareBreakdown). Base fare, distance
//! and waiting charges are summed, the night surcharge scales that sum,
//! and baggage fees are added last.

mod fare;

pub use fare::{calculate, FareCalculator};
