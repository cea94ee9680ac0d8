//! Official taxi tariff constants and the configurable [`Tariff`] value.
//!
//! Rates are expressed in currency units (TND, 1 unit = 1000 millimes).
//! The meter charges a fixed step amount for every started distance or
//! waiting step; here the step cost is prorated continuously.

mod schedule;

pub use schedule::Tariff;

/// Flat pickup charge: 900 millimes.
pub const BASE_FARE: f64 = 0.900;

/// Charge per distance step.
pub const DISTANCE_RATE: f64 = 0.046;

/// Length of one distance step in meters.
pub const DISTANCE_STEP_METERS: f64 = 79.0;

/// Charge per waiting step.
pub const WAITING_RATE: f64 = 0.046;

/// Length of one waiting step in seconds.
pub const WAITING_STEP_SECONDS: f64 = 18.0;

/// Night surcharge factor (+50%), applied before baggage is added.
pub const NIGHT_MULTIPLIER: f64 = 1.5;

/// Flat fee per large package. Not affected by the night surcharge.
pub const BAGGAGE_UNIT_COST: f64 = 1.00;

/// Currency code used when formatting amounts.
pub const CURRENCY: &str = "TND";
