//! Fare model types.
//!
//! Provides the trip parameters a rider enters and the priced breakdown
//! the calculator returns.

mod breakdown;
mod trip;

pub use breakdown::FareBreakdown;
pub use trip::TripInput;

pub(crate) use trip::valid_positive;
