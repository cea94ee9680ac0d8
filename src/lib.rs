//! # taxi-fare
//!
//! Taxi fare estimation for the Tunisian metered tariff: a flat base fare,
//! distance and waiting charged per step, a night surcharge on the metered
//! part, and a flat fee per large package.
//!
//! ## Modules
//!
//! - [`models`] — Trip input and fare breakdown types
//! - [`tariff`] — Official rate constants and the configurable `Tariff`
//! - [`calculator`] — The pure fare calculation
//! - [`rounding`] — Millime rounding
//! - [`form`] — Parsing raw form text into a trip
//! - [`receipt`] — Formatting a breakdown for display
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use taxi_fare::{calculate, models::TripInput};
//!
//! let fare = calculate(&TripInput::new(7.9)).unwrap();
//! assert_eq!(fare.total(), 5.5);
//! ```

pub mod calculator;
pub mod error;
pub mod form;
pub mod models;
pub mod receipt;
pub mod rounding;
pub mod tariff;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use calculator::{calculate, FareCalculator};
pub use error::{FareError, TariffError};
