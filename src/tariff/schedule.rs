//! Tariff schedule with JSON loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    BAGGAGE_UNIT_COST, BASE_FARE, DISTANCE_RATE, DISTANCE_STEP_METERS, NIGHT_MULTIPLIER,
    WAITING_RATE, WAITING_STEP_SECONDS,
};
use crate::error::TariffError;

/// A complete set of fare rates.
///
/// [`Tariff::default`] is the official schedule. A tariff can also be
/// loaded from JSON; any field left out keeps its official value.
///
/// # Examples
///
/// ```
/// use taxi_fare::tariff::Tariff;
///
/// let t = Tariff::from_json_str(r#"{ "baggage_unit_cost": 1.5 }"#).unwrap();
/// assert_eq!(t.baggage_unit_cost, 1.5);
/// assert_eq!(t.base_fare, 0.900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tariff {
    /// Flat pickup charge.
    pub base_fare: f64,
    /// Charge per distance step.
    pub distance_rate: f64,
    /// Distance step length in meters.
    pub distance_step_meters: f64,
    /// Charge per waiting step.
    pub waiting_rate: f64,
    /// Waiting step length in seconds.
    pub waiting_step_seconds: f64,
    /// Factor applied to the pre-baggage subtotal at night.
    pub night_multiplier: f64,
    /// Fee per large package.
    pub baggage_unit_cost: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self::official()
    }
}

impl Tariff {
    /// The official schedule.
    pub const fn official() -> Self {
        Self {
            base_fare: BASE_FARE,
            distance_rate: DISTANCE_RATE,
            distance_step_meters: DISTANCE_STEP_METERS,
            waiting_rate: WAITING_RATE,
            waiting_step_seconds: WAITING_STEP_SECONDS,
            night_multiplier: NIGHT_MULTIPLIER,
            baggage_unit_cost: BAGGAGE_UNIT_COST,
        }
    }

    /// Parses and validates a tariff from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, TariffError> {
        let tariff: Tariff = serde_json::from_str(json)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Reads, parses and validates a tariff from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TariffError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let tariff = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded tariff");
        Ok(tariff)
    }

    /// Checks that every rate is usable.
    ///
    /// Rates must be finite and non-negative, step lengths finite and
    /// strictly positive, and the night multiplier finite and at least 1.
    pub fn validate(&self) -> Result<(), TariffError> {
        let rates = [
            ("base_fare", self.base_fare),
            ("distance_rate", self.distance_rate),
            ("waiting_rate", self.waiting_rate),
            ("baggage_unit_cost", self.baggage_unit_cost),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(TariffError::InvalidRate { field, value });
            }
        }

        let steps = [
            ("distance_step_meters", self.distance_step_meters),
            ("waiting_step_seconds", self.waiting_step_seconds),
        ];
        for (field, value) in steps {
            if !value.is_finite() || value <= 0.0 {
                return Err(TariffError::InvalidStep { field, value });
            }
        }

        if !self.night_multiplier.is_finite() || self.night_multiplier < 1.0 {
            return Err(TariffError::InvalidMultiplier {
                value: self.night_multiplier,
            });
        }
        Ok(())
    }

    /// Night surcharge as a whole percentage (1.5 -> 50).
    pub fn night_surcharge_percent(&self) -> f64 {
        ((self.night_multiplier - 1.0) * 100.0).round()
    }
}
