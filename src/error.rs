//! Error types for fare calculation and tariff configuration.

use thiserror::Error;

/// Errors produced while turning trip parameters into a fare.
///
/// Only the distance can block a calculation. Waiting time and baggage
/// fall back to a zero contribution instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FareError {
    #[error("invalid distance: {reason}")]
    InvalidDistance { reason: String },
}

impl FareError {
    pub(crate) fn invalid_distance(reason: impl Into<String>) -> Self {
        FareError::InvalidDistance {
            reason: reason.into(),
        }
    }
}

/// Errors produced while loading or validating a [`Tariff`](crate::tariff::Tariff).
#[derive(Error, Debug)]
pub enum TariffError {
    #[error("failed to read tariff file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tariff: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rate `{field}` must be finite and non-negative, got {value}")]
    InvalidRate { field: &'static str, value: f64 },

    #[error("step `{field}` must be finite and positive, got {value}")]
    InvalidStep { field: &'static str, value: f64 },

    #[error("night multiplier must be finite and at least 1, got {value}")]
    InvalidMultiplier { value: f64 },
}
