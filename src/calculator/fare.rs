//! Fare calculator.

use crate::error::{FareError, TariffError};
use crate::models::{valid_positive, FareBreakdown, TripInput};
use crate::rounding::round3;
use crate::tariff::Tariff;

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Prices trips against a validated [`Tariff`].
///
/// The calculator holds no state besides its tariff, so the same input
/// always yields the same breakdown.
///
/// # Examples
///
/// ```
/// use taxi_fare::calculator::FareCalculator;
/// use taxi_fare::models::TripInput;
///
/// let calc = FareCalculator::official();
/// let trip = TripInput::new(7.9)
///     .with_waiting_minutes(3.0)
///     .with_baggage_count(2.0)
///     .with_night_rate(true);
/// let fare = calc.calculate(&trip).unwrap();
/// assert!((fare.subtotal() - 8.94).abs() < 1e-9);
/// assert_eq!(fare.total(), 10.94);
///
/// assert!(calc.calculate(&TripInput::new(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareCalculator {
    tariff: Tariff,
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::official()
    }
}

impl FareCalculator {
    /// Creates a calculator for the given tariff after validating it.
    pub fn new(tariff: Tariff) -> Result<Self, TariffError> {
        tariff.validate()?;
        Ok(Self { tariff })
    }

    /// Creates a calculator using the official tariff.
    pub const fn official() -> Self {
        Self {
            tariff: Tariff::official(),
        }
    }

    /// The tariff this calculator prices with.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Prices a trip.
    ///
    /// Returns [`FareError::InvalidDistance`] if the distance is NaN,
    /// infinite, or negative. Waiting time and baggage never cause an error.
    pub fn calculate(&self, input: &TripInput) -> Result<FareBreakdown, FareError> {
        let t = &self.tariff;
        let distance_km = input.distance_km();

        if !distance_km.is_finite() {
            tracing::warn!(distance_km, "rejecting non-finite distance");
            return Err(FareError::invalid_distance(format!(
                "expected a finite number of kilometers, got {distance_km}"
            )));
        }
        if distance_km < 0.0 {
            tracing::warn!(distance_km, "rejecting negative distance");
            return Err(FareError::invalid_distance(format!(
                "distance cannot be negative, got {distance_km}"
            )));
        }

        let distance_cost =
            (distance_km * METERS_PER_KM / t.distance_step_meters) * t.distance_rate;

        let waiting_cost = valid_positive(input.waiting_minutes())
            .map(|minutes| {
                (minutes * SECONDS_PER_MINUTE / t.waiting_step_seconds) * t.waiting_rate
            })
            .unwrap_or(0.0);

        let mut subtotal = t.base_fare + distance_cost + waiting_cost;
        // Surcharge covers base + distance + waiting only; baggage is added after.
        if input.night_rate() {
            subtotal *= t.night_multiplier;
        }

        let baggage_cost = valid_positive(input.baggage_count())
            .map(|count| count * t.baggage_unit_cost)
            .unwrap_or(0.0);

        let total = round3(subtotal + baggage_cost);

        tracing::debug!(
            distance_km,
            waiting_minutes = ?input.waiting_minutes(),
            baggage_count = ?input.baggage_count(),
            night_rate = input.night_rate(),
            subtotal,
            baggage_cost,
            total,
            "fare calculated"
        );

        Ok(FareBreakdown::new(
            t.base_fare,
            distance_cost,
            waiting_cost,
            subtotal,
            baggage_cost,
            total,
            input.night_rate(),
        ))
    }
}

/// Prices a trip against the official tariff.
///
/// Shorthand for `FareCalculator::official().calculate(input)`.
pub fn calculate(input: &TripInput) -> Result<FareBreakdown, FareError> {
    FareCalculator::official().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_distance_is_base_fare() {
        let fare = calculate(&TripInput::new(0.0)).expect("valid");
        assert_eq!(fare.base_fare(), 0.9);
        assert_eq!(fare.distance_cost(), 0.0);
        assert_eq!(fare.waiting_cost(), 0.0);
        assert_eq!(fare.baggage_cost(), 0.0);
        assert_eq!(fare.total(), 0.9);
        assert!(!fare.night_rate());
    }

    #[test]
    fn test_distance_only() {
        // 7.9 km = 100 steps of 79 m
        let fare = calculate(&TripInput::new(7.9)).expect("valid");
        assert!((fare.distance_cost() - 4.6).abs() < EPS);
        assert_eq!(fare.total(), 5.5);
    }

    #[test]
    fn test_waiting_only() {
        // 3 min = 10 steps of 18 s
        let fare = calculate(&TripInput::new(0.0).with_waiting_minutes(3.0)).expect("valid");
        assert!((fare.waiting_cost() - 0.46).abs() < EPS);
        assert_eq!(fare.total(), 1.36);
    }

    #[test]
    fn test_baggage_only() {
        let fare = calculate(&TripInput::new(0.0).with_baggage_count(2.0)).expect("valid");
        assert_eq!(fare.baggage_cost(), 2.0);
        assert_eq!(fare.total(), 2.9);
    }

    #[test]
    fn test_night_only() {
        let fare = calculate(&TripInput::new(0.0).with_night_rate(true)).expect("valid");
        assert!((fare.subtotal() - 1.35).abs() < EPS);
        assert_eq!(fare.total(), 1.35);
        assert!(fare.night_rate());
    }

    #[test]
    fn test_full_night_trip() {
        let trip = TripInput::new(7.9)
            .with_waiting_minutes(3.0)
            .with_baggage_count(2.0)
            .with_night_rate(true);
        let fare = calculate(&trip).expect("valid");
        assert!((fare.subtotal() - 8.94).abs() < EPS);
        assert_eq!(fare.baggage_cost(), 2.0);
        assert_eq!(fare.total(), 10.94);
    }

    #[test]
    fn test_night_does_not_scale_baggage() {
        let day = calculate(&TripInput::new(0.0).with_baggage_count(3.0)).expect("valid");
        let night = calculate(
            &TripInput::new(0.0)
                .with_baggage_count(3.0)
                .with_night_rate(true),
        )
        .expect("valid");
        assert_eq!(day.baggage_cost(), night.baggage_cost());
        assert!((night.total() - day.total() - 0.45).abs() < EPS);
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = calculate(&TripInput::new(-0.1)).unwrap_err();
        assert!(matches!(err, FareError::InvalidDistance { .. }));
    }

    #[test]
    fn test_non_finite_distance_rejected() {
        assert!(calculate(&TripInput::new(f64::NAN)).is_err());
        assert!(calculate(&TripInput::new(f64::INFINITY)).is_err());
        assert!(calculate(&TripInput::new(f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_bad_optional_inputs_contribute_nothing() {
        let base = calculate(&TripInput::new(2.0)).expect("valid");
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let trip = TripInput::new(2.0)
                .with_waiting_minutes(bad)
                .with_baggage_count(bad);
            let fare = calculate(&trip).expect("optional inputs never fail");
            assert_eq!(fare.waiting_cost(), 0.0);
            assert_eq!(fare.baggage_cost(), 0.0);
            assert_eq!(fare.total(), base.total());
        }
    }

    #[test]
    fn test_fractional_baggage_is_prorated() {
        let fare = calculate(&TripInput::new(0.0).with_baggage_count(1.5)).expect("valid");
        assert_eq!(fare.baggage_cost(), 1.5);
        assert_eq!(fare.total(), 2.4);
    }

    #[test]
    fn test_total_rounds_on_exact_sum() {
        // 0.9 + 0.0005 sits just below the 0.9005 tie
        let fare = calculate(&TripInput::new(0.0).with_baggage_count(0.0005)).expect("valid");
        assert_eq!(fare.total(), 0.9);
        assert_eq!(fare.total_millimes(), 900);
    }

    #[test]
    fn test_custom_tariff() {
        let tariff = Tariff {
            base_fare: 1.0,
            night_multiplier: 2.0,
            ..Tariff::official()
        };
        let calc = FareCalculator::new(tariff).expect("valid tariff");
        let fare = calc
            .calculate(&TripInput::new(0.0).with_night_rate(true))
            .expect("valid");
        assert_eq!(fare.base_fare(), 1.0);
        assert_eq!(fare.total(), 2.0);
    }

    #[test]
    fn test_invalid_tariff_rejected() {
        let tariff = Tariff {
            waiting_step_seconds: -18.0,
            ..Tariff::official()
        };
        assert!(FareCalculator::new(tariff).is_err());
    }

    #[test]
    fn test_idempotent() {
        let trip = TripInput::new(13.37)
            .with_waiting_minutes(7.5)
            .with_baggage_count(1.0)
            .with_night_rate(true);
        let a = calculate(&trip).expect("valid");
        let b = calculate(&trip).expect("valid");
        assert_eq!(a.total().to_bits(), b.total().to_bits());
        assert_eq!(a.subtotal().to_bits(), b.subtotal().to_bits());
        assert_eq!(a, b);
    }
}
