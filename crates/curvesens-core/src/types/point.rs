//! Point sensitivities.
//!
//! A point sensitivity records how much a computed quantity moves for a unit
//! change in one observed curve input. Two flavours exist:
//!
//! - [`PointSensitivity`]: a zero rate or price index observed at one time
//! - [`ForwardPointSensitivity`]: a forward rate observed over a period
//!
//! Both implement [`SensitivityPoint`], which exposes the point *location*
//! (the observation coordinates) separately from the sensitivity *value*.
//! Locations compare by exact IEEE bit pattern: two times that differ in the
//! last bit are different locations.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{SensitivityError, SensitivityResult};

/// Common behaviour of point sensitivities.
///
/// Aggregation code (concatenation, scaling, cleaning, comparison) is written
/// once against this trait and serves every sensitivity category.
pub trait SensitivityPoint: Copy + fmt::Debug + PartialEq + Send + Sync {
    /// Returns the sensitivity value.
    fn value(&self) -> f64;

    /// Returns a copy of this point with a different value and the same location.
    #[must_use]
    fn with_value(&self, value: f64) -> Self;

    /// Returns true if both points sit at exactly the same location.
    ///
    /// Every location component is compared by bit pattern, so `0.0` and
    /// `-0.0` are different locations and no tolerance is applied.
    fn same_location(&self, other: &Self) -> bool;

    /// Total order on locations, consistent with [`same_location`](Self::same_location).
    fn cmp_location(&self, other: &Self) -> Ordering;

    /// Largest absolute difference between corresponding location components.
    fn location_distance(&self, other: &Self) -> f64;
}

/// Sensitivity to a zero rate (or price index value) at a single time.
///
/// `value` is the change in the target quantity for a unit change in the
/// curve value at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSensitivity {
    /// Observation time in years.
    pub time: f64,
    /// Sensitivity value.
    pub value: f64,
}

impl PointSensitivity {
    /// Creates a point sensitivity.
    #[must_use]
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// Creates a point sensitivity, rejecting non-finite inputs.
    pub fn checked(time: f64, value: f64) -> SensitivityResult<Self> {
        if !time.is_finite() {
            return Err(SensitivityError::invalid_argument(format!(
                "time must be finite, got {time}"
            )));
        }
        if !value.is_finite() {
            return Err(SensitivityError::invalid_argument(format!(
                "value must be finite, got {value}"
            )));
        }
        Ok(Self::new(time, value))
    }
}

impl SensitivityPoint for PointSensitivity {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn with_value(&self, value: f64) -> Self {
        Self {
            time: self.time,
            value,
        }
    }

    #[inline]
    fn same_location(&self, other: &Self) -> bool {
        self.time.to_bits() == other.time.to_bits()
    }

    #[inline]
    fn cmp_location(&self, other: &Self) -> Ordering {
        self.time.total_cmp(&other.time)
    }

    #[inline]
    fn location_distance(&self, other: &Self) -> f64 {
        (self.time - other.time).abs()
    }
}

impl From<(f64, f64)> for PointSensitivity {
    fn from((time, value): (f64, f64)) -> Self {
        Self::new(time, value)
    }
}

/// Sensitivity to a simply-compounded forward rate.
///
/// The forward rate is observed over `[start_time, end_time]` with accrual
/// factor `accrual_factor`. The triple `(start_time, end_time, accrual_factor)`
/// is the location; ordering is lexicographic over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPointSensitivity {
    /// Start of the forward period in years.
    pub start_time: f64,
    /// End of the forward period in years.
    pub end_time: f64,
    /// Accrual factor of the forward period.
    pub accrual_factor: f64,
    /// Sensitivity value.
    pub value: f64,
}

impl ForwardPointSensitivity {
    /// Creates a forward point sensitivity.
    #[must_use]
    pub const fn new(start_time: f64, end_time: f64, accrual_factor: f64, value: f64) -> Self {
        Self {
            start_time,
            end_time,
            accrual_factor,
            value,
        }
    }

    /// Creates a forward point sensitivity, validating the period.
    ///
    /// All components must be finite and the accrual factor non-zero, since the
    /// forward rate divides by it.
    pub fn checked(
        start_time: f64,
        end_time: f64,
        accrual_factor: f64,
        value: f64,
    ) -> SensitivityResult<Self> {
        for (label, x) in [
            ("start_time", start_time),
            ("end_time", end_time),
            ("accrual_factor", accrual_factor),
            ("value", value),
        ] {
            if !x.is_finite() {
                return Err(SensitivityError::invalid_argument(format!(
                    "{label} must be finite, got {x}"
                )));
            }
        }
        if accrual_factor == 0.0 {
            return Err(SensitivityError::invalid_argument(
                "accrual_factor must be non-zero",
            ));
        }
        Ok(Self::new(start_time, end_time, accrual_factor, value))
    }

    /// Returns the location triple `(start_time, end_time, accrual_factor)`.
    #[must_use]
    pub fn location(&self) -> (f64, f64, f64) {
        (self.start_time, self.end_time, self.accrual_factor)
    }
}

impl SensitivityPoint for ForwardPointSensitivity {
    #[inline]
    fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    fn with_value(&self, value: f64) -> Self {
        Self { value, ..*self }
    }

    #[inline]
    fn same_location(&self, other: &Self) -> bool {
        self.start_time.to_bits() == other.start_time.to_bits()
            && self.end_time.to_bits() == other.end_time.to_bits()
            && self.accrual_factor.to_bits() == other.accrual_factor.to_bits()
    }

    #[inline]
    fn cmp_location(&self, other: &Self) -> Ordering {
        self.start_time
            .total_cmp(&other.start_time)
            .then_with(|| self.end_time.total_cmp(&other.end_time))
            .then_with(|| self.accrual_factor.total_cmp(&other.accrual_factor))
    }

    #[inline]
    fn location_distance(&self, other: &Self) -> f64 {
        (self.start_time - other.start_time)
            .abs()
            .max((self.end_time - other.end_time).abs())
            .max((self.accrual_factor - other.accrual_factor).abs())
    }
}
