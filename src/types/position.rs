// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sweep input types: sun position and severity.
//!
//! Both inputs arrive from the host per invocation and are immutable for the
//! duration of a sweep. Out-of-range and non-finite values are clamped rather
//! than rejected, matching how missing inputs are defaulted.

use std::fmt;

use crate::error::ValueError;

/// Sun position on the dawn-to-dusk sweep, as a scalar in [0, 100].
///
/// 0 is dawn, 100 is dusk. Zones light up and fade in sequence as the
/// position advances through their envelope windows.
///
/// # Examples
///
/// ```
/// use solarc_lib::types::Position;
///
/// let pos = Position::new(42.5).unwrap();
/// assert!((pos.value() - 42.5).abs() < f64::EPSILON);
///
/// // Out-of-range input is clamped, absent input defaults to dawn
/// assert!((Position::clamped(130.0).value() - 100.0).abs() < f64::EPSILON);
/// assert!(Position::or_default(None).value().abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Position(f64);

impl Position {
    /// Start of the sweep (dawn).
    pub const MIN: f64 = 0.0;

    /// End of the sweep (dusk).
    pub const MAX: f64 = 100.0;

    /// Creates a new position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [0, 100],
    /// or `ValueError::NotFinite` for NaN and infinities.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a position, clamping into [0, 100].
    ///
    /// Non-finite input collapses to 0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::MIN)
        }
    }

    /// Resolves an optional host input, defaulting to dawn (0.0).
    #[must_use]
    pub fn or_default(value: Option<f64>) -> Self {
        value.map_or(Self(Self::MIN), Self::clamped)
    }

    /// Returns the position value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity tuning scalar in [0.5, 2.0].
///
/// Severity scales every zone's envelope width and drives the minimum
/// brightness floor: higher severity widens envelopes and lowers the floor
/// towards near-off.
///
/// # Examples
///
/// ```
/// use solarc_lib::types::Severity;
///
/// let sev = Severity::new(1.5).unwrap();
/// assert!((sev.value() - 1.5).abs() < f64::EPSILON);
///
/// // Absent input defaults to the neutral 1.0
/// assert!((Severity::or_default(None).value() - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Severity(f64);

impl Severity {
    /// Minimum severity.
    pub const MIN: f64 = 0.5;

    /// Maximum severity.
    pub const MAX: f64 = 2.0;

    /// Neutral severity: envelopes keep their base widths.
    pub const NEUTRAL: Self = Self(1.0);

    /// Creates a new severity.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [0.5, 2.0],
    /// or `ValueError::NotFinite` for NaN and infinities.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NotFinite);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a severity, clamping into [0.5, 2.0].
    ///
    /// Non-finite input collapses to the neutral 1.0.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self::NEUTRAL
        }
    }

    /// Resolves an optional host input, defaulting to neutral (1.0).
    #[must_use]
    pub fn or_default(value: Option<f64>) -> Self {
        value.map_or(Self::NEUTRAL, Self::clamped)
    }

    /// Returns the severity value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_valid() {
        let pos = Position::new(55.0).unwrap();
        assert!((pos.value() - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn position_invalid() {
        assert!(Position::new(-0.1).is_err());
        assert!(Position::new(100.1).is_err());
        assert!(matches!(
            Position::new(f64::NAN),
            Err(ValueError::NotFinite)
        ));
    }

    #[test]
    fn position_clamped() {
        assert!((Position::clamped(-5.0).value() - 0.0).abs() < f64::EPSILON);
        assert!((Position::clamped(130.0).value() - 100.0).abs() < f64::EPSILON);
        assert!((Position::clamped(f64::NAN).value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn position_default_is_dawn() {
        assert!(Position::or_default(None).value().abs() < f64::EPSILON);
        assert!((Position::or_default(Some(30.0)).value() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn severity_valid() {
        for v in [0.5, 1.0, 1.3, 2.0] {
            let sev = Severity::new(v).unwrap();
            assert!((sev.value() - v).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn severity_invalid() {
        assert!(Severity::new(0.49).is_err());
        assert!(Severity::new(2.01).is_err());
        assert!(matches!(
            Severity::new(f64::INFINITY),
            Err(ValueError::NotFinite)
        ));
    }

    #[test]
    fn severity_clamped() {
        assert!((Severity::clamped(0.0).value() - 0.5).abs() < f64::EPSILON);
        assert!((Severity::clamped(5.0).value() - 2.0).abs() < f64::EPSILON);
        assert!((Severity::clamped(f64::NAN).value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn severity_default_is_neutral() {
        assert_eq!(Severity::or_default(None), Severity::NEUTRAL);
        assert!((Severity::or_default(Some(1.7)).value() - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(Position::clamped(30.0).to_string(), "30");
        assert_eq!(Severity::clamped(1.5).to_string(), "1.5");
    }
}
