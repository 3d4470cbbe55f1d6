// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for fixture commands.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// Fixture commands carry brightness as a percentage, where 0 is off and
/// 100 is full brightness. Curve evaluation produces these via the clamping
/// constructors, so out-of-range intermediate values can never escape.
///
/// # Examples
///
/// ```
/// use solarc_lib::types::Brightness;
///
/// let pct = Brightness::new(75).unwrap();
/// assert_eq!(pct.value(), 75);
///
/// // Envelope output is a float percentage; it is rounded and clamped
/// let pct = Brightness::from_percent(84.6);
/// assert_eq!(pct.value(), 85);
/// assert_eq!(Brightness::from_percent(120.0).value(), 100);
/// assert_eq!(Brightness::from_percent(-3.0).value(), 0);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (off).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidBrightness` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::InvalidBrightness(value));
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a brightness from a float percentage, rounding and clamping.
    ///
    /// Non-finite input collapses to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_finite() {
            // Safe: clamped into [0, 100] before truncation
            Self(percent.clamp(0.0, 100.0).round() as u8)
        } else {
            Self::MIN
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Scales this brightness by a factor, rounding and clamping the result.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_percent(f64::from(self.0) * factor)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let pct = Brightness::new(v).unwrap();
            assert_eq!(pct.value(), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        assert!(Brightness::new(101).is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(50).value(), 50);
        assert_eq!(Brightness::clamped(150).value(), 100);
    }

    #[test]
    fn brightness_from_percent() {
        assert_eq!(Brightness::from_percent(0.0).value(), 0);
        assert_eq!(Brightness::from_percent(84.5).value(), 85);
        assert_eq!(Brightness::from_percent(-12.0).value(), 0);
        assert_eq!(Brightness::from_percent(230.0).value(), 100);
        assert_eq!(Brightness::from_percent(f64::NAN).value(), 0);
    }

    #[test]
    fn brightness_scaled() {
        let pct = Brightness::new(80).unwrap();
        assert_eq!(pct.scaled(0.9).value(), 72);
        assert_eq!(pct.scaled(0.95).value(), 76);
        assert_eq!(pct.scaled(2.0).value(), 100);
    }

    #[test]
    fn brightness_as_fraction() {
        assert!((Brightness::MAX.as_fraction() - 1.0).abs() < f64::EPSILON);
        assert!((Brightness::new(50).unwrap().as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
    }
}
