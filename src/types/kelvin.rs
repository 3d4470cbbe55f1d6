// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature types for tunable-white fixtures.
//!
//! Fixtures advertise a supported kelvin span; every kelvin value produced by
//! the color-temperature curve is clamped into that span before it reaches a
//! command.

use std::fmt;

use crate::error::ValueError;

/// Color temperature in kelvin.
///
/// Lower values are warmer (more orange), higher values are cooler (bluer).
///
/// - 2200 K - Warm sunrise/sunset white
/// - 4000 K - Neutral white
/// - 5600 K - Cool midday daylight
///
/// # Examples
///
/// ```
/// use solarc_lib::types::{Kelvin, KelvinRange};
///
/// let ct = Kelvin::new(3500);
/// assert_eq!(ct.value(), 3500);
///
/// // Device ranges clamp out-of-span values
/// let range = KelvinRange::default();
/// assert_eq!(range.clamp(Kelvin::new(1200)).value(), 1800);
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
pub struct Kelvin(u16);

impl Kelvin {
    /// Warm sunrise/sunset white (~2200 K).
    pub const WARM: Self = Self(2200);

    /// Neutral white (~4000 K).
    pub const NEUTRAL: Self = Self(4000);

    /// Cool midday daylight (~5600 K).
    pub const COOL: Self = Self(5600);

    /// Creates a new kelvin value.
    ///
    /// Any `u16` is a representable temperature; device validity is a
    /// property of a [`KelvinRange`], not of the value itself.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Creates a kelvin value from a float, rounding and flooring at zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            // Safe: clamped into the u16 span before truncation
            Self(value.clamp(0.0, f64::from(u16::MAX)).round() as u16)
        } else {
            Self(0)
        }
    }

    /// Returns the temperature in kelvin.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl From<u16> for Kelvin {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// The kelvin span supported by the installed tunable-white fixtures.
///
/// Curve output is clamped into this span, so a command can never carry a
/// temperature the hardware cannot render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KelvinRange {
    /// Warmest supported temperature.
    pub min: Kelvin,
    /// Coolest supported temperature.
    pub max: Kelvin,
}

impl KelvinRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `min` exceeds `max`.
    pub fn new(min: Kelvin, max: Kelvin) -> Result<Self, ValueError> {
        if min > max {
            return Err(ValueError::OutOfRange {
                min: f64::from(min.value()),
                max: f64::from(max.value()),
                actual: f64::from(min.value()),
            });
        }
        Ok(Self { min, max })
    }

    /// Clamps a kelvin value into this range.
    #[must_use]
    pub fn clamp(&self, value: Kelvin) -> Kelvin {
        Kelvin(value.0.clamp(self.min.0, self.max.0))
    }

    /// Returns true if the value lies within this range.
    #[must_use]
    pub const fn contains(&self, value: Kelvin) -> bool {
        value.0 >= self.min.0 && value.0 <= self.max.0
    }
}

impl Default for KelvinRange {
    /// The common extended-warm bulb span: 1800-5600 K.
    fn default() -> Self {
        Self {
            min: Kelvin(1800),
            max: Kelvin(5600),
        }
    }
}

impl fmt::Display for KelvinRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_from_f64() {
        assert_eq!(Kelvin::from_f64(3499.6).value(), 3500);
        assert_eq!(Kelvin::from_f64(-20.0).value(), 0);
        assert_eq!(Kelvin::from_f64(f64::NAN).value(), 0);
    }

    #[test]
    fn kelvin_display() {
        assert_eq!(Kelvin::WARM.to_string(), "2200K");
    }

    #[test]
    fn range_clamp() {
        let range = KelvinRange::default();
        assert_eq!(range.clamp(Kelvin::new(1200)).value(), 1800);
        assert_eq!(range.clamp(Kelvin::new(7000)).value(), 5600);
        assert_eq!(range.clamp(Kelvin::new(3000)).value(), 3000);
    }

    #[test]
    fn range_contains() {
        let range = KelvinRange::default();
        assert!(range.contains(Kelvin::new(1800)));
        assert!(range.contains(Kelvin::new(5600)));
        assert!(!range.contains(Kelvin::new(1799)));
    }

    #[test]
    fn range_inverted_rejected() {
        assert!(KelvinRange::new(Kelvin::new(5600), Kelvin::new(1800)).is_err());
    }
}
