// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition duration for fixture commands.

use std::fmt;
use std::time::Duration;

use crate::error::ValueError;

/// Transition duration in seconds carried by a turn-on command.
///
/// Foreground zones move quickly; the feature zone fades slowly so the
/// cinematic sunset reads as a gradual shift rather than a jump.
///
/// # Examples
///
/// ```
/// use solarc_lib::types::Transition;
///
/// let fade = Transition::from_secs(6.0).unwrap();
/// assert!((fade.as_secs_f64() - 6.0).abs() < f64::EPSILON);
///
/// assert!(Transition::from_secs(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Transition(f64);

impl Transition {
    /// Instant transition.
    pub const NONE: Self = Self(0.0);

    /// Default transition for standard zones (6 seconds).
    pub const FAST: Self = Self(6.0);

    /// Default transition for the feature zone (20 seconds).
    pub const SLOW: Self = Self(20.0);

    /// Creates a transition from a duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTransition` for negative or non-finite
    /// values.
    pub fn from_secs(secs: f64) -> Result<Self, ValueError> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ValueError::InvalidTransition(secs));
        }
        Ok(Self(secs))
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub const fn as_secs_f64(&self) -> f64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::FAST
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
