// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene configuration.
//!
//! A [`SceneConfig`] is the immutable description of an installation: the
//! zones with their envelope parameters and fixture lists, the
//! color-temperature curve, the ambient and sunset palettes, and the
//! severity floor. It is passed by reference into evaluation, so concurrent
//! invocations (including parallel test cases) cannot interfere through
//! shared state.
//!
//! All structs are serde round-trippable so hosts can keep scenes in files.
//!
//! # Examples
//!
//! ```
//! use solarc_lib::config::{SceneConfig, ZoneConfig};
//! use solarc_lib::types::Brightness;
//!
//! // Start from the built-in parameterization and attach fixtures
//! let mut config = SceneConfig::three_zone();
//! config.zones[0].tw_fixtures.push("light.reading_lamp".to_string());
//! config.validate().unwrap();
//!
//! // Or describe a zone from scratch
//! let zone = ZoneConfig::new("hallway", 45.0, 20.0, Brightness::clamped(70));
//! ```

use crate::error::ConfigError;
use crate::types::{Brightness, Kelvin, KelvinRange, RgbColor, Severity, Transition};

/// Shape of a zone's brightness envelope.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnvelopeShape {
    /// Power-law falloff `1 - |dx|^p`. Power 2 is sharp, 3 soft, 4 very soft.
    PowerLaw {
        /// The falloff exponent (>= 1).
        power: f64,
    },
    /// Parabolic falloff `1 - dx^2`, optionally flattened by dividing the
    /// squared term by severity.
    Parabolic {
        /// Divide the squared term by severity to flatten the peak.
        flatten_by_severity: bool,
    },
}

impl Default for EnvelopeShape {
    /// Soft power-law falloff.
    fn default() -> Self {
        Self::PowerLaw { power: 3.0 }
    }
}

/// Role of a zone within the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneRole {
    /// Regular zone: tunable-white kelvin plus the ambient RGB tint.
    #[default]
    Standard,
    /// Feature zone: its RGB fixtures switch to the cinematic sunset
    /// gradients inside the sunset window.
    Feature,
}

/// A named group of fixtures sharing one brightness/color curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoneConfig {
    /// Zone name, used in the status line.
    pub name: String,
    /// Position at which the zone peaks.
    pub center: f64,
    /// Envelope half-width at neutral severity. Scaled by severity at
    /// evaluation time; must be positive.
    pub base_width: f64,
    /// Brightness at the envelope peak.
    pub max_brightness: Brightness,
    /// Envelope falloff shape.
    #[serde(default)]
    pub shape: EnvelopeShape,
    /// Standard or feature.
    #[serde(default)]
    pub role: ZoneRole,
    /// Tunable-white fixture entity ids.
    #[serde(default)]
    pub tw_fixtures: Vec<String>,
    /// RGB fixture entity ids. For a feature zone the first id is treated
    /// as the uplight and the second as the downlight.
    #[serde(default)]
    pub rgb_fixtures: Vec<String>,
    /// Dim factor applied to the RGB fixtures relative to the tunable-white
    /// envelope.
    #[serde(default = "default_rgb_dim")]
    pub rgb_dim: f64,
    /// Transition duration for this zone's commands.
    #[serde(default)]
    pub transition: Transition,
}

fn default_rgb_dim() -> f64 {
    1.0
}

impl ZoneConfig {
    /// Creates a standard zone with no fixtures attached.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        center: f64,
        base_width: f64,
        max_brightness: Brightness,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            base_width,
            max_brightness,
            shape: EnvelopeShape::default(),
            role: ZoneRole::Standard,
            tw_fixtures: Vec::new(),
            rgb_fixtures: Vec::new(),
            rgb_dim: default_rgb_dim(),
            transition: Transition::default(),
        }
    }

    /// Marks this zone as the feature zone and switches it to the slow
    /// transition.
    #[must_use]
    pub fn feature(mut self) -> Self {
        self.role = ZoneRole::Feature;
        self.transition = Transition::SLOW;
        self
    }

    /// Sets the tunable-white fixture list.
    #[must_use]
    pub fn with_tw_fixtures<I, S>(mut self, fixtures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tw_fixtures = fixtures.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the RGB fixture list.
    #[must_use]
    pub fn with_rgb_fixtures<I, S>(mut self, fixtures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rgb_fixtures = fixtures.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the RGB dim factor.
    #[must_use]
    pub fn with_rgb_dim(mut self, factor: f64) -> Self {
        self.rgb_dim = factor;
        self
    }

    /// Sets the transition duration.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Effective envelope width at the given severity.
    #[must_use]
    pub fn width_at(&self, severity: Severity) -> f64 {
        self.base_width * severity.value()
    }
}

/// Parameters of the tunable-white color-temperature curve.
///
/// Two linear ramps (warm to cool over the first half of the sweep, cool
/// back to warm over the second half) plus an extra warming offset ramping
/// in over the final stretch.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KelvinCurve {
    /// Temperature at dawn and dusk.
    pub warm: Kelvin,
    /// Temperature at the midday peak (position 50).
    pub cool: Kelvin,
    /// Position where the extra sunset warm-down begins.
    pub warmdown_start: f64,
    /// Additional warming offset, fully applied at position 100.
    pub warmdown_max_offset: u16,
    /// Device-supported span; curve output is clamped into it.
    pub range: KelvinRange,
}

impl Default for KelvinCurve {
    fn default() -> Self {
        Self {
            warm: Kelvin::WARM,
            cool: Kelvin::COOL,
            warmdown_start: 85.0,
            warmdown_max_offset: 400,
            range: KelvinRange::default(),
        }
    }
}

/// Ambient RGB tint derived from the kelvin value via threshold buckets.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientPalette {
    /// Kelvin at or above which the cool tint applies.
    pub cool_threshold: Kelvin,
    /// Kelvin at or above which the neutral tint applies.
    pub neutral_threshold: Kelvin,
    /// Cool-blue tint.
    pub cool: RgbColor,
    /// Neutral-warm tint.
    pub neutral: RgbColor,
    /// Amber tint for warm temperatures.
    pub warm: RgbColor,
}

impl Default for AmbientPalette {
    fn default() -> Self {
        Self {
            cool_threshold: Kelvin::new(5000),
            neutral_threshold: Kelvin::new(3500),
            cool: RgbColor::new(180, 200, 255),
            neutral: RgbColor::new(255, 235, 200),
            warm: RgbColor::new(255, 200, 150),
        }
    }
}

/// Three color waypoints of a cinematic sunset gradient.
///
/// The gradient runs `start -> mid` over the first half of the sunset
/// window and `mid -> end` over the second half.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SunsetPalette {
    /// Color at the start of the window.
    pub start: RgbColor,
    /// Color at the window midpoint.
    pub mid: RgbColor,
    /// Color at position 100.
    pub end: RgbColor,
}

/// How the feature zone's tunable-white brightness is reduced inside the
/// sunset window.
///
/// The source installations disagreed on this behavior, so it is a tunable
/// rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SunsetDimming {
    /// Smooth fade: the scale factor interpolates from 1.0 at the window
    /// start down to `floor` at position 100.
    Fade {
        /// Scale factor at the end of the window.
        floor: f64,
    },
    /// Flat multiplier applied throughout the window.
    Scale {
        /// The constant scale factor.
        factor: f64,
    },
}

impl Default for SunsetDimming {
    fn default() -> Self {
        Self::Scale { factor: 0.9 }
    }
}

/// Parameters of the cinematic sunset window.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SunsetConfig {
    /// Position where the sunset gradients activate. Must lie in [0, 100).
    pub start: f64,
    /// Gradient for the feature uplight.
    pub uplight: SunsetPalette,
    /// Gradient for the feature downlight.
    pub downlight: SunsetPalette,
    /// Dim factor for the downlight relative to the zone envelope.
    pub downlight_dim: f64,
    /// Tunable-white scaling inside the window.
    pub tw_dimming: SunsetDimming,
}

impl Default for SunsetConfig {
    fn default() -> Self {
        // The start waypoints equal the ambient amber tint so the handoff at
        // the window boundary is seamless.
        Self {
            start: 85.0,
            uplight: SunsetPalette {
                start: RgbColor::new(255, 200, 150),
                mid: RgbColor::new(255, 120, 40),
                end: RgbColor::new(90, 25, 130),
            },
            downlight: SunsetPalette {
                start: RgbColor::new(255, 200, 150),
                mid: RgbColor::new(230, 90, 30),
                end: RgbColor::new(60, 15, 110),
            },
            downlight_dim: 0.9,
            tw_dimming: SunsetDimming::default(),
        }
    }
}

/// Minimum-brightness floor driven by severity.
///
/// The floor interpolates from a visible warm minimum at neutral severity
/// down to near-off at maximum severity, so raising severity narrows a
/// zone's peak but never darkens it completely.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeverityFloor {
    /// Floor at severity 1.0.
    pub at_neutral: Brightness,
    /// Floor at severity 2.0.
    pub at_max: Brightness,
}

impl SeverityFloor {
    /// Floor percentage for the given severity.
    ///
    /// Below neutral severity the floor stays at `at_neutral`.
    #[must_use]
    pub fn at(&self, severity: Severity) -> Brightness {
        let t = (severity.value() - 1.0).clamp(0.0, 1.0);
        let from = f64::from(self.at_neutral.value());
        let to = f64::from(self.at_max.value());
        Brightness::from_percent(from + (to - from) * t)
    }
}

impl Default for SeverityFloor {
    fn default() -> Self {
        Self {
            at_neutral: Brightness::clamped(15),
            at_max: Brightness::clamped(2),
        }
    }
}

/// Complete immutable description of a lighting scene.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// The zones, in dispatch order.
    pub zones: Vec<ZoneConfig>,
    /// Color-temperature curve parameters.
    #[serde(default)]
    pub kelvin: KelvinCurve,
    /// Ambient RGB tint palette.
    #[serde(default)]
    pub ambient: AmbientPalette,
    /// Cinematic sunset parameters.
    #[serde(default)]
    pub sunset: SunsetConfig,
    /// Severity-driven minimum brightness floor.
    #[serde(default)]
    pub floor: SeverityFloor,
    /// Entity id of the status field receiving the debug line.
    #[serde(default = "default_status_entity")]
    pub status_entity: String,
}

fn default_status_entity() -> String {
    "input_text.sun_status".to_string()
}

impl SceneConfig {
    /// The standard three-zone parameterization: lounge, kitchen, atrium.
    ///
    /// Centers 30/55/85, base widths 25/30/35, maxima 85/100/100. The
    /// atrium is the feature zone with the slow transition. Fixture lists
    /// are left empty for the host to fill in.
    #[must_use]
    pub fn three_zone() -> Self {
        Self {
            zones: vec![
                ZoneConfig::new("lounge", 30.0, 25.0, Brightness::clamped(85)).with_rgb_dim(0.95),
                ZoneConfig::new("kitchen", 55.0, 30.0, Brightness::clamped(100)),
                ZoneConfig::new("atrium", 85.0, 35.0, Brightness::clamped(100)).feature(),
            ],
            kelvin: KelvinCurve::default(),
            ambient: AmbientPalette::default(),
            sunset: SunsetConfig::default(),
            floor: SeverityFloor::default(),
            status_entity: default_status_entity(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: no zones, a non-positive zone
    /// width, a zone center outside [0, 100], more than one feature zone,
    /// an inverted kelvin range, or a sunset or warm-down start outside
    /// [0, 100).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zones.is_empty() {
            return Err(ConfigError::NoZones);
        }
        let feature_count = self
            .zones
            .iter()
            .filter(|zone| zone.role == ZoneRole::Feature)
            .count();
        if feature_count > 1 {
            return Err(ConfigError::MultipleFeatureZones(feature_count));
        }
        for zone in &self.zones {
            if zone.base_width <= 0.0 || !zone.base_width.is_finite() {
                return Err(ConfigError::NonPositiveWidth {
                    zone: zone.name.clone(),
                    width: zone.base_width,
                });
            }
            if !(0.0..=100.0).contains(&zone.center) {
                return Err(ConfigError::CenterOutOfDomain {
                    zone: zone.name.clone(),
                    center: zone.center,
                });
            }
        }
        if self.kelvin.range.min > self.kelvin.range.max {
            return Err(ConfigError::InvertedKelvinRange {
                min: self.kelvin.range.min.value(),
                max: self.kelvin.range.max.value(),
            });
        }
        if !(0.0..100.0).contains(&self.sunset.start) {
            return Err(ConfigError::InvalidSunsetStart(self.sunset.start));
        }
        if !(0.0..100.0).contains(&self.kelvin.warmdown_start) {
            return Err(ConfigError::InvalidWarmdownStart(self.kelvin.warmdown_start));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::three_zone()
    }
}
