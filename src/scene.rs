// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene evaluation.
//!
//! [`ScenePlan::evaluate`] is the pure core of the library: it maps a
//! `(position, severity)` pair and a [`SceneConfig`] to per-zone brightness
//! and color levels. The plan can then be turned into fixture commands and a
//! status line. Evaluation performs no I/O and reads no shared state, so it
//! is safe to call from concurrent test cases.

use std::fmt::Write as _;

use crate::command::{ColorSpec, TurnOnCommand};
use crate::config::{SceneConfig, ZoneConfig, ZoneRole};
use crate::curve::{ambient_rgb, color_temperature, sunset_rgb, sunset_tw_scale, zone_brightness};
use crate::types::{Brightness, Kelvin, Position, RgbColor, Severity, Transition};

/// Cinematic sunset colors for the feature zone, present only inside the
/// sunset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunsetColors {
    /// Color for even-indexed (uplight) RGB fixtures.
    pub uplight: RgbColor,
    /// Color for odd-indexed (downlight) RGB fixtures.
    pub downlight: RgbColor,
}

/// Computed levels for one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLevels {
    /// Zone name, copied from the configuration.
    pub name: String,
    /// Zone role, copied from the configuration.
    pub role: ZoneRole,
    /// Tunable-white brightness after the severity floor, before any sunset
    /// scaling.
    pub envelope: Brightness,
    /// Effective tunable-white brightness. Differs from `envelope` only for
    /// the feature zone inside the sunset window.
    pub tw_brightness: Brightness,
    /// Color temperature, clamped to the device range.
    pub kelvin: Kelvin,
    /// Ambient RGB tint for this position.
    pub ambient: RgbColor,
    /// Sunset colors, present for the feature zone inside the window.
    pub sunset: Option<SunsetColors>,
    /// Transition carried into every command for this zone.
    pub transition: Transition,
}

impl ZoneLevels {
    /// RGB color for the fixture at `index` within the zone's RGB list.
    ///
    /// Feature zones alternate uplight/downlight sunset colors by index
    /// inside the window; everything else takes the ambient tint.
    #[must_use]
    pub fn rgb_for(&self, index: usize) -> RgbColor {
        match &self.sunset {
            Some(colors) if index % 2 == 0 => colors.uplight,
            Some(colors) => colors.downlight,
            None => self.ambient,
        }
    }
}

/// The complete evaluation result for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlan {
    /// Resolved sun position.
    pub position: Position,
    /// Resolved severity.
    pub severity: Severity,
    /// Per-zone levels, in the configuration's dispatch order.
    pub zones: Vec<ZoneLevels>,
}

impl ScenePlan {
    /// Evaluates the scene at the given position and severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use solarc_lib::config::SceneConfig;
    /// use solarc_lib::scene::ScenePlan;
    /// use solarc_lib::types::{Position, Severity};
    ///
    /// let config = SceneConfig::three_zone();
    /// let plan = ScenePlan::evaluate(&config, Position::clamped(30.0), Severity::NEUTRAL);
    /// assert_eq!(plan.zones[0].envelope.value(), 85);
    /// ```
    #[must_use]
    pub fn evaluate(config: &SceneConfig, position: Position, severity: Severity) -> Self {
        let kelvin = color_temperature(position, &config.kelvin);
        let ambient = ambient_rgb(kelvin, &config.ambient);

        let zones = config
            .zones
            .iter()
            .map(|zone| evaluate_zone(config, zone, position, severity, kelvin, ambient))
            .collect();

        Self {
            position,
            severity,
            zones,
        }
    }

    /// Generates the fixture commands for this plan.
    ///
    /// `config` must be the configuration the plan was evaluated from; the
    /// fixture lists are read from it. Tunable-white fixtures receive the
    /// kelvin spec, RGB fixtures the composed RGB spec. Feature-zone
    /// odd-indexed (downlight) RGB fixtures are dimmed by the configured
    /// downlight factor, standard-zone RGB fixtures by the zone's RGB dim.
    #[must_use]
    pub fn commands(&self, config: &SceneConfig) -> Vec<TurnOnCommand> {
        let mut commands = Vec::new();
        for (levels, zone) in self.zones.iter().zip(&config.zones) {
            for entity in &zone.tw_fixtures {
                commands.push(TurnOnCommand::new(
                    entity,
                    levels.tw_brightness,
                    ColorSpec::Temperature(levels.kelvin),
                    levels.transition,
                ));
            }
            for (index, entity) in zone.rgb_fixtures.iter().enumerate() {
                let brightness = match zone.role {
                    ZoneRole::Standard => levels.envelope.scaled(zone.rgb_dim),
                    ZoneRole::Feature if index % 2 == 1 => {
                        levels.envelope.scaled(config.sunset.downlight_dim)
                    }
                    ZoneRole::Feature => levels.envelope,
                };
                commands.push(TurnOnCommand::new(
                    entity,
                    brightness,
                    ColorSpec::Rgb(levels.rgb_for(index)),
                    levels.transition,
                ));
            }
        }
        commands
    }

    /// Formats the single-line debug summary written to the status field.
    #[must_use]
    pub fn status_line(&self) -> String {
        let mut line = format!("pos={} sev={}:", self.position, self.severity);
        for levels in &self.zones {
            let _ = write!(
                line,
                " {} {}/{}",
                levels.name, levels.tw_brightness, levels.kelvin
            );
            if let Some(colors) = &levels.sunset {
                let _ = write!(line, " {}|{}", colors.uplight, colors.downlight);
            }
        }
        line
    }
}

fn evaluate_zone(
    config: &SceneConfig,
    zone: &ZoneConfig,
    position: Position,
    severity: Severity,
    kelvin: Kelvin,
    ambient: RgbColor,
) -> ZoneLevels {
    let envelope = zone_brightness(position, zone, severity, &config.floor);

    let (tw_brightness, sunset) = if zone.role == ZoneRole::Feature {
        let scale = sunset_tw_scale(position, &config.sunset);
        let sunset = sunset_rgb(position, config.sunset.start, &config.sunset.uplight).map(
            |uplight| SunsetColors {
                uplight,
                // The window bounds match, so the downlight sample is Some
                // whenever the uplight sample is
                downlight: sunset_rgb(position, config.sunset.start, &config.sunset.downlight)
                    .unwrap_or(ambient),
            },
        );
        (envelope.scaled(scale), sunset)
    } else {
        (envelope, None)
    };

    ZoneLevels {
        name: zone.name.clone(),
        role: zone.role,
        envelope,
        tw_brightness,
        kelvin,
        ambient,
        sunset,
        transition: zone.transition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SunsetDimming;

    fn config_with_fixtures() -> SceneConfig {
        let mut config = SceneConfig::three_zone();
        config.zones[0].tw_fixtures = vec![
            "light.slope_spot".to_string(),
            "light.reading_light".to_string(),
        ];
        config.zones[0].rgb_fixtures = vec!["light.foot_stool".to_string()];
        config.zones[1].tw_fixtures = vec!["light.kitchen".to_string()];
        config.zones[2].tw_fixtures = vec![
            "light.table_uplight_white".to_string(),
            "light.table_downlight_white".to_string(),
        ];
        config.zones[2].rgb_fixtures = vec![
            "light.table_uplight_colour".to_string(),
            "light.table_downlight_colour".to_string(),
        ];
        config
    }

    #[test]
    fn lounge_peaks_at_its_center() {
        let config = SceneConfig::three_zone();
        let plan = ScenePlan::evaluate(&config, Position::clamped(30.0), Severity::NEUTRAL);
        assert_eq!(plan.zones[0].envelope, config.zones[0].max_brightness);
        // Kelvin sits on the sunrise ramp, well below the midday peak
        assert!(plan.zones[0].kelvin < config.kelvin.cool);
        assert!(plan.zones[0].kelvin > config.kelvin.warm);
    }

    #[test]
    fn zones_light_in_sequence() {
        let config = SceneConfig::three_zone();
        let early = ScenePlan::evaluate(&config, Position::clamped(20.0), Severity::NEUTRAL);
        let late = ScenePlan::evaluate(&config, Position::clamped(90.0), Severity::NEUTRAL);
        assert!(early.zones[0].envelope > early.zones[2].envelope);
        assert!(late.zones[2].envelope > late.zones[0].envelope);
    }

    #[test]
    fn sunset_branch_active_late() {
        let config = SceneConfig::three_zone();
        let plan = ScenePlan::evaluate(&config, Position::clamped(95.0), Severity::NEUTRAL);
        let atrium = &plan.zones[2];
        let colors = atrium.sunset.as_ref().expect("sunset window active");
        assert_ne!(colors.uplight, atrium.ambient);
        assert_ne!(colors.downlight, atrium.ambient);
        assert_ne!(colors.uplight, colors.downlight);
        // Tunable-white brightness reduced by the sunset scale factor
        assert_eq!(atrium.tw_brightness, atrium.envelope.scaled(0.9));
        // Standard zones are untouched
        assert!(plan.zones[0].sunset.is_none());
        assert_eq!(plan.zones[0].tw_brightness, plan.zones[0].envelope);
    }

    #[test]
    fn sunset_fade_mode_scales_progressively() {
        let mut config = SceneConfig::three_zone();
        config.sunset.tw_dimming = SunsetDimming::Fade { floor: 0.2 };
        let near_start = ScenePlan::evaluate(&config, Position::clamped(86.0), Severity::NEUTRAL);
        let at_end = ScenePlan::evaluate(&config, Position::clamped(100.0), Severity::NEUTRAL);
        let ratio_start = f64::from(near_start.zones[2].tw_brightness.value())
            / f64::from(near_start.zones[2].envelope.value());
        let ratio_end = f64::from(at_end.zones[2].tw_brightness.value())
            / f64::from(at_end.zones[2].envelope.value());
        assert!(ratio_start > ratio_end);
    }

    #[test]
    fn all_levels_in_range_across_grid() {
        let config = SceneConfig::three_zone();
        for pos_step in 0..=50 {
            for sev_step in 0..=6 {
                let position = Position::clamped(f64::from(pos_step) * 2.0);
                let severity = Severity::clamped(0.5 + f64::from(sev_step) * 0.25);
                let plan = ScenePlan::evaluate(&config, position, severity);
                for levels in &plan.zones {
                    assert!(levels.tw_brightness.value() <= 100);
                    assert!(config.kelvin.range.contains(levels.kelvin));
                }
            }
        }
    }

    #[test]
    fn commands_cover_every_fixture() {
        let config = config_with_fixtures();
        let plan = ScenePlan::evaluate(&config, Position::clamped(30.0), Severity::NEUTRAL);
        let commands = plan.commands(&config);
        // 2 + 1 + 1 + 2 + 2 fixtures
        assert_eq!(commands.len(), 8);
        let entities: Vec<&str> = commands.iter().map(|c| c.entity_id.as_str()).collect();
        assert!(entities.contains(&"light.kitchen"));
        assert!(entities.contains(&"light.table_downlight_colour"));
    }

    #[test]
    fn commands_carry_zone_transitions() {
        let config = config_with_fixtures();
        let plan = ScenePlan::evaluate(&config, Position::clamped(90.0), Severity::NEUTRAL);
        let commands = plan.commands(&config);
        let kitchen = commands
            .iter()
            .find(|c| c.entity_id == "light.kitchen")
            .unwrap();
        assert_eq!(kitchen.transition, Transition::FAST);
        let uplight = commands
            .iter()
            .find(|c| c.entity_id == "light.table_uplight_colour")
            .unwrap();
        assert_eq!(uplight.transition, Transition::SLOW);
    }

    #[test]
    fn standard_rgb_is_dimmed_ambient() {
        let config = config_with_fixtures();
        let plan = ScenePlan::evaluate(&config, Position::clamped(30.0), Severity::NEUTRAL);
        let commands = plan.commands(&config);
        let stool = commands
            .iter()
            .find(|c| c.entity_id == "light.foot_stool")
            .unwrap();
        assert_eq!(stool.color, ColorSpec::Rgb(plan.zones[0].ambient));
        assert_eq!(
            stool.brightness,
            plan.zones[0].envelope.scaled(config.zones[0].rgb_dim)
        );
    }

    #[test]
    fn feature_downlight_is_dimmed() {
        let config = config_with_fixtures();
        let plan = ScenePlan::evaluate(&config, Position::clamped(95.0), Severity::NEUTRAL);
        let commands = plan.commands(&config);
        let uplight = commands
            .iter()
            .find(|c| c.entity_id == "light.table_uplight_colour")
            .unwrap();
        let downlight = commands
            .iter()
            .find(|c| c.entity_id == "light.table_downlight_colour")
            .unwrap();
        assert_eq!(uplight.brightness, plan.zones[2].envelope);
        assert_eq!(
            downlight.brightness,
            plan.zones[2].envelope.scaled(config.sunset.downlight_dim)
        );
        assert_ne!(uplight.color, downlight.color);
    }

    #[test]
    fn far_position_high_severity_hits_floor() {
        let config = SceneConfig::three_zone();
        let plan = ScenePlan::evaluate(&config, Position::clamped(0.0), Severity::clamped(2.0));
        // Atrium (center 85) is far outside its support at position 0
        assert_eq!(plan.zones[2].envelope.value(), 2);
    }

    #[test]
    fn status_line_lists_every_zone() {
        let config = SceneConfig::three_zone();
        let plan = ScenePlan::evaluate(&config, Position::clamped(95.0), Severity::clamped(1.5));
        let line = plan.status_line();
        assert!(line.starts_with("pos=95 sev=1.5:"));
        assert!(line.contains("lounge"));
        assert!(line.contains("kitchen"));
        assert!(line.contains("atrium"));
        assert!(line.contains('K'));
        // Sunset colors appear for the feature zone
        assert!(line.contains('#'));
    }
}
