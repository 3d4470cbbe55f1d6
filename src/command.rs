// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixture turn-on commands.
//!
//! A [`TurnOnCommand`] is the complete instruction for one fixture: brightness
//! percentage, a color spec matching the fixture's channel kind, and the
//! transition duration. Commands are produced fresh on every sweep and carry
//! no identity beyond the single dispatch call.

use serde_json::{Value, json};

use crate::types::{Brightness, Kelvin, RgbColor, Transition};

/// Color specification for a turn-on command.
///
/// Tunable-white fixtures take a kelvin temperature; RGB fixtures take an
/// explicit channel triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpec {
    /// Color temperature for a tunable-white fixture.
    Temperature(Kelvin),
    /// Explicit channels for an RGB fixture.
    Rgb(RgbColor),
}

/// A "turn on with these parameters" command for one fixture.
///
/// # Examples
///
/// ```
/// use solarc_lib::command::{ColorSpec, TurnOnCommand};
/// use solarc_lib::types::{Brightness, Kelvin, Transition};
///
/// let cmd = TurnOnCommand::new(
///     "light.kitchen",
///     Brightness::clamped(80),
///     ColorSpec::Temperature(Kelvin::new(4000)),
///     Transition::FAST,
/// );
/// assert_eq!(cmd.payload()["color_temp_kelvin"], 4000);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TurnOnCommand {
    /// Target fixture entity id.
    pub entity_id: String,
    /// Brightness percentage.
    pub brightness: Brightness,
    /// Color spec matching the fixture's channel kind.
    pub color: ColorSpec,
    /// Transition duration.
    pub transition: Transition,
}

impl TurnOnCommand {
    /// Service domain the command addresses.
    pub const DOMAIN: &'static str = "light";

    /// Service name the command addresses.
    pub const SERVICE: &'static str = "turn_on";

    /// Creates a new turn-on command.
    #[must_use]
    pub fn new(
        entity_id: impl Into<String>,
        brightness: Brightness,
        color: ColorSpec,
        transition: Transition,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            brightness,
            color,
            transition,
        }
    }

    /// Returns the JSON service payload for this command.
    ///
    /// The payload carries `entity_id`, `brightness_pct`, either
    /// `color_temp_kelvin` or `rgb_color`, and `transition` in seconds.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut payload = json!({
            "entity_id": self.entity_id,
            "brightness_pct": self.brightness.value(),
            "transition": self.transition.as_secs_f64(),
        });
        match self.color {
            ColorSpec::Temperature(kelvin) => {
                payload["color_temp_kelvin"] = json!(kelvin.value());
            }
            ColorSpec::Rgb(color) => {
                let (r, g, b) = color.channels();
                payload["rgb_color"] = json!([r, g, b]);
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tunable_white() {
        let cmd = TurnOnCommand::new(
            "light.kitchen",
            Brightness::clamped(80),
            ColorSpec::Temperature(Kelvin::new(4000)),
            Transition::FAST,
        );
        let payload = cmd.payload();
        assert_eq!(payload["entity_id"], "light.kitchen");
        assert_eq!(payload["brightness_pct"], 80);
        assert_eq!(payload["color_temp_kelvin"], 4000);
        assert!((payload["transition"].as_f64().unwrap() - 6.0).abs() < f64::EPSILON);
        assert!(payload.get("rgb_color").is_none());
    }

    #[test]
    fn payload_rgb() {
        let cmd = TurnOnCommand::new(
            "light.table_uplight",
            Brightness::clamped(100),
            ColorSpec::Rgb(RgbColor::new(255, 120, 40)),
            Transition::SLOW,
        );
        let payload = cmd.payload();
        assert_eq!(payload["rgb_color"], json!([255, 120, 40]));
        assert!(payload.get("color_temp_kelvin").is_none());
    }

    #[test]
    fn serde_round_trip() {
        let cmd = TurnOnCommand::new(
            "light.kitchen",
            Brightness::clamped(55),
            ColorSpec::Rgb(RgbColor::new(255, 235, 200)),
            Transition::NONE,
        );
        let json = serde_json::to_string(&cmd).unwrap();
        let back: TurnOnCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
