// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Solarc` Lib - Sun-position lighting curves for smart-light fixtures.
//!
//! This library maps a scalar sun position (0-100, dawn to dusk) and a
//! severity tuning scalar (0.5-2.0) to per-zone brightness, color
//! temperature, and RGB color, then dispatches one turn-on command per
//! fixture and writes a debug line to a status field.
//!
//! # How It Works
//!
//! - Every zone has a bell-shaped brightness **envelope** peaking at its
//!   configured center; severity widens the envelopes and drives a minimum
//!   brightness floor.
//! - Tunable-white fixtures follow a piecewise-linear **color-temperature
//!   curve**: warm at dawn, cool at midday, warm again at dusk with an
//!   extra warm-down over the final stretch.
//! - RGB fixtures take an **ambient tint** derived from the kelvin value;
//!   the feature zone switches to the **cinematic sunset** gradients inside
//!   the final portion of the sweep.
//!
//! Evaluation is pure and stateless; dispatch is fire-and-forget through a
//! pluggable transport.
//!
//! # Quick Start
//!
//! ## Dry-Run a Scene
//!
//! ```
//! use solarc_lib::config::SceneConfig;
//! use solarc_lib::scene::ScenePlan;
//! use solarc_lib::types::{Position, Severity};
//!
//! let config = SceneConfig::three_zone();
//! let plan = ScenePlan::evaluate(&config, Position::clamped(30.0), Severity::NEUTRAL);
//!
//! // The lounge peaks at position 30
//! assert_eq!(plan.zones[0].envelope.value(), 85);
//! println!("{}", plan.status_line());
//! ```
//!
//! ## Dispatch over HTTP
//!
//! ```no_run
//! use solarc_lib::config::SceneConfig;
//! use solarc_lib::protocol::{HttpConfig, HttpDispatcher};
//! use solarc_lib::sweep::{SweepInput, run_sweep};
//!
//! #[tokio::main]
//! async fn main() -> solarc_lib::Result<()> {
//!     let mut config = SceneConfig::three_zone();
//!     config.zones[1].tw_fixtures.push("light.kitchen".to_string());
//!
//!     let dispatcher = HttpDispatcher::new(
//!         HttpConfig::new("192.168.1.10").with_token("long-lived-token"),
//!     )?;
//!
//!     run_sweep(&config, SweepInput::new(55.0, 1.0), &dispatcher, &dispatcher).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Dispatch over MQTT
//!
//! ```no_run
//! use solarc_lib::config::SceneConfig;
//! use solarc_lib::protocol::{MqttConfig, MqttDispatcher};
//! use solarc_lib::sweep::{SweepInput, run_sweep};
//!
//! #[tokio::main]
//! async fn main() -> solarc_lib::Result<()> {
//!     let config = SceneConfig::three_zone();
//!     let dispatcher = MqttDispatcher::connect(
//!         MqttConfig::new("192.168.1.50").with_topic_prefix("lights"),
//!     )?;
//!
//!     run_sweep(&config, SweepInput::new(95.0, 1.2), &dispatcher, &dispatcher).await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod curve;
pub mod error;
pub mod protocol;
pub mod scene;
pub mod sweep;
pub mod types;

pub use command::{ColorSpec, TurnOnCommand};
pub use config::{SceneConfig, ZoneConfig};
pub use error::{ConfigError, Error, ProtocolError, Result, ValueError};
pub use protocol::{FixtureService, StateStore};
pub use scene::{ScenePlan, ZoneLevels};
pub use sweep::{SweepInput, run_sweep};
pub use types::{Brightness, Kelvin, KelvinRange, Position, RgbColor, Severity, Transition};
