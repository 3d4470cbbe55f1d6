// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve functions mapping sun position to per-zone visual parameters.
//!
//! This is the heart of the library: bell-shaped brightness envelopes with
//! severity scaling and the severity floor, the piecewise-linear
//! color-temperature curve, and the ambient/cinematic RGB gradients. All
//! functions are pure; they take the relevant slice of
//! [`SceneConfig`](crate::config::SceneConfig) by reference and never touch
//! shared state.

mod envelope;
mod kelvin;
mod rgb;

pub use envelope::{bell, zone_brightness};
pub use kelvin::color_temperature;
pub use rgb::{ambient_rgb, sunset_rgb, sunset_tw_scale};

/// Linear interpolation between two scalars.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
