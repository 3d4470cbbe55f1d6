// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constrained value types used throughout the library.
//!
//! Every scalar that crosses the library boundary is wrapped in a type that
//! enforces its documented domain: sun position, severity, brightness
//! percentages, kelvin temperatures, RGB channels, and transition durations.

mod brightness;
mod kelvin;
mod position;
mod rgb_color;
mod transition;

pub use brightness::Brightness;
pub use kelvin::{Kelvin, KelvinRange};
pub use position::{Position, Severity};
pub use rgb_color::RgbColor;
pub use transition::Transition;
