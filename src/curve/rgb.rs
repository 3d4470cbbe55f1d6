// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB gradient curves.
//!
//! Two independent gradients over position:
//!
//! - The ambient tint, derived from the color-temperature value via threshold
//!   buckets. Used for standard-zone RGB fixtures and as the fallback for the
//!   feature zone outside the sunset window.
//! - The cinematic sunset gradients, active only inside the final stretch of
//!   the sweep. They return `None` outside the window; callers compose the
//!   fallback explicitly with `sunset_rgb(..).unwrap_or(ambient)`.

use crate::config::{AmbientPalette, SunsetConfig, SunsetDimming, SunsetPalette};
use crate::curve::lerp;
use crate::types::{Kelvin, Position, RgbColor};

/// Ambient RGB tint for the given color temperature.
///
/// Cool-blue above the cool threshold, neutral-warm between the thresholds,
/// amber below.
#[must_use]
pub fn ambient_rgb(kelvin: Kelvin, palette: &AmbientPalette) -> RgbColor {
    if kelvin >= palette.cool_threshold {
        palette.cool
    } else if kelvin >= palette.neutral_threshold {
        palette.neutral
    } else {
        palette.warm
    }
}

/// Cinematic sunset color for the given position, or `None` outside the
/// sunset window.
///
/// Inside the window the position is normalized to `t` in (0, 1] and the
/// palette is interpolated channel by channel, `start -> mid` for the first
/// half and `mid -> end` for the second.
///
/// # Examples
///
/// ```
/// use solarc_lib::config::SunsetConfig;
/// use solarc_lib::curve::sunset_rgb;
/// use solarc_lib::types::Position;
///
/// let sunset = SunsetConfig::default();
/// assert!(sunset_rgb(Position::clamped(50.0), sunset.start, &sunset.uplight).is_none());
/// assert!(sunset_rgb(Position::clamped(95.0), sunset.start, &sunset.uplight).is_some());
/// ```
#[must_use]
pub fn sunset_rgb(position: Position, start: f64, palette: &SunsetPalette) -> Option<RgbColor> {
    let p = position.value();
    if p <= start || start >= 100.0 {
        return None;
    }
    let t = (p - start) / (100.0 - start);
    let color = if t < 0.5 {
        palette.start.lerp(palette.mid, t * 2.0)
    } else {
        palette.mid.lerp(palette.end, (t - 0.5) * 2.0)
    };
    Some(color)
}

/// Scale factor for the feature zone's tunable-white brightness.
///
/// 1.0 outside the sunset window; inside, either a flat multiplier or a
/// smooth fade towards the configured floor, per [`SunsetDimming`].
#[must_use]
pub fn sunset_tw_scale(position: Position, sunset: &SunsetConfig) -> f64 {
    let p = position.value();
    if p <= sunset.start || sunset.start >= 100.0 {
        return 1.0;
    }
    match sunset.tw_dimming {
        SunsetDimming::Scale { factor } => factor,
        SunsetDimming::Fade { floor } => {
            let t = (p - sunset.start) / (100.0 - sunset.start);
            lerp(1.0, floor, t)
        }
    }
}
