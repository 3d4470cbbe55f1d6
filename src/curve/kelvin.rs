// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunable-white color-temperature curve.
//!
//! Models the white-light arc of a day: warm at dawn, coolest at the midday
//! peak, warm again towards dusk, with an extra warm-down ramping in over the
//! final stretch of the sweep. The curve is piecewise linear and continuous
//! at both breakpoints; output is clamped into the device kelvin range.

use crate::config::KelvinCurve;
use crate::curve::lerp;
use crate::types::{Kelvin, Position};

/// Midpoint of the sweep, where the cool peak sits.
const MIDDAY: f64 = 50.0;

/// Color temperature for the given position.
///
/// # Examples
///
/// ```
/// use solarc_lib::config::KelvinCurve;
/// use solarc_lib::curve::color_temperature;
/// use solarc_lib::types::Position;
///
/// let curve = KelvinCurve::default();
/// let midday = color_temperature(Position::clamped(50.0), &curve);
/// assert_eq!(midday, curve.cool);
/// ```
#[must_use]
pub fn color_temperature(position: Position, curve: &KelvinCurve) -> Kelvin {
    let p = position.value();
    let warm = f64::from(curve.warm.value());
    let cool = f64::from(curve.cool.value());

    let mut kelvin = if p <= MIDDAY {
        lerp(warm, cool, p / MIDDAY)
    } else {
        lerp(cool, warm, (p - MIDDAY) / (100.0 - MIDDAY))
    };

    // Extra sunset warm-down over the final stretch
    if p > curve.warmdown_start && curve.warmdown_start < 100.0 {
        let t = (p - curve.warmdown_start) / (100.0 - curve.warmdown_start);
        kelvin -= lerp(0.0, f64::from(curve.warmdown_max_offset), t);
    }

    curve.range.clamp(Kelvin::from_f64(kelvin))
}
