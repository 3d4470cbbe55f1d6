// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bell-shaped brightness envelopes.
//!
//! Each zone has a single-peaked envelope over the position axis: 1.0 at the
//! zone center, falling to 0.0 at the edge of the support window
//! `|x - center| >= width`. The effective width is the configured base width
//! scaled by severity, so higher severity widens and flattens every zone.
//! After scaling to a percentage, the severity floor is applied so a zone is
//! never darker than the configured minimum.

use crate::config::{EnvelopeShape, SeverityFloor, ZoneConfig};
use crate::types::{Brightness, Position, Severity};

/// Envelope value in [0, 1] for a position relative to a zone peak.
///
/// `width` is the already severity-scaled half-width of the support window.
/// Outside the window the value is exactly 0.
///
/// # Examples
///
/// ```
/// use solarc_lib::config::EnvelopeShape;
/// use solarc_lib::curve::bell;
/// use solarc_lib::types::Severity;
///
/// let shape = EnvelopeShape::PowerLaw { power: 3.0 };
/// let peak = bell(30.0, 30.0, 25.0, shape, Severity::NEUTRAL);
/// assert!((peak - 1.0).abs() < f64::EPSILON);
///
/// let edge = bell(55.0, 30.0, 25.0, shape, Severity::NEUTRAL);
/// assert!(edge.abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn bell(x: f64, center: f64, width: f64, shape: EnvelopeShape, severity: Severity) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    let dx = ((x - center) / width).abs();
    if dx >= 1.0 {
        return 0.0;
    }
    let value = match shape {
        EnvelopeShape::PowerLaw { power } => 1.0 - dx.powf(power.max(1.0)),
        EnvelopeShape::Parabolic {
            flatten_by_severity,
        } => {
            let mut squared = dx * dx;
            if flatten_by_severity {
                squared /= severity.value();
            }
            1.0 - squared
        }
    };
    value.clamp(0.0, 1.0)
}

/// Tunable-white brightness for a zone at the given position and severity.
///
/// The envelope is scaled by the zone's maximum brightness, clamped into
/// [0, 100], and raised to the severity floor when it falls below it.
#[must_use]
pub fn zone_brightness(
    position: Position,
    zone: &ZoneConfig,
    severity: Severity,
    floor: &SeverityFloor,
) -> Brightness {
    let envelope = bell(
        position.value(),
        zone.center,
        zone.width_at(severity),
        zone.shape,
        severity,
    );
    let pct = Brightness::from_percent(envelope * f64::from(zone.max_brightness.value()));
    pct.max(floor.at(severity))
}
