// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Solarc` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, scene configuration, and dispatch transport errors.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when evaluating
/// a scene and dispatching it to fixtures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The scene configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred while dispatching to a fixture or the status store.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A brightness value is outside the valid range (0-100).
    #[error("brightness value {0} is out of range [0, 100]")]
    InvalidBrightness(u8),

    /// A transition duration is negative or not finite.
    #[error("invalid transition duration: {0}")]
    InvalidTransition(f64),

    /// A value is NaN or infinite where a finite number is required.
    #[error("value is not a finite number")]
    NotFinite,

    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// Errors related to scene configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The scene has no zones.
    #[error("scene has no zones")]
    NoZones,

    /// A zone has a non-positive base width.
    #[error("zone {zone} has non-positive base width {width}")]
    NonPositiveWidth {
        /// Name of the offending zone.
        zone: String,
        /// The configured base width.
        width: f64,
    },

    /// A zone center lies outside the position domain.
    #[error("zone {zone} has center {center} outside [0, 100]")]
    CenterOutOfDomain {
        /// Name of the offending zone.
        zone: String,
        /// The configured center.
        center: f64,
    },

    /// The kelvin range is inverted.
    #[error("kelvin range minimum {min} exceeds maximum {max}")]
    InvertedKelvinRange {
        /// Configured minimum kelvin.
        min: u16,
        /// Configured maximum kelvin.
        max: u16,
    },

    /// The sunset window start lies outside the position domain.
    #[error("sunset start {0} is outside [0, 100)")]
    InvalidSunsetStart(f64),

    /// The warm-down start lies outside the position domain.
    #[error("warm-down start {0} is outside [0, 100)")]
    InvalidWarmdownStart(f64),

    /// More than one zone is marked as the feature zone.
    #[error("scene has {0} feature zones, at most one is allowed")]
    MultipleFeatureZones(usize),
}

/// Errors related to dispatch transports (HTTP/MQTT).
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// MQTT publish or connection failed.
    #[cfg(feature = "mqtt")]
    #[error("MQTT error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    /// Invalid URL or broker address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
