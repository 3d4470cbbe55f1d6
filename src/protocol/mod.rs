// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dispatch transports for fixture commands and status writes.
//!
//! The sweep runner is generic over two collaborators: a [`FixtureService`]
//! that applies turn-on commands, and a [`StateStore`] that receives the
//! status line. Both calls are fire-and-forget from the library's
//! perspective; no response is consumed, and a transport failure simply
//! propagates to the caller.
//!
//! # Transports
//!
//! - [`HttpDispatcher`]: REST dispatch to a light-control service (feature
//!   `http`)
//! - [`MqttDispatcher`]: publish-only MQTT dispatch (feature `mqtt`)
//! - [`RecordingService`] / [`MemoryStateStore`]: in-memory implementations
//!   for tests and dry-runs

#[cfg(feature = "http")]
mod http;
mod memory;
#[cfg(feature = "mqtt")]
mod mqtt;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpDispatcher};
pub use memory::{MemoryStateStore, RecordingService};
#[cfg(feature = "mqtt")]
pub use mqtt::{MqttConfig, MqttDispatcher};

use crate::command::TurnOnCommand;
use crate::error::ProtocolError;

/// A light-control service that can apply turn-on commands to fixtures.
#[allow(async_fn_in_trait)]
pub trait FixtureService {
    /// Applies one turn-on command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command could not be delivered.
    async fn turn_on(&self, command: &TurnOnCommand) -> Result<(), ProtocolError>;
}

/// A key-value state store receiving the status line.
#[allow(async_fn_in_trait)]
pub trait StateStore {
    /// Sets the named field to the given string value, overwriting any
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the write could not be delivered.
    async fn set_state(&self, entity_id: &str, value: &str) -> Result<(), ProtocolError>;
}
