// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transports for tests and dry-runs.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::command::TurnOnCommand;
use crate::error::ProtocolError;
use crate::protocol::{FixtureService, StateStore};

/// A fixture service that records every command instead of dispatching it.
///
/// Useful for dry-running a scene and in tests.
///
/// # Examples
///
/// ```
/// use solarc_lib::protocol::RecordingService;
///
/// let service = RecordingService::new();
/// assert!(service.commands().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingService {
    commands: Mutex<Vec<TurnOnCommand>>,
}

impl RecordingService {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded commands, in dispatch order.
    #[must_use]
    pub fn commands(&self) -> Vec<TurnOnCommand> {
        self.commands.lock().clone()
    }

    /// Clears the recorded commands.
    pub fn clear(&self) {
        self.commands.lock().clear();
    }
}

impl FixtureService for RecordingService {
    async fn turn_on(&self, command: &TurnOnCommand) -> Result<(), ProtocolError> {
        self.commands.lock().push(command.clone());
        Ok(())
    }
}

/// A state store backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    states: RwLock<HashMap<String, String>>,
}

impl MemoryStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field, if set.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<String> {
        self.states.read().get(entity_id).cloned()
    }
}

impl StateStore for MemoryStateStore {
    async fn set_state(&self, entity_id: &str, value: &str) -> Result<(), ProtocolError> {
        self.states
            .write()
            .insert(entity_id.to_string(), value.to_string());
        Ok(())
    }
}
