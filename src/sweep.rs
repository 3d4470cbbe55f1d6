// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The sweep runner: evaluate, dispatch, report.
//!
//! [`run_sweep`] is the single entry point tying the pure evaluation to the
//! transports. Each invocation is a stateless single pass: resolve inputs,
//! evaluate the plan, issue one command per fixture in configuration order,
//! write the status line. Dispatch failures propagate; there is no retry and
//! no partial-failure aggregation.

use crate::config::SceneConfig;
use crate::error::Result;
use crate::protocol::{FixtureService, StateStore};
use crate::scene::ScenePlan;
use crate::types::{Position, Severity};

/// Raw host inputs for one sweep invocation.
///
/// Missing values fall back to the documented defaults (position 0.0,
/// severity 1.0); out-of-range values are clamped, not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SweepInput {
    /// Sun position, 0-100.
    pub position: Option<f64>,
    /// Severity, 0.5-2.0.
    pub severity: Option<f64>,
}

impl SweepInput {
    /// Creates an input with both values present.
    #[must_use]
    pub const fn new(position: f64, severity: f64) -> Self {
        Self {
            position: Some(position),
            severity: Some(severity),
        }
    }

    /// Resolves the raw inputs into their clamped, defaulted forms.
    ///
    /// Clamped values are logged at warn level so hand-tuning mistakes in
    /// the host are visible.
    #[must_use]
    pub fn resolve(&self) -> (Position, Severity) {
        let position = Position::or_default(self.position);
        if let Some(raw) = self.position
            && (raw - position.value()).abs() > f64::EPSILON
        {
            tracing::warn!(raw, clamped = position.value(), "position input clamped");
        }

        let severity = Severity::or_default(self.severity);
        if let Some(raw) = self.severity
            && (raw - severity.value()).abs() > f64::EPSILON
        {
            tracing::warn!(raw, clamped = severity.value(), "severity input clamped");
        }

        (position, severity)
    }
}

/// Runs one complete sweep: evaluate the scene, dispatch every fixture
/// command, write the status line.
///
/// Returns the evaluated plan so the host can inspect what was applied.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or if the fixture
/// service or state store reports a transport failure. Commands are issued
/// in order until the first failure.
///
/// # Examples
///
/// ```
/// use solarc_lib::config::SceneConfig;
/// use solarc_lib::protocol::{MemoryStateStore, RecordingService};
/// use solarc_lib::sweep::{SweepInput, run_sweep};
///
/// # async fn example() -> solarc_lib::Result<()> {
/// let mut config = SceneConfig::three_zone();
/// config.zones[1].tw_fixtures.push("light.kitchen".to_string());
///
/// let service = RecordingService::new();
/// let store = MemoryStateStore::new();
///
/// let plan = run_sweep(&config, SweepInput::new(55.0, 1.0), &service, &store).await?;
/// assert_eq!(service.commands().len(), 1);
/// assert_eq!(plan.zones[1].envelope.value(), 100);
/// # Ok(())
/// # }
/// ```
pub async fn run_sweep<F, S>(
    config: &SceneConfig,
    input: SweepInput,
    fixtures: &F,
    status: &S,
) -> Result<ScenePlan>
where
    F: FixtureService,
    S: StateStore,
{
    config.validate()?;

    let (position, severity) = input.resolve();
    let plan = ScenePlan::evaluate(config, position, severity);
    let commands = plan.commands(config);

    tracing::info!(
        position = position.value(),
        severity = severity.value(),
        commands = commands.len(),
        "dispatching sweep"
    );

    for command in &commands {
        tracing::debug!(
            entity = %command.entity_id,
            brightness = command.brightness.value(),
            transition = command.transition.as_secs_f64(),
            "turn_on"
        );
        fixtures.turn_on(command).await?;
    }

    status
        .set_state(&config.status_entity, &plan.status_line())
        .await?;

    Ok(plan)
}
