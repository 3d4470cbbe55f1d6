// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end sweep tests over the in-memory transports.

use solarc_lib::command::{ColorSpec, TurnOnCommand};
use solarc_lib::config::SceneConfig;
use solarc_lib::protocol::{MemoryStateStore, RecordingService};
use solarc_lib::sweep::{SweepInput, run_sweep};
use solarc_lib::types::RgbColor;

fn full_config() -> SceneConfig {
    let mut config = SceneConfig::three_zone();
    config.zones[0].tw_fixtures = vec![
        "light.slope_spot".to_string(),
        "light.reading_light".to_string(),
    ];
    config.zones[0].rgb_fixtures = vec!["light.foot_stool".to_string()];
    config.zones[1].tw_fixtures = vec!["light.kitchen".to_string()];
    config.zones[2].tw_fixtures = vec![
        "light.table_uplight_white".to_string(),
        "light.table_downlight_white".to_string(),
    ];
    config.zones[2].rgb_fixtures = vec![
        "light.table_uplight_colour".to_string(),
        "light.table_downlight_colour".to_string(),
    ];
    config
}

fn find<'a>(commands: &'a [TurnOnCommand], entity: &str) -> &'a TurnOnCommand {
    commands
        .iter()
        .find(|c| c.entity_id == entity)
        .unwrap_or_else(|| panic!("no command for {entity}"))
}

#[tokio::test]
async fn morning_sweep_lights_the_lounge() {
    let config = full_config();
    let service = RecordingService::new();
    let store = MemoryStateStore::new();

    run_sweep(&config, SweepInput::new(30.0, 1.0), &service, &store)
        .await
        .unwrap();

    let commands = service.commands();
    assert_eq!(commands.len(), 8);

    // Lounge sits at its envelope peak
    let spot = find(&commands, "light.slope_spot");
    assert_eq!(spot.brightness.value(), 85);
    assert_eq!(spot.color, ColorSpec::Temperature(solarc_lib::types::Kelvin::new(4240)));

    // Lounge RGB takes the neutral ambient tint, dimmed by the zone factor
    let stool = find(&commands, "light.foot_stool");
    assert_eq!(stool.color, ColorSpec::Rgb(RgbColor::new(255, 235, 200)));
    assert_eq!(stool.brightness.value(), 81);
}

#[tokio::test]
async fn evening_sweep_paints_the_sunset() {
    let config = full_config();
    let service = RecordingService::new();
    let store = MemoryStateStore::new();

    run_sweep(&config, SweepInput::new(95.0, 1.0), &service, &store)
        .await
        .unwrap();

    let commands = service.commands();
    let uplight = find(&commands, "light.table_uplight_colour");
    let downlight = find(&commands, "light.table_downlight_colour");
    assert_ne!(uplight.color, downlight.color);

    // Feature tunable-white brightness carries the sunset scale
    let white = find(&commands, "light.table_uplight_white");
    assert_eq!(white.brightness.value(), 88);

    // Standard zones keep the plain ambient tint
    let stool = find(&commands, "light.foot_stool");
    assert_eq!(stool.color, ColorSpec::Rgb(RgbColor::new(255, 200, 150)));
}

#[tokio::test]
async fn missing_inputs_fall_back_to_dawn() {
    let config = full_config();
    let service = RecordingService::new();
    let store = MemoryStateStore::new();

    let plan = run_sweep(&config, SweepInput::default(), &service, &store)
        .await
        .unwrap();

    assert!((plan.position.value() - 0.0).abs() < f64::EPSILON);
    // Every zone rests on the neutral severity floor
    for levels in &plan.zones {
        assert_eq!(levels.envelope.value(), 15);
    }
}

#[tokio::test]
async fn status_line_lands_in_the_store() {
    let config = full_config();
    let service = RecordingService::new();
    let store = MemoryStateStore::new();

    run_sweep(&config, SweepInput::new(95.0, 1.5), &service, &store)
        .await
        .unwrap();

    let status = store.get(&config.status_entity).expect("status written");
    assert!(status.starts_with("pos=95 sev=1.5:"));
    assert!(status.contains("lounge"));
    assert!(status.contains("atrium"));
}

#[tokio::test]
async fn levels_stay_in_range_across_the_grid() {
    let config = full_config();
    let service = RecordingService::new();
    let store = MemoryStateStore::new();

    for pos_step in 0..=20 {
        for sev_step in 0..=3 {
            let input = SweepInput::new(
                f64::from(pos_step) * 5.0,
                0.5 + f64::from(sev_step) * 0.5,
            );
            run_sweep(&config, input, &service, &store).await.unwrap();
        }
    }

    for command in service.commands() {
        assert!(command.brightness.value() <= 100);
        if let ColorSpec::Temperature(kelvin) = command.color {
            assert!(config.kelvin.range.contains(kelvin));
        }
        assert!(command.transition.as_secs_f64() >= 0.0);
    }
}
