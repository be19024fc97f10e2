// ABOUTME: Unit tests for the daily weight target calculator
// ABOUTME: Validates curve evaluation, SPAR goals, and loud configuration failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use makeweight::errors::EngineError;
use makeweight::models::{Profile, Protocol};
use makeweight_engine::config::EngineConfig;
use makeweight_engine::curve::ProtocolCatalog;
use makeweight_engine::target_weight;

fn profile(protocol: Protocol, days_out: i64) -> Profile {
    let now = Utc.with_ymd_and_hms(2025, 11, 1, 8, 0, 0).unwrap();
    Profile {
        current_weight_lbs: 158.0,
        target_weight_class_lbs: 150.0,
        weigh_in_at: Some(now + Duration::days(days_out)),
        protocol,
        simulated_date: None,
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 1, 8, 0, 0).unwrap()
}

#[test]
fn test_target_is_class_limit_on_weigh_in_day() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let target = target_weight(&profile(Protocol::OptimalCut, 0), now(), &catalog, &config)
        .expect("valid profile");
    assert!((target - 150.0).abs() < 1e-9);
}

#[test]
fn test_target_is_walk_around_at_cut_start() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    // 14 days out on the optimal curve: full gap still carried.
    let target = target_weight(&profile(Protocol::OptimalCut, 14), now(), &catalog, &config)
        .expect("valid profile");
    let walk_around = 150.0 * config.adjustment.walk_around_multiplier;
    assert!((target - walk_around).abs() < 1e-9);
}

#[test]
fn test_target_descends_monotonically_toward_the_event() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let mut last = f64::MAX;
    for days_out in (0..=14).rev() {
        let target = target_weight(
            &profile(Protocol::OptimalCut, days_out),
            now(),
            &catalog,
            &config,
        )
        .expect("valid profile");
        assert!(target <= last, "target rose approaching the weigh-in");
        assert!(target >= 150.0);
        last = target;
    }
}

#[test]
fn test_spar_target_is_the_class_limit() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let mut p = profile(Protocol::SparGeneral, 10);
    p.weigh_in_at = None;
    let target = target_weight(&p, now(), &catalog, &config).expect("spar needs no date");
    assert!((target - 150.0).abs() < 1e-9);
}

#[test]
fn test_invalid_weight_class_fails_loudly() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let mut p = profile(Protocol::OptimalCut, 5);
    p.target_weight_class_lbs = 0.0;
    let err = target_weight(&p, now(), &catalog, &config).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTargetWeightClass { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_missing_weigh_in_date_fails_loudly() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let mut p = profile(Protocol::RapidCut, 5);
    p.weigh_in_at = None;
    let err = target_weight(&p, now(), &catalog, &config).unwrap_err();
    assert!(matches!(err, EngineError::MissingWeighInDate { .. }));
}

#[test]
fn test_missing_curve_fails_loudly_never_zero() {
    let catalog = ProtocolCatalog::empty();
    let config = EngineConfig::default();
    let err = target_weight(&profile(Protocol::RapidCut, 5), now(), &catalog, &config)
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingCutCurve { .. }));
}

#[test]
fn test_simulated_date_overrides_now() {
    let catalog = ProtocolCatalog::default();
    let config = EngineConfig::default();
    let mut p = profile(Protocol::OptimalCut, 14);
    // Simulate the day before the weigh-in: the target collapses to the
    // final-day value even though "now" is two weeks out.
    p.simulated_date = Some(p.weigh_in_at.unwrap().date_naive() - Duration::days(1));
    let target = target_weight(&p, now(), &catalog, &config).expect("valid profile");
    let fourteen_days_out =
        target_weight(&profile(Protocol::OptimalCut, 14), now(), &catalog, &config).unwrap();
    assert!(target < fourteen_days_out);
}
