// ABOUTME: Unit tests for engine configuration environment overrides
// ABOUTME: Validates defaults, per-field env parsing, and fallback on garbage values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;

use makeweight_engine::config::{AdjustmentConfig, EngineConfig, SafetyConfig, TrendConfig};

#[test]
#[serial]
fn test_defaults_match_the_policy_constants() {
    let config = SafetyConfig::default();
    assert!((config.danger_delta_24h_lbs - 3.0).abs() < 1e-9);
    assert!((config.warning_delta_48h_lbs - 4.0).abs() < 1e-9);
    assert_eq!(config.critical_days_threshold, 2);
    assert!((config.max_safe_total_cut_percent - 5.0).abs() < 1e-9);

    let adjustment = AdjustmentConfig::default();
    assert!((adjustment.walk_around_multiplier - 1.07).abs() < 1e-9);
    assert!((adjustment.calories_per_lb_over - 150.0).abs() < 1e-9);
    assert_eq!(adjustment.max_daily_deficit, 750);
    assert_eq!(adjustment.post_event_surplus, 500);
}

#[test]
#[serial]
fn test_safety_thresholds_override_from_env() {
    env::set_var("MAKEWEIGHT_SAFETY_DANGER_DELTA_24H_LBS", "2.5");
    let config = SafetyConfig::from_env();
    env::remove_var("MAKEWEIGHT_SAFETY_DANGER_DELTA_24H_LBS");

    assert!((config.danger_delta_24h_lbs - 2.5).abs() < 1e-9);
    // Untouched fields keep their defaults.
    assert!((config.warning_delta_48h_lbs - 4.0).abs() < 1e-9);
}

#[test]
#[serial]
fn test_adjustment_policy_overrides_from_env() {
    env::set_var("MAKEWEIGHT_ADJUST_WALK_AROUND_MULTIPLIER", "1.05");
    env::set_var("MAKEWEIGHT_ADJUST_MAX_DAILY_DEFICIT", "600");
    let config = AdjustmentConfig::from_env();
    env::remove_var("MAKEWEIGHT_ADJUST_WALK_AROUND_MULTIPLIER");
    env::remove_var("MAKEWEIGHT_ADJUST_MAX_DAILY_DEFICIT");

    assert!((config.walk_around_multiplier - 1.05).abs() < 1e-9);
    assert_eq!(config.max_daily_deficit, 600);
    assert_eq!(config.min_scaled_deficit, 250);
}

#[test]
#[serial]
fn test_trend_policy_overrides_from_env() {
    env::set_var("MAKEWEIGHT_TREND_MIN_PROJECTION_POINTS", "5");
    let config = TrendConfig::from_env();
    env::remove_var("MAKEWEIGHT_TREND_MIN_PROJECTION_POINTS");

    assert_eq!(config.min_projection_points, 5);
    assert!((config.switch_margin_lbs - 1.5).abs() < 1e-9);
}

#[test]
#[serial]
fn test_garbage_env_values_fall_back_to_defaults() {
    env::set_var("MAKEWEIGHT_SAFETY_DANGER_DELTA_24H_LBS", "not-a-number");
    let config = SafetyConfig::from_env();
    env::remove_var("MAKEWEIGHT_SAFETY_DANGER_DELTA_24H_LBS");

    assert!((config.danger_delta_24h_lbs - 3.0).abs() < 1e-9);
}

#[test]
#[serial]
fn test_aggregate_from_env_loads_every_section() {
    env::set_var("MAKEWEIGHT_HYDRATION_CUT_ML", "1000");
    let config = EngineConfig::from_env();
    env::remove_var("MAKEWEIGHT_HYDRATION_CUT_ML");

    assert_eq!(config.hydration.cut_water_ml, 1000);
    assert!((config.safety.danger_delta_24h_lbs - 3.0).abs() < 1e-9);
    assert!((config.adjustment.walk_around_multiplier - 1.07).abs() < 1e-9);
}

#[test]
#[serial]
fn test_config_serializes_for_inspection() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("danger_delta_24h_lbs"));
    assert!(json.contains("walk_around_multiplier"));
}
