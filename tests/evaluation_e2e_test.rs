// ABOUTME: End-to-end tests over the full engine evaluation facade
// ABOUTME: Validates spec scenarios, completion checks, and blocking configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use makeweight::errors::EngineError;
use makeweight::models::{Profile, Protocol, WeightLog, WeightLogType};
use makeweight::state::StateSnapshot;
use makeweight_engine::phase::{Phase, PhaseView};
use makeweight_engine::safety::SafetyLevel;
use makeweight_engine::{Goal, Intensity};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 1, 8, 0, 0).unwrap()
}

fn snapshot(current: f64, class: f64, days_out: i64, protocol: Protocol) -> StateSnapshot {
    StateSnapshot::new(Profile {
        current_weight_lbs: current,
        target_weight_class_lbs: class,
        weigh_in_at: Some(now() + Duration::days(days_out)),
        protocol,
        simulated_date: None,
    })
}

#[test]
fn test_final_day_overweight_is_danger() {
    // 4 lbs over the class with one day left: over the 24h danger delta.
    let snapshot = snapshot(154.0, 150.0, 1, Protocol::RapidCut);
    let eval = snapshot.evaluate(now()).unwrap();
    assert_eq!(eval.phase, PhaseView::WeightCut(Phase::Cut));
    assert_eq!(eval.safety.level, SafetyLevel::Danger);
}

#[test]
fn test_load_phase_under_walk_around_runs_lean_deficit() {
    let snapshot = snapshot(151.5, 150.0, 4, Protocol::OptimalCut);
    let eval = snapshot.evaluate(now()).unwrap();
    assert_eq!(eval.phase, PhaseView::WeightCut(Phase::Load));
    let adjustment = eval.adjustment.expect("weight-cut protocols adjust");
    assert_eq!(adjustment.calorie_adjustment, -250);
    assert_eq!(adjustment.goal, Goal::Lose);
    assert_eq!(adjustment.intensity, Intensity::Lean);
}

#[test]
fn test_latest_weight_log_overrides_the_profile_weight() {
    let mut snapshot = snapshot(158.0, 150.0, 1, Protocol::RapidCut);
    snapshot.append_log(
        WeightLog::new(now() - Duration::hours(1), WeightLogType::Morning, 151.0).unwrap(),
    );
    let eval = snapshot.evaluate(now()).unwrap();
    assert!((eval.current_weight_lbs - 151.0).abs() < 1e-9);
    // 1 lb over on the final day is caution, not the danger the stale
    // profile weight would imply.
    assert_eq!(eval.safety.level, SafetyLevel::Caution);
}

#[test]
fn test_spar_evaluation_has_no_cut_machinery() {
    let mut snap = snapshot(158.0, 150.0, 0, Protocol::SparGeneral);
    snap.profile.weigh_in_at = None;
    let eval = snap.evaluate(now()).unwrap();
    assert_eq!(eval.phase, PhaseView::NutritionTracking);
    assert_eq!(eval.safety.level, SafetyLevel::Safe);
    assert!(eval.adjustment.is_none());
    assert!((eval.target_weight_lbs - 150.0).abs() < 1e-9);
    assert!(eval.macro_targets.calories > 0);
}

#[test]
fn test_invalid_class_is_a_blocking_configuration_error() {
    let snapshot = snapshot(158.0, 0.0, 5, Protocol::OptimalCut);
    let err = snapshot.evaluate(now()).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err, EngineError::InvalidTargetWeightClass { .. }));
}

#[test]
fn test_missing_weigh_in_is_a_blocking_configuration_error() {
    let mut snap = snapshot(158.0, 150.0, 5, Protocol::OptimalCut);
    snap.profile.weigh_in_at = None;
    let err = snap.evaluate(now()).unwrap_err();
    assert!(matches!(err, EngineError::MissingWeighInDate { .. }));
}

#[test]
fn test_completion_requires_practice_logs_on_training_days() {
    let mut snap = snapshot(158.0, 150.0, 10, Protocol::OptimalCut);
    snap.append_log(WeightLog::new(now(), WeightLogType::Morning, 158.0).unwrap());
    let eval = snap.evaluate(now()).unwrap();
    assert!(!eval.completion.complete);
    assert!(eval.completion.missing.contains(&WeightLogType::PrePractice));
    assert!(eval.completion.missing.contains(&WeightLogType::BeforeBed));
    assert!(!eval.completion.missing.contains(&WeightLogType::Morning));
}

#[test]
fn test_rest_day_drops_practice_logs_from_completion() {
    let mut snap = snapshot(158.0, 150.0, 10, Protocol::OptimalCut);
    let today = snap.profile.today(now());
    snap.tracking_mut(today).no_practice = true;
    let eval = snap.evaluate(now()).unwrap();
    assert!(!eval.completion.required.contains(&WeightLogType::PrePractice));
    assert!(!eval.completion.required.contains(&WeightLogType::PostPractice));
    assert!(eval.completion.required.contains(&WeightLogType::Morning));
}

#[test]
fn test_weigh_in_day_requires_the_official_entry() {
    let snap = snapshot(150.0, 150.0, 0, Protocol::RapidCut);
    let eval = snap.evaluate(now()).unwrap();
    assert!(eval.completion.required.contains(&WeightLogType::WeighIn));
}

#[test]
fn test_water_target_follows_the_phase() {
    let load = snapshot(158.0, 150.0, 4, Protocol::OptimalCut)
        .evaluate(now())
        .unwrap();
    let cut = snapshot(158.0, 150.0, 1, Protocol::OptimalCut)
        .evaluate(now())
        .unwrap();
    // Water loading days run far above the final-cut taper.
    assert!(load.water_target_ml > cut.water_target_ml);
}

#[test]
fn test_evaluation_serializes_for_presentation() {
    let snap = snapshot(158.0, 150.0, 4, Protocol::OptimalCut);
    let eval = snap.evaluate(now()).unwrap();
    let json = serde_json::to_string(&eval).unwrap();
    assert!(json.contains("\"phase\""));
    assert!(json.contains("\"safety\""));
    assert!(json.contains("\"macro_targets\""));
}

#[test]
fn test_evaluation_is_deterministic() {
    let snap = snapshot(158.0, 150.0, 4, Protocol::OptimalCut);
    let a = snap.evaluate(now()).unwrap();
    let b = snap.evaluate(now()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
