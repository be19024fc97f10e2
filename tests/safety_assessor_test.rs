// ABOUTME: Unit tests for the safety assessor state machine
// ABOUTME: Validates precedence order, band thresholds, and monotonicity in delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use makeweight::models::Protocol;
use makeweight_engine::config::SafetyConfig;
use makeweight_engine::safety::{assess_safety, SafetyLevel};

const CLASS: f64 = 150.0;

fn assess(current: f64, target: f64, days: i64) -> SafetyLevel {
    assess_safety(
        current,
        target,
        CLASS,
        days,
        Protocol::OptimalCut,
        &SafetyConfig::default(),
    )
    .level
}

#[test]
fn test_spar_is_always_safe() {
    let assessment = assess_safety(
        200.0,
        150.0,
        CLASS,
        1,
        Protocol::SparGeneral,
        &SafetyConfig::default(),
    );
    assert_eq!(assessment.level, SafetyLevel::Safe);
    assert_eq!(assessment.message, "Nutrition tracking mode");
}

#[test]
fn test_on_target_is_safe() {
    assert_eq!(assess(150.0, 150.0, 1), SafetyLevel::Safe);
    assert_eq!(assess(149.0, 150.0, 0), SafetyLevel::Safe);
}

#[test]
fn test_well_under_target_attaches_rehydration_hint() {
    let assessment = assess_safety(
        147.0,
        150.0,
        CLASS,
        3,
        Protocol::OptimalCut,
        &SafetyConfig::default(),
    );
    assert_eq!(assessment.level, SafetyLevel::Safe);
    assert!(assessment.detail.is_some());

    let slightly_under = assess_safety(
        149.5,
        150.0,
        CLASS,
        3,
        Protocol::OptimalCut,
        &SafetyConfig::default(),
    );
    assert!(slightly_under.detail.is_none());
}

#[test]
fn test_final_day_banding() {
    // delta 4 > DANGER_DELTA_24H_LBS (3.0)
    assert_eq!(assess(154.0, 150.0, 1), SafetyLevel::Danger);
    // delta 2.5: warning band
    assert_eq!(assess(152.5, 150.0, 1), SafetyLevel::Warning);
    // delta 1.5: caution
    assert_eq!(assess(151.5, 150.0, 1), SafetyLevel::Caution);
    // Day zero uses the same final-day banding.
    assert_eq!(assess(154.0, 150.0, 0), SafetyLevel::Danger);
}

#[test]
fn test_final_48h_banding() {
    // delta 4.5 > WARNING_DELTA_48H_LBS (4.0)
    assert_eq!(assess(154.5, 150.0, 2), SafetyLevel::Danger);
    // delta 3.5: warning
    assert_eq!(assess(153.5, 150.0, 2), SafetyLevel::Warning);
    // delta 2.0: caution
    assert_eq!(assess(152.0, 150.0, 2), SafetyLevel::Caution);
}

#[test]
fn test_early_cut_judges_the_total_percentage() {
    // 8 lbs over a 150 class is 5.3% - beyond the safe total cut.
    assert_eq!(assess(158.0, 150.0, 7), SafetyLevel::Warning);
    // 6 lbs is 4% - large but within the total, so caution.
    assert_eq!(assess(156.0, 150.0, 7), SafetyLevel::Caution);
    // 3 lbs a week out is routine.
    assert_eq!(assess(153.0, 150.0, 7), SafetyLevel::Safe);
}

#[test]
fn test_monotonic_in_delta_within_each_band() {
    let ord = |level: SafetyLevel| level as u8;
    for days in [-1, 0, 1, 2, 3, 7, 14] {
        let mut last = 0;
        for tenths in 0..200 {
            let delta = f64::from(tenths) / 10.0;
            let level = ord(assess(150.0 + delta, 150.0, days));
            assert!(
                level >= last,
                "level decreased as delta grew at {days} days out"
            );
            last = level;
        }
    }
}

#[test]
fn test_safety_levels_order_by_risk() {
    assert!(SafetyLevel::Safe < SafetyLevel::Caution);
    assert!(SafetyLevel::Caution < SafetyLevel::Warning);
    assert!(SafetyLevel::Warning < SafetyLevel::Danger);
}

#[test]
fn test_thresholds_are_configuration_not_literals() {
    // Tightening the danger threshold reclassifies the same delta.
    let strict = SafetyConfig {
        danger_delta_24h_lbs: 1.0,
        ..SafetyConfig::default()
    };
    let assessment = assess_safety(152.0, 150.0, CLASS, 1, Protocol::OptimalCut, &strict);
    assert_eq!(assessment.level, SafetyLevel::Danger);
}
