// ABOUTME: Unit tests for the calorie adjuster and macro target derivation
// ABOUTME: Validates day bands, scaled clamps, output bounds, and macro consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use makeweight_engine::adjustment::{macro_targets, Goal, Intensity};
use makeweight_engine::competition_adjustment;
use makeweight_engine::config::AdjustmentConfig;

const CLASS: f64 = 150.0;

fn adjust(current: f64, days: i64) -> makeweight_engine::CalorieAdjustment {
    competition_adjustment(current, CLASS, days, &AdjustmentConfig::default())
}

#[test]
fn test_post_event_is_full_refeed() {
    let adjustment = adjust(145.0, -1);
    assert_eq!(adjustment.calorie_adjustment, 500);
    assert_eq!(adjustment.goal, Goal::Gain);
    assert_eq!(adjustment.intensity, Intensity::Aggressive);
}

#[test]
fn test_competition_day_is_exactly_plus_250() {
    for weight in [140.0, 150.0, 170.0, 250.0] {
        let adjustment = adjust(weight, 0);
        assert_eq!(adjustment.calorie_adjustment, 250);
        assert_eq!(adjustment.goal, Goal::Gain);
        assert_eq!(adjustment.intensity, Intensity::Lean);
    }
}

#[test]
fn test_water_cut_days_are_exactly_minus_500_regardless_of_weight() {
    for days in [1, 2] {
        for weight in [140.0, 155.0, 200.0] {
            let adjustment = adjust(weight, days);
            assert_eq!(adjustment.calorie_adjustment, -500);
            assert_eq!(adjustment.goal, Goal::Lose);
            assert_eq!(adjustment.intensity, Intensity::Aggressive);
        }
    }
}

#[test]
fn test_load_phase_under_walk_around_is_lean_250() {
    // walk-around = 160.5; 151.5 is not over it.
    let adjustment = adjust(151.5, 4);
    assert_eq!(adjustment.calorie_adjustment, -250);
    assert_eq!(adjustment.goal, Goal::Lose);
    assert_eq!(adjustment.intensity, Intensity::Lean);
}

#[test]
fn test_load_phase_over_walk_around_scales_with_the_excess() {
    // walk-around = 160.5; 163.5 is 3 lbs over -> 450 deficit.
    let adjustment = adjust(163.5, 4);
    assert_eq!(adjustment.calorie_adjustment, -450);
    assert_eq!(adjustment.intensity, Intensity::Lean);

    // 4 lbs over -> 600 deficit, which reads as aggressive.
    let adjustment = adjust(164.5, 4);
    assert_eq!(adjustment.calorie_adjustment, -600);
    assert_eq!(adjustment.intensity, Intensity::Aggressive);
}

#[test]
fn test_scaled_deficit_clamps_at_both_ends() {
    // 0.5 lbs over -> raw 75, clamped up to the 250 floor.
    let adjustment = adjust(161.0, 4);
    assert_eq!(adjustment.calorie_adjustment, -250);

    // 10 lbs over -> raw 1500, clamped down to the 750 ceiling.
    let adjustment = adjust(170.5, 4);
    assert_eq!(adjustment.calorie_adjustment, -750);
}

#[test]
fn test_training_block_at_walk_around_maintains() {
    let adjustment = adjust(158.0, 10);
    assert_eq!(adjustment.calorie_adjustment, 0);
    assert_eq!(adjustment.goal, Goal::Maintain);
}

#[test]
fn test_training_block_over_walk_around_runs_the_scaled_deficit() {
    let adjustment = adjust(165.5, 10);
    assert_eq!(adjustment.calorie_adjustment, -750);
    assert_eq!(adjustment.goal, Goal::Lose);
    assert_eq!(adjustment.intensity, Intensity::Aggressive);
}

#[test]
fn test_output_never_leaves_the_policy_bounds() {
    for days in -10_i64..=30 {
        for tenths in 0..=1500 {
            let weight = 120.0 + f64::from(tenths) / 10.0;
            let adjustment = competition_adjustment(
                weight,
                CLASS,
                days,
                &AdjustmentConfig::default(),
            );
            assert!(
                (-750..=500).contains(&adjustment.calorie_adjustment),
                "adjustment {} out of bounds at {days} days, {weight} lbs",
                adjustment.calorie_adjustment
            );
        }
    }
}

#[test]
fn test_macro_targets_are_consistent_with_the_calorie_budget() {
    let config = AdjustmentConfig::default();
    let targets = macro_targets(CLASS, -500, &config);
    assert!(targets.calories > 0);
    assert!(targets.protein_g > 0);
    assert!(targets.carbs_g > 0);
    assert!(targets.fat_g > 0);

    // Atwater reconstruction lands within rounding error of the budget.
    let rebuilt = targets.protein_g * 4 + targets.carbs_g * 4 + targets.fat_g * 9;
    assert!((rebuilt - targets.calories).abs() <= 10);
}

#[test]
fn test_macro_targets_floor_at_zero_in_a_deep_deficit() {
    let config = AdjustmentConfig::default();
    // A tiny class with a huge deficit cannot go negative anywhere.
    let targets = macro_targets(10.0, -750, &config);
    assert!(targets.calories >= 0);
    assert!(targets.protein_g >= 0);
    assert!(targets.carbs_g >= 0);
    assert!(targets.fat_g >= 0);
}
