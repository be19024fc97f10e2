// ABOUTME: Calorie adjustment and macro target derivation for the competition timeline
// ABOUTME: Day-banded deficit/surplus with scaled clamp plus the daily macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use serde::{Deserialize, Serialize};

use crate::config::AdjustmentConfig;

/// Direction of the daily energy balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Run a deficit
    Lose,
    /// Hold steady
    Maintain,
    /// Run a surplus
    Gain,
}

/// How hard the adjustment pushes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Modest, sustainable adjustment
    Lean,
    /// Large adjustment for a short window
    Aggressive,
}

/// Daily calorie adjustment with its rationale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustment {
    /// Signed calorie delta from maintenance
    pub calorie_adjustment: i32,
    /// Direction of the adjustment
    pub goal: Goal,
    /// How hard the adjustment pushes
    pub intensity: Intensity,
    /// Why this adjustment was chosen
    pub reason: String,
}

/// Daily macro targets in absolute terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Total daily calories
    pub calories: i32,
    /// Protein (g)
    pub protein_g: i32,
    /// Carbohydrates (g)
    pub carbs_g: i32,
    /// Fat (g)
    pub fat_g: i32,
}

/// Scaled deficit for weight carried over walk-around, clamped to policy
fn scaled_deficit(lbs_over_walk_around: f64, config: &AdjustmentConfig) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let raw = (lbs_over_walk_around * config.calories_per_lb_over).round() as i32;
    -raw.clamp(config.min_scaled_deficit, config.max_daily_deficit)
}

/// Compute the day's calorie adjustment on the competition timeline
///
/// Walk-around weight is estimated from the class limit; the day bands are
/// evaluated in order from the event outward. Pure and total over
/// real-valued inputs; the result never leaves
/// `[-max_daily_deficit, +post_event_surplus]`.
#[must_use]
pub fn competition_adjustment(
    current_weight: f64,
    target_weight_class: f64,
    days_until_weigh_in: i64,
    config: &AdjustmentConfig,
) -> CalorieAdjustment {
    let walk_around = target_weight_class * config.walk_around_multiplier;
    let lbs_over = current_weight - walk_around;
    let over_walk_around = lbs_over > 0.0;

    if days_until_weigh_in < 0 {
        return CalorieAdjustment {
            calorie_adjustment: config.post_event_surplus,
            goal: Goal::Gain,
            intensity: Intensity::Aggressive,
            reason: "Full refeed - restore glycogen and fluid after the event".into(),
        };
    }
    if days_until_weigh_in == 0 {
        return CalorieAdjustment {
            calorie_adjustment: config.competition_day_surplus,
            goal: Goal::Gain,
            intensity: Intensity::Lean,
            reason: "Refuel for performance between weigh-in and competition".into(),
        };
    }
    if days_until_weigh_in <= 2 {
        return CalorieAdjustment {
            calorie_adjustment: -config.water_cut_deficit,
            goal: Goal::Lose,
            intensity: Intensity::Aggressive,
            reason: "Water cut - the remaining loss is fluid, not food".into(),
        };
    }
    if days_until_weigh_in <= 5 {
        if !over_walk_around {
            return CalorieAdjustment {
                calorie_adjustment: -config.lean_phase_deficit,
                goal: Goal::Lose,
                intensity: Intensity::Lean,
                reason: "At walk-around weight - lean deficit through the load".into(),
            };
        }
        let deficit = scaled_deficit(lbs_over, config);
        let intensity = if deficit <= -config.aggressive_deficit_threshold {
            Intensity::Aggressive
        } else {
            Intensity::Lean
        };
        return CalorieAdjustment {
            calorie_adjustment: deficit,
            goal: Goal::Lose,
            intensity,
            reason: format!("{lbs_over:.1} lbs over walk-around with the load underway"),
        };
    }

    // Training block, six or more days out.
    if !over_walk_around {
        return CalorieAdjustment {
            calorie_adjustment: 0,
            goal: Goal::Maintain,
            intensity: Intensity::Lean,
            reason: "At walk-around weight - maintain through training".into(),
        };
    }
    let deficit = scaled_deficit(lbs_over, config);
    let intensity = if deficit <= -config.aggressive_deficit_threshold {
        Intensity::Aggressive
    } else {
        Intensity::Lean
    };
    CalorieAdjustment {
        calorie_adjustment: deficit,
        goal: Goal::Lose,
        intensity,
        reason: format!("{lbs_over:.1} lbs over walk-around - trim it during training"),
    }
}

/// Derive daily macro targets from the adjusted calorie budget
///
/// Protein anchors to the weight class, fat takes a fixed calorie share,
/// and carbohydrates absorb the remainder. All outputs floor at zero so a
/// deep deficit cannot produce negative grams.
#[must_use]
pub fn macro_targets(
    target_weight_class: f64,
    adjustment: i32,
    config: &AdjustmentConfig,
) -> MacroTargets {
    let walk_around = target_weight_class * config.walk_around_multiplier;
    let maintenance = walk_around * config.maintenance_calories_per_lb;
    let calories = (maintenance + f64::from(adjustment)).max(0.0);

    let protein_g = (target_weight_class * config.protein_g_per_lb_class).max(0.0);
    let fat_g = (calories * config.fat_calorie_fraction / 9.0).max(0.0);
    let carb_calories = (calories - protein_g * 4.0 - fat_g * 9.0).max(0.0);
    let carbs_g = carb_calories / 4.0;

    #[allow(clippy::cast_possible_truncation)]
    let rounded = |value: f64| value.round() as i32;
    MacroTargets {
        calories: rounded(calories),
        protein_g: rounded(protein_g),
        carbs_g: rounded(carbs_g),
        fat_g: rounded(fat_g),
    }
}
