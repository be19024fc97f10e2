// ABOUTME: Calorie adjustment configuration types
// ABOUTME: Handles walk-around scaling, deficit clamps, and macro split settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::adjustment;
use serde::{Deserialize, Serialize};

use super::env_or;

/// Calorie adjustment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Walk-around weight as a multiple of the target weight class
    pub walk_around_multiplier: f64,
    /// Daily calorie deficit per pound over walk-around weight
    pub calories_per_lb_over: f64,
    /// Largest daily deficit the scaled formula may produce
    pub max_daily_deficit: i32,
    /// Smallest daily deficit the scaled formula may produce
    pub min_scaled_deficit: i32,
    /// Fixed deficit during the final water-cut days
    pub water_cut_deficit: i32,
    /// Fixed lean deficit while loading at or under walk-around weight
    pub lean_phase_deficit: i32,
    /// Fixed surplus on competition day
    pub competition_day_surplus: i32,
    /// Fixed surplus after the event
    pub post_event_surplus: i32,
    /// Deficit magnitude at or beyond which intensity reads as aggressive
    pub aggressive_deficit_threshold: i32,
    /// Daily protein target in grams per pound of weight class
    pub protein_g_per_lb_class: f64,
    /// Share of daily calories allotted to fat
    pub fat_calorie_fraction: f64,
    /// Maintenance calories per pound of walk-around weight
    pub maintenance_calories_per_lb: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            walk_around_multiplier: adjustment::WALK_AROUND_MULTIPLIER,
            calories_per_lb_over: adjustment::CALORIES_PER_LB_OVER,
            max_daily_deficit: adjustment::MAX_DAILY_DEFICIT,
            min_scaled_deficit: adjustment::MIN_SCALED_DEFICIT,
            water_cut_deficit: adjustment::WATER_CUT_DEFICIT,
            lean_phase_deficit: adjustment::LEAN_PHASE_DEFICIT,
            competition_day_surplus: adjustment::COMPETITION_DAY_SURPLUS,
            post_event_surplus: adjustment::POST_EVENT_SURPLUS,
            aggressive_deficit_threshold: adjustment::AGGRESSIVE_DEFICIT_THRESHOLD,
            protein_g_per_lb_class: adjustment::PROTEIN_G_PER_LB_CLASS,
            fat_calorie_fraction: adjustment::FAT_CALORIE_FRACTION,
            maintenance_calories_per_lb: adjustment::MAINTENANCE_CALORIES_PER_LB,
        }
    }
}

impl AdjustmentConfig {
    /// Load adjustment configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            walk_around_multiplier: env_or(
                "MAKEWEIGHT_ADJUST_WALK_AROUND_MULTIPLIER",
                adjustment::WALK_AROUND_MULTIPLIER,
            ),
            calories_per_lb_over: env_or(
                "MAKEWEIGHT_ADJUST_CALORIES_PER_LB_OVER",
                adjustment::CALORIES_PER_LB_OVER,
            ),
            max_daily_deficit: env_or(
                "MAKEWEIGHT_ADJUST_MAX_DAILY_DEFICIT",
                adjustment::MAX_DAILY_DEFICIT,
            ),
            min_scaled_deficit: env_or(
                "MAKEWEIGHT_ADJUST_MIN_SCALED_DEFICIT",
                adjustment::MIN_SCALED_DEFICIT,
            ),
            water_cut_deficit: env_or(
                "MAKEWEIGHT_ADJUST_WATER_CUT_DEFICIT",
                adjustment::WATER_CUT_DEFICIT,
            ),
            lean_phase_deficit: env_or(
                "MAKEWEIGHT_ADJUST_LEAN_PHASE_DEFICIT",
                adjustment::LEAN_PHASE_DEFICIT,
            ),
            competition_day_surplus: env_or(
                "MAKEWEIGHT_ADJUST_COMPETITION_DAY_SURPLUS",
                adjustment::COMPETITION_DAY_SURPLUS,
            ),
            post_event_surplus: env_or(
                "MAKEWEIGHT_ADJUST_POST_EVENT_SURPLUS",
                adjustment::POST_EVENT_SURPLUS,
            ),
            aggressive_deficit_threshold: env_or(
                "MAKEWEIGHT_ADJUST_AGGRESSIVE_DEFICIT_THRESHOLD",
                adjustment::AGGRESSIVE_DEFICIT_THRESHOLD,
            ),
            protein_g_per_lb_class: env_or(
                "MAKEWEIGHT_ADJUST_PROTEIN_G_PER_LB_CLASS",
                adjustment::PROTEIN_G_PER_LB_CLASS,
            ),
            fat_calorie_fraction: env_or(
                "MAKEWEIGHT_ADJUST_FAT_CALORIE_FRACTION",
                adjustment::FAT_CALORIE_FRACTION,
            ),
            maintenance_calories_per_lb: env_or(
                "MAKEWEIGHT_ADJUST_MAINTENANCE_CALORIES_PER_LB",
                adjustment::MAINTENANCE_CALORIES_PER_LB,
            ),
        }
    }
}
