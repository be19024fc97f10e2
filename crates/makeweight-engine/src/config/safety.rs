// ABOUTME: Safety banding configuration types
// ABOUTME: Handles delta thresholds and day bands for the safety assessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::safety;
use serde::{Deserialize, Serialize};

use super::env_or;

/// Safety banding configuration
///
/// The thresholds encode domain safety policy and must stay auditable
/// independently of the branching logic that applies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Pounds over target inside the final 24h that constitute danger
    pub danger_delta_24h_lbs: f64,
    /// Pounds over target inside the final 48h that constitute danger
    pub warning_delta_48h_lbs: f64,
    /// Days-until-weigh-in at or below which the 48h banding applies
    pub critical_days_threshold: i64,
    /// Maximum safe total cut as percent of the weight class
    pub max_safe_total_cut_percent: f64,
    /// Final-day delta above which the level is at least Warning
    pub final_day_warning_delta_lbs: f64,
    /// Final-48h delta above which the level is at least Warning
    pub final_48h_warning_delta_lbs: f64,
    /// Early-cut delta above which the level is at least Caution
    pub early_caution_delta_lbs: f64,
    /// Delta below target past which a rehydration hint is attached
    pub rehydration_hint_delta_lbs: f64,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            danger_delta_24h_lbs: safety::DANGER_DELTA_24H_LBS,
            warning_delta_48h_lbs: safety::WARNING_DELTA_48H_LBS,
            critical_days_threshold: safety::CRITICAL_DAYS_THRESHOLD,
            max_safe_total_cut_percent: safety::MAX_SAFE_TOTAL_CUT_PERCENT,
            final_day_warning_delta_lbs: safety::FINAL_DAY_WARNING_DELTA_LBS,
            final_48h_warning_delta_lbs: safety::FINAL_48H_WARNING_DELTA_LBS,
            early_caution_delta_lbs: safety::EARLY_CAUTION_DELTA_LBS,
            rehydration_hint_delta_lbs: safety::REHYDRATION_HINT_DELTA_LBS,
        }
    }
}

impl SafetyConfig {
    /// Load safety configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            danger_delta_24h_lbs: env_or(
                "MAKEWEIGHT_SAFETY_DANGER_DELTA_24H_LBS",
                safety::DANGER_DELTA_24H_LBS,
            ),
            warning_delta_48h_lbs: env_or(
                "MAKEWEIGHT_SAFETY_WARNING_DELTA_48H_LBS",
                safety::WARNING_DELTA_48H_LBS,
            ),
            critical_days_threshold: env_or(
                "MAKEWEIGHT_SAFETY_CRITICAL_DAYS_THRESHOLD",
                safety::CRITICAL_DAYS_THRESHOLD,
            ),
            max_safe_total_cut_percent: env_or(
                "MAKEWEIGHT_SAFETY_MAX_TOTAL_CUT_PERCENT",
                safety::MAX_SAFE_TOTAL_CUT_PERCENT,
            ),
            final_day_warning_delta_lbs: env_or(
                "MAKEWEIGHT_SAFETY_FINAL_DAY_WARNING_DELTA_LBS",
                safety::FINAL_DAY_WARNING_DELTA_LBS,
            ),
            final_48h_warning_delta_lbs: env_or(
                "MAKEWEIGHT_SAFETY_FINAL_48H_WARNING_DELTA_LBS",
                safety::FINAL_48H_WARNING_DELTA_LBS,
            ),
            early_caution_delta_lbs: env_or(
                "MAKEWEIGHT_SAFETY_EARLY_CAUTION_DELTA_LBS",
                safety::EARLY_CAUTION_DELTA_LBS,
            ),
            rehydration_hint_delta_lbs: env_or(
                "MAKEWEIGHT_SAFETY_REHYDRATION_HINT_DELTA_LBS",
                safety::REHYDRATION_HINT_DELTA_LBS,
            ),
        }
    }
}
