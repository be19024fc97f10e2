// ABOUTME: Trend projection configuration types
// ABOUTME: Handles projection window, minimum points, and urgency thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::trend;
use serde::{Deserialize, Serialize};

use super::env_or;

/// Trend projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Days of morning weigh-ins considered for the projection window
    pub projection_window_days: i64,
    /// Minimum morning weigh-ins required before projecting
    pub min_projection_points: usize,
    /// Projected pounds over class at weigh-in that triggers switch advice
    pub switch_margin_lbs: f64,
    /// Days remaining at or below which overshoot is high urgency
    pub high_urgency_days: i64,
    /// Projected overshoot in pounds at or above which urgency escalates
    pub high_urgency_overshoot_lbs: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            projection_window_days: trend::PROJECTION_WINDOW_DAYS,
            min_projection_points: trend::MIN_PROJECTION_POINTS,
            switch_margin_lbs: trend::SWITCH_MARGIN_LBS,
            high_urgency_days: trend::HIGH_URGENCY_DAYS,
            high_urgency_overshoot_lbs: trend::HIGH_URGENCY_OVERSHOOT_LBS,
        }
    }
}

impl TrendConfig {
    /// Load trend configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            projection_window_days: env_or(
                "MAKEWEIGHT_TREND_PROJECTION_WINDOW_DAYS",
                trend::PROJECTION_WINDOW_DAYS,
            ),
            min_projection_points: env_or(
                "MAKEWEIGHT_TREND_MIN_PROJECTION_POINTS",
                trend::MIN_PROJECTION_POINTS,
            ),
            switch_margin_lbs: env_or(
                "MAKEWEIGHT_TREND_SWITCH_MARGIN_LBS",
                trend::SWITCH_MARGIN_LBS,
            ),
            high_urgency_days: env_or(
                "MAKEWEIGHT_TREND_HIGH_URGENCY_DAYS",
                trend::HIGH_URGENCY_DAYS,
            ),
            high_urgency_overshoot_lbs: env_or(
                "MAKEWEIGHT_TREND_HIGH_URGENCY_OVERSHOOT_LBS",
                trend::HIGH_URGENCY_OVERSHOOT_LBS,
            ),
        }
    }
}
