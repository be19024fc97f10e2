// ABOUTME: Safety classification of the current-weight-vs-target delta
// ABOUTME: Precedence-ordered banding into Safe, Caution, Warning, and Danger levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::models::Protocol;
use serde::{Deserialize, Serialize};

use crate::config::SafetyConfig;

/// Risk classification, ordered by increasing risk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    /// On track; nothing to flag
    Safe,
    /// Worth watching; tighten up the plan
    Caution,
    /// The cut is off course; intervene now
    Warning,
    /// Unsafe to continue as planned
    Danger,
}

/// Result of a safety assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAssessment {
    /// Classified risk level
    pub level: SafetyLevel,
    /// Human-readable headline
    pub message: String,
    /// Optional secondary guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Classify the weight-vs-target delta into a risk level
///
/// Evaluated as a precedence-ordered state machine; the first matching
/// rule wins. The banding tightens as the weigh-in approaches: the same
/// delta that is merely a caution a week out is a danger on the final
/// day. Early in the cut the judgment is about the total cut relative to
/// the weight class, so the class limit is an explicit input. Total and
/// side-effect-free; monotonic in `delta` within each day band.
#[must_use]
pub fn assess_safety(
    current_weight: f64,
    target: f64,
    target_weight_class: f64,
    days_until_weigh_in: i64,
    protocol: Protocol,
    config: &SafetyConfig,
) -> SafetyAssessment {
    // SPAR protocols have auto-adjusting goals and no cut timeline.
    if protocol.is_spar() {
        return SafetyAssessment {
            level: SafetyLevel::Safe,
            message: "Nutrition tracking mode".into(),
            detail: None,
        };
    }

    let delta = current_weight - target;

    if delta <= 0.0 {
        let detail = (delta < config.rehydration_hint_delta_lbs).then(|| {
            format!(
                "{:.1} lbs under target - rehydrate and refuel toward the curve",
                -delta
            )
        });
        return SafetyAssessment {
            level: SafetyLevel::Safe,
            message: "On target".into(),
            detail,
        };
    }

    // Final day: anything meaningfully over is a crisis.
    if days_until_weigh_in <= 1 {
        let (level, message) = if delta > config.danger_delta_24h_lbs {
            (
                SafetyLevel::Danger,
                format!("{delta:.1} lbs over with under 24h left - do not cut this much this late"),
            )
        } else if delta > config.final_day_warning_delta_lbs {
            (
                SafetyLevel::Warning,
                format!("{delta:.1} lbs over on the final day - execute the water cut carefully"),
            )
        } else {
            (
                SafetyLevel::Caution,
                format!("{delta:.1} lbs to go - within final-day range"),
            )
        };
        return SafetyAssessment {
            level,
            message,
            detail: None,
        };
    }

    // Final 48 hours: the water cut window.
    if days_until_weigh_in <= config.critical_days_threshold {
        let (level, message) = if delta > config.warning_delta_48h_lbs {
            (
                SafetyLevel::Danger,
                format!("{delta:.1} lbs over inside 48h - this exceeds a safe water cut"),
            )
        } else if delta > config.final_48h_warning_delta_lbs {
            (
                SafetyLevel::Warning,
                format!("{delta:.1} lbs over inside 48h - tighten food and water now"),
            )
        } else {
            (
                SafetyLevel::Caution,
                format!("{delta:.1} lbs to go - on plan for the final cut"),
            )
        };
        return SafetyAssessment {
            level,
            message,
            detail: None,
        };
    }

    // Three or more days out: judge the total cut, not the daily delta.
    let percent_over = if target_weight_class > 0.0 {
        delta / target_weight_class * 100.0
    } else {
        0.0
    };
    let (level, message) = if percent_over > config.max_safe_total_cut_percent {
        (
            SafetyLevel::Warning,
            format!(
                "{percent_over:.1}% of the class limit still to cut - beyond the safe total"
            ),
        )
    } else if delta > config.early_caution_delta_lbs {
        (
            SafetyLevel::Caution,
            format!("{delta:.1} lbs over target - get ahead of it this week"),
        )
    } else {
        (
            SafetyLevel::Safe,
            format!("{delta:.1} lbs over target - normal for this point"),
        )
    };
    SafetyAssessment {
        level,
        message,
        detail: None,
    }
}
