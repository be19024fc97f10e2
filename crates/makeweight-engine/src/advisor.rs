// ABOUTME: Protocol switch recommendation reconciling trend advice with weight-based mapping
// ABOUTME: Dismissal keyed by (recommended, current) pair; SPAR fallback suppression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::recommendation;
use makeweight_core::models::{Profile, Protocol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::trend::{ProjectionAdvice, Urgency};

/// Where a switch recommendation came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Trend projection said the current protocol will miss
    Projection,
    /// Static weight-vs-class mapping disagrees with the configured protocol
    WeightBased,
}

/// Key identifying one specific protocol mismatch
///
/// Dismissal is keyed by the full pair: dismissing one mismatch must not
/// suppress a different future mismatch, so the key re-triggers whenever
/// either side changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DismissalKey {
    /// Protocol the engine recommends
    pub recommended: Protocol,
    /// Protocol currently configured
    pub current: Protocol,
}

/// A surfaced recommendation to switch protocols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchRecommendation {
    /// Protocol the engine recommends
    pub recommended: Protocol,
    /// Protocol currently configured
    pub current: Protocol,
    /// How urgently to surface it
    pub urgency: Urgency,
    /// Human-readable explanation
    pub message: String,
    /// Which subsystem produced it
    pub source: RecommendationSource,
}

impl SwitchRecommendation {
    /// Dismissal key for this recommendation
    #[must_use]
    pub const fn dismissal_key(&self) -> DismissalKey {
        DismissalKey {
            recommended: self.recommended,
            current: self.current,
        }
    }
}

/// Map current weight against the class limit to a protocol family
///
/// Pure function of the two weights, independent of any trend data: the
/// bigger the gap, the more runway the protocol needs.
#[must_use]
pub fn recommend_protocol(current_weight: f64, target_weight_class: f64) -> Protocol {
    if target_weight_class <= 0.0 {
        return Protocol::SparGeneral;
    }
    let percent_over = (current_weight - target_weight_class) / target_weight_class * 100.0;
    if percent_over <= recommendation::SPAR_MAX_OVER_PERCENT {
        Protocol::SparGeneral
    } else if percent_over <= recommendation::RAPID_MAX_OVER_PERCENT {
        Protocol::RapidCut
    } else if percent_over <= recommendation::OPTIMAL_MAX_OVER_PERCENT {
        Protocol::OptimalCut
    } else {
        Protocol::GradualCut
    }
}

/// Reconcile projection advice with the weight-based recommendation
///
/// The projection-based recommendation wins when present - it carries
/// urgency and timing context the static mapping cannot. Otherwise the
/// weight-based mismatch surfaces, except for SPAR protocols, whose
/// targets auto-adjust and should not be nagged. Dismissed pairs stay
/// quiet until either side of the pair changes.
#[must_use]
pub fn advise(
    profile: &Profile,
    current_weight: f64,
    projection: Option<&ProjectionAdvice>,
    dismissals: &HashSet<DismissalKey>,
) -> Option<SwitchRecommendation> {
    let current = profile.protocol;
    let recommended = recommend_protocol(current_weight, profile.target_weight_class_lbs);

    if let Some(advice) = projection.filter(|a| a.switch_protocol) {
        let candidate = SwitchRecommendation {
            recommended,
            current,
            urgency: advice.urgency,
            message: advice.message.clone(),
            source: RecommendationSource::Projection,
        };
        if recommended != current && !dismissals.contains(&candidate.dismissal_key()) {
            return Some(candidate);
        }
        return None;
    }

    if current.is_spar() || recommended == current {
        return None;
    }
    let candidate = SwitchRecommendation {
        recommended,
        current,
        urgency: Urgency::Low,
        message: format!(
            "At your current weight, {recommended} fits better than {current}"
        ),
        source: RecommendationSource::WeightBased,
    };
    if dismissals.contains(&candidate.dismissal_key()) {
        return None;
    }
    Some(candidate)
}
