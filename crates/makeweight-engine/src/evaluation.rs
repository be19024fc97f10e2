// ABOUTME: Single-call evaluation facade over the whole protocol engine
// ABOUTME: Derives phase, target, safety, adjustment, advice, and fuel guide from one snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, Utc};
use makeweight_core::errors::{EngineError, EngineResult};
use makeweight_core::models::weight_log::latest_weight;
use makeweight_core::models::{DailyTracking, Profile, WeightLog};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::adjustment::{competition_adjustment, macro_targets, CalorieAdjustment, MacroTargets};
use crate::advisor::{advise, DismissalKey, SwitchRecommendation};
use crate::completion::{completion_status, DayCompletion};
use crate::config::EngineConfig;
use crate::curve::ProtocolCatalog;
use crate::fuel::{select_fuel_guide, FuelGuideResult};
use crate::hydration::water_target_ml;
use crate::phase::{classify_phase, PhaseView};
use crate::safety::{assess_safety, SafetyAssessment};
use crate::target::target_weight;
use crate::trend::projection_advice;

/// Everything one evaluation reads
///
/// A consistent snapshot: the caller guarantees nothing here mutates for
/// the duration of the call. The engine holds no state of its own and is
/// re-run from scratch after every change.
pub struct EvaluationInput<'a> {
    /// Athlete profile
    pub profile: &'a Profile,
    /// Full weight log history
    pub logs: &'a [WeightLog],
    /// Tracking record for "today", when one exists
    pub tracking: Option<&'a DailyTracking>,
    /// Dismissed recommendation pairs
    pub dismissals: &'a HashSet<DismissalKey>,
    /// Whether the athlete is between tournament matches right now
    pub between_matches: bool,
    /// Cut curves per protocol
    pub catalog: &'a ProtocolCatalog,
    /// Engine configuration
    pub config: &'a EngineConfig,
}

/// Everything the engine derives for one instant
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Phase view for the configured protocol
    pub phase: PhaseView,
    /// Signed days until the weigh-in
    pub days_until_weigh_in: i64,
    /// Weight used as "current" (latest log, else the profile weight)
    pub current_weight_lbs: f64,
    /// Today's target weight
    pub target_weight_lbs: f64,
    /// Safety classification of the current delta
    pub safety: SafetyAssessment,
    /// Calorie adjustment (weight-cut protocols only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<CalorieAdjustment>,
    /// Daily macro targets
    pub macro_targets: MacroTargets,
    /// Daily water target (ml)
    pub water_target_ml: u32,
    /// Protocol switch recommendation, if one survives dismissal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<SwitchRecommendation>,
    /// What to eat now
    pub fuel_guide: FuelGuideResult,
    /// Which weigh-ins today still needs
    pub completion: DayCompletion,
}

/// Run the whole engine over one immutable snapshot
///
/// Pure and synchronous: no I/O, no suspension points, no caching. The
/// caller supplies `now` explicitly so tests and history views evaluate
/// deterministically.
///
/// # Errors
/// Configuration errors from profile validation or curve evaluation, and
/// `InvalidInput` when no usable current weight exists. These are
/// blocking states for the caller to surface, never defaults.
pub fn evaluate(input: &EvaluationInput<'_>, now: DateTime<Utc>) -> EngineResult<Evaluation> {
    let profile = input.profile;
    profile.validate()?;

    let current_weight = latest_weight(input.logs).unwrap_or(profile.current_weight_lbs);
    if !current_weight.is_finite() || current_weight <= 0.0 {
        return Err(EngineError::InvalidInput {
            field: "current_weight_lbs",
            reason: "no usable current weight; a missing weight is never on target",
        });
    }

    let days = profile.days_until_weigh_in(now)?;
    let phase = classify_phase(days, profile.protocol);
    let target = target_weight(profile, now, input.catalog, input.config)?;
    let safety = assess_safety(
        current_weight,
        target,
        profile.target_weight_class_lbs,
        days,
        profile.protocol,
        &input.config.safety,
    );

    let adjustment = (!profile.protocol.is_spar()).then(|| {
        competition_adjustment(
            current_weight,
            profile.target_weight_class_lbs,
            days,
            &input.config.adjustment,
        )
    });
    let calorie_delta = adjustment
        .as_ref()
        .map_or(0, |adj| adj.calorie_adjustment);
    let macros = macro_targets(
        profile.target_weight_class_lbs,
        calorie_delta,
        &input.config.adjustment,
    );

    let projection = projection_advice(input.logs, now, profile, &input.config.trend)?;
    let advice = advise(profile, current_weight, projection.as_ref(), input.dismissals);

    let today = profile.today(now);
    let completion = completion_status(
        today,
        input.logs,
        input.tracking,
        profile.weigh_in_at.map(|w| w.date_naive()),
    );

    debug!(
        phase = ?phase,
        days_until_weigh_in = days,
        current_weight_lbs = current_weight,
        target_weight_lbs = target,
        safety_level = ?safety.level,
        "Engine evaluation complete"
    );

    Ok(Evaluation {
        phase,
        days_until_weigh_in: days,
        current_weight_lbs: current_weight,
        target_weight_lbs: target,
        safety,
        adjustment,
        macro_targets: macros,
        water_target_ml: water_target_ml(phase, &input.config.hydration),
        advice,
        fuel_guide: select_fuel_guide(phase, input.between_matches),
        completion,
    })
}
