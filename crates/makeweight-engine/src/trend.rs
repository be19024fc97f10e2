// ABOUTME: Weight-trend projection from morning weigh-ins toward the weigh-in date
// ABOUTME: Least-squares slope, projected weigh-in weight, and switch advice with urgency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, Duration, Utc};
use makeweight_core::errors::EngineResult;
use makeweight_core::models::weight_log::morning_series;
use makeweight_core::models::{Profile, WeightLog};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TrendConfig;

/// How urgently a recommendation should be surfaced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Mention it when convenient
    Low,
    /// Surface it prominently
    Medium,
    /// Interrupt: the plan is failing
    High,
}

/// Trend-derived recommendation to switch protocols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionAdvice {
    /// Whether the trend calls for a protocol switch
    pub switch_protocol: bool,
    /// How urgently to surface the advice
    pub urgency: Urgency,
    /// Human-readable explanation of the projection
    pub message: String,
}

/// Least-squares slope in pounds per day over (day-offset, weight) points
fn slope_lbs_per_day(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut num = 0.0;
    let mut den = 0.0;
    for (x, y) in points {
        num += (x - mean_x) * (y - mean_y);
        den += (x - mean_x) * (x - mean_x);
    }
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// Project the morning weight forward to the weigh-in date
///
/// Uses a least-squares fit over the recent morning series; returns
/// `None` when there are too few points to say anything honest.
#[must_use]
pub fn project_weigh_in_weight(
    logs: &[WeightLog],
    now: DateTime<Utc>,
    profile: &Profile,
    config: &TrendConfig,
) -> Option<f64> {
    let weigh_in = profile.weigh_in_at?;
    let today = profile.today(now);
    let cutoff = today - Duration::days(config.projection_window_days);
    let series = morning_series(logs, cutoff);
    if series.len() < config.min_projection_points {
        return None;
    }

    let first_day = series.first()?.0;
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|(date, weight)| {
            #[allow(clippy::cast_precision_loss)]
            let x = (*date - first_day).num_days() as f64;
            (x, *weight)
        })
        .collect();
    let slope = slope_lbs_per_day(&points)?;
    let (last_day, last_weight) = *series.last()?;

    #[allow(clippy::cast_precision_loss)]
    let days_ahead = (weigh_in.date_naive() - last_day).num_days() as f64;
    let projected = slope.mul_add(days_ahead, last_weight);
    debug!(
        points = points.len(),
        slope_lbs_per_day = slope,
        projected_lbs = projected,
        "Projected weigh-in weight from morning series"
    );
    Some(projected)
}

/// Derive switch advice from the weight trend, when the data supports it
///
/// Only weight-cut protocols are projected; SPAR goals auto-adjust and
/// produce no advice. Urgency escalates with the projected overshoot and
/// with how little time is left to correct it.
///
/// # Errors
/// Propagates profile configuration errors (missing weigh-in date for a
/// weight-cut protocol).
pub fn projection_advice(
    logs: &[WeightLog],
    now: DateTime<Utc>,
    profile: &Profile,
    config: &TrendConfig,
) -> EngineResult<Option<ProjectionAdvice>> {
    if profile.protocol.is_spar() {
        return Ok(None);
    }
    let days_left = profile.days_until_weigh_in(now)?;
    if days_left < 0 {
        return Ok(None);
    }
    let Some(projected) = project_weigh_in_weight(logs, now, profile, config) else {
        return Ok(None);
    };

    let overshoot = projected - profile.target_weight_class_lbs;
    if overshoot <= config.switch_margin_lbs {
        return Ok(None);
    }

    let urgency = if days_left <= config.high_urgency_days
        || overshoot >= config.high_urgency_overshoot_lbs
    {
        Urgency::High
    } else if overshoot >= config.switch_margin_lbs * 2.0 {
        Urgency::Medium
    } else {
        Urgency::Low
    };
    Ok(Some(ProjectionAdvice {
        switch_protocol: true,
        urgency,
        message: format!(
            "Current trend projects {projected:.1} lbs at weigh-in, {overshoot:.1} lbs over the class limit"
        ),
    }))
}
