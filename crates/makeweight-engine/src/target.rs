// ABOUTME: Daily target weight calculation along the configured cut curve
// ABOUTME: Evaluates the protocol's curve between cut-start weight and the class limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, Utc};
use makeweight_core::errors::{EngineError, EngineResult};
use makeweight_core::models::Profile;
use tracing::debug;

use crate::config::EngineConfig;
use crate::curve::ProtocolCatalog;

/// Target body weight (lbs) for today
///
/// Weight-cut protocols evaluate the protocol's cut curve at the current
/// day offset, between the cut-start weight (the walk-around estimate)
/// and the class limit. SPAR protocols have a goal, not a trajectory, so
/// the target is simply the class limit.
///
/// # Errors
/// Fails with a configuration error when the profile is invalid, when the
/// protocol has no configured curve, or when the curve cannot be
/// evaluated. Never silently returns zero.
pub fn target_weight(
    profile: &Profile,
    now: DateTime<Utc>,
    catalog: &ProtocolCatalog,
    config: &EngineConfig,
) -> EngineResult<f64> {
    profile.validate()?;
    let class = profile.target_weight_class_lbs;

    if profile.protocol.is_spar() {
        return Ok(class);
    }

    let days = profile.days_until_weigh_in(now)?;
    let curve = catalog
        .curve_for(profile.protocol)
        .ok_or(EngineError::MissingCutCurve {
            protocol: profile.protocol,
        })?;
    curve.validate(profile.protocol)?;

    let cut_start = class * config.adjustment.walk_around_multiplier;
    let remaining = curve.remaining_fraction(days);
    let target = remaining.mul_add(cut_start - class, class);

    if !target.is_finite() || target <= 0.0 {
        return Err(EngineError::InvalidCutCurve {
            protocol: profile.protocol,
            reason: "curve evaluation produced a non-positive target",
        });
    }
    debug!(
        protocol = %profile.protocol,
        days_until_weigh_in = days,
        remaining_fraction = remaining,
        target_lbs = target,
        "Computed daily target weight"
    );
    Ok(target)
}
