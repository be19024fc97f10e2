// ABOUTME: Weight log entries keyed by timestamp and log type
// ABOUTME: WeightLog, WeightLogType, and helpers over log collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};

/// When in the day a weight was taken
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightLogType {
    /// First weigh-in after waking, before food or water
    Morning,
    /// Immediately before practice
    PrePractice,
    /// Immediately after practice
    PostPractice,
    /// Last weigh-in before sleep
    BeforeBed,
    /// Official or mock weigh-in
    WeighIn,
}

impl FromStr for WeightLogType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "morning" => Ok(Self::Morning),
            "pre_practice" => Ok(Self::PrePractice),
            "post_practice" => Ok(Self::PostPractice),
            "before_bed" => Ok(Self::BeforeBed),
            "weigh_in" => Ok(Self::WeighIn),
            other => Err(format!("unknown weight log type '{other}'")),
        }
    }
}

/// One logged body weight
///
/// Immutable once created: the state container only appends and removes,
/// never mutates in place. Multiple logs per day are expected and are
/// disambiguated by `log_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLog {
    /// Stable identifier, used for removal
    pub id: Uuid,
    /// Instant the weight was logged
    pub logged_at: DateTime<Utc>,
    /// Which daily weigh-in this is
    pub log_type: WeightLogType,
    /// Body weight in pounds, strictly positive
    pub weight_lbs: f64,
}

impl WeightLog {
    /// Create a new log entry, rejecting non-positive or non-finite weights
    ///
    /// # Errors
    /// Returns `InvalidInput` when the weight is not a finite positive
    /// number. A missing or garbage weight must never flow into safety
    /// calculations as zero.
    pub fn new(
        logged_at: DateTime<Utc>,
        log_type: WeightLogType,
        weight_lbs: f64,
    ) -> EngineResult<Self> {
        if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "weight_lbs",
                reason: "weight must be a finite positive number",
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            logged_at,
            log_type,
            weight_lbs,
        })
    }

    /// Calendar date of this log
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

/// Most recent logged weight across all types, if any
#[must_use]
pub fn latest_weight(logs: &[WeightLog]) -> Option<f64> {
    logs.iter()
        .max_by_key(|log| log.logged_at)
        .map(|log| log.weight_lbs)
}

/// Morning weigh-ins on or after the cutoff date, ordered by date
///
/// One point per day: when a day has several morning entries the latest
/// wins, matching how the athlete corrects a mis-entered weight.
#[must_use]
pub fn morning_series(logs: &[WeightLog], cutoff: NaiveDate) -> Vec<(NaiveDate, f64)> {
    let mut by_day: std::collections::BTreeMap<NaiveDate, (DateTime<Utc>, f64)> =
        std::collections::BTreeMap::new();
    for log in logs {
        if log.log_type != WeightLogType::Morning || log.date() < cutoff {
            continue;
        }
        let entry = by_day.entry(log.date()).or_insert((log.logged_at, log.weight_lbs));
        if log.logged_at >= entry.0 {
            *entry = (log.logged_at, log.weight_lbs);
        }
    }
    by_day
        .into_iter()
        .map(|(date, (_, weight))| (date, weight))
        .collect()
}
