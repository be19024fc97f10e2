// ABOUTME: Daily completion checks over required weigh-ins
// ABOUTME: Rest days drop practice logs; weigh-in day requires the official entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::NaiveDate;
use makeweight_core::models::{DailyTracking, WeightLog, WeightLogType};
use serde::Serialize;

/// Which weigh-ins a date still needs
#[derive(Debug, Clone, Serialize)]
pub struct DayCompletion {
    /// Log types required for this date
    pub required: Vec<WeightLogType>,
    /// Required log types not yet logged
    pub missing: Vec<WeightLogType>,
    /// Whether every required log is present
    pub complete: bool,
}

/// Log types required for a date
///
/// Practice weigh-ins drop out on rest days; the official weigh-in entry
/// is required only on the weigh-in date itself.
#[must_use]
pub fn required_log_types(no_practice: bool, is_weigh_in_day: bool) -> Vec<WeightLogType> {
    let mut required = vec![WeightLogType::Morning];
    if !no_practice {
        required.push(WeightLogType::PrePractice);
        required.push(WeightLogType::PostPractice);
    }
    required.push(WeightLogType::BeforeBed);
    if is_weigh_in_day {
        required.push(WeightLogType::WeighIn);
    }
    required
}

/// Completion status for one date given the full log history
#[must_use]
pub fn completion_status(
    date: NaiveDate,
    logs: &[WeightLog],
    tracking: Option<&DailyTracking>,
    weigh_in_date: Option<NaiveDate>,
) -> DayCompletion {
    let no_practice = tracking.is_some_and(|t| t.no_practice);
    let is_weigh_in_day = weigh_in_date == Some(date);
    let required = required_log_types(no_practice, is_weigh_in_day);

    let missing: Vec<WeightLogType> = required
        .iter()
        .filter(|required_type| {
            !logs
                .iter()
                .any(|log| log.date() == date && log.log_type == **required_type)
        })
        .copied()
        .collect();
    let complete = missing.is_empty();
    DayCompletion {
        required,
        missing,
        complete,
    }
}
