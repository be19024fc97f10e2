// ABOUTME: Versioned application state snapshot with single-writer mutation helpers
// ABOUTME: Profile, logs, daily tracking, dismissals, and the celebration ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, NaiveDate, Utc};
use makeweight_core::errors::EngineResult;
use makeweight_core::models::{DailyTracking, NutrientFacts, Profile, SliceCategory, WeightLog};
use makeweight_engine::advisor::DismissalKey;
use makeweight_engine::categorize_slice;
use makeweight_engine::config::EngineConfig;
use makeweight_engine::curve::ProtocolCatalog;
use makeweight_engine::evaluation::{evaluate, Evaluation, EvaluationInput};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::info;
use uuid::Uuid;

/// Current snapshot schema version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Per-day set of fired celebration event keys
///
/// Replaces an ad-hoc session set: which one-shot events (target hit,
/// hydration goal) already fired on which day, persisted with the rest of
/// the state and evicted deterministically by date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CelebrationLedger {
    fired: BTreeMap<NaiveDate, BTreeSet<String>>,
}

impl CelebrationLedger {
    /// Record an event for a date; returns true when it newly fired
    pub fn fire(&mut self, date: NaiveDate, key: &str) -> bool {
        self.fired.entry(date).or_default().insert(key.to_owned())
    }

    /// Whether an event already fired on a date
    #[must_use]
    pub fn has_fired(&self, date: NaiveDate, key: &str) -> bool {
        self.fired.get(&date).is_some_and(|keys| keys.contains(key))
    }

    /// Drop every day strictly before the cutoff
    pub fn evict_before(&mut self, cutoff: NaiveDate) {
        self.fired = self.fired.split_off(&cutoff);
    }

    /// Number of days currently held
    #[must_use]
    pub fn days(&self) -> usize {
        self.fired.len()
    }
}

/// The full application state the engine evaluates
///
/// A single-writer container: every mutation goes through these methods,
/// and the engine re-runs from scratch over the resulting snapshot. No
/// derived value is stored here - phase, target, safety, and the rest are
/// recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Snapshot schema version
    pub version: u32,
    /// Athlete profile
    pub profile: Profile,
    /// Append-only weight log history
    pub logs: Vec<WeightLog>,
    /// Daily tracking records by date
    pub daily: BTreeMap<NaiveDate, DailyTracking>,
    /// Dismissed recommendation pairs
    pub dismissals: HashSet<DismissalKey>,
    /// Fired one-shot events per day
    pub celebrations: CelebrationLedger,
    /// Whether the athlete is between tournament matches right now
    pub between_matches: bool,
}

impl StateSnapshot {
    /// Fresh state around a profile
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            profile,
            logs: Vec::new(),
            daily: BTreeMap::new(),
            dismissals: HashSet::new(),
            celebrations: CelebrationLedger::default(),
            between_matches: false,
        }
    }

    /// Append a weight log, keeping the history ordered by timestamp
    pub fn append_log(&mut self, log: WeightLog) {
        info!(
            log_type = ?log.log_type,
            weight_lbs = log.weight_lbs,
            "Appending weight log"
        );
        self.logs.push(log);
        self.logs.sort_by_key(|l| l.logged_at);
    }

    /// Remove a log by id; returns true when something was removed
    pub fn remove_log(&mut self, id: Uuid) -> bool {
        let before = self.logs.len();
        self.logs.retain(|log| log.id != id);
        self.logs.len() != before
    }

    /// Mutable tracking record for a date, created empty on first touch
    pub fn tracking_mut(&mut self, date: NaiveDate) -> &mut DailyTracking {
        self.daily
            .entry(date)
            .or_insert_with(|| DailyTracking::new(date))
    }

    /// Log a food: add its macros and count its slice for the date
    ///
    /// Returns the category the food was counted under.
    pub fn log_food(
        &mut self,
        date: NaiveDate,
        facts: &NutrientFacts,
        servings: f64,
        category_hint: Option<&str>,
    ) -> SliceCategory {
        let category = categorize_slice(facts, category_hint);
        let tracking = self.tracking_mut(date);
        tracking.add_food(facts, servings);
        tracking.slices.increment(category);
        category
    }

    /// Dismiss a recommendation pair
    ///
    /// Keyed by the full `(recommended, current)` pair: a different future
    /// mismatch re-triggers on its own.
    pub fn dismiss(&mut self, key: DismissalKey) {
        self.dismissals.insert(key);
    }

    /// Accept a switch recommendation: update the profile's protocol
    pub fn accept_switch(&mut self, key: DismissalKey) {
        info!(
            from = %self.profile.protocol,
            to = %key.recommended,
            "Switching protocol"
        );
        self.profile.protocol = key.recommended;
    }

    /// Evaluate with the default catalog and the process-wide config
    ///
    /// # Errors
    /// Propagates engine configuration errors; callers surface them as a
    /// blocking "setup incomplete" state.
    pub fn evaluate(&self, now: DateTime<Utc>) -> EngineResult<Evaluation> {
        self.evaluate_with(now, &ProtocolCatalog::default(), EngineConfig::global())
    }

    /// Evaluate with an explicit catalog and configuration
    ///
    /// # Errors
    /// Propagates engine configuration errors.
    pub fn evaluate_with(
        &self,
        now: DateTime<Utc>,
        catalog: &ProtocolCatalog,
        config: &EngineConfig,
    ) -> EngineResult<Evaluation> {
        let today = self.profile.today(now);
        let input = EvaluationInput {
            profile: &self.profile,
            logs: &self.logs,
            tracking: self.daily.get(&today),
            dismissals: &self.dismissals,
            between_matches: self.between_matches,
            catalog,
            config,
        };
        evaluate(&input, now)
    }
}
