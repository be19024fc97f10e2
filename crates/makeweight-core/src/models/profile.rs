// ABOUTME: Athlete profile model with protocol enumeration and validation
// ABOUTME: Profile, Protocol, and ProtocolFamily definitions for the weight-cut engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{EngineError, EngineResult};

/// Cut protocol configured on a profile
///
/// A closed enumeration: every consumer matches exhaustively so a new
/// protocol is a compile-time change everywhere it is handled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Short water-dominant cut over roughly one week
    RapidCut,
    /// Standard two-week cut balancing glycogen and water manipulation
    OptimalCut,
    /// Extended four-week cut driven mostly by body composition
    GradualCut,
    /// Slice-based nutrition tracking with no competition date
    SparGeneral,
    /// Slice-based nutrition tracking in a competition training block
    SparCompetition,
}

/// Broad protocol family determining which calculations apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFamily {
    /// Timeline-driven cut toward a weigh-in date
    WeightCut,
    /// Portion tracking toward a goal weight, no cut timeline
    Spar,
}

impl Protocol {
    /// Family this protocol belongs to
    #[must_use]
    pub const fn family(self) -> ProtocolFamily {
        match self {
            Self::RapidCut | Self::OptimalCut | Self::GradualCut => ProtocolFamily::WeightCut,
            Self::SparGeneral | Self::SparCompetition => ProtocolFamily::Spar,
        }
    }

    /// Whether this is a SPAR nutrition-tracking protocol
    #[must_use]
    pub const fn is_spar(self) -> bool {
        matches!(self.family(), ProtocolFamily::Spar)
    }

    /// Display label used by the CLI and log output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RapidCut => "rapid_cut",
            Self::OptimalCut => "optimal_cut",
            Self::GradualCut => "gradual_cut",
            Self::SparGeneral => "spar_general",
            Self::SparCompetition => "spar_competition",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "rapid_cut" | "rapid" => Ok(Self::RapidCut),
            "optimal_cut" | "optimal" => Ok(Self::OptimalCut),
            "gradual_cut" | "gradual" => Ok(Self::GradualCut),
            "spar_general" | "spar" => Ok(Self::SparGeneral),
            "spar_competition" => Ok(Self::SparCompetition),
            other => Err(format!("unknown protocol '{other}'")),
        }
    }
}

/// Athlete profile: the configuration every evaluation reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Most recently confirmed body weight (lbs)
    pub current_weight_lbs: f64,
    /// Competition weight class limit (lbs)
    pub target_weight_class_lbs: f64,
    /// Weigh-in instant; required for weight-cut protocols
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weigh_in_at: Option<DateTime<Utc>>,
    /// Configured cut protocol
    pub protocol: Protocol,
    /// Override of "today" for deterministic tests and history views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_date: Option<NaiveDate>,
}

impl Profile {
    /// Validate the invariants the engine relies on
    ///
    /// # Errors
    /// Returns a configuration error when the target weight class is not a
    /// finite positive number, or when a weight-cut protocol has no weigh-in
    /// date. Callers must treat these as blocking, not defaults.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.target_weight_class_lbs.is_finite() || self.target_weight_class_lbs <= 0.0 {
            return Err(EngineError::InvalidTargetWeightClass {
                value: self.target_weight_class_lbs,
            });
        }
        if self.weigh_in_at.is_none() && !self.protocol.is_spar() {
            return Err(EngineError::MissingWeighInDate {
                protocol: self.protocol,
            });
        }
        Ok(())
    }

    /// Resolve "today" for this profile, honoring the simulated date
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.simulated_date.unwrap_or_else(|| now.date_naive())
    }

    /// Signed whole days until the weigh-in (negative after the event)
    ///
    /// # Errors
    /// Returns `MissingWeighInDate` for weight-cut protocols with no date.
    /// SPAR protocols with no date report zero days.
    pub fn days_until_weigh_in(&self, now: DateTime<Utc>) -> EngineResult<i64> {
        match self.weigh_in_at {
            Some(weigh_in) => {
                let today = self.today(now);
                Ok((weigh_in.date_naive() - today).num_days())
            }
            None if self.protocol.is_spar() => Ok(0),
            None => Err(EngineError::MissingWeighInDate {
                protocol: self.protocol,
            }),
        }
    }
}
