// ABOUTME: Time and phase classification over the weight-cut timeline
// ABOUTME: Maps signed days-until-weigh-in to a named cut phase per protocol family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::models::Protocol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named stage of a weight-cut timeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Normal training, six or more days out
    Train,
    /// Glycogen/water loading, three to five days out
    Load,
    /// Final water cut, one to two days out
    Cut,
    /// Competition day
    Compete,
    /// After the weigh-in: rehydrate and refeed
    Recover,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Train => "train",
            Self::Load => "load",
            Self::Cut => "cut",
            Self::Compete => "compete",
            Self::Recover => "recover",
        };
        f.write_str(label)
    }
}

/// What the timeline means for the configured protocol
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "mode", content = "phase")]
pub enum PhaseView {
    /// Weight-cut protocols move through the named phases
    WeightCut(Phase),
    /// SPAR protocols track nutrition with no phase-based restriction
    NutritionTracking,
}

impl PhaseView {
    /// The cut phase, when this view carries one
    #[must_use]
    pub const fn cut_phase(self) -> Option<Phase> {
        match self {
            Self::WeightCut(phase) => Some(phase),
            Self::NutritionTracking => None,
        }
    }
}

/// Classify the signed day count into a cut phase
///
/// The banding is direction-sensitive: recovery is *past* the event, not
/// merely "zero days", so the guards are ordered from the most
/// time-critical outward rather than expressed as a lookup table. Total
/// over all inputs; every day count maps to exactly one phase.
#[must_use]
pub const fn cut_phase_for_days(days_until_weigh_in: i64) -> Phase {
    if days_until_weigh_in < 0 {
        Phase::Recover
    } else if days_until_weigh_in == 0 {
        Phase::Compete
    } else if days_until_weigh_in <= 2 {
        Phase::Cut
    } else if days_until_weigh_in <= 5 {
        Phase::Load
    } else {
        Phase::Train
    }
}

/// Classify the timeline for a protocol
///
/// SPAR protocols do not use the phase banding at all: they report a
/// nutrition-tracking mode with no food restriction.
#[must_use]
pub const fn classify_phase(days_until_weigh_in: i64, protocol: Protocol) -> PhaseView {
    if protocol.is_spar() {
        PhaseView::NutritionTracking
    } else {
        PhaseView::WeightCut(cut_phase_for_days(days_until_weigh_in))
    }
}
