// ABOUTME: Phase-dependent daily water targets
// ABOUTME: Water loading days out, hard taper into the weigh-in, rehydration after
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use crate::config::HydrationConfig;
use crate::phase::{Phase, PhaseView};

/// Daily water target (ml) for the current phase
///
/// Water loading runs intake high through the load days, then tapers hard
/// into the weigh-in so the body keeps flushing; recovery goes back up to
/// rebuild fluid. SPAR tracking gets the training baseline.
#[must_use]
pub const fn water_target_ml(view: PhaseView, config: &HydrationConfig) -> u32 {
    match view {
        PhaseView::NutritionTracking => config.train_water_ml,
        PhaseView::WeightCut(phase) => match phase {
            Phase::Train => config.train_water_ml,
            Phase::Load => config.load_water_ml,
            Phase::Cut => config.cut_water_ml,
            Phase::Compete => config.compete_water_ml,
            Phase::Recover => config.recover_water_ml,
        },
    }
}
