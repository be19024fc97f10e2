// ABOUTME: Hydration target configuration types
// ABOUTME: Handles per-phase daily water targets in milliliters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::hydration;
use serde::{Deserialize, Serialize};

use super::env_or;

/// Per-phase daily water targets (ml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Baseline daily water during normal training
    pub train_water_ml: u32,
    /// Loading-phase daily water
    pub load_water_ml: u32,
    /// Final-cut daily water
    pub cut_water_ml: u32,
    /// Competition-day sips between matches
    pub compete_water_ml: u32,
    /// Recovery-phase daily water
    pub recover_water_ml: u32,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            train_water_ml: hydration::TRAIN_WATER_ML,
            load_water_ml: hydration::LOAD_WATER_ML,
            cut_water_ml: hydration::CUT_WATER_ML,
            compete_water_ml: hydration::COMPETE_WATER_ML,
            recover_water_ml: hydration::RECOVER_WATER_ML,
        }
    }
}

impl HydrationConfig {
    /// Load hydration configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            train_water_ml: env_or("MAKEWEIGHT_HYDRATION_TRAIN_ML", hydration::TRAIN_WATER_ML),
            load_water_ml: env_or("MAKEWEIGHT_HYDRATION_LOAD_ML", hydration::LOAD_WATER_ML),
            cut_water_ml: env_or("MAKEWEIGHT_HYDRATION_CUT_ML", hydration::CUT_WATER_ML),
            compete_water_ml: env_or(
                "MAKEWEIGHT_HYDRATION_COMPETE_ML",
                hydration::COMPETE_WATER_ML,
            ),
            recover_water_ml: env_or(
                "MAKEWEIGHT_HYDRATION_RECOVER_ML",
                hydration::RECOVER_WATER_ML,
            ),
        }
    }
}
