// ABOUTME: Configuration module for the Makeweight engine
// ABOUTME: Aggregates safety, adjustment, trend, and hydration configs with env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

//! Engine configuration
//!
//! Every numeric policy threshold the engine applies is carried on one of
//! these structs. Defaults come from the documented constants register in
//! `makeweight-core`; each field can be overridden per process through an
//! environment variable, so protocol tuning and tests never patch code.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Calorie adjustment configuration
pub mod adjustment;
/// Hydration target configuration
pub mod hydration;
/// Safety banding configuration
pub mod safety;
/// Trend projection configuration
pub mod trend;

pub use adjustment::AdjustmentConfig;
pub use hydration::HydrationConfig;
pub use safety::SafetyConfig;
pub use trend::TrendConfig;

static GLOBAL_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Aggregated engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Safety banding thresholds
    pub safety: SafetyConfig,
    /// Calorie adjustment policy
    pub adjustment: AdjustmentConfig,
    /// Trend projection policy
    pub trend: TrendConfig,
    /// Hydration targets per phase
    pub hydration: HydrationConfig,
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            safety: SafetyConfig::from_env(),
            adjustment: AdjustmentConfig::from_env(),
            trend: TrendConfig::from_env(),
            hydration: HydrationConfig::from_env(),
        }
    }

    /// Process-wide configuration, loaded from the environment on first use
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(Self::from_env)
    }
}

/// Parse an environment variable, falling back to a default
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
