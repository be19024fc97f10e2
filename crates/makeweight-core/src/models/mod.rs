// ABOUTME: Domain model module for the Makeweight platform
// ABOUTME: Re-exports profile, weight log, daily tracking, and nutrition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

/// Athlete profile and protocol enumeration
pub mod profile;

/// Weight log entries and helpers over log collections
pub mod weight_log;

/// Per-day nutrition and slice tracking
pub mod tracking;

/// Collaborator-supplied nutrient tuples
pub mod nutrition;

pub use nutrition::NutrientFacts;
pub use profile::{Profile, Protocol, ProtocolFamily};
pub use tracking::{ConsumedMacros, DailyTracking, SliceCategory, SliceCounts};
pub use weight_log::{WeightLog, WeightLogType};
