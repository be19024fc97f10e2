// ABOUTME: Weight-cut protocol engine with phase, target, safety, and nutrition calculations
// ABOUTME: Pure synchronous functions over immutable snapshots; no I/O of any kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![deny(unsafe_code)]

//! # Makeweight Engine
//!
//! The deterministic core of the Makeweight platform: pure calculations that
//! turn {profile, weigh-in date, logged weights, logged nutrition} into
//! {current cut phase, today's target weight, safety classification,
//! calorie/macro adjustment, protocol-switch recommendation, and
//! food-category assignment}.
//!
//! Every function here is a pure computation over immutable inputs. The
//! engine owns no mutable state, performs no I/O, and has no suspension
//! points; the enclosing application supplies a consistent snapshot and a
//! single explicit `now` per evaluation, and re-runs the engine from scratch
//! on every state change.

/// Engine configuration with environment overrides
pub mod config;

/// Time and phase classification over the cut timeline
pub mod phase;

/// Per-protocol cut curves (injected day-to-target configuration)
pub mod curve;

/// Daily target weight calculation
pub mod target;

/// Safety classification of the weight-vs-target delta
pub mod safety;

/// Calorie adjustment and macro target derivation
pub mod adjustment;

/// Food slice categorization from nutrient tuples
pub mod slices;

/// Weight-trend projection toward the weigh-in
pub mod trend;

/// Protocol switch recommendation and dismissal keys
pub mod advisor;

/// Static fuel reference table and phase-based selection
pub mod fuel;

/// Phase-dependent hydration targets
pub mod hydration;

/// Daily completion checks over required weigh-ins
pub mod completion;

/// Single-call evaluation facade over the whole engine
pub mod evaluation;

pub use adjustment::{competition_adjustment, CalorieAdjustment, Goal, Intensity, MacroTargets};
pub use advisor::{advise, recommend_protocol, DismissalKey, SwitchRecommendation};
pub use config::EngineConfig;
pub use curve::{CutCurve, ProtocolCatalog};
pub use evaluation::{evaluate, Evaluation, EvaluationInput};
pub use phase::{classify_phase, Phase, PhaseView};
pub use safety::{assess_safety, SafetyAssessment, SafetyLevel};
pub use slices::categorize_slice;
pub use target::target_weight;
pub use trend::{projection_advice, ProjectionAdvice, Urgency};
