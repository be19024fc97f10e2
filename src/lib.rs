// ABOUTME: Main library entry point for the Makeweight platform
// ABOUTME: Application shell around the protocol engine: state, persistence, logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![deny(unsafe_code)]

//! # Makeweight
//!
//! A weight-cut protocol engine and nutrition tracker for weight-class
//! athletes. The deterministic core lives in `makeweight-engine`: pure
//! calculations turning a state snapshot into the current cut phase,
//! today's target weight, a safety classification, calorie and macro
//! targets, protocol-switch advice, and a fuel guide.
//!
//! This crate is the thin shell around that engine:
//! - **state**: the versioned single-writer snapshot the engine evaluates
//! - **persistence**: the `load()`/`save()` JSON store collaborator
//! - **logging**: structured `tracing` setup for the CLI
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use makeweight::state::StateSnapshot;
//! use makeweight::models::{Profile, Protocol};
//!
//! let profile = Profile {
//!     current_weight_lbs: 158.0,
//!     target_weight_class_lbs: 150.0,
//!     weigh_in_at: Some(Utc::now() + chrono::Duration::days(10)),
//!     protocol: Protocol::OptimalCut,
//!     simulated_date: None,
//! };
//! let snapshot = StateSnapshot::new(profile);
//! let evaluation = snapshot.evaluate(Utc::now()).expect("valid profile");
//! println!("phase: {:?}", evaluation.phase);
//! ```

/// Versioned application state snapshot and mutation helpers
pub mod state;

/// JSON snapshot persistence collaborator
pub mod persistence;

/// Structured logging configuration
pub mod logging;

pub use makeweight_core::errors;
pub use makeweight_core::models;
