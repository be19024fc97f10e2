// ABOUTME: Engine error types for weight-cut calculations and profile validation
// ABOUTME: Defines EngineError with structured configuration variants and EngineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use crate::models::Protocol;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the protocol engine
///
/// Configuration errors are blocking: callers must surface them as an
/// explicit "setup incomplete" state rather than substituting a default
/// target or adjustment.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A weight-cut protocol requires a weigh-in date and none is set
    #[error("Protocol {protocol:?} requires a weigh-in date")]
    MissingWeighInDate {
        /// Protocol configured on the profile
        protocol: Protocol,
    },

    /// The target weight class is zero, negative, or non-finite
    #[error("Invalid target weight class: {value}")]
    InvalidTargetWeightClass {
        /// Offending value from the profile
        value: f64,
    },

    /// No cut curve is configured for a weight-cut protocol
    #[error("No cut curve configured for protocol {protocol:?}")]
    MissingCutCurve {
        /// Protocol with no curve entry in the catalog
        protocol: Protocol,
    },

    /// A configured cut curve cannot be evaluated
    #[error("Invalid cut curve for protocol {protocol:?}: {reason}")]
    InvalidCutCurve {
        /// Protocol whose curve failed validation
        protocol: Protocol,
        /// Reason the curve was rejected
        reason: &'static str,
    },

    /// A safety-relevant input is missing or cannot be coerced
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// Reason the input was rejected
        reason: &'static str,
    },
}

impl EngineError {
    /// Whether this error represents incomplete or invalid configuration
    /// (as opposed to bad per-call input)
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingWeighInDate { .. }
                | Self::InvalidTargetWeightClass { .. }
                | Self::MissingCutCurve { .. }
                | Self::InvalidCutCurve { .. }
        )
    }
}
