// ABOUTME: Per-protocol cut curves mapping days-out to remaining cut fraction
// ABOUTME: CutCurve piecewise-linear interpolation and the ProtocolCatalog registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::errors::{EngineError, EngineResult};
use makeweight_core::models::Protocol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One knot on a cut curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    /// Days until the weigh-in
    pub days_out: i64,
    /// Fraction of the total cut still to be carried at that point
    pub remaining_fraction: f64,
}

/// Piecewise-linear cut curve: days-out to remaining-fraction
///
/// The curve is configuration, not computation: the engine interpolates
/// whatever shape the protocol ships with. Fraction 1.0 means the athlete
/// still carries the full gap between cut-start weight and the class
/// limit; 0.0 means on the limit. Day offsets beyond the configured span
/// pin to the nearest end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutCurve {
    points: Vec<CurvePoint>,
}

impl CutCurve {
    /// Build a curve from knots, sorting by days-out ascending
    #[must_use]
    pub fn new(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by_key(|p| p.days_out);
        Self { points }
    }

    /// Validate the curve for a protocol
    ///
    /// # Errors
    /// Returns `InvalidCutCurve` when the curve is empty or carries a
    /// non-finite or out-of-range fraction. A broken curve must fail the
    /// evaluation loudly, never quietly produce a zero target.
    pub fn validate(&self, protocol: Protocol) -> EngineResult<()> {
        if self.points.is_empty() {
            return Err(EngineError::InvalidCutCurve {
                protocol,
                reason: "curve has no points",
            });
        }
        for point in &self.points {
            if !point.remaining_fraction.is_finite()
                || !(0.0..=1.0).contains(&point.remaining_fraction)
            {
                return Err(EngineError::InvalidCutCurve {
                    protocol,
                    reason: "remaining fraction outside [0, 1]",
                });
            }
        }
        Ok(())
    }

    /// Remaining cut fraction at a signed day offset
    ///
    /// Linear interpolation between the two bracketing knots; inputs past
    /// either end of the configured span clamp to the end fractions.
    #[must_use]
    pub fn remaining_fraction(&self, days_out: i64) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let Some(last) = self.points.last() else {
            return 0.0;
        };
        if days_out <= first.days_out {
            return first.remaining_fraction;
        }
        if days_out >= last.days_out {
            return last.remaining_fraction;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if days_out >= lo.days_out && days_out <= hi.days_out {
                let span = hi.days_out - lo.days_out;
                if span == 0 {
                    return hi.remaining_fraction;
                }
                #[allow(clippy::cast_precision_loss)]
                let t = (days_out - lo.days_out) as f64 / span as f64;
                return t.mul_add(
                    hi.remaining_fraction - lo.remaining_fraction,
                    lo.remaining_fraction,
                );
            }
        }
        last.remaining_fraction
    }
}

/// Registry of cut curves per protocol
///
/// Injected configuration: callers may replace any curve wholesale. Only
/// weight-cut protocols carry curves; SPAR protocols have none by design.
#[derive(Debug, Clone)]
pub struct ProtocolCatalog {
    curves: HashMap<Protocol, CutCurve>,
}

impl Default for ProtocolCatalog {
    fn default() -> Self {
        let mut curves = HashMap::new();
        // The day-1 knot sits near zero on every curve: the water cut does
        // its work on day 2, and the final morning should wake up within
        // striking distance of the limit.
        //
        // Rapid: one week, most of the gap held until the water cut.
        curves.insert(
            Protocol::RapidCut,
            CutCurve::new(vec![
                CurvePoint { days_out: 0, remaining_fraction: 0.0 },
                CurvePoint { days_out: 1, remaining_fraction: 0.05 },
                CurvePoint { days_out: 2, remaining_fraction: 0.60 },
                CurvePoint { days_out: 5, remaining_fraction: 0.85 },
                CurvePoint { days_out: 7, remaining_fraction: 1.0 },
            ]),
        );
        // Optimal: two weeks, steady descent with a modest final water drop.
        curves.insert(
            Protocol::OptimalCut,
            CutCurve::new(vec![
                CurvePoint { days_out: 0, remaining_fraction: 0.0 },
                CurvePoint { days_out: 1, remaining_fraction: 0.05 },
                CurvePoint { days_out: 2, remaining_fraction: 0.30 },
                CurvePoint { days_out: 5, remaining_fraction: 0.45 },
                CurvePoint { days_out: 10, remaining_fraction: 0.80 },
                CurvePoint { days_out: 14, remaining_fraction: 1.0 },
            ]),
        );
        // Gradual: four weeks, mostly body composition, little water.
        curves.insert(
            Protocol::GradualCut,
            CutCurve::new(vec![
                CurvePoint { days_out: 0, remaining_fraction: 0.0 },
                CurvePoint { days_out: 1, remaining_fraction: 0.05 },
                CurvePoint { days_out: 2, remaining_fraction: 0.15 },
                CurvePoint { days_out: 7, remaining_fraction: 0.35 },
                CurvePoint { days_out: 14, remaining_fraction: 0.60 },
                CurvePoint { days_out: 21, remaining_fraction: 0.80 },
                CurvePoint { days_out: 28, remaining_fraction: 1.0 },
            ]),
        );
        Self { curves }
    }
}

impl ProtocolCatalog {
    /// Catalog with no curves configured
    #[must_use]
    pub fn empty() -> Self {
        Self {
            curves: HashMap::new(),
        }
    }

    /// Curve for a protocol, when one is configured
    #[must_use]
    pub fn curve_for(&self, protocol: Protocol) -> Option<&CutCurve> {
        self.curves.get(&protocol)
    }

    /// Replace or add the curve for a protocol
    pub fn set_curve(&mut self, protocol: Protocol, curve: CutCurve) {
        self.curves.insert(protocol, curve);
    }
}
