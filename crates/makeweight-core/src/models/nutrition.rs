// ABOUTME: Collaborator-supplied nutrient tuples for foods and servings
// ABOUTME: NutrientFacts definition with boundary sanitization of bad numerics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nutrient tuple for one food or serving
///
/// Supplied by food-source collaborators (search APIs, photo/voice parsers).
/// The engine consumes the five core numeric fields plus an optional
/// category hint; sugar and sodium ride along for display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Sugar (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Sodium (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
}

/// Coerce a tracking value to a non-negative finite number
///
/// NaN and negative inputs become zero. This is only legal for tracking
/// aggregates; safety-relevant inputs (body weights) are rejected instead.
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl NutrientFacts {
    /// Copy of these facts with every numeric field coerced non-negative
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let dirty = [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
        ]
        .iter()
        .any(|v| !v.is_finite() || *v < 0.0);
        if dirty {
            debug!(
                calories = self.calories,
                protein_g = self.protein_g,
                "Coercing out-of-range nutrient values to zero"
            );
        }
        Self {
            calories: non_negative(self.calories),
            protein_g: non_negative(self.protein_g),
            carbs_g: non_negative(self.carbs_g),
            fat_g: non_negative(self.fat_g),
            fiber_g: non_negative(self.fiber_g),
            sugar_g: self.sugar_g.map(non_negative),
            sodium_mg: self.sodium_mg.map(non_negative),
        }
    }
}
