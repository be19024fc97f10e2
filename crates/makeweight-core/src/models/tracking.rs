// ABOUTME: Per-day nutrition and slice tracking models
// ABOUTME: DailyTracking, ConsumedMacros, SliceCategory, and SliceCounts definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nutrition::{non_negative, NutrientFacts};

/// Portion category for slice-based tracking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SliceCategory {
    /// Protein-dominant foods
    Protein,
    /// Carbohydrate-dominant foods
    Carb,
    /// Vegetables (carb-dominant with meaningful fiber, or hinted)
    Veg,
    /// Fruit (hinted)
    Fruit,
    /// Fat-dominant foods
    Fat,
    /// Foods that do not count toward any slice
    None,
}

/// Macros consumed so far in one day (grams)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsumedMacros {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

/// Slice counts per category for one day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliceCounts {
    /// Protein slices
    pub protein: u32,
    /// Carb slices
    pub carb: u32,
    /// Vegetable slices
    pub veg: u32,
    /// Fruit slices
    pub fruit: u32,
    /// Fat slices
    pub fat: u32,
}

impl SliceCounts {
    /// Count for one category; `None` always reads zero
    #[must_use]
    pub const fn get(&self, category: SliceCategory) -> u32 {
        match category {
            SliceCategory::Protein => self.protein,
            SliceCategory::Carb => self.carb,
            SliceCategory::Veg => self.veg,
            SliceCategory::Fruit => self.fruit,
            SliceCategory::Fat => self.fat,
            SliceCategory::None => 0,
        }
    }

    /// Increment the count for one category; `None` is a no-op
    pub fn increment(&mut self, category: SliceCategory) {
        match category {
            SliceCategory::Protein => self.protein = self.protein.saturating_add(1),
            SliceCategory::Carb => self.carb = self.carb.saturating_add(1),
            SliceCategory::Veg => self.veg = self.veg.saturating_add(1),
            SliceCategory::Fruit => self.fruit = self.fruit.saturating_add(1),
            SliceCategory::Fat => self.fat = self.fat.saturating_add(1),
            SliceCategory::None => {}
        }
    }
}

/// Everything tracked for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTracking {
    /// Calendar date this record covers
    pub date: NaiveDate,
    /// Macros consumed so far
    pub macros: ConsumedMacros,
    /// Water consumed so far (ml)
    pub water_ml: u32,
    /// Slice counts per category
    pub slices: SliceCounts,
    /// Rest day: practice weigh-ins are not required for completion
    pub no_practice: bool,
}

impl DailyTracking {
    /// Empty tracking record for a date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            macros: ConsumedMacros {
                protein_g: 0.0,
                carbs_g: 0.0,
                fat_g: 0.0,
                fiber_g: 0.0,
            },
            water_ml: 0,
            slices: SliceCounts {
                protein: 0,
                carb: 0,
                veg: 0,
                fruit: 0,
                fat: 0,
            },
            no_practice: false,
        }
    }

    /// Add one food's macros (scaled by servings) to the day's totals
    ///
    /// Inputs are sanitized at this boundary: NaN and negative values are
    /// coerced to zero so a bad parse cannot corrupt the aggregates.
    pub fn add_food(&mut self, facts: &NutrientFacts, servings: f64) {
        let servings = non_negative(servings);
        let facts = facts.sanitized();
        self.macros.protein_g += facts.protein_g * servings;
        self.macros.carbs_g += facts.carbs_g * servings;
        self.macros.fat_g += facts.fat_g * servings;
        self.macros.fiber_g += facts.fiber_g * servings;
    }

    /// Add water to the day's total (ml)
    pub fn add_water(&mut self, ml: u32) {
        self.water_ml = self.water_ml.saturating_add(ml);
    }
}
