// ABOUTME: Food slice categorization from nutrient tuples and text hints
// ABOUTME: Ordered decision list assigning protein, carb, veg, fruit, or fat slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use makeweight_core::constants::slices;
use makeweight_core::models::{NutrientFacts, SliceCategory};

/// Assign a food's macro profile to one slice category
///
/// This is an explicit decision list, not a scoring model: the rules run
/// in order and the first match wins. The ordering is load-bearing - the
/// categorized food data already in the field was produced by exactly
/// this sequence, so ties must keep breaking the same way.
#[must_use]
pub fn categorize_slice(facts: &NutrientFacts, hint: Option<&str>) -> SliceCategory {
    let facts = facts.sanitized();
    let hint = hint.map(str::to_lowercase).unwrap_or_default();

    // 1. Nothing to count.
    if facts.calories <= 0.0 && facts.protein_g <= 0.0 {
        return SliceCategory::None;
    }

    // 2-3. Text hints short-circuit the macro math. "baby" excludes baby
    // food purees labelled as fruit.
    if hint.contains("fruit") && !hint.contains("baby") {
        return SliceCategory::Fruit;
    }
    if hint.contains("vegetable") {
        return SliceCategory::Veg;
    }

    // 4. Dominant macro share by calorie contribution.
    if facts.calories > 0.0 {
        let protein_share = facts.protein_g * slices::CALORIES_PER_G_PROTEIN / facts.calories;
        let carb_share = facts.carbs_g * slices::CALORIES_PER_G_CARB / facts.calories;
        let fat_share = facts.fat_g * slices::CALORIES_PER_G_FAT / facts.calories;

        if protein_share > slices::PROTEIN_SHARE_THRESHOLD {
            return SliceCategory::Protein;
        }
        if fat_share > slices::FAT_SHARE_THRESHOLD {
            return SliceCategory::Fat;
        }
        if carb_share > slices::CARB_SHARE_THRESHOLD {
            if facts.fiber_g > slices::VEG_FIBER_MIN_G {
                return SliceCategory::Veg;
            }
            return SliceCategory::Carb;
        }
    }

    // 5. Mixed profile with no dominant macro.
    SliceCategory::None
}
