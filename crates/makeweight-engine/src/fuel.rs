// ABOUTME: Static fuel reference table and phase-based what-to-eat-now selection
// ABOUTME: Filters foods into morning/evening carbs, proteins, tournament and avoid lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use serde::Serialize;

use crate::phase::{Phase, PhaseView};

/// Broad fuel category for selection
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FuelCategory {
    /// Carbohydrate pick
    Carb,
    /// Protein pick
    Protein,
}

/// When in the day or competition a food is meant to be eaten
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FuelTiming {
    /// First meal of the day
    Morning,
    /// Evening meal
    Evening,
    /// Quick fuel between tournament matches
    BetweenMatches,
    /// Works at any time
    Anytime,
}

/// One row of the static fuel reference table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FoodRef {
    /// Display name
    pub name: &'static str,
    /// Carb or protein pick
    pub category: FuelCategory,
    /// Intended timing window
    pub timing: FuelTiming,
    /// Phases during which this food should be avoided
    pub avoid_during: &'static [Phase],
    /// Why it is avoided then
    pub avoid_reason: Option<&'static str>,
}

/// A food on the avoid list, with its reason
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AvoidedFood {
    /// The food being avoided
    pub food: FoodRef,
    /// Why to skip it right now
    pub reason: &'static str,
}

/// Foods grouped under one timing window
#[derive(Debug, Clone, Serialize)]
pub struct TimingGroup {
    /// The shared timing window
    pub timing: FuelTiming,
    /// Foods in that window
    pub foods: Vec<FoodRef>,
}

/// What to eat now, derived from the current phase
#[derive(Debug, Clone, Serialize)]
pub struct FuelGuideResult {
    /// Carb picks for the morning
    pub morning_carbs: Vec<FoodRef>,
    /// Carb picks for the evening
    pub evening_carbs: Vec<FoodRef>,
    /// Protein picks
    pub proteins: Vec<FoodRef>,
    /// Timing-grouped tournament list (Compete phase, between matches)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament: Option<Vec<TimingGroup>>,
    /// Everything-allowed recovery list (Recover phase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<Vec<FoodRef>>,
    /// Foods to skip right now, with reasons
    pub avoid: Vec<AvoidedFood>,
}

const HIGH_FIBER: &str = "high fiber sits heavy through the final cut";
const HIGH_SODIUM: &str = "sodium holds water you are trying to drop";
const SLOW_DIGESTING: &str = "slow to digest; save it for after the weigh-in";

/// The static fuel reference table
///
/// Data, not logic. The selector filters and groups these rows; adding a
/// food means adding a row, never touching the selection code.
pub static FUEL_REFERENCE: &[FoodRef] = &[
    FoodRef {
        name: "White rice",
        category: FuelCategory::Carb,
        timing: FuelTiming::Anytime,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Sourdough toast with honey",
        category: FuelCategory::Carb,
        timing: FuelTiming::Morning,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Banana",
        category: FuelCategory::Carb,
        timing: FuelTiming::Morning,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Oatmeal",
        category: FuelCategory::Carb,
        timing: FuelTiming::Morning,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(HIGH_FIBER),
    },
    FoodRef {
        name: "Sweet potato",
        category: FuelCategory::Carb,
        timing: FuelTiming::Evening,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(HIGH_FIBER),
    },
    FoodRef {
        name: "Pasta",
        category: FuelCategory::Carb,
        timing: FuelTiming::Evening,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(SLOW_DIGESTING),
    },
    FoodRef {
        name: "Rice cakes",
        category: FuelCategory::Carb,
        timing: FuelTiming::Anytime,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Applesauce",
        category: FuelCategory::Carb,
        timing: FuelTiming::BetweenMatches,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Honey packets",
        category: FuelCategory::Carb,
        timing: FuelTiming::BetweenMatches,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Sports drink",
        category: FuelCategory::Carb,
        timing: FuelTiming::BetweenMatches,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(HIGH_SODIUM),
    },
    FoodRef {
        name: "Pretzels",
        category: FuelCategory::Carb,
        timing: FuelTiming::BetweenMatches,
        avoid_during: &[Phase::Cut, Phase::Load],
        avoid_reason: Some(HIGH_SODIUM),
    },
    FoodRef {
        name: "Watermelon",
        category: FuelCategory::Carb,
        timing: FuelTiming::Anytime,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Chicken breast",
        category: FuelCategory::Protein,
        timing: FuelTiming::Anytime,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Egg whites",
        category: FuelCategory::Protein,
        timing: FuelTiming::Morning,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "White fish",
        category: FuelCategory::Protein,
        timing: FuelTiming::Evening,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Whey isolate",
        category: FuelCategory::Protein,
        timing: FuelTiming::Anytime,
        avoid_during: &[],
        avoid_reason: None,
    },
    FoodRef {
        name: "Greek yogurt",
        category: FuelCategory::Protein,
        timing: FuelTiming::Morning,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(SLOW_DIGESTING),
    },
    FoodRef {
        name: "Beef jerky",
        category: FuelCategory::Protein,
        timing: FuelTiming::Anytime,
        avoid_during: &[Phase::Cut, Phase::Load],
        avoid_reason: Some(HIGH_SODIUM),
    },
    FoodRef {
        name: "Chocolate milk",
        category: FuelCategory::Protein,
        timing: FuelTiming::BetweenMatches,
        avoid_during: &[Phase::Cut],
        avoid_reason: Some(SLOW_DIGESTING),
    },
];

fn allowed_in(food: &FoodRef, phase: Phase) -> bool {
    !food.avoid_during.contains(&phase)
}

fn picks(phase: Phase, category: FuelCategory, timings: &[FuelTiming]) -> Vec<FoodRef> {
    FUEL_REFERENCE
        .iter()
        .filter(|f| f.category == category && timings.contains(&f.timing) && allowed_in(f, phase))
        .copied()
        .collect()
}

fn avoid_list(phase: Phase) -> Vec<AvoidedFood> {
    FUEL_REFERENCE
        .iter()
        .filter(|f| f.avoid_during.contains(&phase))
        .filter_map(|f| {
            f.avoid_reason.map(|reason| AvoidedFood {
                food: *f,
                reason,
            })
        })
        .collect()
}

fn tournament_groups(phase: Phase) -> Vec<TimingGroup> {
    let mut groups = Vec::new();
    for timing in [FuelTiming::BetweenMatches, FuelTiming::Anytime] {
        let foods: Vec<FoodRef> = FUEL_REFERENCE
            .iter()
            .filter(|f| f.timing == timing && allowed_in(f, phase))
            .copied()
            .collect();
        if !foods.is_empty() {
            groups.push(TimingGroup { timing, foods });
        }
    }
    groups
}

/// Select the actionable fuel guide for the current phase
///
/// The complexity here is choosing which slice of the table to show, not
/// arithmetic: recovery opens everything up, competition day switches to
/// the timing-grouped tournament view when the athlete is between
/// matches, and the cut phases trim the lists down and explain what got
/// cut and why. SPAR protocols see the unrestricted table.
#[must_use]
pub fn select_fuel_guide(view: PhaseView, between_matches: bool) -> FuelGuideResult {
    let phase = match view {
        PhaseView::NutritionTracking => {
            // No phase restriction: show the full table.
            return FuelGuideResult {
                morning_carbs: picks(Phase::Train, FuelCategory::Carb, &[
                    FuelTiming::Morning,
                    FuelTiming::Anytime,
                ]),
                evening_carbs: picks(Phase::Train, FuelCategory::Carb, &[
                    FuelTiming::Evening,
                    FuelTiming::Anytime,
                ]),
                proteins: picks(Phase::Train, FuelCategory::Protein, &[
                    FuelTiming::Morning,
                    FuelTiming::Evening,
                    FuelTiming::BetweenMatches,
                    FuelTiming::Anytime,
                ]),
                tournament: None,
                recovery: None,
                avoid: Vec::new(),
            };
        }
        PhaseView::WeightCut(phase) => phase,
    };

    if phase == Phase::Recover {
        return FuelGuideResult {
            morning_carbs: Vec::new(),
            evening_carbs: Vec::new(),
            proteins: Vec::new(),
            tournament: None,
            recovery: Some(FUEL_REFERENCE.to_vec()),
            avoid: Vec::new(),
        };
    }

    if phase == Phase::Compete && between_matches {
        return FuelGuideResult {
            morning_carbs: Vec::new(),
            evening_carbs: Vec::new(),
            proteins: Vec::new(),
            tournament: Some(tournament_groups(phase)),
            recovery: None,
            avoid: avoid_list(phase),
        };
    }

    FuelGuideResult {
        morning_carbs: picks(phase, FuelCategory::Carb, &[
            FuelTiming::Morning,
            FuelTiming::Anytime,
        ]),
        evening_carbs: picks(phase, FuelCategory::Carb, &[
            FuelTiming::Evening,
            FuelTiming::Anytime,
        ]),
        proteins: picks(phase, FuelCategory::Protein, &[
            FuelTiming::Morning,
            FuelTiming::Evening,
            FuelTiming::BetweenMatches,
            FuelTiming::Anytime,
        ]),
        tournament: None,
        recovery: None,
        avoid: avoid_list(phase),
    }
}
