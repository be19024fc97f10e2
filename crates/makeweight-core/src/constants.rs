// ABOUTME: Weight-cut safety and nutrition policy constants based on combat-sports research
// ABOUTME: Named thresholds for safety banding, calorie scaling, slice ratios, and hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

//! Policy constants based on combat-sports weight-management research
//!
//! Every number that encodes domain safety policy lives here under a name,
//! never inline in branching logic, so the policy can be audited and tested
//! independently of the code that applies it. Engine configuration structs
//! default to these values and may override them per process.

/// Safety banding thresholds for the weight-vs-target delta
///
/// References:
/// - NCAA Wrestling Weight Management Program (weekly weight-loss limits)
/// - Reale, R., Slater, G., & Burke, L.M. (2017). Acute-Weight-Loss
///   Strategies for Combat Sports and Applications to Olympic Success
/// - ACSM Position Stand: Weight Loss in Wrestlers (1996, reaffirmed 2011)
pub mod safety {
    /// Pounds over target inside the final 24 hours that constitute danger
    ///
    /// Beyond this, the remaining loss is almost entirely acute dehydration,
    /// which degrades performance and carries medical risk.
    /// Reference: Reale et al. (2017), hypohydration exceeding ~3% body mass
    pub const DANGER_DELTA_24H_LBS: f64 = 3.0;

    /// Pounds over target inside the final 48 hours that constitute danger
    pub const WARNING_DELTA_48H_LBS: f64 = 4.0;

    /// Days-until-weigh-in at or below which the final-48h banding applies
    pub const CRITICAL_DAYS_THRESHOLD: i64 = 2;

    /// Maximum safe total cut as a percentage of the target weight class
    ///
    /// Reference: ACSM guidance capping weekly loss near 1.5% of body mass;
    /// a delta above this share of the class weight cannot be closed safely.
    pub const MAX_SAFE_TOTAL_CUT_PERCENT: f64 = 5.0;

    /// Final-day delta above which the level is at least `Warning`
    pub const FINAL_DAY_WARNING_DELTA_LBS: f64 = 2.0;

    /// Final-48h delta above which the level is at least `Warning`
    pub const FINAL_48H_WARNING_DELTA_LBS: f64 = 3.0;

    /// Early-cut delta above which the level is at least `Caution`
    pub const EARLY_CAUTION_DELTA_LBS: f64 = 5.0;

    /// Delta below target past which a rehydration hint is attached
    ///
    /// Sitting well under target early costs training quality for nothing;
    /// the athlete should eat and drink back toward the curve.
    pub const REHYDRATION_HINT_DELTA_LBS: f64 = -2.0;
}

/// Calorie adjustment policy for the competition timeline
///
/// References:
/// - Reale, R., Slater, G., & Burke, L.M. (2017). Individualised dietary
///   strategies for Olympic combat sports
/// - Wilmore, J.H. & Costill, D.L. (2004). Physiology of Sport and Exercise
///   (energy balance, ~3500 kcal per pound of body mass)
pub mod adjustment {
    /// Walk-around weight as a multiple of the target weight class
    ///
    /// A comfortably hydrated athlete sits about 7% over the class limit
    /// between competitions.
    pub const WALK_AROUND_MULTIPLIER: f64 = 1.07;

    /// Daily calorie deficit per pound over walk-around weight
    pub const CALORIES_PER_LB_OVER: f64 = 150.0;

    /// Largest daily deficit the scaled formula may produce
    pub const MAX_DAILY_DEFICIT: i32 = 750;

    /// Smallest daily deficit the scaled formula may produce
    pub const MIN_SCALED_DEFICIT: i32 = 250;

    /// Fixed deficit during the final water-cut days
    pub const WATER_CUT_DEFICIT: i32 = 500;

    /// Fixed lean deficit while loading at or under walk-around weight
    pub const LEAN_PHASE_DEFICIT: i32 = 250;

    /// Fixed surplus on competition day (refuel for performance)
    pub const COMPETITION_DAY_SURPLUS: i32 = 250;

    /// Fixed surplus after the event (full refeed)
    pub const POST_EVENT_SURPLUS: i32 = 500;

    /// Deficit magnitude at or beyond which intensity reads as aggressive
    pub const AGGRESSIVE_DEFICIT_THRESHOLD: i32 = 500;

    /// Daily protein target in grams per pound of weight class
    ///
    /// Reference: Phillips, S.M. & Van Loon, L.J. (2011). Dietary protein
    /// for athletes: from requirements to optimum adaptation
    pub const PROTEIN_G_PER_LB_CLASS: f64 = 1.0;

    /// Share of daily calories allotted to fat
    pub const FAT_CALORIE_FRACTION: f64 = 0.25;

    /// Maintenance calories per pound of walk-around weight
    pub const MAINTENANCE_CALORIES_PER_LB: f64 = 15.0;
}

/// Macro-ratio thresholds for slice categorization
///
/// Slice tracking assigns each food to one portion category from its
/// dominant macro share. The thresholds are calibrated against the
/// categorized food data already in the field and must not drift.
pub mod slices {
    /// Calories per gram of protein (Atwater factor)
    pub const CALORIES_PER_G_PROTEIN: f64 = 4.0;

    /// Calories per gram of carbohydrate (Atwater factor)
    pub const CALORIES_PER_G_CARB: f64 = 4.0;

    /// Calories per gram of fat (Atwater factor)
    pub const CALORIES_PER_G_FAT: f64 = 9.0;

    /// Protein calorie share above which a food counts as a protein slice
    pub const PROTEIN_SHARE_THRESHOLD: f64 = 0.40;

    /// Fat calorie share above which a food counts as a fat slice
    pub const FAT_SHARE_THRESHOLD: f64 = 0.60;

    /// Carb calorie share above which a food counts as a carb slice
    pub const CARB_SHARE_THRESHOLD: f64 = 0.40;

    /// Fiber grams above which a carb-dominant food counts as vegetables
    pub const VEG_FIBER_MIN_G: f64 = 3.0;
}

/// Weight-trend projection policy
pub mod trend {
    /// Days of morning weigh-ins considered for the projection window
    pub const PROJECTION_WINDOW_DAYS: i64 = 7;

    /// Minimum morning weigh-ins required before projecting
    pub const MIN_PROJECTION_POINTS: usize = 3;

    /// Projected pounds over class at weigh-in that triggers switch advice
    pub const SWITCH_MARGIN_LBS: f64 = 1.5;

    /// Days remaining at or below which projected overshoot is high urgency
    pub const HIGH_URGENCY_DAYS: i64 = 3;

    /// Projected overshoot in pounds at or above which urgency escalates
    pub const HIGH_URGENCY_OVERSHOOT_LBS: f64 = 4.0;
}

/// Daily water targets by cut phase (milliliters)
///
/// Water loading raises intake well above baseline days out, then tapers
/// hard into the weigh-in so the body keeps flushing.
/// Reference: Reale et al. (2018). Water loading for acute weight loss
pub mod hydration {
    /// Baseline daily water during normal training
    pub const TRAIN_WATER_ML: u32 = 3500;

    /// Loading-phase daily water (3-5 days out)
    pub const LOAD_WATER_ML: u32 = 7000;

    /// Final-cut daily water (1-2 days out)
    pub const CUT_WATER_ML: u32 = 1500;

    /// Competition-day sips between matches
    pub const COMPETE_WATER_ML: u32 = 750;

    /// Recovery-phase daily water for rehydration
    pub const RECOVER_WATER_ML: u32 = 5000;
}

/// Weight-based protocol recommendation boundaries
///
/// Percent over the weight class maps to the protocol family with enough
/// runway to close the gap at a safe weekly rate.
pub mod recommendation {
    /// At or under the class limit: nutrition tracking only
    pub const SPAR_MAX_OVER_PERCENT: f64 = 0.0;

    /// Up to this percent over, a short water-dominant cut suffices
    pub const RAPID_MAX_OVER_PERCENT: f64 = 5.0;

    /// Up to this percent over, a standard two-week cut fits
    pub const OPTIMAL_MAX_OVER_PERCENT: f64 = 10.0;
}
