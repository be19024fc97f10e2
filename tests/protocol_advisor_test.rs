// ABOUTME: Unit tests for the protocol switch advisor
// ABOUTME: Validates source precedence, SPAR suppression, and pair-keyed dismissal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use std::collections::HashSet;

use makeweight::models::{Profile, Protocol};
use makeweight_engine::advisor::{advise, recommend_protocol, DismissalKey, RecommendationSource};
use makeweight_engine::trend::{ProjectionAdvice, Urgency};

fn profile(current: f64, protocol: Protocol) -> Profile {
    Profile {
        current_weight_lbs: current,
        target_weight_class_lbs: 150.0,
        weigh_in_at: Some(Utc::now() + Duration::days(10)),
        protocol,
        simulated_date: None,
    }
}

#[test]
fn test_weight_based_mapping_by_percent_over_class() {
    assert_eq!(recommend_protocol(148.0, 150.0), Protocol::SparGeneral);
    assert_eq!(recommend_protocol(150.0, 150.0), Protocol::SparGeneral);
    // 5% over 150 is 157.5.
    assert_eq!(recommend_protocol(157.0, 150.0), Protocol::RapidCut);
    // 10% over is 165.
    assert_eq!(recommend_protocol(162.0, 150.0), Protocol::OptimalCut);
    assert_eq!(recommend_protocol(170.0, 150.0), Protocol::GradualCut);
}

#[test]
fn test_weight_based_mismatch_surfaces() {
    let p = profile(170.0, Protocol::RapidCut);
    let rec = advise(&p, 170.0, None, &HashSet::new()).expect("mismatch should surface");
    assert_eq!(rec.recommended, Protocol::GradualCut);
    assert_eq!(rec.current, Protocol::RapidCut);
    assert_eq!(rec.source, RecommendationSource::WeightBased);
}

#[test]
fn test_matching_protocol_stays_quiet() {
    let p = profile(162.0, Protocol::OptimalCut);
    assert!(advise(&p, 162.0, None, &HashSet::new()).is_none());
}

#[test]
fn test_spar_protocols_are_never_nagged_by_weight() {
    // Spar targets auto-adjust; a weight-based mismatch must not surface.
    let p = profile(170.0, Protocol::SparGeneral);
    assert!(advise(&p, 170.0, None, &HashSet::new()).is_none());
}

#[test]
fn test_projection_advice_wins_over_weight_based() {
    let projection = ProjectionAdvice {
        switch_protocol: true,
        urgency: Urgency::High,
        message: "trend misses the class limit".into(),
    };
    let p = profile(162.0, Protocol::RapidCut);
    let rec = advise(&p, 162.0, Some(&projection), &HashSet::new())
        .expect("projection should surface");
    assert_eq!(rec.source, RecommendationSource::Projection);
    assert_eq!(rec.urgency, Urgency::High);
    assert_eq!(rec.message, "trend misses the class limit");

    // With no projection, the same profile falls back to weight-based.
    let fallback = advise(&p, 162.0, None, &HashSet::new()).expect("weight-based fallback");
    assert_eq!(fallback.source, RecommendationSource::WeightBased);
}

#[test]
fn test_projection_without_switch_flag_falls_through() {
    let projection = ProjectionAdvice {
        switch_protocol: false,
        urgency: Urgency::Low,
        message: "on track".into(),
    };
    let p = profile(162.0, Protocol::RapidCut);
    let rec = advise(&p, 162.0, Some(&projection), &HashSet::new())
        .expect("weight-based mismatch still applies");
    assert_eq!(rec.source, RecommendationSource::WeightBased);
}

#[test]
fn test_dismissal_suppresses_only_the_exact_pair() {
    let mut dismissals = HashSet::new();
    dismissals.insert(DismissalKey {
        recommended: Protocol::RapidCut,
        current: Protocol::OptimalCut,
    });

    // The dismissed pair stays quiet.
    let p = profile(157.0, Protocol::OptimalCut);
    assert!(advise(&p, 157.0, None, &dismissals).is_none());

    // A different mismatch with the same current protocol re-triggers:
    // dismissing (RapidCut, OptimalCut) must not suppress
    // (SparGeneral, OptimalCut).
    let p = profile(149.0, Protocol::OptimalCut);
    let rec = advise(&p, 149.0, None, &dismissals).expect("different pair re-triggers");
    assert_eq!(rec.recommended, Protocol::SparGeneral);
}

#[test]
fn test_dismissal_applies_to_projection_recommendations_too() {
    let mut dismissals = HashSet::new();
    dismissals.insert(DismissalKey {
        recommended: Protocol::OptimalCut,
        current: Protocol::RapidCut,
    });
    let projection = ProjectionAdvice {
        switch_protocol: true,
        urgency: Urgency::Medium,
        message: "trend misses".into(),
    };
    let p = profile(162.0, Protocol::RapidCut);
    assert!(advise(&p, 162.0, Some(&projection), &dismissals).is_none());
}
