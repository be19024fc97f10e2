// ABOUTME: Command handlers for the Makeweight CLI
// ABOUTME: Loads the snapshot, applies one mutation or evaluation, saves, and prints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{Args, Subcommand};

use makeweight::models::{NutrientFacts, Profile, Protocol, WeightLog, WeightLogType};
use makeweight::persistence::{JsonFileStore, SnapshotStore};
use makeweight::state::StateSnapshot;
use makeweight_engine::evaluation::Evaluation;
use makeweight_engine::safety::SafetyLevel;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Create or replace the athlete profile
    Set(ProfileSetArgs),
    /// Show the stored profile
    Show,
}

/// Arguments for `profile set`
#[derive(Args)]
pub struct ProfileSetArgs {
    /// Current body weight (lbs)
    #[arg(long)]
    pub weight: f64,

    /// Target weight class limit (lbs)
    #[arg(long = "class")]
    pub weight_class: f64,

    /// Weigh-in date (YYYY-MM-DD) or RFC 3339 instant
    #[arg(long)]
    pub weigh_in: Option<String>,

    /// Cut protocol (rapid_cut, optimal_cut, gradual_cut, spar_general, spar_competition)
    #[arg(long)]
    pub protocol: Protocol,

    /// Simulated "today" for history views (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for `log-weight`
#[derive(Args)]
pub struct LogWeightArgs {
    /// When in the day (morning, pre_practice, post_practice, before_bed, weigh_in)
    #[arg(long = "type")]
    pub log_type: WeightLogType,

    /// Body weight (lbs)
    #[arg(long)]
    pub weight: f64,

    /// Timestamp override (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}

/// Arguments for `log-food`
#[derive(Args)]
pub struct LogFoodArgs {
    /// Energy (kcal)
    #[arg(long)]
    pub calories: f64,

    /// Protein (g)
    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,

    /// Carbohydrates (g)
    #[arg(long, default_value_t = 0.0)]
    pub carbs: f64,

    /// Fat (g)
    #[arg(long, default_value_t = 0.0)]
    pub fat: f64,

    /// Fiber (g)
    #[arg(long, default_value_t = 0.0)]
    pub fiber: f64,

    /// Number of servings
    #[arg(long, default_value_t = 1.0)]
    pub servings: f64,

    /// Free-text category hint from the food source
    #[arg(long)]
    pub hint: Option<String>,
}

/// Arguments for `log-water`
#[derive(Args)]
pub struct LogWaterArgs {
    /// Water volume (ml)
    #[arg(long)]
    pub ml: u32,
}

fn parse_weigh_in(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = raw.parse::<DateTime<Utc>>() {
        return Ok(instant);
    }
    let date: NaiveDate = raw
        .parse()
        .with_context(|| format!("'{raw}' is neither a date nor an RFC 3339 instant"))?;
    // Weigh-ins default to 09:00 UTC on the given date.
    date.and_hms_opt(9, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| anyhow!("could not build a weigh-in instant from '{raw}'"))
}

fn load_snapshot(store: &JsonFileStore) -> Result<StateSnapshot> {
    store
        .load()?
        .ok_or_else(|| anyhow!("no profile yet - run `makeweight-cli profile set` first"))
}

/// Evaluate, rendering configuration errors as a blocking setup state
fn evaluate_blocking(snapshot: &StateSnapshot) -> Result<Evaluation> {
    snapshot.evaluate(Utc::now()).map_err(|err| {
        if err.is_configuration() {
            anyhow!("setup incomplete: {err}")
        } else {
            anyhow!(err.to_string())
        }
    })
}

/// Handle `profile` subcommands
pub fn profile(store: &JsonFileStore, action: ProfileCommand) -> Result<()> {
    match action {
        ProfileCommand::Set(args) => {
            let weigh_in_at = args.weigh_in.as_deref().map(parse_weigh_in).transpose()?;
            let profile = Profile {
                current_weight_lbs: args.weight,
                target_weight_class_lbs: args.weight_class,
                weigh_in_at,
                protocol: args.protocol,
                simulated_date: args.today,
            };
            profile
                .validate()
                .map_err(|err| anyhow!("setup incomplete: {err}"))?;
            let snapshot = match store.load()? {
                Some(mut existing) => {
                    existing.profile = profile;
                    existing
                }
                None => StateSnapshot::new(profile),
            };
            store.save(&snapshot)?;
            println!("Profile saved.");
            Ok(())
        }
        ProfileCommand::Show => {
            let snapshot = load_snapshot(store)?;
            let p = &snapshot.profile;
            println!("protocol:      {}", p.protocol);
            println!("weight:        {:.1} lbs", p.current_weight_lbs);
            println!("weight class:  {:.1} lbs", p.target_weight_class_lbs);
            match p.weigh_in_at {
                Some(at) => println!("weigh-in:      {at}"),
                None => println!("weigh-in:      (none)"),
            }
            Ok(())
        }
    }
}

fn level_tag(level: SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Safe => "SAFE",
        SafetyLevel::Caution => "CAUTION",
        SafetyLevel::Warning => "WARNING",
        SafetyLevel::Danger => "DANGER",
    }
}

/// Handle `status`
pub fn status(store: &JsonFileStore) -> Result<()> {
    let snapshot = load_snapshot(store)?;
    let eval = evaluate_blocking(&snapshot)?;

    println!("phase:         {:?}", eval.phase);
    println!("days out:      {}", eval.days_until_weigh_in);
    println!("current:       {:.1} lbs", eval.current_weight_lbs);
    println!("target today:  {:.1} lbs", eval.target_weight_lbs);
    println!(
        "safety:        [{}] {}",
        level_tag(eval.safety.level),
        eval.safety.message
    );
    if let Some(detail) = &eval.safety.detail {
        println!("               {detail}");
    }
    if let Some(adjustment) = &eval.adjustment {
        println!(
            "calories:      {:+} ({:?}/{:?}) - {}",
            adjustment.calorie_adjustment, adjustment.goal, adjustment.intensity, adjustment.reason
        );
    }
    let macros = &eval.macro_targets;
    println!(
        "macros:        {} kcal / {}P {}C {}F",
        macros.calories, macros.protein_g, macros.carbs_g, macros.fat_g
    );
    println!("water:         {} ml", eval.water_target_ml);
    if let Some(advice) = &eval.advice {
        println!(
            "advice:        [{:?}] switch {} -> {}: {}",
            advice.urgency, advice.current, advice.recommended, advice.message
        );
    }
    if !eval.completion.complete {
        let missing: Vec<String> = eval
            .completion
            .missing
            .iter()
            .map(|t| format!("{t:?}"))
            .collect();
        println!("still to log:  {}", missing.join(", "));
    }
    Ok(())
}

/// Handle `log-weight`
pub fn log_weight(store: &JsonFileStore, args: &LogWeightArgs) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let at = args.at.unwrap_or_else(Utc::now);
    let log = WeightLog::new(at, args.log_type, args.weight)
        .map_err(|err| anyhow!(err.to_string()))?;
    snapshot.append_log(log);
    store.save(&snapshot)?;
    println!("Logged {:.1} lbs ({:?}).", args.weight, args.log_type);
    Ok(())
}

/// Handle `log-food`
pub fn log_food(store: &JsonFileStore, args: &LogFoodArgs) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let facts = NutrientFacts {
        calories: args.calories,
        protein_g: args.protein,
        carbs_g: args.carbs,
        fat_g: args.fat,
        fiber_g: args.fiber,
        ..NutrientFacts::default()
    };
    let today = snapshot.profile.today(Utc::now());
    let category = snapshot.log_food(today, &facts, args.servings, args.hint.as_deref());
    store.save(&snapshot)?;
    println!("Logged food as a {category:?} slice.");
    Ok(())
}

/// Handle `log-water`
pub fn log_water(store: &JsonFileStore, args: &LogWaterArgs) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let today = snapshot.profile.today(Utc::now());
    snapshot.tracking_mut(today).add_water(args.ml);
    let total = snapshot
        .daily
        .get(&today)
        .map_or(0, |tracking| tracking.water_ml);
    store.save(&snapshot)?;
    println!("Water today: {total} ml.");
    Ok(())
}

/// Handle `rest-day`
pub fn rest_day(store: &JsonFileStore) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let today = snapshot.profile.today(Utc::now());
    snapshot.tracking_mut(today).no_practice = true;
    store.save(&snapshot)?;
    println!("Marked {today} as a rest day.");
    Ok(())
}

/// Handle `fuel-guide`
pub fn fuel_guide(store: &JsonFileStore, between_matches: bool) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    snapshot.between_matches = between_matches;
    let eval = evaluate_blocking(&snapshot)?;
    let guide = &eval.fuel_guide;

    if let Some(recovery) = &guide.recovery {
        println!("Recovery - everything is back on the table:");
        for food in recovery {
            println!("  {}", food.name);
        }
        return Ok(());
    }
    if let Some(groups) = &guide.tournament {
        println!("Between matches:");
        for group in groups {
            println!("  [{:?}]", group.timing);
            for food in &group.foods {
                println!("    {}", food.name);
            }
        }
        return Ok(());
    }

    println!("Morning carbs:");
    for food in &guide.morning_carbs {
        println!("  {}", food.name);
    }
    println!("Evening carbs:");
    for food in &guide.evening_carbs {
        println!("  {}", food.name);
    }
    println!("Proteins:");
    for food in &guide.proteins {
        println!("  {}", food.name);
    }
    if !guide.avoid.is_empty() {
        println!("Avoid right now:");
        for avoided in &guide.avoid {
            println!("  {} - {}", avoided.food.name, avoided.reason);
        }
    }
    Ok(())
}

/// Handle `dismiss`
pub fn dismiss(store: &JsonFileStore) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let eval = evaluate_blocking(&snapshot)?;
    let Some(advice) = eval.advice else {
        bail!("no recommendation is currently surfaced");
    };
    snapshot.dismiss(advice.dismissal_key());
    store.save(&snapshot)?;
    println!(
        "Dismissed the {} -> {} recommendation.",
        advice.current, advice.recommended
    );
    Ok(())
}

/// Handle `accept-switch`
pub fn accept_switch(store: &JsonFileStore) -> Result<()> {
    let mut snapshot = load_snapshot(store)?;
    let eval = evaluate_blocking(&snapshot)?;
    let Some(advice) = eval.advice else {
        bail!("no recommendation is currently surfaced");
    };
    snapshot.accept_switch(advice.dismissal_key());
    store.save(&snapshot)?;
    println!("Switched protocol to {}.", advice.recommended);
    Ok(())
}
