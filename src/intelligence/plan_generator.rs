// ABOUTME: Nutrition plan assembly across all training days
// ABOUTME: Computes the energy baseline once, then aggregates, estimates and allocates per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PlanConfig;
use crate::errors::AppResult;
use crate::intelligence::energy::energy_baseline;
use crate::intelligence::macro_allocator::{allocate, summarize_load};
use crate::intelligence::training_load::accumulate_day;
use crate::intelligence::workout_grouping::{group_by_day, DayWorkouts};
use crate::models::{AthleteProfile, DayPlan, EnergyBaseline, NutritionPlan, WorkoutRecord};
use tracing::{debug, info};

/// Generate per-day calorie and macronutrient targets
///
/// Days appear in the order they are first seen in `workouts`. Records with an
/// unsupported workout type are skipped with a warning.
///
/// # Arguments
/// * `profile` - Athlete biometrics and thresholds
/// * `workouts` - Workout records in input order
/// * `config` - Weight-loss mode, activity level, deficit tier and calorie floor
///
/// # Errors
///
/// Returns `InvalidProfile` if the profile fails validation, `ConfigInvalid`
/// if the configuration does, or `MalformedWorkout` (with the record index) if a
/// bike or run record has no intensity factor and unusable structured targets
pub fn generate_nutrition_plan(
    profile: &AthleteProfile,
    workouts: &[WorkoutRecord],
    config: &PlanConfig,
) -> AppResult<NutritionPlan> {
    profile.validate()?;
    config.validate()?;

    let baseline = energy_baseline(profile, config);
    let grouped = group_by_day(workouts);

    info!(
        days = grouped.len(),
        workouts = workouts.len(),
        bmr = baseline.bmr,
        tdee = baseline.tdee,
        intake = baseline.intake,
        weight_loss = config.weight_loss,
        "Generating nutrition plan"
    );

    let days = grouped
        .iter()
        .map(|day| Ok((day.day.to_owned(), plan_day(day, profile, config, &baseline)?)))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(NutritionPlan::new(baseline, days))
}

fn plan_day(
    day: &DayWorkouts<'_>,
    profile: &AthleteProfile,
    config: &PlanConfig,
    baseline: &EnergyBaseline,
) -> AppResult<DayPlan> {
    let totals = accumulate_day(day, profile)?;
    let load = summarize_load(&totals, profile);
    let targets = allocate(baseline.intake, &load, profile, config);

    debug!(
        day = day.day,
        swim_hours = load.swim.hours,
        bike_hours = load.bike.hours,
        run_hours = load.run.hours,
        exercise_kcal = load.total_kcal(),
        tss = load.tss,
        total_calories = targets.total_calories,
        carbohydrate_g = targets.carbohydrate_g,
        protein_g = targets.protein_g,
        fat_g = targets.fat_g,
        "Planned day"
    );

    Ok(DayPlan {
        workouts: day.labels(),
        total_calories: targets.total_calories,
        carbohydrate_g: targets.carbohydrate_g,
        protein_g: targets.protein_g,
        fat_g: targets.fat_g,
        load,
    })
}
