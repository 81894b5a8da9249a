// ABOUTME: Fueling intelligence: energy need, training load, expenditure and macro allocation
// ABOUTME: Wires the per-day pipeline behind generate_nutrition_plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous computation from an athlete profile and workout records
//! to a per-day nutrition plan:
//!
//! 1. [`energy`] computes BMR, TDEE and the intake estimate once
//! 2. [`workout_grouping`] buckets records by day and discipline
//! 3. [`training_load`] aggregates pace/power and hours per discipline
//! 4. [`expenditure`] converts load into kilocalories
//! 5. [`macro_allocator`] apportions calories into carbohydrate, protein and fat
//! 6. [`plan_generator`] runs the steps above for every day

/// BMR, TDEE and intake estimation
pub mod energy;
/// Running, cycling and swimming kcal estimators
pub mod expenditure;
/// Calorie floor and macronutrient targets
pub mod macro_allocator;
/// Plan assembly
pub mod plan_generator;
/// Per-discipline load aggregation
pub mod training_load;
/// Day bucketing and discipline classification
pub mod workout_grouping;

pub use energy::{basal_energy, energy_baseline, intake_energy_estimate, total_energy_expenditure};
pub use expenditure::{cycling_expenditure, running_expenditure, swim_expenditure};
pub use macro_allocator::{allocate, summarize_load, MacroTargets};
pub use plan_generator::generate_nutrition_plan;
pub use training_load::{accumulate_day, average_target_intensity, DayTotals, DisciplineTotals};
pub use workout_grouping::{group_by_day, ClassifiedWorkout, DayWorkouts};
