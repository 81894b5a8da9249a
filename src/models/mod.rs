// ABOUTME: Data models for athlete profiles, workout records and generated nutrition plans
// ABOUTME: Re-exports the input and output types consumed by the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs arrive as provider-shaped JSON and are decoded with `serde`:
//!
//! - `AthleteProfile`: biometrics and discipline thresholds
//! - `WorkoutRecord`: one session with its load signal
//!
//! Outputs are `DayPlan` values collected into a day-ordered `NutritionPlan`.

/// Athlete profile and sex
pub mod athlete;
/// Day plans and load breakdown
pub mod plan;
/// Workout records, disciplines and load signals
pub mod workout;

pub use athlete::{AthleteProfile, Sex};
pub use plan::{DayLoadSummary, DayPlan, DisciplineSummary, EnergyBaseline, NutritionPlan};
pub use workout::{
    parse_workouts, Discipline, IntensityTarget, StructureBlock, StructureStep, WorkoutRecord,
    WorkoutSignal, WorkoutStructure,
};
