// ABOUTME: Main library entry point for the Pierre fuel planner
// ABOUTME: Computes per-day calorie and macronutrient targets from swim/bike/run workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): pure computation, no exceptions
#![deny(unsafe_code)]

//! # Pierre Fuel Planner
//!
//! Turns an endurance athlete's planned or completed workouts into a per-day
//! nutrition plan: total calories plus carbohydrate, protein and fat grams.
//!
//! ## Pipeline
//!
//! - **Energy need**: Mifflin-St Jeor BMR, activity-scaled TDEE, optional weight-loss deficit
//! - **Grouping**: workouts bucketed by day in first-seen order, unsupported types skipped
//! - **Training load**: pace/power and hours per discipline from intensity factors,
//!   swim distance or duration, or structured interval targets
//! - **Expenditure**: oxygen-cost estimates for running and cycling, a flat rate for swimming
//! - **Macros**: TSS-driven carbohydrate, g/lb protein, fat from the remainder, with a calorie floor
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_fuel_planner::config::PlanConfig;
//! use pierre_fuel_planner::errors::AppResult;
//! use pierre_fuel_planner::intelligence::generate_nutrition_plan;
//! use pierre_fuel_planner::models::{parse_workouts, AthleteProfile};
//!
//! fn main() -> AppResult<()> {
//!     let profile = AthleteProfile::from_json(
//!         r#"{"sex":"M","height":170,"weight":70,"age":33,
//!             "bike_threshold":162,"run_threshold":6.17,"swim_threshold":2.33}"#,
//!     )?;
//!     let workouts = parse_workouts(
//!         r#"[{"workoutDay":"2024-01-01T00:00:00","workout_typeValueId":3,
//!              "totalTime":1.0,"ifPlanned":0.9}]"#,
//!     )?;
//!
//!     let plan = generate_nutrition_plan(&profile, &workouts, &PlanConfig::load()?)?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Configuration management: nutrition coefficients and plan settings
pub mod config;

/// Unit conversions and fueling heuristics
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Energy, training load, expenditure and macronutrient calculations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Athlete, workout and plan data models
pub mod models;

pub use config::PlanConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::generate_nutrition_plan;
pub use models::{AthleteProfile, DayPlan, NutritionPlan, WorkoutRecord};
