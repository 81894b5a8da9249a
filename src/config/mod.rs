// ABOUTME: Configuration module for nutrition plan generation
// ABOUTME: Re-exports plan settings, nutrition coefficients, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the fuel planner
//!
//! - **Plan**: weight-loss mode, activity level, deficit tier, calorie floor
//! - **Nutrition**: Mifflin-St Jeor coefficients, activity factors, deficit sizes
//!
//! Configuration is an explicit value passed to
//! [`generate_nutrition_plan`](crate::intelligence::plan_generator::generate_nutrition_plan);
//! there is no process-wide singleton.

/// Configuration error types
pub mod error;
/// Nutrition coefficient configuration (BMR, activity factors, deficits)
pub mod nutrition;
/// Plan-level settings and environment loading
pub mod plan;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, ActivityLevel, BmrConfig, CalorieDeficitConfig, DeficitTier,
    NutritionConfig,
};
pub use plan::PlanConfig;
