// ABOUTME: Tests for plan configuration defaults, validation and FUEL_* environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_fuel_planner::config::plan::{
    ENV_ACTIVITY_LEVEL, ENV_BMR_FEMALE_CONSTANT, ENV_BMR_MALE_CONSTANT, ENV_CALORIE_FLOOR,
    ENV_DEFICIT_TIER, ENV_WEIGHT_LOSS,
};
use pierre_fuel_planner::config::{
    ActivityLevel, ConfigError, DeficitTier, NutritionConfig, PlanConfig,
};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    ENV_WEIGHT_LOSS,
    ENV_ACTIVITY_LEVEL,
    ENV_DEFICIT_TIER,
    ENV_CALORIE_FLOOR,
    ENV_BMR_MALE_CONSTANT,
    ENV_BMR_FEMALE_CONSTANT,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and validation
// ============================================================================

#[test]
fn test_plan_config_defaults() {
    let config = PlanConfig::default();

    assert!(config.weight_loss);
    assert_eq!(config.activity_level, ActivityLevel::Sedentary);
    assert_eq!(config.deficit_tier, DeficitTier::Medium);
    assert!((config.calorie_floor - 1600.0).abs() < f64::EPSILON);
    assert!((config.active_deficit() - 500.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_active_deficit_zero_without_weight_loss() {
    let config = PlanConfig {
        weight_loss: false,
        ..PlanConfig::default()
    };
    assert!(config.active_deficit().abs() < f64::EPSILON);
}

#[test]
fn test_negative_floor_rejected() {
    let config = PlanConfig {
        calorie_floor: -100.0,
        ..PlanConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_descending_activity_factors_rejected() {
    let mut nutrition = NutritionConfig::default();
    nutrition.activity_factors.very_active = 1.5;
    assert!(matches!(
        nutrition.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_deficit_tier_parsing() {
    assert_eq!("LOW".parse::<DeficitTier>().unwrap(), DeficitTier::Low);
    assert_eq!(
        DeficitTier::from_str_or_default("extreme"),
        DeficitTier::Medium
    );
    assert!(matches!(
        "extreme".parse::<DeficitTier>(),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_plan_config_deserializes_with_default_nutrition() {
    let config: PlanConfig = serde_json::from_str(
        r#"{"weight_loss": false, "activity_level": "very_active",
            "deficit_tier": "aggressive", "calorie_floor": 1800}"#,
    )
    .unwrap();

    assert_eq!(config.activity_level, ActivityLevel::VeryActive);
    assert_eq!(config.deficit_tier, DeficitTier::Aggressive);
    assert!((config.nutrition.bmr.msj_female_constant + 161.0).abs() < f64::EPSILON);
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_load_without_env_matches_defaults() {
    clear_env();
    let config = PlanConfig::load().unwrap();

    assert!(config.weight_loss);
    assert_eq!(config.activity_level, ActivityLevel::Sedentary);
}

#[test]
#[serial]
fn test_load_applies_env_overrides() {
    clear_env();
    env::set_var(ENV_WEIGHT_LOSS, "false");
    env::set_var(ENV_ACTIVITY_LEVEL, "moderately_active");
    env::set_var(ENV_DEFICIT_TIER, "low");
    env::set_var(ENV_CALORIE_FLOOR, "1750");
    env::set_var(ENV_BMR_MALE_CONSTANT, "6");

    let config = PlanConfig::load().unwrap();
    clear_env();

    assert!(!config.weight_loss);
    assert_eq!(config.activity_level, ActivityLevel::ModeratelyActive);
    assert_eq!(config.deficit_tier, DeficitTier::Low);
    assert!((config.calorie_floor - 1750.0).abs() < f64::EPSILON);
    assert!((config.nutrition.bmr.msj_male_constant - 6.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unknown_env_choices_fall_back_to_defaults() {
    clear_env();
    env::set_var(ENV_ACTIVITY_LEVEL, "couch");
    env::set_var(ENV_DEFICIT_TIER, "extreme");

    let config = PlanConfig::load().unwrap();
    clear_env();

    assert_eq!(config.activity_level, ActivityLevel::Sedentary);
    assert_eq!(config.deficit_tier, DeficitTier::Medium);
    assert!((config.active_deficit() - 500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_load_rejects_unparseable_env() {
    clear_env();
    env::set_var(ENV_CALORIE_FLOOR, "plenty");

    let result = PlanConfig::load();
    clear_env();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains(ENV_CALORIE_FLOOR)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_load_rejects_negative_env_floor() {
    clear_env();
    env::set_var(ENV_CALORIE_FLOOR, "-5");

    let result = PlanConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}
