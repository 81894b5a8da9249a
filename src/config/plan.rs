// ABOUTME: Plan-level configuration: weight-loss mode, activity level, deficit tier, calorie floor
// ABOUTME: Loaded from defaults plus FUEL_* environment overrides, then validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::error::ConfigError;
use crate::config::nutrition::{ActivityLevel, DeficitTier, NutritionConfig};
use crate::constants::fueling::DEFAULT_CALORIE_FLOOR;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Enables or disables the weight-loss deficit (`true`/`false`)
pub const ENV_WEIGHT_LOSS: &str = "FUEL_WEIGHT_LOSS";
/// Activity level name (`sedentary` .. `extra_active`)
pub const ENV_ACTIVITY_LEVEL: &str = "FUEL_ACTIVITY_LEVEL";
/// Deficit tier name (`aggressive`, `medium`, `low`)
pub const ENV_DEFICIT_TIER: &str = "FUEL_DEFICIT_TIER";
/// Minimum daily calories (kcal)
pub const ENV_CALORIE_FLOOR: &str = "FUEL_CALORIE_FLOOR";
/// Mifflin-St Jeor male constant override
pub const ENV_BMR_MALE_CONSTANT: &str = "FUEL_BMR_MALE_CONSTANT";
/// Mifflin-St Jeor female constant override
pub const ENV_BMR_FEMALE_CONSTANT: &str = "FUEL_BMR_FEMALE_CONSTANT";

/// Immutable settings for one plan generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Subtract the tier deficit from TDEE and use the weight-loss protein factor
    pub weight_loss: bool,
    /// Lifestyle activity level used for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Deficit size applied when `weight_loss` is enabled
    pub deficit_tier: DeficitTier,
    /// Daily calories never drop below this value (kcal)
    pub calorie_floor: f64,
    /// Formula coefficients
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weight_loss: true,
            activity_level: ActivityLevel::Sedentary,
            deficit_tier: DeficitTier::Medium,
            calorie_floor: DEFAULT_CALORIE_FLOOR,
            nutrition: NutritionConfig::default(),
        }
    }
}

impl PlanConfig {
    /// Load configuration from defaults and `FUEL_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or
    /// the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the calorie floor is negative or not finite, or the
    /// nutrition coefficients are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.calorie_floor.is_finite() || self.calorie_floor < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor must be a finite, non-negative number",
            ));
        }
        self.nutrition.validate()
    }

    /// Deficit (kcal/day) in effect for this configuration, 0 when weight loss is off
    #[must_use]
    pub const fn active_deficit(&self) -> f64 {
        if self.weight_loss {
            self.nutrition.deficits.deficit_for(self.deficit_tier)
        } else {
            0.0
        }
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Named choices never fail: unknown names fall back to the default with a warning
    fn apply_env_choice<T>(
        env_var_name: &str,
        target: &mut T,
        parse_or_default: fn(&str) -> T,
    ) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = parse_or_default(&val);
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_WEIGHT_LOSS, &mut self.weight_loss)?;
        Self::apply_env_choice(
            ENV_ACTIVITY_LEVEL,
            &mut self.activity_level,
            ActivityLevel::from_str_or_default,
        )?;
        Self::apply_env_choice(
            ENV_DEFICIT_TIER,
            &mut self.deficit_tier,
            DeficitTier::from_str_or_default,
        )?;
        Self::apply_env_var(ENV_CALORIE_FLOOR, &mut self.calorie_floor)?;
        Self::apply_env_var(
            ENV_BMR_MALE_CONSTANT,
            &mut self.nutrition.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            ENV_BMR_FEMALE_CONSTANT,
            &mut self.nutrition.bmr.msj_female_constant,
        )?;
        Ok(self)
    }
}
