// ABOUTME: Nutrition configuration for energy-need estimation
// ABOUTME: Configures BMR coefficients, activity multipliers, and weight-loss deficit tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Coefficients used to turn athlete biometrics into a daily energy need.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Activity level for TDEE calculation, ordered from least to most active
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Parse from string, falling back to `Sedentary` for unrecognized values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(activity_level = %s, "Unknown activity level, using sedentary");
            Self::default()
        })
    }

    /// Canonical `snake_case` name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" => Ok(Self::LightlyActive),
            "moderately_active" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(ConfigError::Parse(format!("unknown activity level '{other}'"))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of the daily calorie deficit applied in weight-loss mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeficitTier {
    /// Largest deficit
    Aggressive,
    /// Standard deficit
    #[default]
    Medium,
    /// Smallest deficit
    Low,
}

impl DeficitTier {
    /// Parse from string, falling back to `Medium` for unrecognized values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(deficit_tier = %s, "Unknown deficit tier, using medium");
            Self::default()
        })
    }

    /// Canonical `snake_case` name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for DeficitTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggressive" => Ok(Self::Aggressive),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ConfigError::Parse(format!("unknown deficit tier '{other}'"))),
        }
    }
}

impl fmt::Display for DeficitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Daily deficit sizes for weight-loss mode
    pub deficits: CalorieDeficitConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

/// Daily deficit (kcal) subtracted from TDEE in weight-loss mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieDeficitConfig {
    /// Aggressive deficit: 750 kcal/day
    pub aggressive: f64,
    /// Medium deficit: 500 kcal/day
    pub medium: f64,
    /// Low deficit: 250 kcal/day
    pub low: f64,
}

impl CalorieDeficitConfig {
    /// Deficit in kcal/day for the given tier
    #[must_use]
    pub const fn deficit_for(&self, tier: DeficitTier) -> f64 {
        match tier {
            DeficitTier::Aggressive => self.aggressive,
            DeficitTier::Medium => self.medium,
            DeficitTier::Low => self.low,
        }
    }
}

impl NutritionConfig {
    /// Validate coefficient sanity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if BMR coefficients are not positive, activity factors
    /// are not ascending, or deficits are negative or out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if ActivityLevel::ALL
            .windows(2)
            .any(|pair| factors.factor_for(pair[0]) >= factors.factor_for(pair[1]))
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let deficits = &self.deficits;
        if deficits.low < 0.0 || !deficits.aggressive.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficits must be finite and non-negative",
            ));
        }
        if deficits.low > deficits.medium || deficits.medium > deficits.aggressive {
            return Err(ConfigError::InvalidRange(
                "Calorie deficits must satisfy low <= medium <= aggressive",
            ));
        }

        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for CalorieDeficitConfig {
    fn default() -> Self {
        Self {
            aggressive: 750.0,
            medium: 500.0,
            low: 250.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parsing() {
        assert_eq!(
            "Very_Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert!("couch".parse::<ActivityLevel>().is_err());
        assert_eq!(
            ActivityLevel::from_str_or_default("couch"),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn test_default_nutrition_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_deficits_rejected() {
        let mut config = NutritionConfig::default();
        config.deficits.low = 600.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
