// ABOUTME: Athlete profile model with biometrics and per-discipline thresholds
// ABOUTME: Sex is a closed M/F enum; profiles are validated before any plan is computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    /// Male (`M`)
    Male,
    /// Female (`F`)
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            other => Err(AppError::invalid_profile(format!(
                "sex must be 'M' or 'F', got '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("M"),
            Self::Female => f.write_str("F"),
        }
    }
}

/// Athlete biometrics and discipline thresholds
///
/// Thresholds are the athlete's sustainable-effort benchmarks:
/// - `bike_threshold`: functional threshold power in watts
/// - `run_threshold`: threshold pace in minutes per km
/// - `swim_threshold`: threshold pace in minutes per 100 m
///
/// Height and weight accept either JSON numbers or numeric strings, since
/// exported profiles frequently store them as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteProfile {
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    #[serde(alias = "height", deserialize_with = "number_or_numeric_string")]
    pub height_cm: f64,
    /// Body weight in kilograms
    #[serde(alias = "weight", deserialize_with = "number_or_numeric_string")]
    pub weight_kg: f64,
    /// Age in years
    pub age: u32,
    /// Bike threshold (watts)
    pub bike_threshold: f64,
    /// Run threshold pace (min/km)
    pub run_threshold: f64,
    /// Swim threshold pace (min/100 m)
    pub swim_threshold: f64,
}

impl AthleteProfile {
    /// Parse a profile from JSON, reporting any problem as an invalid profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the JSON does not describe a profile (including
    /// an unknown sex code) or the decoded profile fails [`validate`](Self::validate)
    pub fn from_json(json: &str) -> AppResult<Self> {
        let profile: Self = serde_json::from_str(json).map_err(|e| {
            AppError::invalid_profile(format!("cannot decode athlete profile: {e}")).with_source(e)
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check that biometrics and thresholds are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if weight, height or any threshold is not a
    /// strictly positive finite number
    pub fn validate(&self) -> AppResult<()> {
        let checks = [
            ("weight_kg", self.weight_kg),
            ("height_cm", self.height_cm),
            ("bike_threshold", self.bike_threshold),
            ("run_threshold", self.run_threshold),
            ("swim_threshold", self.swim_threshold),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::invalid_profile(format!(
                    "{field} must be strictly positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("'{text}' is not a number"))),
    }
}
