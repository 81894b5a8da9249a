// ABOUTME: Daily energy need estimation from athlete biometrics
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and weight-loss intake estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Need Estimator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, ActivityLevel, BmrConfig, PlanConfig};
use crate::models::{AthleteProfile, EnergyBaseline, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) - 161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `sex` - Biological sex
/// * `config` - BMR coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn basal_energy(weight_kg: f64, height_cm: f64, age: u32, sex: Sex, config: &BmrConfig) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + sex_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors:
/// - Sedentary: 1.2 (little/no exercise)
/// - Lightly active: 1.375 (1-3 days/week)
/// - Moderately active: 1.55 (3-5 days/week)
/// - Very active: 1.725 (6-7 days/week)
/// - Extra active: 1.9 (hard training 2x/day)
#[must_use]
pub const fn total_energy_expenditure(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Daily intake estimate: TDEE minus the active weight-loss deficit
#[must_use]
pub const fn intake_energy_estimate(tdee: f64, config: &PlanConfig) -> f64 {
    tdee - config.active_deficit()
}

/// Compute the BMR, TDEE and intake estimate for `profile`
#[must_use]
pub fn energy_baseline(profile: &AthleteProfile, config: &PlanConfig) -> EnergyBaseline {
    let bmr = basal_energy(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.nutrition.bmr,
    );
    let tdee = total_energy_expenditure(
        bmr,
        config.activity_level,
        &config.nutrition.activity_factors,
    );
    EnergyBaseline {
        bmr,
        tdee,
        intake: intake_energy_estimate(tdee, config),
    }
}
