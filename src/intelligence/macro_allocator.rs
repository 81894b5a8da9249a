// ABOUTME: Daily macronutrient allocation from training load and energy intake
// ABOUTME: Carbohydrate from TSS banded by bike threshold, protein by g/lb, fat from remaining calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Turns a day's aggregated load into calorie, carbohydrate, protein and fat
//! targets. Gram targets are rounded half-to-even. Fat takes whatever calories
//! remain after carbohydrate and protein and is allowed to go negative.
//!
//! # Scientific References
//!
//! - Coggan, A.R. & Allen, H. (2010). *Training and Racing with a Power Meter* (TSS definition)
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   <https://doi.org/10.1080/02640414.2011.585473>

use crate::config::PlanConfig;
use crate::constants::fueling::{
    CARBOHYDRATE_RATE_ABOVE_BANDS, CARBOHYDRATE_RATE_BANDS, PROTEIN_G_PER_LB_ABOVE_BANDS,
    PROTEIN_G_PER_LB_BANDS, PROTEIN_WEIGHT_LOSS_G_PER_LB, REST_DAY_CARBOHYDRATE_G,
};
use crate::constants::units::{
    KCAL_PER_GRAM_CARBOHYDRATE, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, PERCENT, POUNDS_PER_KG,
};
use crate::intelligence::expenditure::{cycling_expenditure, running_expenditure, swim_expenditure};
use crate::intelligence::training_load::{safe_ratio, DayTotals, DisciplineTotals};
use crate::models::{AthleteProfile, DayLoadSummary, DisciplineSummary};

/// Calorie and macronutrient targets for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    /// Total calories (kcal)
    pub total_calories: i64,
    /// Carbohydrate (g)
    pub carbohydrate_g: i64,
    /// Protein (g)
    pub protein_g: i64,
    /// Fat (g), may be negative
    pub fat_g: i64,
}

/// Round half-to-even and convert to whole units
#[must_use]
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Carbohydrate rate (kcal per TSS point) for the athlete's bike threshold
#[must_use]
pub fn carbohydrate_rate(bike_threshold: f64) -> f64 {
    CARBOHYDRATE_RATE_BANDS
        .iter()
        .find(|(upper, _)| bike_threshold <= *upper)
        .map_or(CARBOHYDRATE_RATE_ABOVE_BANDS, |(_, rate)| *rate)
}

/// Training Stress Score: IF^2 x 100 x hours
#[must_use]
pub fn training_stress_score(intensity_factor: f64, hours: f64) -> f64 {
    intensity_factor.powi(2) * PERCENT * hours
}

/// Daily carbohydrate target (g)
///
/// Days without training hours get the fixed rest-day amount.
#[must_use]
pub fn carbohydrate_grams(
    bike_threshold: f64,
    average_intensity_factor: f64,
    total_hours: f64,
) -> i64 {
    if total_hours == 0.0 {
        return REST_DAY_CARBOHYDRATE_G;
    }
    let tss = training_stress_score(average_intensity_factor, total_hours);
    round_half_even(tss * carbohydrate_rate(bike_threshold) / KCAL_PER_GRAM_CARBOHYDRATE)
}

/// Protein grams per pound of body weight
#[must_use]
pub fn protein_factor(total_hours: f64, weight_loss: bool) -> f64 {
    if weight_loss {
        return PROTEIN_WEIGHT_LOSS_G_PER_LB;
    }
    PROTEIN_G_PER_LB_BANDS
        .iter()
        .find(|(upper, _)| total_hours < *upper)
        .map_or(PROTEIN_G_PER_LB_ABOVE_BANDS, |(_, factor)| *factor)
}

/// Daily protein target (g)
#[must_use]
pub fn protein_grams(weight_kg: f64, total_hours: f64, weight_loss: bool) -> i64 {
    round_half_even(weight_kg * POUNDS_PER_KG * protein_factor(total_hours, weight_loss))
}

/// Intake plus each exercise expenditure, never below `calorie_floor`
///
/// Expenditures are added to the intake one at a time, in the order given.
#[must_use]
pub fn total_calories(intake: f64, expenditures: &[f64], calorie_floor: f64) -> f64 {
    expenditures
        .iter()
        .fold(intake, |total, kcal| total + kcal)
        .max(calorie_floor)
}

/// Fat (g) filling the calories left after carbohydrate and protein
#[must_use]
pub fn fat_grams(total_calories: f64, carbohydrate_g: i64, protein_g: i64) -> i64 {
    let remaining = total_calories
        - carbohydrate_g as f64 * KCAL_PER_GRAM_CARBOHYDRATE
        - protein_g as f64 * KCAL_PER_GRAM_PROTEIN;
    round_half_even(remaining / KCAL_PER_GRAM_FAT)
}

fn summarize(
    totals: &DisciplineTotals,
    kcal: impl Fn(f64, f64) -> f64,
    intensity: impl Fn(f64) -> f64,
) -> DisciplineSummary {
    let mean = totals.mean();
    let active = totals.hours != 0.0;
    DisciplineSummary {
        sessions: totals.sessions,
        mean,
        hours: totals.hours,
        kcal: if active { kcal(mean, totals.hours) } else { 0.0 },
        intensity_factor: if active { intensity(mean) } else { 0.0 },
    }
}

/// Reduce a day's totals to means, expenditure, intensity factors and TSS
#[must_use]
pub fn summarize_load(totals: &DayTotals, profile: &AthleteProfile) -> DayLoadSummary {
    let swim = summarize(
        &totals.swim,
        |_, hours| swim_expenditure(hours),
        |pace| safe_ratio(profile.swim_threshold, pace),
    );
    let bike = summarize(&totals.bike, cycling_expenditure, |power| {
        power / profile.bike_threshold
    });
    let run = summarize(
        &totals.run,
        |pace, hours| running_expenditure(pace, hours, profile.weight_kg),
        |pace| safe_ratio(profile.run_threshold, pace),
    );

    let total_hours = totals.total_hours();
    let average_intensity_factor = if total_hours == 0.0 {
        0.0
    } else {
        (bike.intensity_factor * bike.hours
            + run.intensity_factor * run.hours
            + swim.intensity_factor * swim.hours)
            / total_hours
    };

    DayLoadSummary {
        swim,
        bike,
        run,
        total_hours,
        average_intensity_factor,
        tss: training_stress_score(average_intensity_factor, total_hours),
    }
}

/// Allocate the day's calories into macronutrient targets
#[must_use]
pub fn allocate(
    intake: f64,
    load: &DayLoadSummary,
    profile: &AthleteProfile,
    config: &PlanConfig,
) -> MacroTargets {
    let calories = total_calories(intake, &load.expenditures(), config.calorie_floor);
    let carbohydrate_g = carbohydrate_grams(
        profile.bike_threshold,
        load.average_intensity_factor,
        load.total_hours,
    );
    let protein_g = protein_grams(profile.weight_kg, load.total_hours, config.weight_loss);

    MacroTargets {
        total_calories: round_half_even(calories),
        carbohydrate_g,
        protein_g,
        fat_g: fat_grams(calories, carbohydrate_g, protein_g),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(-0.5), 0);
        assert_eq!(round_half_even(154.000_000_1), 154);
    }

    #[test]
    fn test_carbohydrate_rate_band_edges() {
        assert!((carbohydrate_rate(200.0) - 10.0).abs() < f64::EPSILON);
        assert!((carbohydrate_rate(200.5) - 11.0).abs() < f64::EPSILON);
        assert!((carbohydrate_rate(360.0) - 15.0).abs() < f64::EPSILON);
        assert!((carbohydrate_rate(361.0) - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_protein_factor_bands() {
        assert!((protein_factor(0.5, false) - 0.7).abs() < f64::EPSILON);
        assert!((protein_factor(1.0, false) - 0.8).abs() < f64::EPSILON);
        assert!((protein_factor(2.4, false) - 0.9).abs() < f64::EPSILON);
        assert!((protein_factor(2.5, false) - 1.0).abs() < f64::EPSILON);
        assert!((protein_factor(0.0, true) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fat_can_go_negative() {
        assert_eq!(fat_grams(1600.0, 400, 154), -68);
    }
}
