// ABOUTME: Exercise energy expenditure estimators for running, cycling and swimming
// ABOUTME: Converts mean pace/power and duration into kilocalories via oxygen cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Expenditure Estimators
//!
//! Running and cycling estimate oxygen uptake (L/min) and convert it at
//! 5 kcal per liter of O2. Swimming uses a flat per-minute rate.

use crate::constants::fueling::{
    CYCLING_WATTS_PER_LITER_O2, RUNNING_ECONOMY, SWIM_KCAL_PER_MINUTE,
};
use crate::constants::units::{KCAL_PER_LITER_O2, MINUTES_PER_HOUR, ML_PER_LITER};

/// Estimate running expenditure (kcal)
///
/// Formula: VO2 (L/min) = (210 / pace) x weight / 1000; kcal = VO2 x 5 x minutes
///
/// # Arguments
/// * `pace_min_per_km` - Mean pace (min/km); 0 yields 0 kcal
/// * `duration_hours` - Running time in hours
/// * `weight_kg` - Body weight in kilograms
#[must_use]
pub fn running_expenditure(pace_min_per_km: f64, duration_hours: f64, weight_kg: f64) -> f64 {
    if pace_min_per_km == 0.0 {
        return 0.0;
    }
    let liters_o2_per_min = RUNNING_ECONOMY / pace_min_per_km * weight_kg / ML_PER_LITER;
    liters_o2_per_min * KCAL_PER_LITER_O2 * duration_hours * MINUTES_PER_HOUR
}

/// Estimate cycling expenditure (kcal)
///
/// Formula: VO2 (L/min) = power / 75; kcal = VO2 x 5 x minutes
#[must_use]
pub fn cycling_expenditure(power_watts: f64, duration_hours: f64) -> f64 {
    let liters_o2_per_min = power_watts / CYCLING_WATTS_PER_LITER_O2;
    liters_o2_per_min * KCAL_PER_LITER_O2 * duration_hours * MINUTES_PER_HOUR
}

/// Rough swimming expenditure (kcal) at a flat 10 kcal/min, independent of pace
#[must_use]
pub fn swim_expenditure(duration_hours: f64) -> f64 {
    duration_hours * MINUTES_PER_HOUR * SWIM_KCAL_PER_MINUTE
}
