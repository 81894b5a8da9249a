// ABOUTME: Heuristic constants for workout expenditure and daily macronutrient targets
// ABOUTME: Running economy, cycling efficiency, swim rate, carbohydrate and protein bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! These values are deliberately simple heuristics, kept exactly as the plan
//! formulas expect them.

/// Default minimum daily calories (kcal)
pub const DEFAULT_CALORIE_FLOOR: f64 = 1600.0;

/// Running economy: ml O2 per kg per km
pub const RUNNING_ECONOMY: f64 = 210.0;

/// Cycling: watts per liter O2 per minute
pub const CYCLING_WATTS_PER_LITER_O2: f64 = 75.0;

/// Flat swimming expenditure (kcal per minute)
pub const SWIM_KCAL_PER_MINUTE: f64 = 10.0;

/// Pace multiplier applied to the swim threshold when a swim has no intensity factor
pub const SWIM_DEFAULT_PACE_FACTOR: f64 = 0.8;

/// Carbohydrate grams for a day without training
pub const REST_DAY_CARBOHYDRATE_G: i64 = 50;

/// Carbohydrate rate (kcal per TSS point) banded by bike threshold watts.
///
/// Each entry is `(upper bound inclusive, rate)`; thresholds above the last
/// bound use [`CARBOHYDRATE_RATE_ABOVE_BANDS`].
pub const CARBOHYDRATE_RATE_BANDS: [(f64, f64); 6] = [
    (200.0, 10.0),
    (240.0, 11.0),
    (270.0, 12.0),
    (300.0, 13.0),
    (330.0, 14.0),
    (360.0, 15.0),
];

/// Carbohydrate rate for bike thresholds above 360 W
pub const CARBOHYDRATE_RATE_ABOVE_BANDS: f64 = 16.0;

/// Protein grams per pound in weight-loss mode
pub const PROTEIN_WEIGHT_LOSS_G_PER_LB: f64 = 1.0;

/// Protein g/lb banded by total training hours.
///
/// Each entry is `(upper bound exclusive, factor)`; days at or above the last
/// bound use [`PROTEIN_G_PER_LB_ABOVE_BANDS`].
pub const PROTEIN_G_PER_LB_BANDS: [(f64, f64); 3] = [(1.0, 0.7), (2.0, 0.8), (2.5, 0.9)];

/// Protein g/lb for days with 2.5 h of training or more
pub const PROTEIN_G_PER_LB_ABOVE_BANDS: f64 = 1.0;
