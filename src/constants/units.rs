// ABOUTME: Unit conversion constants for distance, time, mass, and food energy
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Meters per swim pace unit (swim threshold is expressed per 100 m)
pub const METERS_PER_SWIM_PACE_UNIT: f64 = 100.0;

/// Pounds per kilogram, as used by the g/lb protein heuristic
pub const POUNDS_PER_KG: f64 = 2.2;

/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy yield of one liter of oxygen (kcal)
pub const KCAL_PER_LITER_O2: f64 = 5.0;

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

/// Percent scale divisor
pub const PERCENT: f64 = 100.0;
