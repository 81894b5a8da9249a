// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a reference athlete and workout builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_fuel_planner`

use pierre_fuel_planner::config::PlanConfig;
use pierre_fuel_planner::models::{
    AthleteProfile, IntensityTarget, Sex, WorkoutRecord, WorkoutStructure,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 33-year-old male, 170 cm, 70 kg, FTP 162 W, run 6.17 min/km, swim 2.33 min/100 m
pub fn reference_profile() -> AthleteProfile {
    AthleteProfile {
        sex: Sex::Male,
        height_cm: 170.0,
        weight_kg: 70.0,
        age: 33,
        bike_threshold: 162.0,
        run_threshold: 6.17,
        swim_threshold: 2.33,
    }
}

/// Reference profile with a different bike threshold
pub fn profile_with_bike_threshold(bike_threshold: f64) -> AthleteProfile {
    AthleteProfile {
        bike_threshold,
        ..reference_profile()
    }
}

/// Default configuration (weight loss on, sedentary, medium deficit, 1600 kcal floor)
pub fn default_config() -> PlanConfig {
    PlanConfig::default()
}

/// Configuration with the weight-loss deficit disabled
pub fn maintenance_config() -> PlanConfig {
    PlanConfig {
        weight_loss: false,
        ..PlanConfig::default()
    }
}

/// Midnight timestamp for `day`
pub fn timestamp(day: &str) -> String {
    format!("{day}T00:00:00")
}

pub fn swim(day: &str) -> WorkoutRecord {
    WorkoutRecord::new(timestamp(day), 1)
}

pub fn bike(day: &str) -> WorkoutRecord {
    WorkoutRecord::new(timestamp(day), 2)
}

pub fn run(day: &str) -> WorkoutRecord {
    WorkoutRecord::new(timestamp(day), 3)
}

pub fn rest(day: &str) -> WorkoutRecord {
    WorkoutRecord::new(timestamp(day), 7)
}

/// Structure with one single-target step per block
pub fn structure_of(ranges: &[(f64, f64)]) -> WorkoutStructure {
    WorkoutStructure::from_blocks(
        ranges
            .iter()
            .map(|&(min, max)| vec![IntensityTarget::range(min, max)])
            .collect(),
    )
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
