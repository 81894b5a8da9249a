// ABOUTME: Tests for running, cycling and swimming energy expenditure estimators
// ABOUTME: Validates oxygen-cost formulas, flat swim rate, and the zero-pace guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_fuel_planner::intelligence::expenditure::{
    cycling_expenditure, running_expenditure, swim_expenditure,
};

mod common;

use common::assert_close;

#[test]
fn test_cycling_at_threshold_for_one_hour() {
    // (200 / 75) L/min * 5 kcal/L * 60 min
    assert_close(cycling_expenditure(200.0, 1.0), 800.0, 1e-9);
}

#[test]
fn test_cycling_scales_with_duration_and_power() {
    let base = cycling_expenditure(150.0, 1.0);
    assert_close(cycling_expenditure(150.0, 2.0), 2.0 * base, 1e-9);
    assert_close(cycling_expenditure(300.0, 1.0), 2.0 * base, 1e-9);
    assert_close(cycling_expenditure(0.0, 1.0), 0.0, f64::EPSILON);
}

#[test]
fn test_running_reference_pace() {
    // 210 / 6.8556 * 70 / 1000 L/min * 5 * 60
    let kcal = running_expenditure(6.17 / 0.9, 1.0, 70.0);
    assert_close(kcal, 643.274, 1e-3);
}

#[test]
fn test_running_faster_pace_burns_more() {
    let easy = running_expenditure(6.5, 1.0, 70.0);
    let hard = running_expenditure(4.5, 1.0, 70.0);
    assert!(hard > easy);
}

#[test]
fn test_running_heavier_athlete_burns_more() {
    let light = running_expenditure(5.0, 1.0, 60.0);
    let heavy = running_expenditure(5.0, 1.0, 90.0);
    assert_close(heavy / light, 1.5, 1e-12);
}

#[test]
fn test_running_zero_pace_guard() {
    assert_close(running_expenditure(0.0, 2.0, 70.0), 0.0, f64::EPSILON);
}

#[test]
fn test_swim_flat_rate_ignores_pace() {
    assert_close(swim_expenditure(1.0), 600.0, 1e-9);
    assert_close(swim_expenditure(46.6 / 60.0), 466.0, 1e-9);
    assert_close(swim_expenditure(0.0), 0.0, f64::EPSILON);
}
