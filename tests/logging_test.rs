// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates defaults, environment handling and double-initialization errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_fuel_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOG_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in LOG_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "pierre_fuel_planner");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_pretty() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn test_second_init_fails_instead_of_panicking() {
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    let first = config.init();
    let second = config.init();

    // Only one global subscriber can exist per process
    assert!(first.is_ok());
    assert!(second.is_err());
}
