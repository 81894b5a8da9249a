// ABOUTME: Unified error type and stable error codes for nutrition plan generation
// ABOUTME: Invalid athlete profiles and malformed workout records surface as typed AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in this crate returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] plus optional context (the offending record index or day)
//! so callers can point the athlete at the exact workout that could not be read.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Athlete profile failed validation (unknown sex, non-positive threshold)
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile = 3004,
    /// Workout record could not be interpreted
    #[serde(rename = "MALFORMED_WORKOUT")]
    MalformedWorkout = 3005,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidProfile => "The athlete profile is invalid",
            Self::MalformedWorkout => "A workout record is malformed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Position of the offending workout in the input sequence
    pub record_index: Option<usize>,
    /// Day (`YYYY-MM-DD`) being processed when the error occurred
    pub day: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            record_index: None,
            day: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the index of the offending workout record
    #[must_use]
    pub fn with_record_index(mut self, index: usize) -> Self {
        self.context.record_index = Some(index);
        self
    }

    /// Attach the day being processed
    #[must_use]
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.context.day = Some(day.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid athlete profile
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidProfile, message)
    }

    /// Malformed workout record at `index` in the input sequence
    pub fn malformed_workout(index: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedWorkout, message).with_record_index(index)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(index) = self.context.record_index {
            write!(f, " (record {index})")?;
        }
        Ok(())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
