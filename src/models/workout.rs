// ABOUTME: Workout record model as exported by the planning provider, plus discipline mapping
// ABOUTME: Exposes the single load signal each record contributes via the WorkoutSignal union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the date and time portions of `workoutDay`
const DAY_TIME_SEPARATOR: char = 'T';

/// Training discipline of a workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Swimming
    Swim,
    /// Cycling
    Bike,
    /// Running
    Run,
    /// Scheduled rest day
    Rest,
}

impl Discipline {
    /// Map a provider workout type id to a discipline
    ///
    /// Returns `None` for unsupported types (strength, brick, custom, ...).
    #[must_use]
    pub const fn from_type_id(type_id: i64) -> Option<Self> {
        match type_id {
            1 => Some(Self::Swim),
            2 => Some(Self::Bike),
            3 => Some(Self::Run),
            7 => Some(Self::Rest),
            _ => None,
        }
    }

    /// Display label used in plan output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Swim => "Swim",
            Self::Bike => "Bike",
            Self::Run => "Run",
            Self::Rest => "Rest",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intensity target expressed as a percentage of threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityTarget {
    /// Lower bound (% of threshold)
    pub min_value: Option<f64>,
    /// Upper bound (% of threshold)
    pub max_value: Option<f64>,
}

impl IntensityTarget {
    /// Target with both bounds
    #[must_use]
    pub const fn range(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value: Some(min_value),
            max_value: Some(max_value),
        }
    }

    /// Midpoint of the range; a single present bound stands in for the midpoint
    #[must_use]
    pub fn midpoint(&self) -> Option<f64> {
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => Some(f64::midpoint(min, max)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Innermost step of a structured workout
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StructureStep {
    /// Intensity targets; absent on untargeted steps such as free rest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<IntensityTarget>>,
}

/// Repetition block grouping steps
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StructureBlock {
    /// Steps inside this block
    pub steps: Vec<StructureStep>,
}

/// Structured workout description (`structure.structure[].steps[].targets[]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutStructure {
    /// Ordered blocks
    pub structure: Vec<StructureBlock>,
}

impl WorkoutStructure {
    /// Build a structure where each block holds one step with the given targets
    #[must_use]
    pub fn from_blocks(blocks: Vec<Vec<IntensityTarget>>) -> Self {
        Self {
            structure: blocks
                .into_iter()
                .map(|targets| StructureBlock {
                    steps: vec![StructureStep {
                        targets: Some(targets),
                    }],
                })
                .collect(),
        }
    }

    /// Flatten blocks and steps into the ordered sequence of targets
    pub fn targets(&self) -> impl Iterator<Item = &IntensityTarget> {
        self.structure
            .iter()
            .flat_map(|block| block.steps.iter())
            .filter_map(|step| step.targets.as_deref())
            .flatten()
    }
}

/// One planned or completed training session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Timestamp such as `2024-01-01T00:00:00`; only the date portion is used
    #[serde(rename = "workoutDay")]
    pub workout_day: String,
    /// Provider workout type id (1 swim, 2 bike, 3 run, 7 rest)
    #[serde(rename = "workout_typeValueId", alias = "workoutTypeValueId")]
    pub workout_type_id: i64,
    /// Total time in hours
    #[serde(default, alias = "totalTime")]
    pub total_time: Option<f64>,
    /// Planned intensity factor (fraction of threshold)
    #[serde(rename = "ifPlanned", default)]
    pub if_planned: Option<f64>,
    /// Planned distance in meters
    #[serde(rename = "distancePlanned", default)]
    pub distance_planned: Option<f64>,
    /// Structured interval description
    #[serde(default)]
    pub structure: Option<WorkoutStructure>,
}

/// The load signal a workout contributes, in priority order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutSignal<'a> {
    /// Planned intensity factor
    Intensity {
        /// Fraction of threshold
        if_planned: f64,
    },
    /// Planned swim distance (swim only)
    Distance {
        /// Meters
        meters: f64,
    },
    /// Elapsed time without any other signal (swim only)
    Duration {
        /// Hours
        hours: f64,
    },
    /// Structured intensity targets (bike/run only)
    StructuredTargets(&'a WorkoutStructure),
}

impl WorkoutRecord {
    /// Record with only the identifying fields set
    #[must_use]
    pub fn new(workout_day: impl Into<String>, workout_type_id: i64) -> Self {
        Self {
            workout_day: workout_day.into(),
            workout_type_id,
            total_time: None,
            if_planned: None,
            distance_planned: None,
            structure: None,
        }
    }

    /// Set total time (hours)
    #[must_use]
    pub const fn with_total_time(mut self, hours: f64) -> Self {
        self.total_time = Some(hours);
        self
    }

    /// Set planned intensity factor
    #[must_use]
    pub const fn with_if_planned(mut self, if_planned: f64) -> Self {
        self.if_planned = Some(if_planned);
        self
    }

    /// Set planned distance (meters)
    #[must_use]
    pub const fn with_distance_planned(mut self, meters: f64) -> Self {
        self.distance_planned = Some(meters);
        self
    }

    /// Set structured targets
    #[must_use]
    pub fn with_structure(mut self, structure: WorkoutStructure) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Date portion of `workoutDay`
    #[must_use]
    pub fn day(&self) -> &str {
        self.workout_day
            .split(DAY_TIME_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Discipline for this record, `None` when the type id is unsupported
    #[must_use]
    pub const fn discipline(&self) -> Option<Discipline> {
        Discipline::from_type_id(self.workout_type_id)
    }

    /// Total time in hours, 0 when absent
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_time.unwrap_or(0.0)
    }

    /// Select the signal this record contributes for `discipline`
    ///
    /// Priority: intensity factor, then planned distance (swim) or structured
    /// targets (bike/run), then raw duration (swim). Returns `None` when a swim
    /// carries none of these, or a bike/run has neither an intensity factor
    /// nor a structure. Rest days never carry a signal.
    #[must_use]
    pub fn signal(&self, discipline: Discipline) -> Option<WorkoutSignal<'_>> {
        if discipline == Discipline::Rest {
            return None;
        }
        if let Some(if_planned) = self.if_planned {
            return Some(WorkoutSignal::Intensity { if_planned });
        }
        match discipline {
            Discipline::Swim => match (self.distance_planned, self.total_time) {
                (Some(meters), _) if meters != 0.0 => Some(WorkoutSignal::Distance { meters }),
                (_, Some(hours)) if hours != 0.0 => Some(WorkoutSignal::Duration { hours }),
                _ => None,
            },
            Discipline::Bike | Discipline::Run => self
                .structure
                .as_ref()
                .map(WorkoutSignal::StructuredTargets),
            Discipline::Rest => None,
        }
    }
}

/// Decode a JSON array of provider workout records
///
/// Records are decoded one by one so a bad record is reported with its position.
///
/// # Errors
///
/// Returns `SerializationError` if the input is not a JSON array, or
/// `MalformedWorkout` (with the record index) if an element cannot be decoded
pub fn parse_workouts(json: &str) -> AppResult<Vec<WorkoutRecord>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| {
                AppError::malformed_workout(index, format!("cannot decode workout: {e}"))
                    .with_source(e)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_strips_time_portion() {
        let record = WorkoutRecord::new("2024-03-05T06:30:00", 3);
        assert_eq!(record.day(), "2024-03-05");
        assert_eq!(WorkoutRecord::new("2024-03-05", 3).day(), "2024-03-05");
    }

    #[test]
    fn test_signal_priority_prefers_intensity_factor() {
        let record = WorkoutRecord::new("2024-01-01", 1)
            .with_if_planned(0.8)
            .with_distance_planned(2000.0)
            .with_total_time(1.0);
        assert_eq!(
            record.signal(Discipline::Swim),
            Some(WorkoutSignal::Intensity { if_planned: 0.8 })
        );
    }

    #[test]
    fn test_swim_zero_distance_falls_back_to_duration() {
        let record = WorkoutRecord::new("2024-01-01", 1)
            .with_distance_planned(0.0)
            .with_total_time(0.5);
        assert_eq!(
            record.signal(Discipline::Swim),
            Some(WorkoutSignal::Duration { hours: 0.5 })
        );
    }

    #[test]
    fn test_targets_flatten_skips_untargeted_steps() {
        let structure = WorkoutStructure {
            structure: vec![StructureBlock {
                steps: vec![
                    StructureStep {
                        targets: Some(vec![IntensityTarget::range(60.0, 80.0)]),
                    },
                    StructureStep { targets: None },
                ],
            }],
        };
        assert_eq!(structure.targets().count(), 1);
    }

    #[test]
    fn test_midpoint_uses_single_bound() {
        let target = IntensityTarget {
            min_value: None,
            max_value: Some(90.0),
        };
        assert_eq!(target.midpoint(), Some(90.0));
    }
}
