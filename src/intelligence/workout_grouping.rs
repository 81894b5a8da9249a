// ABOUTME: Workout classification and day bucketing for plan generation
// ABOUTME: Maps type ids to disciplines, drops unsupported records, keeps first-seen day order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Discipline, WorkoutRecord};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::warn;

/// Date format of the day portion of `workoutDay`
const DAY_FORMAT: &str = "%Y-%m-%d";

/// A workout whose discipline is supported
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedWorkout<'a> {
    /// Position of the record in the input sequence
    pub record_index: usize,
    /// Discipline resolved from the type id
    pub discipline: Discipline,
    /// The record itself
    pub record: &'a WorkoutRecord,
}

/// All supported workouts for one calendar day, in input order
#[derive(Debug, Clone)]
pub struct DayWorkouts<'a> {
    /// Day (`YYYY-MM-DD`)
    pub day: &'a str,
    /// Workouts on this day
    pub workouts: Vec<ClassifiedWorkout<'a>>,
}

impl DayWorkouts<'_> {
    /// Discipline labels in encounter order, including `Rest`
    #[must_use]
    pub fn labels(&self) -> Vec<Discipline> {
        self.workouts.iter().map(|w| w.discipline).collect()
    }
}

/// Bucket workouts by day, preserving first-seen day order
///
/// Days are keyed by the date portion of `workoutDay` as written. A key that
/// is not a `YYYY-MM-DD` date is logged but still grouped. Records with an
/// unsupported type id are logged and dropped. A day still appears in the
/// result when all of its records were dropped, so it gets a rest-day plan.
#[must_use]
pub fn group_by_day(records: &[WorkoutRecord]) -> Vec<DayWorkouts<'_>> {
    let mut days: Vec<DayWorkouts<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (record_index, record) in records.iter().enumerate() {
        let day = record.day();
        if NaiveDate::parse_from_str(day, DAY_FORMAT).is_err() {
            warn!(
                day,
                record_index,
                workout_day = %record.workout_day,
                "Day key is not a YYYY-MM-DD date, grouping as written"
            );
        }

        let position = *positions.entry(day).or_insert_with(|| {
            days.push(DayWorkouts {
                day,
                workouts: Vec::new(),
            });
            days.len() - 1
        });

        let Some(discipline) = record.discipline() else {
            warn!(
                day,
                record_index,
                workout_type_id = record.workout_type_id,
                "Unsupported workout type, skipping"
            );
            continue;
        };

        days[position].workouts.push(ClassifiedWorkout {
            record_index,
            discipline,
            record,
        });
    }

    days
}
