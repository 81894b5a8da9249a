// ABOUTME: Per-day, per-discipline training load aggregation from heterogeneous workout signals
// ABOUTME: Turns intensity factors, swim distance/duration and structured targets into pace/power totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Load Aggregation
//!
//! Each workout contributes exactly one signal (see [`WorkoutSignal`]). Swim and
//! run accumulate pace (min per unit distance), bike accumulates power (watts).
//! Once a day is processed the accumulated value is reduced to a mean per
//! discipline, which drives the expenditure estimators and intensity factors.

use crate::constants::fueling::SWIM_DEFAULT_PACE_FACTOR;
use crate::constants::units::{METERS_PER_SWIM_PACE_UNIT, MINUTES_PER_HOUR, PERCENT};
use crate::errors::{AppError, AppResult};
use crate::intelligence::workout_grouping::{ClassifiedWorkout, DayWorkouts};
use crate::models::{AthleteProfile, Discipline, IntensityTarget, WorkoutSignal};
use serde_json::json;
use tracing::debug;

/// Divide, returning 0 when the denominator is 0
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Running sums for one discipline on one day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisciplineTotals {
    /// Sessions that incremented the counter (structured workouts do not)
    pub sessions: u32,
    /// Accumulated pace (swim/run) or power (bike)
    pub accumulated: f64,
    /// Accumulated hours
    pub hours: f64,
}

impl DisciplineTotals {
    fn add_session(&mut self, contribution: f64, hours: f64) {
        self.sessions += 1;
        self.accumulated += contribution;
        self.hours += hours;
    }

    fn add_time_weighted(&mut self, contribution: f64, hours: f64) {
        self.accumulated += contribution;
        self.hours += hours;
    }

    /// Mean pace or power for the day, 0 when no hours were accumulated
    ///
    /// Divides by the session count. When only structured workouts contributed
    /// (hours but no sessions) the accumulated value is time weighted, so it is
    /// divided by hours instead.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.hours == 0.0 {
            0.0
        } else if self.sessions > 0 {
            self.accumulated / f64::from(self.sessions)
        } else {
            self.accumulated / self.hours
        }
    }
}

/// Totals for all load-bearing disciplines on one day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    /// Swimming pace totals
    pub swim: DisciplineTotals,
    /// Cycling power totals
    pub bike: DisciplineTotals,
    /// Running pace totals
    pub run: DisciplineTotals,
}

impl DayTotals {
    /// Hours across all disciplines
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.bike.hours + self.run.hours + self.swim.hours
    }
}

/// Mean target intensity as a fraction of threshold
///
/// Each target contributes the midpoint of its range; a target with a single
/// bound contributes that bound. Returns `None` when there are no targets or a
/// target has neither bound.
pub fn average_target_intensity<'a, I>(targets: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a IntensityTarget>,
{
    let (sum, count) = targets
        .into_iter()
        .try_fold((0.0, 0_u32), |(sum, count), target| {
            target.midpoint().map(|midpoint| (sum + midpoint, count + 1))
        })?;

    if count == 0 {
        return None;
    }
    Some(sum / f64::from(count) / PERCENT)
}

/// Accumulate every workout of `day` into per-discipline totals
///
/// Rest workouts contribute nothing. A swim without any signal contributes
/// nothing either.
///
/// # Errors
///
/// Returns `MalformedWorkout` if a bike or run workout has neither an intensity
/// factor nor a structure, or its structure holds no usable targets
pub fn accumulate_day(day: &DayWorkouts<'_>, profile: &AthleteProfile) -> AppResult<DayTotals> {
    let mut totals = DayTotals::default();
    for workout in &day.workouts {
        accumulate_workout(&mut totals, workout, profile).map_err(|e| e.with_day(day.day))?;
    }
    Ok(totals)
}

fn accumulate_workout(
    totals: &mut DayTotals,
    workout: &ClassifiedWorkout<'_>,
    profile: &AthleteProfile,
) -> AppResult<()> {
    let discipline = workout.discipline;
    if discipline == Discipline::Rest {
        return Ok(());
    }

    let record = workout.record;
    let hours = record.total_hours();

    let Some(signal) = record.signal(discipline) else {
        if discipline == Discipline::Swim {
            debug!(
                record_index = workout.record_index,
                "Swim without intensity, distance or duration, skipping"
            );
            return Ok(());
        }
        return Err(AppError::malformed_workout(
            workout.record_index,
            format!("{discipline} workout has neither ifPlanned nor structure"),
        ));
    };

    match (discipline, signal) {
        (Discipline::Run, WorkoutSignal::Intensity { if_planned }) => totals
            .run
            .add_session(safe_ratio(profile.run_threshold, if_planned), hours),
        (Discipline::Bike, WorkoutSignal::Intensity { if_planned }) => totals
            .bike
            .add_session(if_planned * profile.bike_threshold, hours),
        (Discipline::Swim, WorkoutSignal::Intensity { if_planned }) => totals
            .swim
            .add_session(safe_ratio(profile.swim_threshold, if_planned), hours),
        (Discipline::Swim, WorkoutSignal::Distance { meters }) => {
            let swim_hours =
                meters / METERS_PER_SWIM_PACE_UNIT * profile.swim_threshold / MINUTES_PER_HOUR;
            totals.swim.add_session(
                profile.swim_threshold * SWIM_DEFAULT_PACE_FACTOR,
                swim_hours,
            );
        }
        (Discipline::Swim, WorkoutSignal::Duration { hours }) => totals
            .swim
            .add_session(profile.swim_threshold * SWIM_DEFAULT_PACE_FACTOR, hours),
        (Discipline::Run | Discipline::Bike, WorkoutSignal::StructuredTargets(structure)) => {
            let average = average_target_intensity(structure.targets()).ok_or_else(|| {
                AppError::malformed_workout(
                    workout.record_index,
                    "structured workout has no usable intensity targets",
                )
                .with_details(json!({
                    "workout_type_id": record.workout_type_id,
                    "target_count": structure.targets().count(),
                }))
            })?;
            if discipline == Discipline::Run {
                totals.run.add_time_weighted(
                    safe_ratio(profile.run_threshold, average) * hours,
                    hours,
                );
            } else {
                totals
                    .bike
                    .add_time_weighted(profile.bike_threshold * average * hours, hours);
            }
        }
        (_, signal) => {
            return Err(AppError::malformed_workout(
                workout.record_index,
                format!("{discipline} workout carries an unexpected signal: {signal:?}"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_target_intensity_uses_midpoints() {
        let targets = [
            IntensityTarget::range(60.0, 80.0),
            IntensityTarget::range(90.0, 110.0),
        ];
        let average = average_target_intensity(&targets).unwrap();
        assert!((average - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_average_target_intensity_rejects_empty_and_boundless() {
        let empty: [IntensityTarget; 0] = [];
        assert!(average_target_intensity(&empty).is_none());
        let boundless = [IntensityTarget {
            min_value: None,
            max_value: None,
        }];
        assert!(average_target_intensity(&boundless).is_none());
    }

    #[test]
    fn test_mean_divides_by_sessions_then_hours() {
        let by_sessions = DisciplineTotals {
            sessions: 2,
            accumulated: 300.0,
            hours: 3.0,
        };
        assert!((by_sessions.mean() - 150.0).abs() < f64::EPSILON);

        let time_weighted = DisciplineTotals {
            sessions: 0,
            accumulated: 300.0,
            hours: 2.0,
        };
        assert!((time_weighted.mean() - 150.0).abs() < f64::EPSILON);

        assert!(DisciplineTotals::default().mean().abs() < f64::EPSILON);
    }

    #[test]
    fn test_safe_ratio_guards_zero() {
        assert!(safe_ratio(6.17, 0.0).abs() < f64::EPSILON);
    }
}
