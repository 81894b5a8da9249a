// ABOUTME: Output models for generated nutrition plans: per-day targets and load breakdown
// ABOUTME: NutritionPlan keeps days in first-seen order and serializes as an ordered JSON object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workout::Discipline;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Daily energy need derived from athlete biometrics, shared by every day of a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyBaseline {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Intake estimate after any weight-loss deficit (kcal/day)
    pub intake: f64,
}

/// Load and expenditure for one discipline on one day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DisciplineSummary {
    /// Sessions counted toward the mean
    pub sessions: u32,
    /// Mean pace (min/km or min/100 m) or power (watts)
    pub mean: f64,
    /// Accumulated hours
    pub hours: f64,
    /// Estimated expenditure (kcal)
    pub kcal: f64,
    /// Intensity relative to threshold
    pub intensity_factor: f64,
}

/// Training load breakdown behind a [`DayPlan`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DayLoadSummary {
    /// Swimming
    pub swim: DisciplineSummary,
    /// Cycling
    pub bike: DisciplineSummary,
    /// Running
    pub run: DisciplineSummary,
    /// Hours across all disciplines
    pub total_hours: f64,
    /// Hour-weighted intensity factor, 0 on rest days
    pub average_intensity_factor: f64,
    /// Training stress score
    pub tss: f64,
}

impl DayLoadSummary {
    /// Per-discipline expenditure (kcal) in bike, run, swim order
    #[must_use]
    pub const fn expenditures(&self) -> [f64; 3] {
        [self.bike.kcal, self.run.kcal, self.swim.kcal]
    }

    /// Expenditure across all disciplines (kcal)
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        self.bike.kcal + self.run.kcal + self.swim.kcal
    }
}

/// Fueling targets for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Disciplines exercised, in encounter order (including `Rest`)
    #[serde(rename = "Workouts")]
    pub workouts: Vec<Discipline>,
    /// Total calories, never below the configured floor
    #[serde(rename = "Total Calories")]
    pub total_calories: i64,
    /// Carbohydrate (g)
    #[serde(rename = "CHO")]
    pub carbohydrate_g: i64,
    /// Protein (g)
    #[serde(rename = "Protein")]
    pub protein_g: i64,
    /// Fat (g); negative when carbohydrate and protein exceed the calorie budget
    #[serde(rename = "Fat")]
    pub fat_g: i64,
    /// Load breakdown the targets were derived from
    #[serde(rename = "Load")]
    pub load: DayLoadSummary,
}

/// Per-day plan keyed by date, in first-seen order of the input workouts
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionPlan {
    baseline: EnergyBaseline,
    days: Vec<(String, DayPlan)>,
}

impl NutritionPlan {
    /// Assemble a plan from its baseline and ordered days
    #[must_use]
    pub const fn new(baseline: EnergyBaseline, days: Vec<(String, DayPlan)>) -> Self {
        Self { baseline, days }
    }

    /// Energy baseline every day was computed from
    #[must_use]
    pub const fn baseline(&self) -> &EnergyBaseline {
        &self.baseline
    }

    /// Plan for `day` (`YYYY-MM-DD`)
    #[must_use]
    pub fn get(&self, day: &str) -> Option<&DayPlan> {
        self.days
            .iter()
            .find_map(|(key, plan)| (key == day).then_some(plan))
    }

    /// Days in first-seen order
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(day, _)| day.as_str())
    }

    /// `(day, plan)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(day, plan)| (day.as_str(), plan))
    }

    /// Number of days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no day was planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for NutritionPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, plan) in &self.days {
            map.serialize_entry(day, plan)?;
        }
        map.end()
    }
}
