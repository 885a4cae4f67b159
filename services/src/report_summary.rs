//! Per-student term summary: average, performance band, letter grade,
//! best/worst subject and score distribution.
//!
//! The summary is stored as opaque JSON metadata on a report, so its serde
//! shape (camelCase keys, `"76.67"`-style average, `"0-30"` bucket names) is
//! what report consumers read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report_store::MarkEntry;

/// Subject placeholder used when a student has no marks.
pub const NOT_AVAILABLE: &str = "N/A";

/// Lower bounds (inclusive) of the five upper bands, best band first.
/// Anything below the last threshold falls into the lowest band.
const BAND_THRESHOLDS: [f64; 5] = [90.0, 75.0, 60.0, 50.0, 30.0];

/// Index of the band an average falls into: 0 is the best band, 5 the lowest.
fn band(average: f64) -> usize {
    BAND_THRESHOLDS
        .iter()
        .position(|&threshold| average >= threshold)
        .unwrap_or(BAND_THRESHOLDS.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}

impl Performance {
    pub fn from_average(average: f64) -> Self {
        match band(average) {
            0 => Self::Excellent,
            1 => Self::VeryGood,
            2 => Self::Good,
            3 => Self::Average,
            4 => Self::BelowAverage,
            _ => Self::Poor,
        }
    }
}

/// Letter grade. Uses the same thresholds as [`Performance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn from_average(average: f64) -> Self {
        match band(average) {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            4 => Self::E,
            _ => Self::F,
        }
    }
}

/// Number of marks per score range. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    #[serde(rename = "0-30")]
    pub up_to_30: u32,
    #[serde(rename = "31-50")]
    pub up_to_50: u32,
    #[serde(rename = "51-75")]
    pub up_to_75: u32,
    #[serde(rename = "76-90")]
    pub up_to_90: u32,
    #[serde(rename = "91-100")]
    pub above_90: u32,
}

impl ScoreDistribution {
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let mut distribution = Self::default();
        for score in scores {
            distribution.record(score);
        }
        distribution
    }

    /// Counts one score in exactly one bucket.
    pub fn record(&mut self, score: f64) {
        let bucket = if score <= 30.0 {
            &mut self.up_to_30
        } else if score <= 50.0 {
            &mut self.up_to_50
        } else if score <= 75.0 {
            &mut self.up_to_75
        } else if score <= 90.0 {
            &mut self.up_to_90
        } else {
            &mut self.above_90
        };
        *bucket += 1;
    }

    pub fn total(&self) -> u32 {
        self.up_to_30 + self.up_to_50 + self.up_to_75 + self.up_to_90 + self.above_90
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Mean score rounded to two decimals.
    #[serde(with = "two_decimals")]
    pub average_score: f64,
    pub performance: Performance,
    pub highest_subject: String,
    pub lowest_subject: String,
    pub total_exams: usize,
    pub last_updated: DateTime<Utc>,
    pub grade: Grade,
    pub score_distribution: ScoreDistribution,
}

impl ReportSummary {
    /// Summarises `marks` as of now.
    pub fn from_marks(marks: &[MarkEntry]) -> Self {
        Self::compute(marks, Utc::now())
    }

    /// Summarises `marks`, stamping the result with `computed_at`.
    ///
    /// Bands and grades are derived from the unrounded mean; only the stored
    /// average is rounded. Highest/lowest subject ties resolve to the first
    /// mark in slice order.
    pub fn compute(marks: &[MarkEntry], computed_at: DateTime<Utc>) -> Self {
        let average = mean(marks);

        Self {
            average_score: round_two_decimals(average),
            performance: Performance::from_average(average),
            highest_subject: first_extreme(marks, |candidate, current| candidate > current),
            lowest_subject: first_extreme(marks, |candidate, current| candidate < current),
            total_exams: marks.len(),
            last_updated: computed_at,
            grade: Grade::from_average(average),
            score_distribution: ScoreDistribution::from_scores(marks.iter().map(|m| m.score)),
        }
    }
}

fn mean(marks: &[MarkEntry]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    marks.iter().map(|m| m.score).sum::<f64>() / marks.len() as f64
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Left-to-right reduction that only moves off the current pick when
/// `replaces(candidate, current)` holds strictly.
fn first_extreme(marks: &[MarkEntry], replaces: impl Fn(f64, f64) -> bool) -> String {
    let mut iter = marks.iter();
    let Some(first) = iter.next() else {
        return NOT_AVAILABLE.to_owned();
    };

    iter.fold(first, |current, candidate| {
        if replaces(candidate.score, current.score) {
            candidate
        } else {
            current
        }
    })
    .subject
    .clone()
}

mod two_decimals {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.2}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(de::Error::custom)
    }
}
