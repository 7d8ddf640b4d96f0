/// Shared data types for the wind monitoring service.
///
/// Everything here is created fresh per aggregation request and dropped
/// once the summary has been produced. Nothing in this module holds state
/// between requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Cadence constants
// ---------------------------------------------------------------------------

/// Minutes between two consecutive feed samples.
pub const CADENCE_MINUTES: u32 = 10;

/// Samples in one complete hour at the fixed cadence.
pub const SAMPLES_PER_HOUR: usize = 6;

/// Minute-of-hour values a well-formed timestamp can carry.
pub const CANONICAL_MINUTES: [u32; SAMPLES_PER_HOUR] = [0, 10, 20, 30, 40, 50];

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// One 10-minute observation from the station feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    /// Meteorological direction the wind blows from, degrees in [0, 360).
    pub direction_deg: f64,
    /// Wind speed in m/s.
    pub speed_mps: f64,
}

impl RawSample {
    /// Direction within [0, 360) and a non-negative speed.
    pub fn is_within_range(&self) -> bool {
        (0.0..360.0).contains(&self.direction_deg) && self.speed_mps >= 0.0
    }
}

/// Ordered samples for a single station + day-window query.
pub type SampleSeries = Vec<RawSample>;

/// Untouched per-sample arrays handed to windrose rendering.
///
/// These are the normalized arrays, not the hourly aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindData {
    pub dd: Vec<f64>,
    pub ff: Vec<f64>,
    pub time: Vec<DateTime<Utc>>,
}

impl WindData {
    pub fn from_series(series: &[RawSample]) -> Self {
        Self {
            dd: series.iter().map(|s| s.direction_deg).collect(),
            ff: series.iter().map(|s| s.speed_mps).collect(),
            time: series.iter().map(|s| s.timestamp).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// One of the 8 compass sectors, 45° wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Sector {
    pub fn label(&self) -> &'static str {
        match self {
            Sector::N => "N",
            Sector::NE => "NE",
            Sector::E => "E",
            Sector::SE => "SE",
            Sector::S => "S",
            Sector::SW => "SW",
            Sector::W => "W",
            Sector::NW => "NW",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occurrence percentage for one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorPercent {
    pub sector: Sector,
    pub percent: f64,
}

/// Entry of the descending-by-percent ranking.
pub type RankedDirection = SectorPercent;

// ---------------------------------------------------------------------------
// Speeds
// ---------------------------------------------------------------------------

/// A peak wind speed and the instant it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindExtreme {
    pub speed_mps: f64,
    pub at: DateTime<Utc>,
}

/// Mean speed of one complete (gap-free) hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Latest timestamp among the bucket's samples.
    pub at: DateTime<Utc>,
    pub mean_speed_mps: f64,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// The aggregate consumed by message formatting and the HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSummary {
    pub station: String,
    pub days: u32,
    pub first: RankedDirection,
    pub second: RankedDirection,
    pub last: RankedDirection,
    pub raw_extreme: WindExtreme,
    /// `None` when the series holds no complete hour.
    pub hourly_extreme: Option<WindExtreme>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum WindError {
    #[error("Failed to fetch station feed from {url}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Station feed at {url} answered with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode station feed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Feed arrays differ in length (dd={dd}, ff={ff}, datumsec={datumsec})")]
    LengthMismatch { dd: usize, ff: usize, datumsec: usize },

    #[error("Feed timestamp {0} ms is out of range")]
    InvalidTimestamp(i64),

    #[error("No usable wind data: {0}")]
    NoUsableData(String),

    #[error("Unknown station '{0}'")]
    UnknownStation(String),

    #[error("Invalid day window {days}; expected one of {allowed:?}")]
    InvalidDays { days: u32, allowed: &'static [u32] },

    #[error("Failed to load configuration from {path}: {message}")]
    Config { path: String, message: String },
}

impl WindError {
    /// True for failures a caller may reasonably retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, WindError::FetchFailed { .. } | WindError::HttpStatus { .. })
    }
}
