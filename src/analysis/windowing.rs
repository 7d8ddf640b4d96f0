/// Gap-aware hourly windowing.
///
/// The feed is expected to deliver one sample every 10 minutes, but
/// samples go missing. Grouping the raw series into blocks of six would
/// then silently shift every following hour. Instead the series is walked
/// against the expected minute cadence and a `Slot::Gap` is inserted
/// wherever a sample is missing, which re-synchronizes the cadence so a
/// single hole does not poison the rest of the series.
///
/// The gap-augmented slots are then cut into hours of six:
///
/// - an hour containing any gap is excluded (never partially averaged);
/// - a complete hour yields its mean speed, stamped with its latest time;
/// - trailing slots that do not fill an hour are discarded, except when
///   their count is listed in `WindowPolicy::tail_fold_remainders`, in
///   which case they are folded back in as one extra hourly mean.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HourlyBucket, RawSample, CADENCE_MINUTES, CANONICAL_MINUTES, SAMPLES_PER_HOUR};

/// Trailing remainders (out of 6) that count as an "almost complete" hour.
///
/// Historical versions of this rule disagreed on the bounds; 4 and 5 (one
/// or two samples short) is the current choice and awaits confirmation.
pub const TAIL_FOLD_REMAINDERS: [usize; 2] = [4, 5];

/// Policy knobs for hourly windowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPolicy {
    pub tail_fold_remainders: Vec<usize>,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            tail_fold_remainders: TAIL_FOLD_REMAINDERS.to_vec(),
        }
    }
}

impl WindowPolicy {
    /// A policy that never folds a partial trailing hour.
    pub fn strict() -> Self {
        Self { tail_fold_remainders: Vec::new() }
    }

    fn folds(&self, remainder: usize) -> bool {
        self.tail_fold_remainders.contains(&remainder)
    }
}

/// One position on the expected 10-minute grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    Sample(RawSample),
    /// An expected sample that never arrived.
    Gap,
}

impl Slot {
    pub fn is_gap(&self) -> bool {
        matches!(self, Slot::Gap)
    }
}

/// Result of windowing one series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyWindows {
    /// Valid hourly means in series order, folded tail last.
    pub buckets: Vec<HourlyBucket>,
    /// Complete hours excluded because they held at least one gap.
    pub excluded_hours: usize,
    /// Gap sentinels inserted while walking the cadence.
    pub gaps_inserted: usize,
    /// Trailing slots that did not fill an hour.
    pub tail_len: usize,
    /// Whether the trailing slots were folded in as an extra bucket.
    pub tail_folded: bool,
}

/// Expected minute sequence for one hour, starting at `first_minute`.
///
/// `first_minute` is snapped down onto the 10-minute grid.
pub fn cadence_from(first_minute: u32) -> [u32; SAMPLES_PER_HOUR] {
    let start = (first_minute / CADENCE_MINUTES) as usize % SAMPLES_PER_HOUR;
    let mut cadence = [0u32; SAMPLES_PER_HOUR];
    for (i, slot) in cadence.iter_mut().enumerate() {
        *slot = CANONICAL_MINUTES[(start + i) % SAMPLES_PER_HOUR];
    }
    cadence
}

/// Walks the series against the expected cadence, inserting a gap before
/// every sample whose minute skips ahead of the cadence pointer.
///
/// Samples with a minute off the 10-minute grid cannot be placed and are
/// skipped; run `timestamps::normalize_series` first.
pub fn insert_gaps(series: &[RawSample]) -> Vec<Slot> {
    let Some(first) = series.iter().find(|s| CANONICAL_MINUTES.contains(&s.timestamp.minute())) else {
        return Vec::new();
    };

    let cadence = cadence_from(first.timestamp.minute());
    let mut position = 0usize;
    let mut slots = Vec::with_capacity(series.len());

    for sample in series {
        let minute = sample.timestamp.minute();
        if !CANONICAL_MINUTES.contains(&minute) {
            tracing::warn!(timestamp = %sample.timestamp, "skipping off-grid sample");
            continue;
        }

        while cadence[position] != minute {
            slots.push(Slot::Gap);
            position = (position + 1) % SAMPLES_PER_HOUR;
        }

        slots.push(Slot::Sample(*sample));
        position = (position + 1) % SAMPLES_PER_HOUR;
    }

    slots
}

/// Mean speed and latest timestamp of a run of samples, `None` if it
/// holds a gap or nothing at all.
fn complete_mean(slots: &[Slot]) -> Option<HourlyBucket> {
    let mut latest: Option<DateTime<Utc>> = None;
    let mut sum = 0.0;

    for slot in slots {
        let Slot::Sample(sample) = slot else {
            return None;
        };
        sum += sample.speed_mps;
        latest = Some(latest.map_or(sample.timestamp, |t| t.max(sample.timestamp)));
    }

    latest.map(|at| HourlyBucket {
        at,
        mean_speed_mps: sum / slots.len() as f64,
    })
}

/// Groups a normalized series into gap-free hourly means.
pub fn hourly_buckets(series: &[RawSample], policy: &WindowPolicy) -> HourlyWindows {
    let mut slots = insert_gaps(series);
    let gaps_inserted = slots.iter().filter(|s| s.is_gap()).count();

    let tail_len = slots.len() % SAMPLES_PER_HOUR;
    let tail = slots.split_off(slots.len() - tail_len);

    let mut windows = HourlyWindows {
        gaps_inserted,
        tail_len,
        ..HourlyWindows::default()
    };

    for hour in slots.chunks_exact(SAMPLES_PER_HOUR) {
        match complete_mean(hour) {
            Some(bucket) => windows.buckets.push(bucket),
            None => windows.excluded_hours += 1,
        }
    }

    // A folded tail must itself be gap-free, same as any other hour.
    if policy.folds(tail_len) {
        if let Some(bucket) = complete_mean(&tail) {
            windows.buckets.push(bucket);
            windows.tail_folded = true;
        }
    }

    tracing::debug!(
        buckets = windows.buckets.len(),
        excluded = windows.excluded_hours,
        gaps = gaps_inserted,
        tail = tail_len,
        folded = windows.tail_folded,
        "hourly windowing complete"
    );

    windows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
