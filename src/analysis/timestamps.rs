/// Timestamp repair for the 10-minute station feed.
///
/// The feed samples every 10 minutes, so a well-formed timestamp carries
/// one of the minutes in `CANONICAL_MINUTES`. Some stations occasionally
/// publish a minute field that lost its trailing digit (`10` arrives as
/// `1`). Those are repaired by multiplying by ten. Anything still outside
/// the hour after that (e.g. `54` → `540`) cannot be repaired and the whole
/// sample is dropped, so direction, speed and time stay aligned.
///
/// This is a heuristic correction, not a reconstruction: a `3` is assumed
/// to mean `30`, never `03`.

use chrono::{DateTime, Timelike, Utc};

use crate::model::{RawSample, CANONICAL_MINUTES};

/// True if the timestamp sits on the 10-minute grid.
pub fn is_canonical(timestamp: &DateTime<Utc>) -> bool {
    CANONICAL_MINUTES.contains(&timestamp.minute())
}

/// Repairs a single timestamp.
///
/// Returns the timestamp unchanged when its minute is canonical, the
/// corrected timestamp when `minute * 10` lands inside the hour, and
/// `None` when the sample must be dropped.
pub fn repair_timestamp(timestamp: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if is_canonical(&timestamp) {
        return Some(timestamp);
    }

    let repaired_minute = timestamp.minute() * 10;
    if repaired_minute < 60 {
        timestamp.with_minute(repaired_minute)
    } else {
        None
    }
}

/// Repairs every timestamp in the series, dropping non-repairable samples.
///
/// Applying this to its own output is a no-op.
pub fn normalize_series(series: Vec<RawSample>) -> Vec<RawSample> {
    let input_len = series.len();
    let mut repaired = 0usize;

    let normalized: Vec<RawSample> = series
        .into_iter()
        .filter_map(|sample| match repair_timestamp(sample.timestamp) {
            Some(ts) if ts == sample.timestamp => Some(sample),
            Some(ts) => {
                repaired += 1;
                tracing::debug!(from = %sample.timestamp, to = %ts, "repaired truncated minute");
                Some(RawSample { timestamp: ts, ..sample })
            }
            None => {
                tracing::warn!(timestamp = %sample.timestamp, "dropping sample with non-repairable minute");
                None
            }
        })
        .collect();

    let dropped = input_len - normalized.len();
    if repaired > 0 || dropped > 0 {
        tracing::info!(repaired, dropped, kept = normalized.len(), "normalized feed timestamps");
    }

    normalized
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
