/// Peak wind speeds.
///
/// Two peaks are reported: the strongest single 10-minute sample, and the
/// strongest hourly mean among the gap-free hours produced by
/// `windowing::hourly_buckets`. An hour with a missing sample never
/// becomes the peak hour, even if its remaining samples average higher.

use crate::model::{HourlyBucket, RawSample, WindError, WindExtreme};

/// Strongest raw sample. Ties resolve to the earliest sample.
///
/// # Errors
/// `WindError::NoUsableData` for an empty series.
pub fn raw_extreme(series: &[RawSample]) -> Result<WindExtreme, WindError> {
    let mut peak: Option<&RawSample> = None;

    for sample in series {
        match peak {
            Some(p) if sample.speed_mps <= p.speed_mps => {}
            _ => peak = Some(sample),
        }
    }

    peak.map(|p| WindExtreme { speed_mps: p.speed_mps, at: p.timestamp })
        .ok_or_else(|| WindError::NoUsableData("no wind speed samples".to_string()))
}

/// Strongest hourly mean. Ties resolve to the earliest bucket; `None` when
/// no valid hour exists.
pub fn hourly_extreme(buckets: &[HourlyBucket]) -> Option<WindExtreme> {
    let mut peak: Option<&HourlyBucket> = None;

    for bucket in buckets {
        match peak {
            Some(p) if bucket.mean_speed_mps <= p.mean_speed_mps => {}
            _ => peak = Some(bucket),
        }
    }

    peak.map(|p| WindExtreme { speed_mps: p.mean_speed_mps, at: p.at })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
