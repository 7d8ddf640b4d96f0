/// meteo145 station feed client.
///
/// Handles URL construction, the blocking HTTP fetch, and JSON response
/// decoding for the University of Innsbruck station feed:
///   http://meteo145.uibk.ac.at/{station}/{days}
///
/// The feed returns parallel arrays (`datumsec`, `dd`, `ff`, …). See
/// `fixtures.rs` for annotated examples of the response structure.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

use crate::config::FeedConfig;
use crate::model::{RawSample, SampleSeries, WindError};

// ---------------------------------------------------------------------------
// Serde structures for feed deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct FeedResponse {
    datumsec: Vec<i64>,
    dd: Vec<Option<f64>>,
    ff: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the feed URL for one station and day window.
///
/// # Example
/// ```
/// use windmon_service::ingest::meteo145::build_feed_url;
///
/// let url = build_feed_url("http://meteo145.uibk.ac.at", "innsbruck", 3);
/// assert_eq!(url, "http://meteo145.uibk.ac.at/innsbruck/3");
/// ```
pub fn build_feed_url(base_url: &str, station: &str, days: u32) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(station),
        days
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Converts feed milliseconds since the Unix epoch into a UTC instant.
pub fn datumsec_to_utc(millis: i64) -> Result<DateTime<Utc>, WindError> {
    DateTime::from_timestamp_millis(millis).ok_or(WindError::InvalidTimestamp(millis))
}

/// Zips the parallel feed arrays into samples.
///
/// Samples with a missing (`null`) direction or speed are skipped; the
/// windower later treats their slot as a gap. Out-of-range values are kept
/// and counted in a warning.
///
/// # Errors
/// - `WindError::LengthMismatch` — the arrays differ in length.
/// - `WindError::InvalidTimestamp` — a `datumsec` value chrono cannot represent.
pub fn samples_from_arrays(
    dd: &[Option<f64>],
    ff: &[Option<f64>],
    datumsec: &[i64],
) -> Result<SampleSeries, WindError> {
    if dd.len() != ff.len() || dd.len() != datumsec.len() {
        return Err(WindError::LengthMismatch {
            dd: dd.len(),
            ff: ff.len(),
            datumsec: datumsec.len(),
        });
    }

    let mut series = Vec::with_capacity(datumsec.len());
    let mut skipped = 0usize;
    let mut out_of_range = 0usize;

    for ((direction, speed), millis) in dd.iter().zip(ff).zip(datumsec) {
        let timestamp = datumsec_to_utc(*millis)?;

        match (direction, speed) {
            (Some(direction_deg), Some(speed_mps)) => {
                let sample = RawSample {
                    timestamp,
                    direction_deg: *direction_deg,
                    speed_mps: *speed_mps,
                };
                if !sample.is_within_range() {
                    out_of_range += 1;
                }
                series.push(sample);
            }
            _ => skipped += 1,
        }
    }

    if out_of_range > 0 {
        tracing::warn!(
            out_of_range,
            "feed samples with direction outside [0, 360) or negative speed"
        );
    }

    if skipped > 0 {
        tracing::warn!(skipped, "skipped feed samples with missing direction or speed");
    }

    Ok(series)
}

/// Parses a feed JSON body into a raw sample series in feed order.
///
/// An empty series is returned as-is; deciding that it is unusable is up
/// to the aggregator.
pub fn parse_feed_response(json: &str) -> Result<SampleSeries, WindError> {
    let response: FeedResponse = serde_json::from_str(json)?;
    samples_from_arrays(&response.dd, &response.ff, &response.datumsec)
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Builds the blocking HTTP client used for feed requests.
pub fn build_client(feed: &FeedConfig) -> Result<reqwest::blocking::Client, WindError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(feed.timeout_secs))
        .user_agent(concat!("windmon_service/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| WindError::FetchFailed {
            url: feed.base_url.clone(),
            source,
        })
}

/// Fetches and decodes one station's series.
///
/// # Errors
/// - `WindError::FetchFailed` — the feed could not be reached.
/// - `WindError::HttpStatus` — the feed answered with a non-success status.
/// - any error of `parse_feed_response`.
pub fn fetch_station_series(
    client: &reqwest::blocking::Client,
    feed: &FeedConfig,
    station: &str,
    days: u32,
) -> Result<SampleSeries, WindError> {
    let url = build_feed_url(&feed.base_url, station, days);
    tracing::debug!(%url, "fetching station feed");

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|source| WindError::FetchFailed { url: url.clone(), source })?;

    if !response.status().is_success() {
        return Err(WindError::HttpStatus {
            url,
            status: response.status(),
        });
    }

    let body = response
        .text()
        .map_err(|source| WindError::FetchFailed { url: url.clone(), source })?;

    parse_feed_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
