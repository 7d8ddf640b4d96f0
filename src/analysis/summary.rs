/// End-to-end aggregation: normalized series in, `WindSummary` out.
///
/// The `WindAggregator` owns nothing but its injected configuration (sector
/// table and windowing policy), so one instance can be shared freely and
/// every call is independent of the others.

use serde::Serialize;

use crate::analysis::directions::{rank_directions, sector_percentages, SectorTable};
use crate::analysis::extremes::{hourly_extreme, raw_extreme};
use crate::analysis::timestamps::normalize_series;
use crate::analysis::windowing::{hourly_buckets, WindowPolicy};
use crate::config::Config;
use crate::model::{RawSample, SectorPercent, WindData, WindError, WindExtreme, WindSummary};

/// Everything one aggregation produces.
#[derive(Debug, Clone, Serialize)]
pub struct WindReport {
    pub summary: WindSummary,
    /// Sector percentages in table order, for the windrose legend.
    pub sectors: Vec<SectorPercent>,
    /// Normalized per-sample arrays for windrose rendering.
    #[serde(skip)]
    pub data: WindData,
    pub hours_used: usize,
    pub hours_excluded: usize,
}

#[derive(Debug, Clone, Default)]
pub struct WindAggregator {
    table: SectorTable,
    policy: WindowPolicy,
}

impl WindAggregator {
    pub fn new(table: SectorTable, policy: WindowPolicy) -> Self {
        Self { table, policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sector_table(), config.window_policy())
    }

    pub fn table(&self) -> &SectorTable {
        &self.table
    }

    /// Runs the full pipeline over one station's raw series.
    ///
    /// # Errors
    /// `WindError::NoUsableData` when nothing survives normalization.
    pub fn summarize(&self, station: &str, days: u32, series: Vec<RawSample>) -> Result<WindReport, WindError> {
        let series = normalize_series(series);
        if series.is_empty() {
            return Err(WindError::NoUsableData(format!(
                "station '{}' returned no valid samples for the last {} days",
                station, days
            )));
        }

        let data = WindData::from_series(&series);

        let sectors = sector_percentages(&data.dd, &self.table)?;
        let ranked = rank_directions(&sectors);
        let (first, second, last) = match ranked.as_slice() {
            [first, second, .., last] => (*first, *second, *last),
            _ => {
                return Err(WindError::NoUsableData("fewer than two sectors ranked".to_string()));
            }
        };

        let windows = hourly_buckets(&series, &self.policy);
        let summary = WindSummary {
            station: station.to_string(),
            days,
            first,
            second,
            last,
            raw_extreme: raw_extreme(&series)?,
            hourly_extreme: hourly_extreme(&windows.buckets),
        };

        tracing::debug!(
            station,
            days,
            samples = series.len(),
            hours = windows.buckets.len(),
            excluded = windows.excluded_hours,
            "wind summary computed"
        );

        Ok(WindReport {
            summary,
            sectors,
            data,
            hours_used: windows.buckets.len(),
            hours_excluded: windows.excluded_hours,
        })
    }
}

fn format_time(extreme: &WindExtreme) -> String {
    extreme.at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One-paragraph human-readable description of a summary.
pub fn direction_message(summary: &WindSummary) -> String {
    let hourly = match &summary.hourly_extreme {
        Some(h) => format!(
            "while the strongest wind speed averaged over an hour was {:.2} m/s ({} UTC)",
            h.speed_mps,
            format_time(h)
        ),
        None => "while no complete hour was available for an hourly average".to_string(),
    };

    format!(
        "At station {}, over the last {} days, the dominant wind direction was {} ({:.1}% of the time). \
         The second most dominant wind direction was {} ({:.1}% of the time), \
         the least dominant wind direction was {} ({:.2}% of the time). \
         The maximum wind speed was {:.2} m/s ({} UTC), {}.",
        summary.station,
        summary.days,
        summary.first.sector,
        summary.first.percent,
        summary.second.sector,
        summary.second.percent,
        summary.last.sector,
        summary.last.percent,
        summary.raw_extreme.speed_mps,
        format_time(&summary.raw_extreme),
        hourly
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
