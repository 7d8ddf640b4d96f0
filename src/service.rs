/// Core service wiring for wind monitoring
///
/// Ties the pieces together for one request:
/// 1. Validates the station + day window against the registry
/// 2. Fetches the raw series from the station feed
/// 3. Runs the aggregation pipeline
/// 4. Hands back a `WindReport` for the CLI or the HTTP endpoint
///
/// Nothing happens on construction; the HTTP client is created by
/// `initialize()` and the feed is only contacted when a report is requested.

use crate::analysis::summary::{WindAggregator, WindReport};
use crate::config::Config;
use crate::ingest::meteo145::{build_client, fetch_station_series, parse_feed_response};
use crate::model::WindError;
use crate::stations::{self, Station};

/// Runs the pipeline over a feed body that has already been fetched.
pub fn summarize_feed_json(
    aggregator: &WindAggregator,
    station: &str,
    days: u32,
    json: &str,
) -> Result<WindReport, WindError> {
    let series = parse_feed_response(json)?;
    aggregator.summarize(station, days, series)
}

/// Main service state
pub struct WindService {
    config: Config,
    aggregator: WindAggregator,
    client: Option<reqwest::blocking::Client>,
}

impl WindService {
    /// Create a service with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            aggregator: WindAggregator::from_config(&config),
            config,
            client: None,
        }
    }

    /// Build the HTTP client used for feed requests
    pub fn initialize(&mut self) -> Result<(), WindError> {
        self.client = Some(build_client(&self.config.feed)?);
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn aggregator(&self) -> &WindAggregator {
        &self.aggregator
    }

    pub fn stations(&self) -> &'static [Station] {
        stations::STATION_REGISTRY
    }

    /// Fetch and summarize one station's wind over the last `days` days
    pub fn report(&self, station: &str, days: u32) -> Result<WindReport, WindError> {
        let station = stations::validate_request(station, days)?;

        let client = match &self.client {
            Some(client) => client.clone(),
            None => build_client(&self.config.feed)?,
        };

        let series = fetch_station_series(&client, &self.config.feed, station.name, days)?;
        tracing::info!(station = station.name, days, samples = series.len(), "fetched station feed");

        self.aggregator.summarize(station.name, days, series)
    }

    /// Summarize every registered station, one after the other.
    ///
    /// A failing station does not abort the others.
    pub fn report_all(&self, days: u32) -> Vec<(&'static str, Result<WindReport, WindError>)> {
        self.stations()
            .iter()
            .map(|station| {
                let result = self.report(station.name, days);
                if let Err(e) = &result {
                    tracing::warn!(station = station.name, error = %e, "station report failed");
                }
                (station.name, result)
            })
            .collect()
    }
}

impl Default for WindService {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
