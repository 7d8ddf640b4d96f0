/// windmon_service: wind summaries for the Innsbruck station network.
///
/// # Module structure
///
/// ```text
/// windmon_service
/// ├── model       — shared data types (RawSample, WindSummary, WindError, …)
/// ├── config      — feed and policy configuration loader (windmon.toml)
/// ├── stations    — station registry and allowed day windows
/// ├── service     — request wiring: validate → fetch → aggregate
/// ├── endpoint    — JSON HTTP API over the service
/// ├── ingest
/// │   ├── meteo145 — station feed: URL construction, fetch, JSON parsing
/// │   └── fixtures (test only) — representative feed payloads
/// └── analysis
///     ├── timestamps — truncated-minute repair
///     ├── windowing  — gap-aware cadence walk and hourly buckets
///     ├── directions — 8-sector percentages and ranking
///     ├── extremes   — raw and hourly-mean peak wind speeds
///     └── summary    — full pipeline and summary message
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod service;
pub mod stations;
