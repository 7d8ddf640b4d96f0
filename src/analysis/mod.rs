/// Wind time-series analysis.
///
/// Submodules, in pipeline order:
/// - `timestamps` — repairs truncated minute fields, drops unrepairable samples.
/// - `windowing`  — gap-aware cadence walk and hourly bucketing.
/// - `directions` — 8-sector occurrence percentages and ranking.
/// - `extremes`   — raw and hourly-mean peak wind speeds.
/// - `summary`    — ties the steps together into a `WindSummary`.

pub mod directions;
pub mod extremes;
pub mod summary;
pub mod timestamps;
pub mod windowing;
