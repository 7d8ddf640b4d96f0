/// Data ingest for the wind monitoring service.
///
/// Submodules:
/// - `meteo145` — station feed URL construction, fetch and JSON parsing.
/// - `fixtures` (test only) — representative feed payloads.

pub mod meteo145;

#[cfg(test)]
pub(crate) mod fixtures;
