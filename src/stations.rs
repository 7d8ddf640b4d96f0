/// Station registry for the wind monitoring service.
///
/// Defines the canonical list of weather stations served by the
/// meteo145 feed, along with their metadata and the day windows the feed
/// accepts. This is the single source of truth for station names — all
/// other modules should validate requests against this registry rather
/// than hardcoding names.

use serde::Serialize;

use crate::model::WindError;

// ---------------------------------------------------------------------------
// Day windows
// ---------------------------------------------------------------------------

/// Day windows the feed publishes (`/{station}/{days}`).
pub const ALLOWED_DAYS: &[u32] = &[1, 3, 7];

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata for a single feed station.
#[derive(Debug, Serialize)]
pub struct Station {
    /// Lowercase name used as the feed path segment.
    pub name: &'static str,
    /// Human-readable station name.
    pub display_name: &'static str,
    pub description: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Station elevation in meters above sea level.
    pub elevation_m: f64,
}

/// All stations published by the feed, ordered from valley floor to
/// highest elevation.
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        name: "innsbruck",
        display_name: "Innsbruck University",
        description: "Rooftop station in the Inn valley. Valley wind regime \
                      with frequent foehn episodes from the south.",
        latitude: 47.2641,
        longitude: 11.3856,
        elevation_m: 578.0,
    },
    Station {
        name: "ellboegen",
        display_name: "Ellbögen",
        description: "Wipp valley station on the foehn path south of \
                      Innsbruck. Minute fields in this feed have been seen \
                      truncated, which the normalizer repairs.",
        latitude: 47.1872,
        longitude: 11.4294,
        elevation_m: 1080.0,
    },
    Station {
        name: "obergurgl",
        display_name: "Obergurgl",
        description: "High alpine valley station in the Ötztal.",
        latitude: 46.8670,
        longitude: 11.0245,
        elevation_m: 1938.0,
    },
    Station {
        name: "sattelberg",
        display_name: "Sattelberg",
        description: "Ridge station on the Brenner border. Exposed to \
                      free-atmosphere flow above the valley inversion.",
        latitude: 47.0113,
        longitude: 11.4794,
        elevation_m: 2107.0,
    },
];

/// Returns the names of all stations, suitable for `ingest::meteo145::build_feed_url`.
pub fn all_station_names() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.name).collect()
}

/// Looks up a station by name (case-insensitive). Returns `None` if not found.
pub fn find_station(name: &str) -> Option<&'static Station> {
    STATION_REGISTRY
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

/// Validates a station + day-window request against the registry.
pub fn validate_request(name: &str, days: u32) -> Result<&'static Station, WindError> {
    let station = find_station(name).ok_or_else(|| WindError::UnknownStation(name.to_string()))?;

    if !ALLOWED_DAYS.contains(&days) {
        return Err(WindError::InvalidDays { days, allowed: ALLOWED_DAYS });
    }

    Ok(station)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_names_are_lowercase_path_segments() {
        // The feed is case-sensitive on the path; an uppercase letter or a
        // space here would produce a 404 from the station feed.
        for station in STATION_REGISTRY {
            assert!(
                station.name.chars().all(|c| c.is_ascii_lowercase()),
                "station name '{}' should be lowercase ascii",
                station.name
            );
        }
    }

    #[test]
    fn test_no_duplicate_station_names() {
        let mut seen = std::collections::HashSet::new();
        for station in STATION_REGISTRY {
            assert!(
                seen.insert(station.name),
                "duplicate station '{}' found in STATION_REGISTRY",
                station.name
            );
        }
    }

    #[test]
    fn test_registry_contains_all_feed_stations() {
        let names = all_station_names();
        for expected in ["innsbruck", "ellboegen", "obergurgl", "sattelberg"] {
            assert!(names.contains(&expected), "STATION_REGISTRY missing '{}'", expected);
        }
    }

    #[test]
    fn test_find_station_ignores_case_and_whitespace() {
        let station = find_station(" Innsbruck ").expect("Innsbruck should be in registry");
        assert_eq!(station.name, "innsbruck");
    }

    #[test]
    fn test_find_station_returns_none_for_unknown_name() {
        assert!(find_station("patscherkofel").is_none());
    }

    #[test]
    fn test_validate_request_rejects_unsupported_days() {
        let err = validate_request("innsbruck", 2).unwrap_err();
        assert!(matches!(err, WindError::InvalidDays { days: 2, .. }));
    }

    #[test]
    fn test_validate_request_rejects_unknown_station() {
        let err = validate_request("vienna", 3).unwrap_err();
        assert!(matches!(err, WindError::UnknownStation(ref s) if s == "vienna"));
    }

    #[test]
    fn test_validate_request_accepts_every_allowed_window() {
        for days in ALLOWED_DAYS {
            assert!(validate_request("obergurgl", *days).is_ok());
        }
    }

    #[test]
    fn test_coordinates_are_in_the_tyrol() {
        for station in STATION_REGISTRY {
            assert!(station.latitude > 46.5 && station.latitude < 47.6, "{}", station.name);
            assert!(station.longitude > 10.5 && station.longitude < 12.0, "{}", station.name);
            assert!(station.elevation_m > 0.0);
        }
    }
}
