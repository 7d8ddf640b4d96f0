/// Test fixtures: representative JSON payloads from the meteo145 station feed.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser and the aggregation pipeline. They
/// reflect the envelope returned by:
///   http://meteo145.uibk.ac.at/{station}/{days}
///
/// Feed response shape:
///   datumsec[] — sample time, milliseconds since 1970-01-01 UTC
///   dd[]       — wind direction, degrees (may be null)
///   ff[]       — wind speed, m/s (may be null)
///   tl[], rr[], … — other parameters, ignored here
///
/// All arrays are parallel: index i of each describes the same sample.
/// All fixtures start at 2019-12-05 09:00:00 UTC (1575536400000 ms).

/// One complete hour, 09:00–09:50, one direction per compass quadrant
/// pair and speeds 1..6 m/s.
#[cfg(test)]
pub(crate) fn fixture_complete_hour_json() -> &'static str {
    r#"{
      "datumsec": [1575536400000, 1575537000000, 1575537600000, 1575538200000, 1575538800000, 1575539400000],
      "dd": [5.0, 50.0, 95.0, 140.0, 5.0, 50.0],
      "ff": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
      "tl": [2.1, 2.3, 2.6, 2.9, 3.1, 3.4],
      "rr": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    }"#
}

/// Ellbögen-style corruption: 09:10 arrives as 09:01 (repairable) and a
/// spurious 09:54 follows 09:50 (not repairable, carries a 30 m/s speed
/// that must never surface). After repair: two complete hours plus one
/// trailing sample at 11:00.
///
/// Expected after aggregation:
///   - hour 09:xx mean 2.25 m/s, hour 10:xx mean 5.0 m/s (at 10:50)
///   - raw peak 7.5 m/s at 11:00
///   - sectors: S 7, SW 4, W 1, NW 1 of 13
#[cfg(test)]
pub(crate) fn fixture_ellboegen_truncated_minutes_json() -> &'static str {
    r#"{
      "datumsec": [
        1575536400000, 1575536460000, 1575537600000, 1575538200000, 1575538800000, 1575539400000,
        1575539640000,
        1575540000000, 1575540600000, 1575541200000, 1575541800000, 1575542400000, 1575543000000,
        1575543600000
      ],
      "dd": [
        170.0, 175.0, 180.0, 185.0, 190.0, 195.0,
        10.0,
        200.0, 210.0, 220.0, 230.0, 240.0, 250.0,
        300.0
      ],
      "ff": [
        1.0, 1.5, 2.0, 2.5, 3.0, 3.5,
        30.0,
        4.0, 4.0, 5.0, 5.0, 6.0, 6.0,
        7.5
      ]
    }"#
}

/// Three hours where the stormy middle hour misses its 10:20 sample.
/// The partial mean of that hour (~15 m/s) must not become the hourly peak;
/// the reported hourly peak is the last hour, 4.0 m/s at 11:50.
#[cfg(test)]
pub(crate) fn fixture_gap_in_stormy_hour_json() -> &'static str {
    r#"{
      "datumsec": [
        1575536400000, 1575537000000, 1575537600000, 1575538200000, 1575538800000, 1575539400000,
        1575540000000, 1575540600000, 1575541800000, 1575542400000, 1575543000000,
        1575543600000, 1575544200000, 1575544800000, 1575545400000, 1575546000000, 1575546600000
      ],
      "dd": [
        90.0, 90.0, 90.0, 90.0, 90.0, 90.0,
        180.0, 180.0, 180.0, 180.0, 180.0,
        270.0, 270.0, 270.0, 270.0, 270.0, 270.0
      ],
      "ff": [
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        14.0, 15.0, 16.0, 15.0, 14.0,
        4.0, 4.0, 4.0, 4.0, 4.0, 4.0
      ]
    }"#
}

/// Sensor outage: null direction and speed values mid-series.
#[cfg(test)]
pub(crate) fn fixture_null_values_json() -> &'static str {
    r#"{
      "datumsec": [1575536400000, 1575537000000, 1575537600000, 1575538200000],
      "dd": [90.0, null, 95.0, 100.0],
      "ff": [2.0, 3.0, null, 4.0]
    }"#
}

/// Sensor glitch: a direction of 370° and a negative speed.
#[cfg(test)]
pub(crate) fn fixture_out_of_range_values_json() -> &'static str {
    r#"{
      "datumsec": [1575536400000, 1575537000000, 1575537600000],
      "dd": [90.0, 370.0, 95.0],
      "ff": [2.0, 3.0, -1.0]
    }"#
}

/// Arrays of different lengths — must be rejected, never aligned by guess.
#[cfg(test)]
pub(crate) fn fixture_length_mismatch_json() -> &'static str {
    r#"{
      "datumsec": [1575536400000, 1575537000000, 1575537600000],
      "dd": [90.0, 95.0],
      "ff": [2.0, 3.0, 4.0]
    }"#
}

/// Station online but no samples in the requested window.
#[cfg(test)]
pub(crate) fn fixture_empty_feed_json() -> &'static str {
    r#"{ "datumsec": [], "dd": [], "ff": [] }"#
}

/// Not a feed response at all (e.g. an HTML error page body).
#[cfg(test)]
pub(crate) fn fixture_malformed_json() -> &'static str {
    "<html><body>502 Bad Gateway</body></html>"
}
