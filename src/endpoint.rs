/// HTTP endpoint for querying wind summaries
///
/// Provides a simple JSON API for dashboards and windrose renderers.
///
/// Endpoints:
/// - GET /wind/{station}/{days} - Wind summary, message and sector table
/// - GET /stations - Station registry
/// - GET /health - Service health check

use serde::Serialize;

use crate::analysis::summary::{direction_message, WindReport};
use crate::model::WindError;
use crate::service::WindService;
use crate::stations::{Station, ALLOWED_DAYS};

type JsonResponse = tiny_http::Response<std::io::Cursor<Vec<u8>>>;

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Wind summary response
#[derive(Debug, Serialize)]
pub struct WindResponse<'a> {
    #[serde(flatten)]
    pub report: &'a WindReport,
    pub message: String,
}

/// Station registry response
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: &'static [Station],
    pub allowed_days: &'static [u32],
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Splits `/wind/{station}/{days}` into its parts.
fn parse_wind_path(path: &str) -> Option<(String, &str)> {
    let rest = path.strip_prefix("/wind/")?;
    let (station, days) = rest.split_once('/')?;
    let station = urlencoding::decode(station).ok()?.into_owned();
    Some((station, days.trim_end_matches('/')))
}

/// HTTP status for a failed wind request.
fn status_for(error: &WindError) -> u16 {
    match error {
        WindError::UnknownStation(_) => 404,
        WindError::InvalidDays { .. } => 400,
        WindError::NoUsableData(_) => 422,
        WindError::FetchFailed { .. }
        | WindError::HttpStatus { .. }
        | WindError::Decode(_)
        | WindError::LengthMismatch { .. }
        | WindError::InvalidTimestamp(_) => 502,
        WindError::Config { .. } => 500,
    }
}

/// Route one request URL to a status code and JSON body.
pub fn route(service: &WindService, url: &str) -> (u16, serde_json::Value) {
    let path = url.split('?').next().unwrap_or(url);

    if path == "/health" {
        return handle_health();
    }

    if path == "/stations" {
        return handle_stations();
    }

    if let Some((station, days)) = parse_wind_path(path) {
        return match days.parse::<u32>() {
            Ok(days) => handle_wind_query(service, &station, days),
            Err(_) => (
                400,
                serde_json::json!({
                    "error": format!("'{}' is not a number of days", days),
                    "allowed_days": ALLOWED_DAYS,
                }),
            ),
        };
    }

    (
        404,
        serde_json::json!({
            "error": "Not found",
            "available_endpoints": ["/health", "/stations", "/wind/{station}/{days}"]
        }),
    )
}

/// Handle /health endpoint
fn handle_health() -> (u16, serde_json::Value) {
    (
        200,
        serde_json::json!({
            "status": "ok",
            "service": "windmon_service",
            "version": env!("CARGO_PKG_VERSION")
        }),
    )
}

/// Handle /stations endpoint
fn handle_stations() -> (u16, serde_json::Value) {
    let body = StationsResponse {
        stations: crate::stations::STATION_REGISTRY,
        allowed_days: ALLOWED_DAYS,
    };
    to_json(200, &body)
}

/// Handle /wind/{station}/{days} endpoint
fn handle_wind_query(service: &WindService, station: &str, days: u32) -> (u16, serde_json::Value) {
    match service.report(station, days) {
        Ok(report) => {
            let body = WindResponse {
                message: direction_message(&report.summary),
                report: &report,
            };
            to_json(200, &body)
        }
        Err(e) => {
            tracing::warn!(station, days, error = %e, "wind query failed");
            (
                status_for(&e),
                serde_json::json!({
                    "error": e.to_string(),
                    "station": station,
                    "days": days,
                }),
            )
        }
    }
}

fn to_json<T: Serialize>(status: u16, body: &T) -> (u16, serde_json::Value) {
    match serde_json::to_value(body) {
        Ok(value) => (status, value),
        Err(e) => (500, serde_json::json!({ "error": format!("Failed to encode response: {}", e) })),
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port.
///
/// Requests are served one at a time on the calling thread.
pub fn start_endpoint_server(port: u16, service: WindService) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    tracing::info!(port, "HTTP endpoint listening");

    for request in server.incoming_requests() {
        let (status, body) = route(&service, request.url());
        tracing::info!(method = %request.method(), url = request.url(), status, "request served");

        if let Err(e) = request.respond(create_response(status, &body)) {
            tracing::warn!(error = %e, "failed to send response");
        }
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: &serde_json::Value) -> JsonResponse {
    let body = serde_json::to_string_pretty(json).unwrap_or_else(|_| "{}".to_string());

    let response = tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code));

    match tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
