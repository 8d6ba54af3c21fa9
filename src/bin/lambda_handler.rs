//! AWS Lambda handler for running property projections
//!
//! Accepts loan and rental inputs as JSON and returns the full projection
//! plus the summary panel figures. Missing fields fall back to the
//! reference scenario.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use property_projection::{compute, LoanInputs, ProjectionResult, ProjectionSummary};
use serde::Serialize;

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub summary: ProjectionSummary,
    pub equity_irr_pct: Option<f64>,
    pub result: ProjectionResult,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let inputs = match LoanInputs::from_json(&body_str) {
        Ok(inputs) => inputs,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let result = match compute(inputs) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Rejected request: {}", e);
            return error_response(422, &e.to_string());
        }
    };

    let response = ProjectionResponse {
        summary: result.summary(),
        equity_irr_pct: result.equity_irr().map(|irr| irr * 100.0),
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
