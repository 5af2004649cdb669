//! AWS Lambda handler for benefit calculations
//!
//! This Lambda function accepts calculation requests via JSON and returns buy-back
//! deposit estimates, minimum retirement age determinations, and sick leave credit
//! conversions in a single response.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use benefits_engine::{
    calculate_mra_as_of, calculate_sick_leave, BuyBackEngine, MilitaryBuyBackInput,
    MilitaryBuyBackResult, MraInput, MraResult, RateTables, SickLeaveInput, SickLeaveResult,
};
use chrono::{Local, NaiveDate};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input for one invocation; any combination of sections may be present
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Accrual cutoff date (defaults to today)
    #[serde(default)]
    pub as_of: Option<NaiveDate>,

    /// Single buy-back estimate
    #[serde(default)]
    pub buy_back: Option<MilitaryBuyBackInput>,

    /// Batch of buy-back estimates, run in parallel
    #[serde(default)]
    pub buy_back_batch: Option<Vec<MilitaryBuyBackInput>>,

    /// Minimum retirement age determination
    #[serde(default)]
    pub mra: Option<MraInput>,

    /// Sick leave conversion to service credit
    #[serde(default)]
    pub sick_leave: Option<SickLeaveInput>,
}

/// Output mirroring the requested sections
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_back: Option<MilitaryBuyBackResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_back_batch: Option<Vec<MilitaryBuyBackResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mra: Option<MraResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeaveResult>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &CalculationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    if request.buy_back.is_none()
        && request.buy_back_batch.is_none()
        && request.mra.is_none()
        && request.sick_leave.is_none()
    {
        return Ok(error_response(400, "No calculations requested"));
    }

    let engine = BuyBackEngine::new(RateTables::default_published());
    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());

    let buy_back = request
        .buy_back
        .as_ref()
        .map(|input| engine.calculate_as_of(input, as_of));

    // Run batch estimates in parallel
    let buy_back_batch = request.buy_back_batch.as_ref().map(|batch| {
        batch
            .par_iter()
            .map(|input| engine.calculate_as_of(input, as_of))
            .collect()
    });

    let mra = request
        .mra
        .as_ref()
        .map(|input| calculate_mra_as_of(input, as_of));

    let sick_leave = request.sick_leave.as_ref().map(calculate_sick_leave);

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = CalculationResponse {
        buy_back,
        buy_back_batch,
        mra,
        sick_leave,
        execution_time_ms,
        error: None,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
