//! Quote Runner
//!
//! Batch front-end for the allocator: reads reservation inputs as JSON,
//! allocates each one and writes the itemized results with a summary.
//!
//! Accepted request shapes:
//!
//! ```json
//! { "basePrice": 14000, "options": [] }
//! ```
//!
//! ```json
//! [{ "basePrice": 14000 }, { "basePrice": "9000", "discountAmount": 500 }]
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::reservation::{ReservationRevenueInput, ReservationRevenueResult, RevenueSummary};

use crate::revenue::RevenueAllocator;

/// One reservation or a batch of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuoteRequest {
    Batch(Vec<ReservationRevenueInput>),
    Single(ReservationRevenueInput),
}

impl QuoteRequest {
    fn into_inputs(self) -> Vec<ReservationRevenueInput> {
        match self {
            QuoteRequest::Batch(inputs) => inputs,
            QuoteRequest::Single(input) => vec![input],
        }
    }
}

/// Quote output: per-reservation results in request order plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub results: Vec<ReservationRevenueResult>,
    pub summary: RevenueSummary,
}

/// Parse a quote request from JSON text
pub fn parse_request(json: &str) -> AppResult<Vec<ReservationRevenueInput>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !(value.is_object() || value.is_array()) {
        return Err(AppError::with_message(
            ErrorCode::ReservationInputInvalid,
            "quote request must be a reservation object or an array of them",
        )
        .with_detail("found", json_type_name(&value)));
    }
    let request: QuoteRequest = serde_json::from_value(value).map_err(|e| {
        AppError::new(ErrorCode::ReservationInputInvalid).with_detail("reason", e.to_string())
    })?;
    Ok(request.into_inputs())
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Allocate every input
pub fn quote(allocator: &RevenueAllocator, inputs: &[ReservationRevenueInput]) -> QuoteReport {
    let results: Vec<ReservationRevenueResult> =
        inputs.iter().map(|input| allocator.calculate(input)).collect();
    let summary = results.iter().collect();
    QuoteReport { results, summary }
}

/// Read a request, allocate it and write the report as JSON
pub fn run<R: Read, W: Write>(
    allocator: &RevenueAllocator,
    mut reader: R,
    mut writer: W,
    compact: bool,
) -> AppResult<QuoteReport> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;

    let inputs = parse_request(&json)?;
    tracing::info!(reservations = inputs.len(), "Quoting reservation revenue");

    let report = quote(allocator, &inputs);
    let unconserved = report.results.iter().filter(|r| !r.is_conserved()).count();
    if unconserved > 0 {
        tracing::info!(
            unconserved,
            "Store revenue floored at welfare expense on some reservations"
        );
    }

    if compact {
        serde_json::to_writer(&mut writer, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, &report)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(report)
}
