use std::time::Instant;

use serde_json::{json, Value};

use medallion_core::contract::{
    first_object_location, InvocationResponse, StageError, StorageEvent,
};
use medallion_core::storage_keys::{destination_key, Stage};
use medallion_core::table::Table;
use medallion_core::{aggregate::aggregate, enrich::enrich};

use crate::adapters::object_store::ObjectStore;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

struct StageOutcome {
    bucket: String,
    destination_key: String,
    rows_in: usize,
    rows_out: usize,
}

/// Runs one stage invocation end to end: extract the uploaded object's
/// location, validate its prefix, fetch, transform, and write the derived
/// object under the destination prefix. Every failure is converted into a
/// 500 response carrying a one-line diagnostic; nothing is retried and a
/// partial write is never rolled back.
pub fn handle_stage_event(
    payload: Value,
    stage: Stage,
    store: &impl ObjectStore,
) -> InvocationResponse {
    let started_at = Instant::now();

    match run_stage(payload, stage, store) {
        Ok(outcome) => {
            log_stage_info(
                stage,
                "stage_completed",
                json!({
                    "bucket": outcome.bucket,
                    "destination_key": outcome.destination_key,
                    "rows_in": outcome.rows_in,
                    "rows_out": outcome.rows_out,
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            InvocationResponse::success(&outcome.bucket, &outcome.destination_key)
        }
        Err(error) => {
            log_stage_error(
                stage,
                "stage_failed",
                json!({
                    "error": error.to_string(),
                    "error_kind": error.kind(),
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            InvocationResponse::failure(&error)
        }
    }
}

fn run_stage(
    payload: Value,
    stage: Stage,
    store: &impl ObjectStore,
) -> Result<StageOutcome, StageError> {
    let event: StorageEvent = serde_json::from_value(payload)
        .map_err(|error| StageError::Event(format!("malformed notification event: {error}")))?;
    let location = first_object_location(&event)?;

    log_stage_info(
        stage,
        "stage_started",
        json!({
            "bucket": location.bucket,
            "key": location.key,
        }),
    );

    // Prefix validation happens before any storage call; a misplaced object
    // must not be fetched.
    let destination = destination_key(stage, &location.key)?;

    let blob = store
        .get_object(&location.bucket, &location.key)
        .map_err(StageError::Storage)?;
    let table = Table::from_csv(&blob)?;

    let output = match stage {
        Stage::BronzeToSilver => enrich(&table)?,
        Stage::SilverToGold => aggregate(&table)?,
    };

    store
        .put_object(&location.bucket, &destination, &output.to_csv(), CSV_CONTENT_TYPE)
        .map_err(StageError::Storage)?;

    Ok(StageOutcome {
        bucket: location.bucket,
        destination_key: destination,
        rows_in: table.row_count(),
        rows_out: output.row_count(),
    })
}

fn log_stage_info(stage: Stage, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stage_handler",
            "stage": stage.name(),
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_stage_error(stage: Stage, event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stage_handler",
            "stage": stage.name(),
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
