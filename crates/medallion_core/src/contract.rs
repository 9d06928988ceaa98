use serde::{Deserialize, Serialize};

use crate::storage_keys::PrefixMismatch;
use crate::table::TableError;

/// Storage-bucket notification event, the subset of the platform's JSON
/// shape the pipeline reads: `Records[].s3.bucket.name` and
/// `Records[].s3.object.key`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRecord {
    pub s3: ObjectEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

/// Extracts the uploaded object's location from a notification event.
/// Batched notifications carry more than one record; only the first is
/// processed and the rest are ignored.
pub fn first_object_location(event: &StorageEvent) -> Result<ObjectLocation, StageError> {
    let record = event
        .records
        .first()
        .ok_or_else(|| StageError::Event("notification event contains no records".to_string()))?;

    Ok(ObjectLocation {
        bucket: record.s3.bucket.name.clone(),
        key: record.s3.object.key.clone(),
    })
}

/// Status returned to the invocation platform. Both outcomes are encoded
/// here; a handler never surfaces an invocation-level error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn success(bucket: &str, destination_key: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("File processed successfully and saved to {bucket}/{destination_key}"),
        }
    }

    pub fn failure(error: &StageError) -> Self {
        Self {
            status_code: 500,
            body: format!("Error processing file: {error}"),
        }
    }
}

/// Everything that can fail an invocation, collapsed to a one-line
/// diagnostic. All variants surface uniformly as a 500 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// The notification event is malformed or carries no records.
    Event(String),
    /// The object key is outside the stage's required source prefix.
    PrefixMismatch(String),
    /// The blob is not valid CSV or lacks a required column.
    Parse(String),
    /// The storage read or write failed.
    Storage(String),
}

impl StageError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Event(_) => "event",
            Self::PrefixMismatch(_) => "prefix_mismatch",
            Self::Parse(_) => "parse",
            Self::Storage(_) => "storage",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Event(message)
            | Self::PrefixMismatch(message)
            | Self::Parse(message)
            | Self::Storage(message) => message,
        }
    }
}

impl std::fmt::Display for StageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StageError {}

impl From<PrefixMismatch> for StageError {
    fn from(error: PrefixMismatch) -> Self {
        Self::PrefixMismatch(error.message().to_string())
    }
}

impl From<TableError> for StageError {
    fn from(error: TableError) -> Self {
        Self::Parse(error.message())
    }
}
