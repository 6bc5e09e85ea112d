use serde::{Deserialize, Serialize};

use crate::model::record::FieldMap;

/// PATCH payload for a diary record commit.
///
/// An idempotent overwrite of the named fields: re-sending the same payload
/// is a no-op beyond the redundant write. Fields not named are untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommitRecordRequest {
    pub fields: FieldMap,
}

/// Structured error body returned by the API on a rejected request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
