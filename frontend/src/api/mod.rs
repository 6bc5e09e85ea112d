//! Network access to the diary API and the client-side record cache.
//!
//! `fetch_record`/`commit_record` talk to the backend over gloo-net; the
//! [`RemoteRecordStore`] caches the last authoritative record per id and is
//! replaced by successful commit responses, so reads after a commit need no
//! extra round trip. Failures are classified, never retried here.

use std::collections::HashMap;
use std::fmt;

use gloo_net::http::Request;

use common::model::record::{DiaryRecord, FieldMap};
use common::requests::CommitRecordRequest;

/// Why a fetch or commit did not produce a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Session missing or expired; the caller redirects to sign-in.
    Unauthorized,
    /// The server declined the request, e.g. a business-rule violation.
    Rejected { status: u16, message: String },
    /// Transport-level failure; retryable via the same trigger.
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "Session expired, please sign in again"),
            FetchError::Rejected { message, .. } if !message.is_empty() => {
                write!(f, "{}", message)
            }
            FetchError::Rejected { status, .. } => write!(f, "Request rejected ({})", status),
            FetchError::Network(reason) => write!(f, "Network error: {}", reason),
        }
    }
}

async fn into_record(response: gloo_net::http::Response) -> Result<DiaryRecord, FetchError> {
    match response.status() {
        200 => response
            .json::<DiaryRecord>()
            .await
            .map_err(|e| FetchError::Network(e.to_string())),
        401 => Err(FetchError::Unauthorized),
        status => {
            let message = response.text().await.unwrap_or_default();
            Err(FetchError::Rejected { status, message })
        }
    }
}

/// GET the record by id. A single failed fetch is surfaced, not retried.
pub async fn fetch_record(record_id: &str) -> Result<DiaryRecord, FetchError> {
    let response = Request::get(&format!("/api/diary/{}", record_id))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    into_record(response).await
}

/// PATCH the named fields onto the record; returns the authoritative updated
/// record. The operation is an overwrite-by-id, so re-sending the same
/// payload is safe.
pub async fn commit_record(
    record_id: &str,
    payload: &FieldMap,
) -> Result<DiaryRecord, FetchError> {
    let body = CommitRecordRequest {
        fields: payload.clone(),
    };
    let response = Request::patch(&format!("/api/diary/{}", record_id))
        .json(&body)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    into_record(response).await
}

/// Hard redirect to the sign-in surface. Drafts stay in sessionStorage and
/// are recovered after re-authentication, best-effort.
pub fn redirect_to_sign_in() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/signin");
    }
}

/// Cache of the last server-authoritative record per id.
#[derive(Default)]
pub struct RemoteRecordStore {
    records: HashMap<String, DiaryRecord>,
}

impl RemoteRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, record_id: &str) -> Option<&DiaryRecord> {
        self.records.get(record_id)
    }

    /// Replaces the cached record, typically with a fetch result or a
    /// successful commit response.
    pub fn replace(&mut self, record: DiaryRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Drops the cached copy so the next read goes back to the network.
    pub fn invalidate(&mut self, record_id: &str) {
        self.records.remove(record_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replace_then_get_returns_the_new_value() {
        let mut store = RemoteRecordStore::new();
        let mut record = DiaryRecord::empty("r1");
        record.fields.insert("status".into(), json!("Pending"));
        store.replace(record.clone());
        assert_eq!(store.get("r1"), Some(&record));

        record.fields.insert("status".into(), json!("Ordered"));
        record.updated_at = 5;
        store.replace(record.clone());
        assert_eq!(store.get("r1"), Some(&record));
    }

    #[test]
    fn invalidate_forgets_the_record() {
        let mut store = RemoteRecordStore::new();
        store.replace(DiaryRecord::empty("r1"));
        store.invalidate("r1");
        assert!(store.get("r1").is_none());
    }

    #[test]
    fn rejection_message_is_shown_verbatim() {
        let err = FetchError::Rejected {
            status: 422,
            message: "Entry cannot be marked collected while unpaid".into(),
        };
        assert_eq!(
            err.to_string(),
            "Entry cannot be marked collected while unpaid"
        );
    }
}
