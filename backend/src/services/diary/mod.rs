//! # Diary Record Service
//!
//! Aggregates the API endpoints for customer diary records under
//! `/api/diary`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /{record_id}`**:
//!     - **Handler**: `get::process`
//!     - **Description**: Returns the full `DiaryRecord` (id, field map,
//!       last-modified marker) as JSON, or `404 Not Found` if no record
//!       exists under that id.
//!
//! *   **`PATCH /{record_id}`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Applies a `CommitRecordRequest` as an idempotent
//!       overwrite of the named fields, enforcing the status-workflow gate
//!       (an entry cannot be marked collected while unpaid unless the
//!       requester holds an elevated role). Returns the authoritative
//!       updated record.

mod get;
mod save;

use actix_web::web::{get, patch, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/diary";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{record_id}", get().to(get::process))
        .route("/{record_id}", patch().to(save::process))
}
