//! # Staff Administration Service
//!
//! Manager-only endpoints under `/api/staff` for administering staff
//! accounts.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`**: lists all staff accounts.
//! *   **`POST /save`**: creates or updates a `StaffAccount`; a missing id
//!     is assigned a fresh uuid.
//!
//! Both routes require an elevated role (see
//! `crate::services::role_from_request`); ordinary staff get `403`.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/staff";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
}
