pub mod diary;
pub mod staff;

use actix_web::HttpRequest;
use common::model::staff::Role;

/// Role of the requesting staff member.
///
/// Session issuance is handled upstream; by the time a request reaches these
/// services the authenticated role arrives in the `x-staff-role` header.
/// Anything missing or unrecognized is treated as an ordinary staff member.
pub fn role_from_request(req: &HttpRequest) -> Role {
    req.headers()
        .get("x-staff-role")
        .and_then(|value| value.to_str().ok())
        .and_then(Role::parse)
        .unwrap_or(Role::Staff)
}
