//! Commit handler for the `PATCH /api/diary/{record_id}` endpoint.
//!
//! The PATCH body names the fields to overwrite; everything else on the
//! record is untouched and the full updated record is returned, so clients
//! can adopt it wholesale. Re-sending the same payload is a no-op beyond the
//! redundant write. The one business rule enforced here is the collection
//! gate: an entry cannot be marked collected while unpaid unless the
//! requester holds an elevated role.

use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{web, HttpRequest, Responder};
use log::info;
use rusqlite::{params, Connection};
use serde_json::Value;

use common::model::record::{fields, status, DiaryRecord};
use common::model::staff::Role;
use common::requests::CommitRecordRequest;

use crate::db::Database;
use crate::services::role_from_request;

use super::get::get_record;

#[derive(Debug)]
pub enum SaveError {
    /// Business-rule rejection, reported to the user verbatim.
    Policy(String),
    Storage(String),
}

pub async fn process(
    record_id: web::Path<String>,
    payload: web::Json<CommitRecordRequest>,
    req: HttpRequest,
    db: web::Data<Database>,
) -> impl Responder {
    let role = role_from_request(&req);
    let conn = match db.connect() {
        Ok(conn) => conn,
        Err(e) => {
            return actix_web::HttpResponse::ServiceUnavailable()
                .body(format!("Error opening database: {}", e));
        }
    };
    let now = unix_now();
    match apply_commit(&conn, &record_id, &payload.fields, role, now) {
        Ok(record) => {
            info!("committed {} field(s) to diary record {}", payload.fields.len(), record.id);
            actix_web::HttpResponse::Ok().json(record)
        }
        Err(SaveError::Policy(message)) => {
            actix_web::HttpResponse::UnprocessableEntity().body(message)
        }
        Err(SaveError::Storage(e)) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving diary record: {}", e)),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Overwrites the named fields onto the stored record (creating it if
/// absent), enforces the collection gate on the resulting state, persists
/// and returns the authoritative record.
pub fn apply_commit(
    conn: &Connection,
    record_id: &str,
    patch: &common::model::record::FieldMap,
    role: Role,
    now: i64,
) -> Result<DiaryRecord, SaveError> {
    if record_id.trim().is_empty() {
        return Err(SaveError::Policy("Record id cannot be empty".to_string()));
    }

    let mut record = get_record(conn, record_id)
        .map_err(SaveError::Storage)?
        .unwrap_or_else(|| DiaryRecord::empty(record_id));

    for (name, value) in patch {
        record.fields.insert(name.clone(), value.clone());
    }

    check_collection_gate(patch, &record, role)?;

    record.updated_at = now;
    let raw_fields =
        serde_json::to_string(&record.fields).map_err(|e| SaveError::Storage(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO diary_records (id, fields, updated_at) VALUES (?1, ?2, ?3)",
        params![record_id, raw_fields, record.updated_at],
    )
    .map_err(|e| SaveError::Storage(e.to_string()))?;

    Ok(record)
}

/// Marking an entry collected while unpaid requires an elevated role. The
/// gate only fires when this patch names the status field, so unrelated
/// edits to an already collected, unpaid entry still go through.
fn check_collection_gate(
    patch: &common::model::record::FieldMap,
    merged: &DiaryRecord,
    role: Role,
) -> Result<(), SaveError> {
    let sets_collected = patch
        .get(fields::STATUS)
        .and_then(Value::as_str)
        .map(|s| s == status::COLLECTED)
        .unwrap_or(false);
    if !sets_collected {
        return Ok(());
    }
    let is_paid = merged
        .fields
        .get(fields::IS_PAID)
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_paid && !role.is_elevated() {
        return Err(SaveError::Policy(
            "Entry cannot be marked collected while unpaid; ask a manager to override".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use common::model::record::FieldMap;
    use serde_json::json;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open");
        init_schema(&conn).expect("schema");
        conn
    }

    fn patch(entries: &[(&str, Value)]) -> FieldMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn commit_creates_the_record_when_absent() {
        let conn = conn();
        let record = apply_commit(
            &conn,
            "r1",
            &patch(&[("customer_name", json!("Ada")), ("status", json!("Pending"))]),
            Role::Staff,
            100,
        )
        .expect("commit");

        assert_eq!(record.updated_at, 100);
        let stored = get_record(&conn, "r1").expect("query").expect("record");
        assert_eq!(stored.fields.get("customer_name"), Some(&json!("Ada")));
    }

    #[test]
    fn commit_overwrites_only_the_named_fields() {
        let conn = conn();
        apply_commit(
            &conn,
            "r1",
            &patch(&[("customer_name", json!("Ada")), ("phone", json!("555"))]),
            Role::Staff,
            100,
        )
        .expect("seed");

        let record = apply_commit(
            &conn,
            "r1",
            &patch(&[("phone", json!("556"))]),
            Role::Staff,
            200,
        )
        .expect("patch");

        assert_eq!(record.fields.get("phone"), Some(&json!("556")));
        assert_eq!(record.fields.get("customer_name"), Some(&json!("Ada")));
        assert_eq!(record.updated_at, 200);
    }

    #[test]
    fn resending_the_same_payload_is_a_no_op() {
        let conn = conn();
        let body = patch(&[("status", json!("Ordered")), ("phone", json!("555"))]);
        let first = apply_commit(&conn, "r1", &body, Role::Staff, 100)
            .expect("first");
        let second = apply_commit(&conn, "r1", &body, Role::Staff, 150)
            .expect("second");

        assert_eq!(first.fields, second.fields);
        let stored = get_record(&conn, "r1").expect("query").expect("record");
        assert_eq!(stored.fields, first.fields);
    }

    #[test]
    fn unpaid_collection_is_rejected_for_staff() {
        let conn = conn();
        apply_commit(
            &conn,
            "r1",
            &patch(&[("status", json!("Arrived")), ("is_paid", json!(false))]),
            Role::Staff,
            100,
        )
        .expect("seed");

        let result = apply_commit(
            &conn,
            "r1",
            &patch(&[("status", json!("Collected"))]),
            Role::Staff,
            200,
        );
        assert!(matches!(result, Err(SaveError::Policy(_))));

        // The stored record is untouched by the rejected commit.
        let stored = get_record(&conn, "r1").expect("query").expect("record");
        assert_eq!(stored.fields.get("status"), Some(&json!("Arrived")));
        assert_eq!(stored.updated_at, 100);
    }

    #[test]
    fn managers_may_collect_unpaid_entries() {
        let conn = conn();
        let record = apply_commit(
            &conn,
            "r1",
            &patch(&[("status", json!("Collected")), ("is_paid", json!(false))]),
            Role::Manager,
            100,
        )
        .expect("commit");
        assert_eq!(record.fields.get("status"), Some(&json!("Collected")));
    }

    #[test]
    fn paid_entries_may_be_collected_by_staff() {
        let conn = conn();
        apply_commit(
            &conn,
            "r1",
            &patch(&[("is_paid", json!(true))]),
            Role::Staff,
            100,
        )
        .expect("seed");

        let record = apply_commit(
            &conn,
            "r1",
            &patch(&[("status", json!("Collected"))]),
            Role::Staff,
            200,
        )
        .expect("commit");
        assert_eq!(record.fields.get("status"), Some(&json!("Collected")));
    }

    #[test]
    fn unrelated_edits_skip_the_collection_gate() {
        let conn = conn();
        apply_commit(
            &conn,
            "r1",
            &patch(&[("status", json!("Collected")), ("is_paid", json!(false))]),
            Role::Manager,
            100,
        )
        .expect("seed");

        // A staff member editing the phone number of an already collected,
        // unpaid entry is fine: the patch does not set the status.
        let record = apply_commit(
            &conn,
            "r1",
            &patch(&[("phone", json!("555"))]),
            Role::Staff,
            200,
        )
        .expect("commit");
        assert_eq!(record.fields.get("phone"), Some(&json!("555")));
    }
}
