//! Retrieval of a single diary record for the `GET /api/diary/{record_id}`
//! endpoint.

use actix_web::{web, Responder};
use rusqlite::{params, Connection, OptionalExtension};

use common::model::record::DiaryRecord;

use crate::db::Database;

pub async fn process(record_id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let conn = match db.connect() {
        Ok(conn) => conn,
        Err(e) => {
            return actix_web::HttpResponse::ServiceUnavailable()
                .body(format!("Error opening database: {}", e));
        }
    };
    match get_record(&conn, &record_id) {
        Ok(Some(record)) => actix_web::HttpResponse::Ok().json(record),
        Ok(None) => actix_web::HttpResponse::NotFound().body("Diary record not found"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving diary record: {}", e)),
    }
}

/// Loads a record by id, `None` if absent.
pub fn get_record(conn: &Connection, record_id: &str) -> Result<Option<DiaryRecord>, String> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT fields, updated_at FROM diary_records WHERE id = ?1",
            params![record_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| e.to_string())?;

    match row {
        Some((raw_fields, updated_at)) => {
            let fields = serde_json::from_str(&raw_fields).map_err(|e| e.to_string())?;
            Ok(Some(DiaryRecord {
                id: record_id.to_string(),
                fields,
                updated_at,
            }))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use serde_json::json;

    #[test]
    fn missing_record_is_none() {
        let conn = Connection::open_in_memory().expect("open");
        init_schema(&conn).expect("schema");
        assert_eq!(get_record(&conn, "nope").expect("query"), None);
    }

    #[test]
    fn stored_record_roundtrips() {
        let conn = Connection::open_in_memory().expect("open");
        init_schema(&conn).expect("schema");
        conn.execute(
            "INSERT INTO diary_records (id, fields, updated_at) VALUES (?1, ?2, ?3)",
            params!["r1", json!({"status": "Pending"}).to_string(), 42],
        )
        .expect("insert");

        let record = get_record(&conn, "r1").expect("query").expect("record");
        assert_eq!(record.id, "r1");
        assert_eq!(record.updated_at, 42);
        assert_eq!(record.fields.get("status"), Some(&json!("Pending")));
    }
}
