use actix_web::{web, HttpRequest, Responder};
use rusqlite::Connection;

use common::model::staff::{Role, StaffAccount};

use crate::db::Database;
use crate::services::role_from_request;

pub async fn process(req: HttpRequest, db: web::Data<Database>) -> impl Responder {
    if !role_from_request(&req).is_elevated() {
        return actix_web::HttpResponse::Forbidden()
            .body("Staff administration requires a manager account");
    }
    let conn = match db.connect() {
        Ok(conn) => conn,
        Err(e) => {
            return actix_web::HttpResponse::ServiceUnavailable()
                .body(format!("Error opening database: {}", e));
        }
    };
    match list_staff(&conn) {
        Ok(accounts) => actix_web::HttpResponse::Ok().json(accounts),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing staff: {}", e)),
    }
}

/// All staff accounts, ordered by username.
pub fn list_staff(conn: &Connection) -> Result<Vec<StaffAccount>, String> {
    let mut stmt = conn
        .prepare("SELECT id, username, role FROM staff ORDER BY username")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut accounts = Vec::new();
    for row in rows {
        let (id, username, raw_role) = row.map_err(|e| e.to_string())?;
        let role = Role::parse(&raw_role).unwrap_or(Role::Staff);
        accounts.push(StaffAccount { id, username, role });
    }
    Ok(accounts)
}
