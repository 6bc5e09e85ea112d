use actix_web::{web, HttpRequest, Responder};
use log::info;
use rusqlite::{params, Connection};

use common::model::staff::StaffAccount;

use crate::db::Database;
use crate::services::role_from_request;

pub async fn process(
    payload: web::Json<StaffAccount>,
    req: HttpRequest,
    db: web::Data<Database>,
) -> impl Responder {
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
    match save_staff(&conn, payload.into_inner()) {
        Ok(account) => {
            info!("saved staff account {}", account.username);
            actix_web::HttpResponse::Ok().json(account)
        }
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error saving staff account: {}", e)),
    }
}

/// Creates or updates a staff account; a missing id gets a fresh uuid.
pub fn save_staff(conn: &Connection, mut account: StaffAccount) -> Result<StaffAccount, String> {
    if account.username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if account.id.trim().is_empty() {
        account.id = uuid::Uuid::new_v4().to_string();
    }
    conn.execute(
        "INSERT OR REPLACE INTO staff (id, username, role) VALUES (?1, ?2, ?3)",
        params![account.id, account.username, account.role.as_str()],
    )
    .map_err(|e| e.to_string())?;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use crate::services::staff::get::list_staff;
    use common::model::staff::Role;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open");
        init_schema(&conn).expect("schema");
        conn
    }

    fn account(id: &str, username: &str, role: Role) -> StaffAccount {
        StaffAccount {
            id: id.to_string(),
            username: username.to_string(),
            role,
        }
    }

    #[test]
    fn saving_assigns_an_id_when_missing() {
        let conn = conn();
        let saved = save_staff(&conn, account("", "mika", Role::Staff)).expect("save");
        assert!(!saved.id.is_empty());
    }

    #[test]
    fn empty_usernames_are_rejected() {
        let conn = conn();
        assert!(save_staff(&conn, account("s1", "  ", Role::Staff)).is_err());
    }

    #[test]
    fn upsert_replaces_the_existing_account() {
        let conn = conn();
        save_staff(&conn, account("s1", "mika", Role::Staff)).expect("create");
        save_staff(&conn, account("s1", "mika", Role::Manager)).expect("promote");

        let accounts = list_staff(&conn).expect("list");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].role, Role::Manager);
    }

    #[test]
    fn listing_orders_by_username() {
        let conn = conn();
        save_staff(&conn, account("s2", "zoe", Role::Staff)).expect("save");
        save_staff(&conn, account("s1", "ana", Role::Manager)).expect("save");

        let usernames: Vec<String> = list_staff(&conn)
            .expect("list")
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(usernames, vec!["ana", "zoe"]);
    }
}
