mod config;
mod db;
mod services;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::db::Database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = format!("http://{}:{}", config.host, config.port);

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    let database = Database::new(config.database_path.clone());
    let static_dir = config.static_dir.clone();

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(database.clone()))
            .service(services::diary::configure_routes())
            .service(services::staff::configure_routes())
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
