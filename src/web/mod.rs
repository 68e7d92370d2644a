//! The http frontend serving server status as json.

pub mod error;
pub mod response;
pub mod routes;

use std::fs;
use std::io;
use std::path::Path;
use actix_files::Files;
use actix_web::{App, HttpServer};
use actix_web::middleware::Logger;
use actix_web::web::{Bytes, Data};
use log::info;
use crate::config::Config;
use crate::error::StartupError;
use crate::net::StatusClient;

/// State shared read-only by all request handlers.
pub struct AppState {
    pub landing_page: Bytes,
    pub default_icon: Bytes,
    pub client: StatusClient,
    pub icon_base_url: Option<String>,
}

impl AppState {
    /// Read the static files once, failing startup if one is missing.
    pub fn load(config: &Config) -> Result<AppState, StartupError> {
        Ok(AppState {
            landing_page: read_static(&config.static_dir.join("index.html"))?,
            default_icon: read_static(&config.static_dir.join("icon.png"))?,
            client: config.status_client(),
            icon_base_url: config.icon_base_url.clone(),
        })
    }
}

fn read_static(path: &Path) -> Result<Bytes, StartupError> {
    fs::read(path)
        .map(Bytes::from)
        .map_err(|source| StartupError::StaticFile { path: path.display().to_string(), source })
}

pub async fn webserver_run(config: Config, state: AppState) -> io::Result<()> {
    let state = Data::new(state);
    let assets = config.static_dir.join("assets");

    let server = HttpServer::new(move || {
        App::new().app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
            .service(Files::new("/assets", assets.clone()))
    });

    info!("Listening on {}", config.bind);
    server.bind(config.bind)?.run().await
}
