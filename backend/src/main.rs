mod access;
mod config;
mod error;
mod pages;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::Store;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;
    let store = Store::open(&config.database_path).map_err(io::Error::other)?;
    info!("Datastore ready at {}", config.database_path);

    if let Some((email, password)) = &config.bootstrap_admin {
        store
            .upsert_admin(email, password)
            .map_err(io::Error::other)?;
        info!("Provisioned admin account {email}");
    }
    if config.admin_emails.is_empty() {
        warn!("ADMIN_EMAILS is empty: every signed-in account can open the dashboard");
    }
    if config.slack_webhook_url.is_none() {
        warn!("SLACK_WEBHOOK_URL not set: new-lead notifications will fail");
    }

    let host = config.host.clone();
    let port = config.port;
    let state = AppState::new(config, store).map_err(io::Error::other)?;

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        let state = state.clone();
        App::new().configure(|cfg| services::configure(cfg, state))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
