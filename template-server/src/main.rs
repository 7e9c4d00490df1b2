#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{registry, EnvFilter};

use template_lib::config::Config;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    // A missing .env is fine, the process environment is used as is.
    dotenvy::dotenv().ok();

    registry::Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::Layer::default())
        .init();
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Reading config file");
            Config::from_file(config_path)?
        }
        None => Config::from_env()?,
    };
    info!(env = %config.env, bind_address = %config.bind_address, "Config loaded");

    let template_repo =
        template_repo::sqlx_repo::create_repo(&config.database_url, config.max_pool_size).await?;
    template_repo
        .create_schema()
        .await
        .context("Unable to create database schema")?;
    info!("Database schema ready");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(template_lib::tracing::create_middleware())
            .configure(template_lib::app_config_func(
                template_repo.clone(),
                config.max_body_size,
            ))
    })
    .bind(&config.bind_address)
    .with_context(|| format!("Unable to bind {}", config.bind_address))?;

    info!(bind_address = %config.bind_address, "Starting server");
    server.run().await?;

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
