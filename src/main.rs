mod app;
mod classifier;
mod config;
mod db;
mod domain;
mod drafter;
mod infrastructure;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::RtiMitraApp::initialize(config, paths).await?;
    app.run().await
}
