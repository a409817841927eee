pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod site;
pub mod state;
pub mod storage;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use config::SiteConfig;
use site::Site;
use state::AppState;

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("SITEFEED_LOG"))
        .init();

    let config = SiteConfig::from_env().expect("Failed to load site config");

    let app = AppState::new(storage::init_db_from_env().await, Site::from_config(&config));

    api::run_server(app, config.listen()).await
}
