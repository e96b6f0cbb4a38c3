use std::sync::Arc;

use anyhow::Context as _;
use bookmatch::{
    api::{create_router, AppState},
    client::HttpBookApi,
    config::Config,
    events::Dispatcher,
    frontend::{self, Frontend},
    logging,
    settings::JsonFileSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    let config = Config::from_env()?;

    let api = HttpBookApi::new(&config.backend_url).context("build backend client")?;
    let settings = JsonFileSettings::new(&config.settings_path);
    let frontend = Arc::new(Frontend::new(
        Arc::new(api),
        Arc::new(settings),
        config.default_num_recommendations,
    ));

    // Wire handlers and load the initial page data
    let dispatcher = Arc::new(Dispatcher::new());
    frontend::bootstrap(Arc::clone(&frontend), &dispatcher).await;

    let app = create_router(AppState::new(frontend, dispatcher));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(addr = %addr, backend = %config.backend_url, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
