mod api;
mod middleware;
mod page;
mod search;

use stationfinder_core::AreaCatalog;
use stationfinder_osm::{NominatimClient, OverpassClient};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = stationfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = match &config.areas_path {
        Some(path) => stationfinder_core::load_area_catalog(path)?,
        None => AreaCatalog::builtin(),
    };
    tracing::info!(
        cities = catalog.list_cities().len(),
        source = %config
            .areas_path
            .as_deref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        "area catalog loaded"
    );

    let geocoder = NominatimClient::new(
        &config.geocoder_url,
        &config.user_agent,
        config.geocoder_timeout_secs,
    )?;
    let amenities = OverpassClient::new(
        &config.overpass_url,
        &config.user_agent,
        config.overpass_timeout_secs,
    )?;

    let app = build_app(AppState::new(catalog, geocoder, amenities));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "stationfinder listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
