//! hp_server - Main entry point

use std::path::Path;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hp_server::manager::HitPointManager;
use hp_server::routes;
use hp_server::settings::Settings;
use hp_server::store::PlayerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load(Path::new("hp_server.toml"))?;

    let store = Arc::new(PlayerStore::new());
    seed_players(&store, &settings.template_dir)?;

    let manager = Arc::new(HitPointManager::new(store));
    let app = routes::router(manager).layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", settings.bind_addr());
    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed every JSON template in the template directory into the store.
fn seed_players(store: &PlayerStore, template_dir: &Path) -> anyhow::Result<()> {
    tracing::info!("Seeding players from {}", template_dir.display());

    for entry in std::fs::read_dir(template_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let name = store.seed_from_template(&path)?;
            tracing::info!("Seeded player {} from {}", name, path.display());
        }
    }

    Ok(())
}
