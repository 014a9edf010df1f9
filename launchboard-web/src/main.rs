/**
 * LAUNCHBOARD - Point d'entrée du serveur web
 *
 * RÔLE : Affiche le prochain lancement SpaceX (API The Space Devs),
 * avec un cache de 2h pour limiter les appels sortants.
 *
 * FLUX : requête GET / -> cache -> (miss) client Launch Library
 *        -> normalisation + extraction payload -> rendu HTML.
 */

mod cache;
mod config;
mod http;
mod launches;
mod mission;
mod models;
mod payload;
mod render;
#[cfg(test)]
mod testing;

use crate::cache::MissionCache;
use crate::config::load_config;
use crate::http::AppState;
use crate::launches::SpaceDevsClient;

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Charger les variables d'environnement depuis .env (si présent)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = load_config().await;
    if cfg.uses_dev_secret() {
        warn!("[launchboard] SECRET_KEY not set, using development default");
    }
    info!(
        "[launchboard] upstream {} (timeout {}s), cache ttl {}s",
        cfg.upstream.base_url, cfg.upstream.timeout_secs, cfg.cache.ttl_secs
    );

    let client = SpaceDevsClient::new(&cfg.upstream).context("failed to build HTTP client")?;
    let cache = Arc::new(MissionCache::new(client, cfg.cache_ttl()));
    let app = http::build_router(AppState { cache });

    let addr = cfg.bind_addr().context("invalid server address")?;
    let listener = TcpListener::bind(addr).await.with_context(|| format!("failed to bind {addr}"))?;
    info!("[launchboard] listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
