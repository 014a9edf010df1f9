/**
 * ROUTES HTTP - Serveur Axum de la page launchboard
 *
 * ROUTES :
 * - GET /              page d'accueil (mission en cache ou fraîchement récupérée)
 * - GET /clear-cache   vide le cache (debug, pas d'authentification)
 * - GET /health        liveness (+ en-tête x-cache-age-secs si une entrée est en cache)
 * - GET /static/script.js  script de la carte mission (embarqué dans le binaire)
 *
 * Aucune route ne renvoie d'erreur : sans données, la page s'affiche sans carte.
 */

use crate::cache::MissionCache;
use crate::render::render_home;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::{extract::State, routing::get, Router};
use std::sync::Arc;

const CACHE_AGE_HEADER: &str = "x-cache-age-secs";
const MISSION_SCRIPT: &str = include_str!("../static/script.js");

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<MissionCache>,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/clear-cache", get(clear_cache))
        .route("/health", get(health))
        .route("/static/script.js", get(mission_script))
        .with_state(app_state)
}

// GET /
async fn home(State(app): State<AppState>) -> Html<String> {
    let mission = app.cache.get_or_fetch().await;
    Html(render_home(mission.as_ref()))
}

// GET /clear-cache
async fn clear_cache(State(app): State<AppState>) -> &'static str {
    app.cache.clear();
    "Cache cleared!"
}

// GET /health
async fn health(State(app): State<AppState>) -> Response {
    match app.cache.cached_at() {
        Some(at) => {
            let age = at.elapsed().as_secs().to_string();
            ([(CACHE_AGE_HEADER, age)], "ok").into_response()
        }
        None => "ok".into_response(),
    }
}

async fn mission_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], MISSION_SCRIPT)
}
