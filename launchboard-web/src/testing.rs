//! Faux serveur Launch Library pour les tests : sert un JSON fixe sur
//! 127.0.0.1 et compte les requêtes reçues.

use crate::config::UpstreamConf;
use crate::launches::SpaceDevsClient;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Arc<String>,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    delay: Duration,
}

pub struct UpstreamStub {
    addr: SocketAddr,
    state: StubState,
}

impl UpstreamStub {
    pub async fn start(body: serde_json::Value) -> Self {
        Self::start_raw(StatusCode::OK, body.to_string()).await
    }

    /// Répond après `delay`, pour simuler un upstream lent
    pub async fn start_slow(body: serde_json::Value, delay: Duration) -> Self {
        Self::spawn(StatusCode::OK, body.to_string(), delay).await
    }

    pub async fn start_raw(status: StatusCode, body: String) -> Self {
        Self::spawn(status, body, Duration::ZERO).await
    }

    async fn spawn(status: StatusCode, body: String, delay: Duration) -> Self {
        let state = StubState {
            status,
            body: Arc::new(body),
            hits: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
            delay,
        };
        let app = Router::new()
            .route("/launches/upcoming/", get(serve_launches))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn conf(&self) -> UpstreamConf {
        UpstreamConf {
            base_url: format!("http://{}/launches/upcoming/", self.addr),
            timeout_secs: 5,
        }
    }

    pub fn client(&self) -> SpaceDevsClient {
        SpaceDevsClient::new(&self.conf()).unwrap()
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.state.last_query.lock().clone()
    }

    /// Deux lancements dans le désordre, le plus proche en second
    pub fn two_launches() -> serde_json::Value {
        serde_json::json!({
            "count": 2,
            "next": null,
            "results": [
                {
                    "name": "Falcon 9 Block 5 | Transporter-14",
                    "net": "2025-06-20T21:00:00Z",
                    "mission": {
                        "name": "Transporter-14",
                        "description": "Dedicated rideshare that includes 70 payloads.",
                        "orbit": { "name": "Sun-Synchronous Orbit" }
                    },
                    "program": [],
                    "rocket": { "configuration": { "full_name": "Falcon 9 Block 5" } },
                    "pad": { "name": "Space Launch Complex 4E" }
                },
                {
                    "name": "Falcon 9 Block 5 | Starlink Group 6-14",
                    "net": "2025-06-10T14:30:00Z",
                    "mission": {
                        "name": "Starlink Group 6-14",
                        "description": "A batch of 23 Starlink satellites <v2 mini>.",
                        "orbit": { "name": "Low Earth Orbit" }
                    },
                    "program": [
                        { "mission_patches": [ { "image_url": "https://example.test/starlink.png" } ] }
                    ],
                    "rocket": { "configuration": { "full_name": "Falcon 9 Block 5" } },
                    "pad": { "name": "Space Launch Complex 40", "location": { "name": "Cape Canaveral SFS, FL, USA" } }
                }
            ]
        })
    }
}

async fn serve_launches(State(stub): State<StubState>, RawQuery(query): RawQuery) -> (StatusCode, String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    *stub.last_query.lock() = query;
    if !stub.delay.is_zero() {
        tokio::time::sleep(stub.delay).await;
    }
    (stub.status, stub.body.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_sends_fixed_query() {
        let stub = UpstreamStub::start(UpstreamStub::two_launches()).await;
        let launches = stub.client().upcoming().await.unwrap();
        assert_eq!(launches.len(), 2);
        assert_eq!(
            stub.last_query().as_deref(),
            Some("format=json&limit=2&ordering=net&lsp__name=SpaceX")
        );
    }

    #[tokio::test]
    async fn test_client_picks_earliest() {
        let stub = UpstreamStub::start(UpstreamStub::two_launches()).await;
        let next = stub.client().next_launch().await.unwrap();
        assert_eq!(next.name.as_deref(), Some("Falcon 9 Block 5 | Starlink Group 6-14"));
    }

    #[tokio::test]
    async fn test_client_error_status() {
        let stub = UpstreamStub::start_raw(StatusCode::TOO_MANY_REQUESTS, "{}".into()).await;
        let err = stub.client().upcoming().await.unwrap_err();
        assert!(matches!(err, crate::launches::FetchError::Status(s) if s == StatusCode::TOO_MANY_REQUESTS));
        assert!(stub.client().next_launch().await.is_none());
    }

    #[tokio::test]
    async fn test_client_malformed_json() {
        let stub = UpstreamStub::start_raw(StatusCode::OK, "<html>maintenance</html>".into()).await;
        let err = stub.client().upcoming().await.unwrap_err();
        assert!(matches!(err, crate::launches::FetchError::Decode(_)));
        assert!(stub.client().next_launch().await.is_none());
    }

    #[tokio::test]
    async fn test_client_empty_results() {
        let stub = UpstreamStub::start(serde_json::json!({ "count": 0, "results": [] })).await;
        assert!(stub.client().next_launch().await.is_none());
    }
}
