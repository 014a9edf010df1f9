/**
 * CLIENT LAUNCH LIBRARY - Récupère le prochain lancement SpaceX
 *
 * RÔLE :
 * Un seul GET vers l'API The Space Devs (2 prochains lancements SpaceX,
 * triés par NET) puis sélection du plus proche.
 *
 * ERREURS :
 * Statut non-2xx, échec réseau ou JSON invalide => "pas de mission".
 * L'erreur est loggée ici et ne remonte jamais jusqu'à la page.
 */

use crate::config::UpstreamConf;
use crate::models::{LaunchPage, RawLaunch};
use reqwest::StatusCode;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, warn};

const QUERY: &[(&str, &str)] = &[
    ("format", "json"),
    ("limit", "2"),
    ("ordering", "net"),
    ("lsp__name", "SpaceX"),
];

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned {0}")]
    Status(StatusCode),
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct SpaceDevsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpaceDevsClient {
    pub fn new(conf: &UpstreamConf) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("launchboard/", env!("CARGO_PKG_VERSION")))
            .timeout(conf.timeout())
            .build()?;
        Ok(Self { http, base_url: conf.base_url.clone() })
    }

    /// Les lancements à venir, dans l'ordre renvoyé par l'API
    pub async fn upcoming(&self) -> Result<Vec<RawLaunch>, FetchError> {
        let response = self.http.get(&self.base_url).query(QUERY).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let page: LaunchPage = serde_json::from_str(&body)?;
        debug!("[launches] upstream returned {} results", page.results.len());
        Ok(page.results)
    }

    pub async fn next_launch(&self) -> Option<RawLaunch> {
        match self.upcoming().await {
            Ok(results) => earliest(results),
            Err(e) => {
                warn!("[launches] fetch failed: {e}");
                None
            }
        }
    }
}

/// Trie par NET croissant et garde le premier ; NET absent ou illisible en dernier.
pub fn earliest(mut launches: Vec<RawLaunch>) -> Option<RawLaunch> {
    launches.sort_by_key(|l| {
        let net = l.net.as_deref().and_then(|s| OffsetDateTime::parse(s.trim(), &Rfc3339).ok());
        (net.is_none(), net)
    });
    launches.into_iter().next()
}
