use serde::Deserialize;
use std::{net::SocketAddr, path::Path, time::Duration};
use tokio::fs;
use tracing::{info, warn};

pub const DEFAULT_UPSTREAM_URL: &str = "https://ll.thespacedevs.com/2.3.0/launches/upcoming/";
const DEV_SECRET_KEY: &str = "dev_secret_key";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LaunchboardConfig {
    pub server: ServerConf,
    pub upstream: UpstreamConf,
    pub cache: CacheConf,
    /// Jamais lu depuis le YAML, uniquement via SECRET_KEY
    #[serde(skip)]
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConf {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConf {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConf {
    pub ttl_secs: u64, // 2h par défaut
}

impl Default for LaunchboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConf::default(),
            upstream: UpstreamConf::default(),
            cache: CacheConf::default(),
            secret_key: DEV_SECRET_KEY.into(),
        }
    }
}

impl Default for ServerConf {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 5000 }
    }
}

impl Default for UpstreamConf {
    fn default() -> Self {
        Self { base_url: DEFAULT_UPSTREAM_URL.into(), timeout_secs: 10 }
    }
}

impl Default for CacheConf {
    fn default() -> Self {
        Self { ttl_secs: 2 * 60 * 60 }
    }
}

impl LaunchboardConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }
}

impl UpstreamConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Charge la config YAML (LAUNCHBOARD_CONFIG) puis applique les variables d'env.
pub async fn load_config() -> LaunchboardConfig {
    let path = std::env::var("LAUNCHBOARD_CONFIG").unwrap_or_else(|_| "launchboard.yaml".into());
    let mut cfg = read_config_file(&path).await;
    apply_env(&mut cfg, |key| std::env::var(key).ok());
    cfg
}

/// Surcharges d'environnement ; `lookup` abstrait `std::env::var` pour les tests.
fn apply_env<F>(cfg: &mut LaunchboardConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("LAUNCHBOARD_PORT") {
        match port.trim().parse::<u16>() {
            Ok(p) => cfg.server.port = p,
            Err(e) => warn!("LAUNCHBOARD_PORT invalide ({port}): {e}"),
        }
    }

    cfg.secret_key = lookup("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.into());
}

async fn read_config_file(path: &str) -> LaunchboardConfig {
    if !Path::new(path).exists() {
        info!("pas de {path}, usage config par défaut");
        return LaunchboardConfig::default();
    }
    let txt = fs::read_to_string(path).await.unwrap_or_default();
    parse_config(&txt)
}

fn parse_config(txt: &str) -> LaunchboardConfig {
    if txt.trim().is_empty() {
        return LaunchboardConfig::default();
    }
    serde_yaml::from_str(txt).unwrap_or_else(|e| {
        warn!("config invalide: {e}");
        LaunchboardConfig::default()
    })
}
