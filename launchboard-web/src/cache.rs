/**
 * CACHE MISSION - Mémoïsation à durée fixe du prochain lancement
 *
 * Une seule entrée (le fetch n'a pas d'argument). Le résultat "pas de
 * mission" est mis en cache aussi : un upstream en panne n'est pas
 * re-sollicité avant la fin de la fenêtre.
 *
 * `refresh` sérialise les miss concurrents : un cache froid = une requête.
 * `generation` avance à chaque `clear()` : un fetch lancé avant le clear
 * ne réécrit pas son résultat dans le cache.
 */

use crate::launches::SpaceDevsClient;
use crate::mission::DisplayMission;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct CacheEntry {
    stored_at: Instant,
    mission: Option<DisplayMission>,
}

pub struct MissionCache {
    client: SpaceDevsClient,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
    refresh: tokio::sync::Mutex<()>,
    generation: AtomicU64,
}

impl MissionCache {
    pub fn new(client: SpaceDevsClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            entry: Mutex::new(None),
            refresh: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn get_or_fetch(&self) -> Option<DisplayMission> {
        if let Some(hit) = self.fresh() {
            debug!("[cache] hit");
            return hit;
        }

        let _guard = self.refresh.lock().await;
        // un autre appelant a pu remplir l'entrée pendant l'attente
        if let Some(hit) = self.fresh() {
            return hit;
        }

        info!("[cache] miss, fetching next launch");
        let generation = self.generation.load(Ordering::SeqCst);
        let mission = self.client.next_launch().await.map(|l| DisplayMission::from_launch(&l));

        let mut entry = self.entry.lock();
        if self.generation.load(Ordering::SeqCst) == generation {
            *entry = Some(CacheEntry { stored_at: Instant::now(), mission: mission.clone() });
        } else {
            debug!("[cache] cleared during fetch, result not stored");
        }
        mission
    }

    pub fn clear(&self) {
        let mut entry = self.entry.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(old) = entry.take() {
            info!("[cache] cleared (entry age {}s)", old.stored_at.elapsed().as_secs());
        }
    }

    pub fn cached_at(&self) -> Option<Instant> {
        self.entry.lock().as_ref().map(|e| e.stored_at)
    }

    /// `Some(..)` si l'entrée est encore valide (même si elle vaut "pas de mission")
    fn fresh(&self) -> Option<Option<DisplayMission>> {
        let entry = self.entry.lock();
        let hit = entry
            .as_ref()
            .filter(|e| e.stored_at.elapsed() < self.ttl)
            .map(|e| e.mission.clone());
        hit
    }
}
