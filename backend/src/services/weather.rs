//! Weather service: fetch-or-serve-cached snapshots
//!
//! Snapshots are cached per raw coordinate pair with a freshness window.
//! Expired entries are swept on insert and the store is bounded, evicting
//! the oldest entry once full.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use shared::{RawCoordinates, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Weather service shared across request handlers.
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    cache: Arc<RwLock<SnapshotCache>>,
    api_key_configured: bool,
}

impl WeatherService {
    pub fn new(
        api_key: String,
        api_endpoint: String,
        ttl_minutes: i64,
        max_entries: usize,
    ) -> Self {
        let api_key_configured = !api_key.is_empty();
        Self {
            client: WeatherClient::new(api_key, api_endpoint),
            cache: Arc::new(RwLock::new(SnapshotCache::new(
                Duration::minutes(ttl_minutes),
                max_entries,
            ))),
            api_key_configured,
        }
    }

    /// Get a snapshot for the coordinates, serving a fresh cached entry when
    /// one exists and fetching from the provider otherwise.
    ///
    /// Concurrent misses for the same key may both reach the provider; the
    /// later write wins with a whole-entry replacement, so responses stay
    /// valid either way.
    pub async fn get_weather(&self, coords: &RawCoordinates) -> AppResult<WeatherSnapshot> {
        if !self.api_key_configured {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let key = coords.cache_key();

        {
            let cache = self.cache.read().await;
            if let Some(snapshot) = cache.fresh(&key, Utc::now()) {
                tracing::debug!("Weather cache hit for {}", key);
                return Ok(snapshot.clone());
            }
        }

        tracing::debug!("Weather cache miss for {}, fetching", key);
        let snapshot = self
            .client
            .fetch_snapshot(&coords.latitude, &coords.longitude)
            .await?;

        let mut cache = self.cache.write().await;
        cache.insert(key, snapshot.clone(), Utc::now());

        Ok(snapshot)
    }

    /// Number of live cache entries, for diagnostics.
    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.entries.len()
    }
}

/// Bounded in-memory snapshot store keyed by `"{lat},{lon}"`.
struct SnapshotCache {
    entries: HashMap<String, WeatherSnapshot>,
    ttl: Duration,
    max_entries: usize,
}

impl SnapshotCache {
    fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries,
        }
    }

    /// Return the entry for `key` while it is inside the freshness window.
    fn fresh(&self, key: &str, now: DateTime<Utc>) -> Option<&WeatherSnapshot> {
        self.entries
            .get(key)
            .filter(|snapshot| now - snapshot.timestamp < self.ttl)
    }

    /// Insert a snapshot, sweeping expired entries and evicting the oldest
    /// one when the store is full.
    fn insert(&mut self, key: String, snapshot: WeatherSnapshot, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries.retain(|_, s| now - s.timestamp < ttl);

        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, s)| s.timestamp)
                .map(|(k, _)| k.clone());
            if let Some(oldest_key) = oldest {
                self.entries.remove(&oldest_key);
            }
        }

        self.entries.insert(key, snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CurrentConditions, ForecastBundle};

    fn snapshot_at(timestamp: DateTime<Utc>) -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions::default(),
            forecast: ForecastBundle::default(),
            timestamp,
        }
    }

    #[test]
    fn fresh_entry_is_served_within_window() {
        let now = Utc::now();
        let mut cache = SnapshotCache::new(Duration::minutes(10), 16);
        cache.insert("1,2".to_string(), snapshot_at(now), now);

        assert!(cache.fresh("1,2", now + Duration::minutes(9)).is_some());
        assert!(cache.fresh("1,2", now + Duration::minutes(10)).is_none());
    }

    #[test]
    fn expired_entries_are_swept_on_insert() {
        let now = Utc::now();
        let mut cache = SnapshotCache::new(Duration::minutes(10), 16);
        cache.insert("old".to_string(), snapshot_at(now - Duration::minutes(30)), now);
        assert_eq!(cache.entries.len(), 1);

        cache.insert("a".to_string(), snapshot_at(now), now);
        assert_eq!(cache.entries.len(), 1);
        assert!(!cache.entries.contains_key("old"));

        cache.insert("b".to_string(), snapshot_at(now), now);
        assert_eq!(cache.entries.len(), 2);
    }

    #[test]
    fn oldest_entry_is_evicted_when_full() {
        let now = Utc::now();
        let mut cache = SnapshotCache::new(Duration::minutes(60), 2);
        cache.insert("a".to_string(), snapshot_at(now - Duration::minutes(5)), now);
        cache.insert("b".to_string(), snapshot_at(now - Duration::minutes(1)), now);
        cache.insert("c".to_string(), snapshot_at(now), now);

        assert_eq!(cache.entries.len(), 2);
        assert!(!cache.entries.contains_key("a"));
        assert!(cache.entries.contains_key("b"));
        assert!(cache.entries.contains_key("c"));
    }

    #[test]
    fn distinct_raw_coordinates_are_distinct_keys() {
        let now = Utc::now();
        let mut cache = SnapshotCache::new(Duration::minutes(10), 16);
        cache.insert("12.0,77.5".to_string(), snapshot_at(now), now);

        assert!(cache.fresh("12.0,77.5", now).is_some());
        assert!(cache.fresh("12.00,77.5", now).is_none());
    }

    #[test]
    fn refresh_overwrites_the_previous_entry() {
        let now = Utc::now();
        let mut cache = SnapshotCache::new(Duration::minutes(10), 16);
        cache.insert("1,2".to_string(), snapshot_at(now - Duration::minutes(5)), now);
        cache.insert("1,2".to_string(), snapshot_at(now), now);

        assert_eq!(cache.entries.len(), 1);
        let stored = cache.fresh("1,2", now).unwrap();
        assert_eq!(stored.timestamp, now);
    }
}
