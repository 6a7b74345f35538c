//! Cached catalog
//!
//! The external exercise database is rate limited, so fetched catalogs are
//! held for a bounded time before the source is asked again. A fetch that
//! fails or comes back too small is replaced by the built-in catalog, which
//! keeps program generation available without a network connection.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use log::warn;
use repwise_domain as domain;

use domain::{Catalog, CatalogRepository, Exercise, ReadError};

#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

/// TTL-cached catalog provider over an arbitrary source.
///
/// Only successful fetches with enough usable entries are cached; fallback
/// results are recomputed on the next read so that a recovered source is
/// picked up again.
pub struct CachedCatalog<S> {
    source: S,
    ttl: Duration,
    cache: RefCell<Option<CacheEntry>>,
}

struct CacheEntry {
    fetched_at: Instant,
    catalog: Catalog,
}

impl<S: CatalogSource> CachedCatalog<S> {
    /// Fetched catalogs with fewer usable entries are considered too sparse
    /// to generate programs from and are replaced by the built-in catalog.
    pub const MIN_USABLE_EXERCISES: usize = 20;

    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RefCell::new(None),
        }
    }

    pub async fn catalog(&self) -> Catalog {
        if let Some(entry) = self.cache.borrow().as_ref()
            && entry.fetched_at.elapsed() < self.ttl
        {
            return entry.catalog.clone();
        }

        match self.source.fetch_exercises().await {
            Ok(exercises) if exercises.len() >= Self::MIN_USABLE_EXERCISES => {
                let catalog = merged_with_builtin(exercises);
                *self.cache.borrow_mut() = Some(CacheEntry {
                    fetched_at: Instant::now(),
                    catalog: catalog.clone(),
                });
                catalog
            }
            Ok(exercises) => {
                warn!(
                    "exercise catalog source returned only {} entries, using built-in catalog",
                    exercises.len()
                );
                Catalog::builtin()
            }
            Err(err) => {
                warn!("exercise catalog unavailable, using built-in catalog: {err}");
                Catalog::builtin()
            }
        }
    }
}

/// Fetched exercises take precedence; built-in exercises fill in ids the
/// source does not know about.
fn merged_with_builtin(fetched: Vec<Exercise>) -> Catalog {
    let mut exercises = fetched;
    let fetched_ids = exercises.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
    exercises.extend(
        Catalog::builtin()
            .exercises()
            .filter(|e| !fetched_ids.contains(&e.id))
            .cloned(),
    );
    Catalog::from_exercises(exercises)
}

impl<S: CatalogSource> CatalogRepository for CachedCatalog<S> {
    async fn read_catalog(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.catalog().await.exercises().cloned().collect())
    }
}
