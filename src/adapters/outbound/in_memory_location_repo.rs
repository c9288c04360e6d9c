//! In-Memory Location Repository
//!
//! Implements LocationRepository over datasets held in memory.
//! Used for tests and for callers that load data themselves.

use crate::domain::entities::{LocationPoint, LocationSnapshot};
use crate::domain::ports::LocationRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory location repository.
///
/// `replace()` swaps both datasets at once; readers holding an older
/// snapshot keep seeing it until they drop it.
pub struct InMemoryLocationRepository {
    snapshot: RwLock<Arc<LocationSnapshot>>,
}

impl InMemoryLocationRepository {
    /// Create a repository with the given datasets (version 1).
    pub fn new(countries: Vec<LocationPoint>, regions: Vec<LocationPoint>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(LocationSnapshot::new(countries, regions, 1))),
        }
    }

    /// Create a repository with no data (version 0).
    pub fn empty() -> Self {
        Self {
            snapshot: RwLock::new(LocationSnapshot::empty()),
        }
    }

    /// Replace both datasets, returning the new version.
    pub fn replace(&self, countries: Vec<LocationPoint>, regions: Vec<LocationPoint>) -> u64 {
        let mut guard = self.snapshot.write();
        let version = guard.version + 1;
        *guard = Arc::new(LocationSnapshot::new(countries, regions, version));
        version
    }
}

impl Default for InMemoryLocationRepository {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn snapshot(&self) -> Arc<LocationSnapshot> {
        self.snapshot.read().clone()
    }

    async fn version(&self) -> u64 {
        self.snapshot.read().version
    }
}
