//! Location Repository Port
//!
//! Defines the interface for accessing the country and region datasets.
//! Implementations may read CSV files or hold the data in memory.

use crate::domain::entities::LocationSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository for accessing map locations.
///
/// This is an outbound port that abstracts where the datasets come from.
/// Callers take one snapshot per request so that countries and regions
/// always come from the same load.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Get the current snapshot of both datasets.
    async fn snapshot(&self) -> Arc<LocationSnapshot>;

    /// Get the current version of the datasets.
    /// Incremented on every successful load.
    async fn version(&self) -> u64;
}
