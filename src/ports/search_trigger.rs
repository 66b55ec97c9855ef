//! Search Trigger Port - hand-off to the inventory search.
//!
//! The core never touches car records; when the user confirms, the collected
//! filters are handed to whatever actually queries the inventory.

use async_trait::async_trait;

use crate::domain::filters::CarFilters;

/// Errors that can occur when firing the inventory search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search backend unavailable: {0}")]
    Unavailable(String),
}

/// Port consuming the final filter state of a confirmed session.
#[async_trait]
pub trait SearchTrigger: Send + Sync {
    /// Fires an inventory search with the given filters.
    async fn trigger_search(&self, filters: &CarFilters) -> Result<(), SearchError>;
}
