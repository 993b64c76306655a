use crate::{error::AppResult, models::RecommendationReport};

pub mod backend;

pub use backend::BackendProvider;

/// Source of recommendation data for the interaction controller
///
/// The controller only sees this seam; the HTTP transport lives behind it,
/// and tests substitute it with mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch viewing history and ranked recommendations for one user id
    async fn fetch_recommendations(&self, user_id: &str) -> AppResult<RecommendationReport>;
}
