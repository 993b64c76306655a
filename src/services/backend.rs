use reqwest::{Client as HttpClient, Url};

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationReport, RecommendationResponse},
    services::RecommendationSource,
};

/// HTTP provider for the recommendation backend
///
/// Talks to `GET {base}/api/recommendations/{userId}` and resolves the
/// payload into a report. The user id goes into the path as a single
/// percent-encoded segment, so ids carrying reserved characters cannot
/// escape it.
#[derive(Debug, Clone)]
pub struct BackendProvider {
    http_client: HttpClient,
    base_url: Url,
}

impl BackendProvider {
    /// Creates a provider for the given backend base URL
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::InvalidInput(format!("invalid backend URL {}: {}", base_url, e))
        })?;

        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
        })
    }

    /// Builds the request URL with the user id as an encoded path segment
    fn recommendations_url(&self, user_id: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::InvalidInput(format!(
                    "backend URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "recommendations", user_id]);

        Ok(url)
    }
}

#[async_trait::async_trait]
impl RecommendationSource for BackendProvider {
    async fn fetch_recommendations(&self, user_id: &str) -> AppResult<RecommendationReport> {
        if user_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "user id cannot be empty".to_string(),
            ));
        }

        let url = self.recommendations_url(user_id)?;

        tracing::debug!(url = %url, "Fetching recommendations");

        let response = self.http_client.get(url).send().await?;

        // The backend pairs domain errors with 404/500 statuses, so the
        // status alone is not decisive; the body is.
        let status = response.status();
        let payload: RecommendationResponse = response.json().await?;
        let report = payload.into_report()?;

        tracing::info!(
            user_id = %user_id,
            status = %status,
            history = report.history.len(),
            recommendations = report.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_url_plain_id() {
        let provider = BackendProvider::new("http://test.local:3000").unwrap();
        let url = provider.recommendations_url("42").unwrap();

        assert_eq!(url.as_str(), "http://test.local:3000/api/recommendations/42");
    }

    #[test]
    fn test_recommendations_url_encodes_reserved_characters() {
        let provider = BackendProvider::new("http://test.local").unwrap();
        let url = provider.recommendations_url("a b/c").unwrap();

        assert_eq!(url.path(), "/api/recommendations/a%20b%2Fc");
    }

    #[test]
    fn test_recommendations_url_tolerates_trailing_slash() {
        let provider = BackendProvider::new("http://test.local/").unwrap();
        let url = provider.recommendations_url("42").unwrap();

        assert_eq!(url.path(), "/api/recommendations/42");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = BackendProvider::new("not a url");

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_blank_user_id_is_rejected() {
        let provider = BackendProvider::new("http://test.local").unwrap();
        let err = tokio_test::block_on(provider.fetch_recommendations("   ")).unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
