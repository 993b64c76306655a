use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A movie from the user's viewing history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryMovie {
    pub title: String,
    /// Pipe-delimited genre list, e.g. "Action|Comedy|Drama"
    pub genres: String,
    pub rating: f64,
}

/// A recommended movie with its score breakdown
///
/// All three scores are produced server-side on a [0,1] scale. The client
/// never recomputes `hybrid_score` from the other two, it only formats it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedMovie {
    pub title: String,
    pub genres: String,
    pub content_score: f64,
    pub collab_score: f64,
    pub hybrid_score: f64,
}

/// Raw payload of GET /api/recommendations/{userId}
///
/// The backend sends either an `error` object or the two result lists.
/// Sibling fields such as the echoed `user_id` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<HistoryMovie>>,
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendedMovie>>,
}

/// A successfully resolved recommendation payload
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub history: Vec<HistoryMovie>,
    pub recommendations: Vec<RecommendedMovie>,
}

impl RecommendationResponse {
    /// Resolves the two mutually exclusive payload shapes
    ///
    /// An `error` field short-circuits everything else, even when result
    /// lists ride alongside it. A payload with neither an error nor both
    /// lists is malformed.
    pub fn into_report(self) -> AppResult<RecommendationReport> {
        if let Some(message) = self.error {
            return Err(AppError::Backend(message));
        }

        match (self.history, self.recommendations) {
            (Some(history), Some(recommendations)) => Ok(RecommendationReport {
                history,
                recommendations,
            }),
            _ => Err(AppError::InvalidResponse(
                "payload carries neither an error nor both result lists".to_string(),
            )),
        }
    }
}
