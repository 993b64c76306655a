//! Interaction controller: the request/render state machine
//!
//! One trigger is one request and one committed outcome. State lives behind
//! a mutex that is held only for the commit (state write plus render as a
//! single step), never across the network await. Overlapping triggers are
//! therefore safe; whichever resolution commits last is the one on screen.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::Instrument;

use crate::error::AppError;
use crate::format::{self, HistoryCard, RecommendationCard};
use crate::models::RecommendationReport;
use crate::services::RecommendationSource;
use crate::surface::Surface;

/// Banner shown when a request fails for any non-domain reason
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Ensure server is running.";

/// What the surface is currently showing
///
/// Carries the full render payload, so committing a new state structurally
/// discards everything from the previous cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading {
        user_id: String,
    },
    Error {
        message: String,
    },
    Success {
        history: Vec<HistoryCard>,
        recommendations: Vec<RecommendationCard>,
    },
}

/// Correlates the diagnostics of one trigger
#[derive(Debug, Clone, Copy)]
struct RequestId(uuid::Uuid);

impl RequestId {
    fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drives the idle/loading/success/error cycle against one surface
#[derive(Clone)]
pub struct Controller {
    source: Arc<dyn RecommendationSource>,
    surface: Arc<dyn Surface>,
    state: Arc<Mutex<UiState>>,
}

impl Controller {
    pub fn new(source: Arc<dyn RecommendationSource>, surface: Arc<dyn Surface>) -> Self {
        Self {
            source,
            surface,
            state: Arc::new(Mutex::new(UiState::Idle)),
        }
    }

    /// Snapshot of the committed state
    pub async fn state(&self) -> UiState {
        self.state.lock().await.clone()
    }

    /// Runs one request/render cycle for `user_id`
    ///
    /// Blank or all-whitespace input is ignored without a transition. Any
    /// other input commits `Loading`, performs exactly one fetch, and
    /// commits `Success` or `Error`. No serialization across calls: an
    /// embedding loop may overlap triggers, and the last commit wins.
    pub async fn trigger(&self, user_id: &str) {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            tracing::debug!("Ignoring trigger with blank user id");
            return;
        }

        let request_id = RequestId::new();
        let span =
            tracing::info_span!("trigger", request_id = %request_id, user_id = %user_id);

        self.run_cycle(user_id).instrument(span).await;
    }

    async fn run_cycle(&self, user_id: &str) {
        self.commit(UiState::Loading {
            user_id: user_id.to_string(),
        })
        .await;

        let next = match self.source.fetch_recommendations(user_id).await {
            Ok(report) => success_state(report),
            Err(err) => error_state(err),
        };

        self.commit(next).await;
    }

    /// Stores the state and renders it under a single lock hold
    async fn commit(&self, next: UiState) {
        let mut state = self.state.lock().await;
        *state = next;
        self.surface.render(&state);
    }
}

fn success_state(report: RecommendationReport) -> UiState {
    UiState::Success {
        history: report.history.iter().map(format::history_card).collect(),
        recommendations: report
            .recommendations
            .iter()
            .map(format::recommendation_card)
            .collect(),
    }
}

/// Domain errors reach the banner verbatim; everything else collapses to the
/// fixed fallback while the cause goes to the diagnostic channel.
fn error_state(err: AppError) -> UiState {
    match err {
        AppError::Backend(message) => {
            tracing::warn!(error = %message, "Backend reported a domain error");
            UiState::Error { message }
        }
        other => {
            tracing::error!(error = %other, "Failed to fetch recommendations");
            UiState::Error {
                message: FETCH_FAILED_MESSAGE.to_string(),
            }
        }
    }
}
