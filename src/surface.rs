//! Render port and its terminal implementation
//!
//! The controller pushes every state transition through the `Surface` seam.
//! `TerminalSurface` draws line-oriented frames to stdout; diagnostics go to
//! stderr via tracing, so the two streams never interleave.

use crate::controller::UiState;
use crate::format::{render_gauge, HistoryCard, RecommendationCard, GAUGE_WIDTH};

/// Output port for UI state
///
/// Exactly one view (loading, error or results) is drawn per call because
/// the state is a single enum.
pub trait Surface: Send + Sync {
    fn render(&self, state: &UiState);
}

/// Line-oriented surface writing to stdout
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn render(&self, state: &UiState) {
        print!("{}", compose(state));
    }
}

/// Builds the complete frame for one state
fn compose(state: &UiState) -> String {
    match state {
        UiState::Idle => String::new(),
        UiState::Loading { user_id } => format!("\nAnalyzing user {}...\n", user_id),
        UiState::Error { message } => format!("\nError: {}\n", message),
        UiState::Success {
            history,
            recommendations,
        } => {
            let mut out = String::new();

            out.push_str(&format!("\nVIEWING HISTORY\n{}\n", "=".repeat(60)));
            if history.is_empty() {
                out.push_str("(no rated movies)\n");
            }
            for card in history {
                out.push_str(&history_block(card));
            }

            out.push_str(&format!("\nRECOMMENDED FOR YOU\n{}\n", "=".repeat(60)));
            if recommendations.is_empty() {
                out.push_str("(no recommendations)\n");
            }
            for (rank, card) in recommendations.iter().enumerate() {
                out.push_str(&recommendation_block(rank + 1, card));
            }

            out
        }
    }
}

fn history_block(card: &HistoryCard) -> String {
    format!("{:<44} {:<16} {}\n", card.title, card.genre, card.rating)
}

fn recommendation_block(rank: usize, card: &RecommendationCard) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{:>2}. {:<44} {}% Match\n",
        rank, card.title, card.total_score
    ));
    out.push_str(&format!("    {}\n", card.genre_label));
    out.push_str(&format!(
        "    {:<24} {:>4}%  {}\n",
        "Content (Genre)",
        card.content_pct,
        render_gauge(card.content_pct, GAUGE_WIDTH)
    ));
    out.push_str(&format!(
        "    {:<24} {:>4}%  {}\n",
        "Collaborative (People)",
        card.collab_pct,
        render_gauge(card.collab_pct, GAUGE_WIDTH)
    ));

    out
}
