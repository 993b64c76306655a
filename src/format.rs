//! Pure presentation formatting for movie cards
//!
//! Everything here maps backend records to the fields a surface prints;
//! no I/O, no state. Ordering is preserved by the callers, which map over
//! the lists as delivered.

use crate::models::{HistoryMovie, RecommendedMovie};

/// Number of cells in a score gauge
pub const GAUGE_WIDTH: usize = 20;

/// Renderable card for one history entry
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCard {
    pub title: String,
    /// First genre token only
    pub genre: String,
    /// Raw rating behind a star glyph, e.g. "⭐ 4.5"
    pub rating: String,
}

/// Renderable card for one recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    /// First two genre tokens joined by ", "
    pub genre_label: String,
    pub content_pct: i64,
    pub collab_pct: i64,
    /// Hybrid score as a percentage with exactly one decimal, e.g. "92.3"
    pub total_score: String,
}

/// Maps a history record to its card
pub fn history_card(movie: &HistoryMovie) -> HistoryCard {
    HistoryCard {
        title: movie.title.clone(),
        genre: first_genres(&movie.genres, 1),
        rating: format!("⭐ {}", movie.rating),
    }
}

/// Maps a recommendation record to its card
pub fn recommendation_card(movie: &RecommendedMovie) -> RecommendationCard {
    RecommendationCard {
        title: movie.title.clone(),
        genre_label: first_genres(&movie.genres, 2),
        content_pct: score_pct(movie.content_score),
        collab_pct: score_pct(movie.collab_score),
        total_score: format!("{:.1}", movie.hybrid_score * 100.0),
    }
}

/// First `count` pipe-delimited genre tokens, comma-joined
///
/// Fewer tokens than asked for degrades to what is available; an empty
/// genre string yields an empty label.
fn first_genres(genres: &str, count: usize) -> String {
    genres.split('|').take(count).collect::<Vec<_>>().join(", ")
}

/// Whole-number percentage for a [0,1] score
///
/// Out-of-range scores are not clamped; the backend owns the contract and
/// the client displays whatever arrives.
fn score_pct(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Renders a horizontal gauge like `[█████████░░░░░░░░░░░]`
///
/// The fill is bounded by the gauge width even when the percentage lies
/// outside [0,100]; only the number printed next to it carries the excess.
pub fn render_gauge(pct: i64, width: usize) -> String {
    let filled = ((pct.max(0) as f64 / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recommendation() -> RecommendedMovie {
        RecommendedMovie {
            title: "Heat (1995)".to_string(),
            genres: "Action|Crime|Thriller".to_string(),
            content_score: 0.867,
            collab_score: 0.62,
            hybrid_score: 0.9234,
        }
    }

    #[test]
    fn test_recommendation_card_fields() {
        let card = recommendation_card(&sample_recommendation());

        assert_eq!(card.title, "Heat (1995)");
        assert_eq!(card.genre_label, "Action, Crime");
        assert_eq!(card.content_pct, 87);
        assert_eq!(card.collab_pct, 62);
        assert_eq!(card.total_score, "92.3");
    }

    #[test]
    fn test_history_card_fields() {
        let movie = HistoryMovie {
            title: "Toy Story (1995)".to_string(),
            genres: "Adventure|Animation|Children".to_string(),
            rating: 4.5,
        };

        let card = history_card(&movie);

        assert_eq!(card.title, "Toy Story (1995)");
        assert_eq!(card.genre, "Adventure");
        assert_eq!(card.rating, "⭐ 4.5");
    }

    #[test]
    fn test_integral_rating_prints_without_decimal() {
        let movie = HistoryMovie {
            title: "Heat (1995)".to_string(),
            genres: "Action".to_string(),
            rating: 4.0,
        };

        assert_eq!(history_card(&movie).rating, "⭐ 4");
    }

    #[test]
    fn test_genre_label_truncates_to_two_for_recommendations() {
        assert_eq!(first_genres("Action|Comedy|Drama", 2), "Action, Comedy");
    }

    #[test]
    fn test_genre_label_takes_first_for_history() {
        assert_eq!(first_genres("Action|Comedy|Drama", 1), "Action");
    }

    #[test]
    fn test_single_genre_degrades_gracefully() {
        assert_eq!(first_genres("Documentary", 2), "Documentary");
    }

    #[test]
    fn test_empty_genres_degrade_to_empty_label() {
        assert_eq!(first_genres("", 1), "");
        assert_eq!(first_genres("", 2), "");
    }

    #[test]
    fn test_score_pct_rounds_to_nearest() {
        assert_eq!(score_pct(0.867), 87);
        assert_eq!(score_pct(0.62), 62);
        assert_eq!(score_pct(0.005), 1);
    }

    #[test]
    fn test_out_of_range_scores_pass_through_unclamped() {
        assert_eq!(score_pct(1.5), 150);
        assert_eq!(score_pct(-0.2), -20);
    }

    #[test]
    fn test_total_score_keeps_one_decimal() {
        let mut movie = sample_recommendation();
        movie.hybrid_score = 0.9;

        assert_eq!(recommendation_card(&movie).total_score, "90.0");
    }

    #[test]
    fn test_gauge_fill_matches_percentage() {
        let gauge = render_gauge(50, 20);

        assert_eq!(gauge.matches('█').count(), 10);
        assert_eq!(gauge.matches('░').count(), 10);
    }

    #[test]
    fn test_gauge_fill_is_bounded() {
        let overfull = render_gauge(150, 20);
        assert_eq!(overfull.matches('█').count(), 20);
        assert_eq!(overfull.matches('░').count(), 0);

        let negative = render_gauge(-20, 20);
        assert_eq!(negative.matches('█').count(), 0);
        assert_eq!(negative.matches('░').count(), 20);
    }
}
