//! Terminal viewer for a hybrid movie-recommendation service
//!
//! Pairs a request/render state machine (`controller`) with pure card
//! formatting (`format`), a reqwest-backed provider for the recommendation
//! endpoint (`services`) and a line-oriented terminal surface (`surface`).
//! Binaries inject the `Surface` and `RecommendationSource` seams; tests
//! substitute both.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod surface;
