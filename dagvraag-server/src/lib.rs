//! dagvraag-server: HTTP API for the question of the day
//!
//! Serves the question scheduled for today, collects integer scores for it
//! and reports the submitted scores and their rounded-up average. Questions
//! and answers live in an externally managed MySQL schema.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use state::AppState;
