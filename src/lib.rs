//! Ratedesk: dashboard service for tutor and parent rate catalogs
//!
//! Fronts the tutoring business's rates backend: caches both rate catalogs
//! and the rate links between them, forwards admin edits, and reports the
//! profit margin of every linked tutor/parent rate pair.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod state;

// Re-export commonly used types
pub use modules::rates;
pub use modules::reports;
pub use state::AppState;
