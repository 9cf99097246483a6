pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{ClassType, ParentRate, RateLink, TutorRate};
pub use repositories::BackendClient;
pub use services::{CatalogCache, RateCatalogService, RateLinkService};
