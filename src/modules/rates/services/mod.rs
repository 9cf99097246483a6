pub mod catalog_cache;
pub mod rate_catalog_service;
pub mod rate_link_service;

pub use catalog_cache::{CatalogCache, Collection, Mutation};
pub use rate_catalog_service::RateCatalogService;
pub use rate_link_service::RateLinkService;
