//! Repository layer.
//!
//! One generic read-only engine, [`CatalogRepo`], instantiated once per
//! resource kind. Methods are associated functions that accept `&DbPool` as
//! the first argument.

pub mod catalog_repo;
pub mod event_repo;
pub mod race_repo;

pub use catalog_repo::{CatalogRepo, CatalogResource, ListRequest};
pub use event_repo::{EventRepo, Events};
pub use race_repo::{RaceRepo, Races};
