#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cached_catalog;

pub use cached_catalog::{CachedCatalog, CatalogSource};
