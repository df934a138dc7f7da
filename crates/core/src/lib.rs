pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;

pub use catalog::filter::{filter_catalog, DeterministicFilterEngine, FilterEngine};
pub use catalog::provider::{CatalogProvider, StaticCatalog};
pub use catalog::validation::{
    validate_query, DeterministicQueryValidator, QueryValidator, ValidationResult,
};
pub use catalog::{CatalogQueryService, FilterOutcome};
pub use domain::product::{Brand, BrandId, CatalogEntry, ProductId};
pub use domain::query::ProductQuery;
pub use errors::{CatalogLoadError, QueryRejection};
