use std::path::PathBuf;

use thiserror::Error;

use crate::domain::product::ProductId;

/// Reasons a query is refused before the catalog is searched. The rendered
/// messages are part of the public HTTP contract and must not change.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum QueryRejection {
    #[error("BrandId must not be negative")]
    NegativeBrandId,
    #[error("ProductId must not be negative")]
    NegativeProductId,
    #[error("Price range must be positive")]
    NegativePrice,
    #[error("MaxPrice must be more than MinPrice")]
    InvertedPriceRange,
    #[error("Search must not be empty")]
    EmptySearch,
}

impl QueryRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NegativeBrandId => "BrandId must not be negative",
            Self::NegativeProductId => "ProductId must not be negative",
            Self::NegativePrice => "Price range must be positive",
            Self::InvertedPriceRange => "MaxPrice must be more than MinPrice",
            Self::EmptySearch => "Search must not be empty",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("could not read catalog seed `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog seed `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("duplicate catalog entry id {0:?}")]
    DuplicateId(ProductId),
    #[error("duplicate catalog sku `{0}`")]
    DuplicateSku(String),
    #[error("catalog entry {0:?} has a negative price")]
    NegativePrice(ProductId),
}
