use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{BrandId, ProductId};

/// Caller-supplied filter criteria for a single catalog lookup. Every field is
/// optional; `None` means "no constraint", which is distinct from zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub brand_id: Option<BrandId>,
    pub product_id: Option<ProductId>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl ProductQuery {
    /// The search term when it carries at least one non-whitespace character.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.trim().is_empty())
    }

    /// Both price bounds, only when the caller supplied both.
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        self.min_price.zip(self.max_price)
    }
}
