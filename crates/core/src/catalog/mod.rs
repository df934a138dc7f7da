pub mod filter;
pub mod provider;
pub mod validation;

use crate::{
    domain::{product::CatalogEntry, query::ProductQuery},
    errors::QueryRejection,
};

use self::{
    filter::{DeterministicFilterEngine, FilterEngine},
    provider::CatalogProvider,
    validation::{DeterministicQueryValidator, QueryValidator, ValidationResult},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    Rejected(QueryRejection),
    Accepted(Vec<&'a CatalogEntry>),
}

impl<'a> FilterOutcome<'a> {
    pub fn into_result(self) -> Result<Vec<&'a CatalogEntry>, QueryRejection> {
        match self {
            Self::Accepted(entries) => Ok(entries),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

pub struct CatalogQueryService<V, F> {
    validator: V,
    filter_engine: F,
}

impl<V, F> CatalogQueryService<V, F> {
    pub fn new(validator: V, filter_engine: F) -> Self {
        Self { validator, filter_engine }
    }
}

impl Default for CatalogQueryService<DeterministicQueryValidator, DeterministicFilterEngine> {
    fn default() -> Self {
        Self::new(DeterministicQueryValidator, DeterministicFilterEngine)
    }
}

impl<V, F> CatalogQueryService<V, F>
where
    V: QueryValidator,
    F: FilterEngine,
{
    /// Validates `query` and, only when accepted, filters the catalog.
    pub fn query<'a>(
        &self,
        query: &ProductQuery,
        catalog: &'a dyn CatalogProvider,
    ) -> FilterOutcome<'a> {
        match self.validator.validate(query) {
            ValidationResult::Rejected(rejection) => FilterOutcome::Rejected(rejection),
            ValidationResult::Accepted => {
                FilterOutcome::Accepted(self.filter_engine.filter(query, catalog.entries()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;

    use super::{CatalogQueryService, FilterOutcome};
    use crate::{
        catalog::{
            filter::FilterEngine,
            provider::{CatalogProvider, StaticCatalog},
            validation::DeterministicQueryValidator,
        },
        domain::{
            product::{BrandId, CatalogEntry},
            query::ProductQuery,
        },
        errors::QueryRejection,
    };

    #[derive(Default)]
    struct CountingFilterEngine {
        calls: AtomicUsize,
    }

    impl FilterEngine for CountingFilterEngine {
        fn filter<'a>(
            &self,
            _query: &ProductQuery,
            entries: &'a [CatalogEntry],
        ) -> Vec<&'a CatalogEntry> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            entries.iter().collect()
        }
    }

    #[test]
    fn negative_brand_is_rejected_without_results() {
        let service = CatalogQueryService::default();
        let catalog = StaticCatalog::sample();
        let query = ProductQuery { brand_id: Some(BrandId(-1)), ..ProductQuery::default() };

        let outcome = service.query(&query, &catalog);

        assert_eq!(outcome, FilterOutcome::Rejected(QueryRejection::NegativeBrandId));
        assert_eq!(
            outcome.into_result().map_err(|rejection| rejection.message()),
            Err("BrandId must not be negative")
        );
    }

    #[test]
    fn insulation_search_returns_only_matching_earthwool_entries() {
        let service = CatalogQueryService::default();
        let catalog = StaticCatalog::sample();
        let query = ProductQuery { search: Some("insulation".to_owned()), ..ProductQuery::default() };

        let entries = service.query(&query, &catalog).into_result().expect("query is valid");

        assert!(!entries.is_empty());
        for entry in entries {
            assert_eq!(entry.brand.name, "EARTHWOOl");
            let haystack = format!("{} {}", entry.name, entry.description).to_lowercase();
            assert!(haystack.contains("insulation"));
        }
    }

    #[test]
    fn empty_search_with_brand_is_rejected() {
        let service = CatalogQueryService::default();
        let catalog = StaticCatalog::sample();
        let query = ProductQuery {
            brand_id: Some(BrandId(0)),
            search: Some(String::new()),
            ..ProductQuery::default()
        };

        assert_eq!(
            service.query(&query, &catalog),
            FilterOutcome::Rejected(QueryRejection::EmptySearch)
        );
    }

    #[test]
    fn basket_search_excludes_entries_on_price_bounds() {
        let service = CatalogQueryService::default();
        let catalog = StaticCatalog::sample();
        let query = ProductQuery {
            min_price: Some(Decimal::from(15)),
            max_price: Some(Decimal::from(20)),
            search: Some("basket".to_owned()),
            ..ProductQuery::default()
        };

        let results = service.query(&query, &catalog).into_result().expect("query is valid");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].sku, "GAR02");
    }

    #[test]
    fn filter_engine_is_skipped_on_rejection() {
        let service =
            CatalogQueryService::new(DeterministicQueryValidator, CountingFilterEngine::default());
        let catalog = StaticCatalog::sample();

        let rejected = service.query(&ProductQuery::default(), &catalog);
        assert_eq!(rejected, FilterOutcome::Rejected(QueryRejection::EmptySearch));
        assert_eq!(service.filter_engine.calls.load(Ordering::SeqCst), 0);

        let accepted = ProductQuery { search: Some("liner".to_owned()), ..ProductQuery::default() };
        let outcome = service.query(&accepted, &catalog);
        let matched = outcome.into_result().map(|entries| entries.len());
        assert_eq!(matched, Ok(catalog.entries().len()));
        assert_eq!(service.filter_engine.calls.load(Ordering::SeqCst), 1);
    }
}
