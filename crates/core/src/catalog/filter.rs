use crate::domain::{product::CatalogEntry, query::ProductQuery};

pub trait FilterEngine: Send + Sync {
    fn filter<'a>(
        &self,
        query: &ProductQuery,
        entries: &'a [CatalogEntry],
    ) -> Vec<&'a CatalogEntry>;
}

#[derive(Default)]
pub struct DeterministicFilterEngine;

impl FilterEngine for DeterministicFilterEngine {
    fn filter<'a>(
        &self,
        query: &ProductQuery,
        entries: &'a [CatalogEntry],
    ) -> Vec<&'a CatalogEntry> {
        filter_catalog(query, entries)
    }
}

/// Entries satisfying every supplied criterion, in catalog order.
pub fn filter_catalog<'a>(
    query: &ProductQuery,
    entries: &'a [CatalogEntry],
) -> Vec<&'a CatalogEntry> {
    let needle = query.search_term().map(fold_case);

    entries
        .iter()
        .filter(|entry| {
            matches_brand(query, entry)
                && matches_price_range(query, entry)
                && matches_product(query, entry)
                && needle.as_deref().map_or(true, |needle| matches_search(needle, entry))
        })
        .collect()
}

fn matches_brand(query: &ProductQuery, entry: &CatalogEntry) -> bool {
    query.brand_id.map_or(true, |brand_id| entry.brand.id == brand_id)
}

// Bounds are exclusive and only apply when both are present.
fn matches_price_range(query: &ProductQuery, entry: &CatalogEntry) -> bool {
    query
        .price_range()
        .map_or(true, |(min_price, max_price)| entry.price > min_price && entry.price < max_price)
}

fn matches_product(query: &ProductQuery, entry: &CatalogEntry) -> bool {
    query.product_id.map_or(true, |product_id| entry.id == product_id)
}

fn matches_search(needle: &str, entry: &CatalogEntry) -> bool {
    fold_case(&entry.name).contains(needle) || fold_case(&entry.description).contains(needle)
}

// Per-character lowering; `str::to_lowercase` picks a final sigma by word
// position, so a term and the text containing it could lower differently.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{filter_catalog, DeterministicFilterEngine, FilterEngine};
    use crate::{
        catalog::provider::{CatalogProvider, StaticCatalog},
        domain::{
            product::{BrandId, CatalogEntry, ProductId},
            query::ProductQuery,
        },
    };

    fn ids(entries: &[&CatalogEntry]) -> Vec<i64> {
        entries.iter().map(|entry| entry.id.0).collect()
    }

    fn search(term: &str) -> ProductQuery {
        ProductQuery { search: Some(term.to_owned()), ..ProductQuery::default() }
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let catalog = StaticCatalog::sample();

        let insulation = filter_catalog(&search("insulation"), catalog.entries());
        let earthwool = filter_catalog(&search("EARTHWOOL"), catalog.entries());

        assert_eq!(ids(&insulation), vec![3]);
        assert_eq!(ids(&earthwool), vec![2, 3]);
        assert!(insulation.iter().all(|entry| entry.brand.id == BrandId(1)));
    }

    #[test]
    fn search_folds_case_per_character_for_non_ascii_text() {
        let mut entries = StaticCatalog::sample().entries().to_vec();
        entries[0].name = "ΟΣΑ".to_owned();
        entries[1].name = "Σκάλα ΚΗΠΟΥ".to_owned();

        assert_eq!(ids(&filter_catalog(&search("ΟΣ"), &entries)), vec![0]);
        assert_eq!(ids(&filter_catalog(&search("οσα"), &entries)), vec![0]);
        assert_eq!(ids(&filter_catalog(&search("κήπου"), &entries)), Vec::<i64>::new());
        assert_eq!(ids(&filter_catalog(&search("σκάλα κηπου"), &entries)), vec![1]);
    }

    #[test]
    fn price_bounds_are_exclusive() {
        let catalog = StaticCatalog::sample();
        let mut query = search("basket");
        query.min_price = Some(Decimal::new(1298, 2));
        query.max_price = Some(Decimal::new(1798, 2));

        assert!(filter_catalog(&query, catalog.entries()).is_empty());

        query.max_price = Some(Decimal::new(1799, 2));
        assert_eq!(ids(&filter_catalog(&query, catalog.entries())), vec![1]);
    }

    #[test]
    fn basket_search_between_fifteen_and_twenty_excludes_boundary_prices() {
        let catalog = StaticCatalog::sample();
        let mut query = search("basket");
        query.min_price = Some(Decimal::from(15));
        query.max_price = Some(Decimal::from(20));

        let results = filter_catalog(&query, catalog.entries());

        assert_eq!(ids(&results), vec![1]);
        assert!(results
            .iter()
            .all(|entry| entry.price != Decimal::from(15) && entry.price != Decimal::from(20)));
    }

    #[test]
    fn single_price_bound_imposes_no_constraint() {
        let catalog = StaticCatalog::sample();
        let mut query = search("basket");
        query.min_price = Some(Decimal::from(1000));

        assert_eq!(ids(&filter_catalog(&query, catalog.entries())), vec![0, 1]);
    }

    #[test]
    fn brand_and_product_filters_combine_with_and() {
        let catalog = StaticCatalog::sample();
        let mut query = search("e");
        query.brand_id = Some(BrandId(0));

        assert_eq!(ids(&filter_catalog(&query, catalog.entries())), vec![0, 1]);

        query.product_id = Some(ProductId(1));
        assert_eq!(ids(&filter_catalog(&query, catalog.entries())), vec![1]);

        query.product_id = Some(ProductId(2));
        assert!(filter_catalog(&query, catalog.entries()).is_empty());
    }

    #[test]
    fn zero_width_price_range_matches_nothing() {
        let catalog = StaticCatalog::sample();
        let query = ProductQuery {
            brand_id: Some(BrandId(0)),
            product_id: Some(ProductId(0)),
            min_price: Some(Decimal::ZERO),
            max_price: Some(Decimal::ZERO),
            search: Some("insulation".to_owned()),
        };

        assert!(filter_catalog(&query, catalog.entries()).is_empty());
    }

    #[test]
    fn filtering_is_repeatable_and_preserves_catalog_order() {
        let catalog = StaticCatalog::sample();
        let engine = DeterministicFilterEngine;
        let query = search("r");

        let first = engine.filter(&query, catalog.entries());
        let second = engine.filter(&query, catalog.entries());

        assert_eq!(first, second);
        let order = ids(&first);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let catalog = StaticCatalog::sample();
        let base = search("a");
        let base_len = filter_catalog(&base, catalog.entries()).len();

        let narrowed = [
            ProductQuery { brand_id: Some(BrandId(1)), ..base.clone() },
            ProductQuery { product_id: Some(ProductId(2)), ..base.clone() },
            ProductQuery {
                min_price: Some(Decimal::from(10)),
                max_price: Some(Decimal::from(75)),
                ..base.clone()
            },
            ProductQuery { search: Some("a basket".to_owned()), ..base.clone() },
        ];

        for query in narrowed {
            assert!(
                filter_catalog(&query, catalog.entries()).len() <= base_len,
                "constraint widened the result: {query:?}"
            );
        }
    }
}
