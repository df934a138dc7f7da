use rust_decimal::Decimal;

use crate::{domain::query::ProductQuery, errors::QueryRejection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(QueryRejection),
}

pub trait QueryValidator: Send + Sync {
    fn validate(&self, query: &ProductQuery) -> ValidationResult;
}

#[derive(Default)]
pub struct DeterministicQueryValidator;

impl QueryValidator for DeterministicQueryValidator {
    fn validate(&self, query: &ProductQuery) -> ValidationResult {
        validate_query(query)
    }
}

type Rule = (fn(&ProductQuery) -> bool, QueryRejection);

// Evaluated in order; the first violated rule wins.
const RULES: [Rule; 5] = [
    (brand_is_negative, QueryRejection::NegativeBrandId),
    (product_is_negative, QueryRejection::NegativeProductId),
    (price_is_negative, QueryRejection::NegativePrice),
    (price_range_is_inverted, QueryRejection::InvertedPriceRange),
    (search_is_blank, QueryRejection::EmptySearch),
];

pub fn validate_query(query: &ProductQuery) -> ValidationResult {
    RULES
        .iter()
        .find(|(violated, _)| violated(query))
        .map_or(ValidationResult::Accepted, |(_, rejection)| ValidationResult::Rejected(*rejection))
}

fn brand_is_negative(query: &ProductQuery) -> bool {
    query.brand_id.is_some_and(|brand_id| brand_id.0 < 0)
}

fn product_is_negative(query: &ProductQuery) -> bool {
    query.product_id.is_some_and(|product_id| product_id.0 < 0)
}

fn price_is_negative(query: &ProductQuery) -> bool {
    [query.min_price, query.max_price].into_iter().flatten().any(|price| price < Decimal::ZERO)
}

fn price_range_is_inverted(query: &ProductQuery) -> bool {
    query.price_range().is_some_and(|(min_price, max_price)| max_price < min_price)
}

fn search_is_blank(query: &ProductQuery) -> bool {
    query.search_term().is_none()
}
