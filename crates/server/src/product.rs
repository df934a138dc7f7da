//! Catalog query route.
//!
//! - `GET /product?brandId=&productId=&minPrice=&maxPrice=&search=`
//!
//! Every parameter is optional. A rejected query answers `400` with the
//! validation message as a plain-text body; an accepted one answers `200`
//! with the matching entries as a JSON array.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_core::{
    BrandId, CatalogProvider, CatalogQueryService, DeterministicFilterEngine,
    DeterministicQueryValidator, ProductId, ProductQuery, QueryRejection,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

pub type QueryService = CatalogQueryService<DeterministicQueryValidator, DeterministicFilterEngine>;

#[derive(Clone)]
pub struct ProductState {
    catalog: Arc<dyn CatalogProvider>,
    service: Arc<QueryService>,
}

impl ProductState {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog, service: Arc::new(QueryService::default()) }
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Raw query-string values. Kept as text so that an empty value reads as
/// "absent" and a malformed number is reported against its parameter name.
/// Ids bind as 32-bit integers; anything wider is a malformed value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    pub brand_id: Option<String>,
    pub product_id: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(#[from] QueryRejection),
    #[error("The value '{value}' is not valid for {name}.")]
    InvalidParameter { name: &'static str, value: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl TryFrom<ProductQueryParams> for ProductQuery {
    type Error = ApiError;

    fn try_from(params: ProductQueryParams) -> Result<Self, Self::Error> {
        Ok(Self {
            brand_id: parse_param::<i32>("brandId", params.brand_id)?
                .map(|id| BrandId(id.into())),
            product_id: parse_param::<i32>("productId", params.product_id)?
                .map(|id| ProductId(id.into())),
            min_price: parse_param::<Decimal>("minPrice", params.min_price)?,
            max_price: parse_param::<Decimal>("maxPrice", params.max_price)?,
            search: params.search.filter(|value| !value.is_empty()),
        })
    }
}

fn parse_param<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ApiError> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    raw.trim().parse::<T>().map(Some).map_err(|_| ApiError::InvalidParameter { name, value: raw })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(catalog: Arc<dyn CatalogProvider>) -> Router {
    Router::new().route("/product", get(get_by_query)).with_state(ProductState::new(catalog))
}

pub async fn get_by_query(
    State(state): State<ProductState>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Response, ApiError> {
    let correlation_id = Uuid::new_v4().to_string();
    let query = match ProductQuery::try_from(params) {
        Ok(query) => query,
        Err(error) => {
            info!(
                event_name = "catalog.product.invalid_parameter",
                correlation_id = %correlation_id,
                validation_message = %error,
                "(Get) parameter binding error"
            );
            return Err(error);
        }
    };

    match state.service.query(&query, state.catalog.as_ref()).into_result() {
        Err(rejection) => {
            info!(
                event_name = "catalog.product.validation_rejected",
                correlation_id = %correlation_id,
                validation_message = rejection.message(),
                "(Get) validation error"
            );
            Err(rejection.into())
        }
        Ok(entries) => {
            debug!(
                event_name = "catalog.product.query_served",
                correlation_id = %correlation_id,
                result_count = entries.len(),
                "catalog query served"
            );
            Ok(Json(entries).into_response())
        }
    }
}
