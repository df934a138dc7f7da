use catalog_core::config::{AppConfig, LoadOptions};
use catalog_core::{BrandId, CatalogQueryService, ProductId, ProductQuery, StaticCatalog};
use clap::Args;
use rust_decimal::Decimal;

use crate::commands::CommandResult;

#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    #[arg(long, allow_negative_numbers = true, help = "Restrict to a single brand id")]
    pub brand_id: Option<i64>,
    #[arg(long, allow_negative_numbers = true, help = "Restrict to a single product id")]
    pub product_id: Option<i64>,
    #[arg(long, allow_negative_numbers = true, help = "Exclusive lower price bound")]
    pub min_price: Option<Decimal>,
    #[arg(long, allow_negative_numbers = true, help = "Exclusive upper price bound")]
    pub max_price: Option<Decimal>,
    #[arg(long, allow_hyphen_values = true, help = "Case-insensitive name/description search")]
    pub search: Option<String>,
}

impl From<QueryArgs> for ProductQuery {
    fn from(args: QueryArgs) -> Self {
        Self {
            brand_id: args.brand_id.map(BrandId),
            product_id: args.product_id.map(ProductId),
            min_price: args.min_price,
            max_price: args.max_price,
            search: args.search,
        }
    }
}

pub fn run(args: QueryArgs, options: LoadOptions) -> CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "query",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let catalog = match StaticCatalog::load(config.catalog.seed_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("query", "catalog_load", error.to_string(), 2);
        }
    };

    let query = ProductQuery::from(args);
    match CatalogQueryService::default().query(&query, &catalog).into_result() {
        Err(rejection) => CommandResult::failure("query", "validation", rejection.message(), 1),
        Ok(entries) => {
            let message = format!("{} matching catalog entries", entries.len());
            CommandResult::success_with_results("query", message, entries)
        }
    }
}
