use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::{
    domain::product::{Brand, BrandId, CatalogEntry, ProductId},
    errors::CatalogLoadError,
};

const SAMPLE_IMAGE_URL: &str = "https://media.bunnings.com/image-guid.png";

pub trait CatalogProvider: Send + Sync {
    fn entries(&self) -> &[CatalogEntry];
}

/// Immutable, in-memory catalog built once at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogLoadError> {
        check_invariants(&entries)?;
        Ok(Self { entries })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogLoadError::ReadFile { path: path.to_path_buf(), source })?;
        let entries = serde_json::from_str::<Vec<CatalogEntry>>(&raw)
            .map_err(|source| CatalogLoadError::ParseFile { path: path.to_path_buf(), source })?;

        Self::new(entries)
    }

    /// Loads `seed_path` when given, otherwise the built-in sample catalog.
    pub fn load(seed_path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        match seed_path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn sample() -> Self {
        let gardman = Brand {
            id: BrandId(0),
            name: "Gardman".to_owned(),
            logo_url: "https://media.bunnings.com/gardman.png".to_owned(),
        };
        let earthwool = Brand {
            id: BrandId(1),
            name: "EARTHWOOl".to_owned(),
            logo_url: "https://media.bunnings.com/earthwool.png".to_owned(),
        };

        Self {
            entries: vec![
                sample_entry(
                    0,
                    "Wall basket",
                    "This Gardman Wall Basket features an elegant, period-style design and is \
                     presented in a rustic \"limed\" finish. It is both strong and durable and \
                     comes complete with liner.",
                    Decimal::new(1298, 2),
                    "GAR01",
                    &gardman,
                ),
                sample_entry(
                    1,
                    "Coco roll basket liner",
                    "Line any size hanging basket, window box or planter Gardman Coco Roll \
                     Basket liner rolls",
                    Decimal::new(1798, 2),
                    "GAR02",
                    &gardman,
                ),
                sample_entry(
                    2,
                    "Earthwool R-4.0",
                    "Earthwool® R-4.0 Ceiling batt offers great performance, with excellent \
                     energy saving properties, enabling you to keep your home cool in summer and \
                     warm in winter.",
                    Decimal::new(7150, 2),
                    "EAR01",
                    &earthwool,
                ),
                sample_entry(
                    3,
                    "Earthwool Space Blanket R-1.8",
                    "Space Blanket® is a specialist under-metal roof insulation designed for use \
                     in residential buildings.",
                    Decimal::new(800, 1),
                    "EAR02",
                    &earthwool,
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

fn sample_entry(
    id: i64,
    name: &str,
    description: &str,
    price: Decimal,
    sku: &str,
    brand: &Brand,
) -> CatalogEntry {
    CatalogEntry {
        id: ProductId(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        sku: sku.to_owned(),
        image_urls: vec![SAMPLE_IMAGE_URL.to_owned()],
        brand: brand.clone(),
    }
}

fn check_invariants(entries: &[CatalogEntry]) -> Result<(), CatalogLoadError> {
    let mut seen_ids = HashSet::new();
    let mut seen_skus = HashSet::new();

    for entry in entries {
        if !seen_ids.insert(entry.id) {
            return Err(CatalogLoadError::DuplicateId(entry.id));
        }
        if !seen_skus.insert(entry.sku.as_str()) {
            return Err(CatalogLoadError::DuplicateSku(entry.sku.clone()));
        }
        if entry.price < Decimal::ZERO {
            return Err(CatalogLoadError::NegativePrice(entry.id));
        }
    }

    Ok(())
}
