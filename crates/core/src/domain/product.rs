use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandId(pub i64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    pub logo_url: String,
}

/// A single product as exposed by the catalog. Entries are read-only once the
/// catalog is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub sku: String,
    pub image_urls: Vec<String>,
    pub brand: Brand,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::{Brand, BrandId, CatalogEntry, ProductId};

    #[test]
    fn catalog_entry_serializes_with_wire_field_names() {
        let entry = CatalogEntry {
            id: ProductId(7),
            name: "Wall basket".to_owned(),
            description: "Rustic limed finish".to_owned(),
            price: Decimal::new(1298, 2),
            sku: "GAR01".to_owned(),
            image_urls: vec!["https://media.example.com/a.png".to_owned()],
            brand: Brand {
                id: BrandId(0),
                name: "Gardman".to_owned(),
                logo_url: "https://media.example.com/gardman.png".to_owned(),
            },
        };

        let value = serde_json::to_value(&entry).expect("serialize entry");

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Wall basket",
                "description": "Rustic limed finish",
                "price": 12.98,
                "sku": "GAR01",
                "imageUrls": ["https://media.example.com/a.png"],
                "brand": {
                    "id": 0,
                    "name": "Gardman",
                    "logoUrl": "https://media.example.com/gardman.png"
                }
            })
        );
    }
}
