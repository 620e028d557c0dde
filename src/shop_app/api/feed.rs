// shop_app/api/feed.rs - Product feed sources
//
// A feed is a JSON array of product objects with text prices.

use std::path::PathBuf;

use crate::shop_app::error::ProductFetchError;
use crate::shop_app::model::Product;

/// Read-only source of catalog products
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError>;
}

/// Decode a feed body into products
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Product>, ProductFetchError> {
    let products: Vec<Product> = serde_json::from_slice(bytes)?;
    tracing::debug!("Parsed {} products from feed", products.len());
    Ok(products)
}

/// Feed held in memory as JSON text
#[derive(Clone, Debug)]
pub struct JsonProductSource {
    body: String,
}

impl JsonProductSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl ProductSource for JsonProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError> {
        parse_feed(self.body.as_bytes())
    }
}

/// Feed stored in a JSON file
#[derive(Clone, Debug)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, ProductFetchError> {
        tracing::info!("Reading product feed from {}", self.path.display());
        #[cfg(feature = "feed")]
        let bytes = tokio::fs::read(&self.path).await?;
        // Without the runtime there is no async file API to hand off to
        #[cfg(not(feature = "feed"))]
        let bytes = std::fs::read(&self.path)?;
        parse_feed(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_empty_array() {
        let products = parse_feed(b"[]").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_feed_rejects_object() {
        let result = parse_feed(br#"{"productos": []}"#);
        assert!(matches!(result, Err(ProductFetchError::Parse(_))));
    }

    #[test]
    fn test_parse_feed_preserves_order() {
        let body = br#"[
            {"id": 3, "id_restaurante": 1, "id_categoria": 1, "nombre": "C", "descripcion": "", "precio": "1.00"},
            {"id": 1, "id_restaurante": 1, "id_categoria": 1, "nombre": "A", "descripcion": "", "precio": "2.00"}
        ]"#;

        let ids: Vec<i64> = parse_feed(body).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
