//! Catalog Data Source
//!
//! The external contract the storefront consumes: some fetch of a JSON
//! array of catalog items. The shipped backend reads a `phones.json` file,
//! which keeps the data static/mock while exercising the real failure
//! modes (missing file, malformed payload).

use super::models::CatalogItem;
use crate::error::{Result, StorefrontError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Supplier of the full catalog. May fail or return malformed data; the
/// query pipeline never sees either case.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>>;

    async fn fetch_by_id(&self, id: &str) -> Result<CatalogItem> {
        self.fetch_all()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| StorefrontError::NotFound(format!("phone {id}")))
    }

    async fn fetch_by_brand(&self, brand: &str) -> Result<Vec<CatalogItem>> {
        Ok(self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|item| item.brand_or_empty() == brand)
            .collect())
    }
}

/// File-backed source: one JSON array of items on disk.
pub struct JsonFileSource {
    data_file: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Locates `phones.json` next to the binary or one directory up, the
    /// same lookup strategy used for other runtime assets.
    pub fn discover() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(Self::locate_data_file(&current_dir))
    }

    fn locate_data_file(current_dir: &Path) -> PathBuf {
        if current_dir.join("phones.json").exists() {
            return current_dir.join("phones.json");
        }
        if let Some(parent) = current_dir.parent() {
            if parent.join("phones.json").exists() {
                return parent.join("phones.json");
            }
        }
        PathBuf::from("phones.json") // Fallback
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<CatalogItem>> {
        let raw = tokio::fs::read_to_string(&self.data_file).await?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;

        // Inverted old_price is a data-quality issue at this boundary; it
        // renders as "no discount" downstream.
        for item in &items {
            if item.old_price.is_some() && item.discount().is_none() {
                warn!(id = %item.id, price = item.price, old_price = item.old_price,
                    "item has old_price below price; ignoring discount");
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(json: &str) -> (tempfile::TempDir, JsonFileSource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phones.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        (dir, JsonFileSource::new(path))
    }

    #[tokio::test]
    async fn fetches_items_from_json_array() {
        let (_dir, source) = write_source(
            r#"[{"id": "s23", "name": "Galaxy S23", "brand": "Samsung", "price": 799.99}]"#,
        );
        let items = source.fetch_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].brand.as_deref(), Some("Samsung"));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = JsonFileSource::new("/definitely/not/here/phones.json");
        assert!(matches!(
            source.fetch_all().await,
            Err(StorefrontError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_data_source_error() {
        let (_dir, source) = write_source(r#"{"not": "an array"}"#);
        assert!(matches!(
            source.fetch_all().await,
            Err(StorefrontError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn fetch_by_brand_matches_exactly_and_skips_brandless() {
        let (_dir, source) = write_source(
            r#"[
                {"id": "s23", "name": "Galaxy S23", "brand": "Samsung", "price": 799},
                {"id": "a54", "name": "Galaxy A54", "brand": "Samsung", "price": 449},
                {"id": "ip15", "name": "iPhone 15", "brand": "Apple", "price": 999},
                {"id": "noname", "name": "Budget Phone", "price": 149}
            ]"#,
        );

        let samsung = source.fetch_by_brand("Samsung").await.unwrap();
        let ids: Vec<&str> = samsung.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["s23", "a54"]);

        // Unknown brand is an empty list, not an error.
        assert!(source.fetch_by_brand("Nokia").await.unwrap().is_empty());

        // A missing brand behaves as the empty string and only matches that.
        let brandless = source.fetch_by_brand("").await.unwrap();
        assert_eq!(brandless.len(), 1);
        assert_eq!(brandless[0].id, "noname");
    }

    #[tokio::test]
    async fn fetch_by_id_finds_and_misses() {
        let (_dir, source) = write_source(
            r#"[
                {"id": "a", "name": "A", "price": 100},
                {"id": "b", "name": "B", "price": 200}
            ]"#,
        );
        assert_eq!(source.fetch_by_id("b").await.unwrap().name, "B");
        assert!(matches!(
            source.fetch_by_id("zzz").await,
            Err(StorefrontError::NotFound(_))
        ));
    }
}
