//! Catalog sources.
//!
//! The catalog is fetched asynchronously exactly once at startup; this is the
//! board's only suspend point. A failed fetch is logged by the caller and
//! never retried — the board simply stays empty.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::Catalog;
use crate::parser::parse_catalog_str;

/// A place a catalog document can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Fetch and parse the catalog.
    async fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// Catalog stored as a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::Unreachable {
                path: self.path.display().to_string(),
                source: e,
            }
        })?;
        parse_catalog_str(&content)
    }
}

/// In-memory catalog document, for tests and scaffolding.
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        parse_catalog_str(&self.content)
    }
}
