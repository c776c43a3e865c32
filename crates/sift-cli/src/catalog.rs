//! Product catalogs: the built-in sample and files on disk.

use std::path::Path;

use sift::{Color, Product, Size};
use tracing::debug;

use crate::error::CliError;

/// File formats a catalog can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(CliError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The sample catalog used when no file is given.
pub fn builtin() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Red, Size::Small),
        Product::new("Tree", Color::Green, Size::Medium),
        Product::new("Car", Color::Blue, Size::Large),
    ]
}

/// Parses a list of products.
pub fn parse(content: &str, format: CatalogFormat) -> Result<Vec<Product>, CliError> {
    let products = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(products)
}

/// Reads and parses the catalog at `path`.
pub fn load(path: &Path) -> Result<Vec<Product>, CliError> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let products = parse(&content, format)?;
    debug!(path = %path.display(), count = products.len(), "loaded catalog");
    Ok(products)
}
