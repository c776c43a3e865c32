//! Output mode control.
//!
//! [`OutputMode`] determines how matches are printed: one display line per
//! product, or the matched records serialized as JSON, YAML or CSV.

use serde::Serialize;
use sift::{Attribute, Product};

use crate::error::CliError;

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// One ` - <product>` line per match
    #[default]
    Text,
    /// Serialize matches as JSON
    Json,
    /// Serialize matches as YAML
    Yaml,
    /// Serialize matches as CSV with a header row
    Csv,
}

/// One attribute and its allowed values, for the `values` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeListing {
    pub attribute: &'static str,
    pub values: Vec<&'static str>,
}

impl AttributeListing {
    /// Lists every attribute in the schema.
    pub fn all() -> Vec<AttributeListing> {
        Attribute::ALL
            .into_iter()
            .map(|attribute| AttributeListing {
                attribute: attribute.as_str(),
                values: attribute.values().into_iter().map(|v| v.as_str()).collect(),
            })
            .collect()
    }
}

/// Column order for product CSV output, matching the struct's field order.
const PRODUCT_HEADERS: [&str; 3] = ["name", "color", "size"];

/// Renders matched products.
///
/// CSV output always starts with the header row, even when nothing matched.
pub fn render_products(products: &[&Product], mode: OutputMode) -> Result<String, CliError> {
    match mode {
        OutputMode::Text => Ok(products
            .iter()
            .map(|p| format!(" - {}", p))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputMode::Csv => to_csv(&PRODUCT_HEADERS, products),
        _ => serialize_structured(&products, mode),
    }
}

/// Renders the attribute listing.
pub fn render_listing(listing: &[AttributeListing], mode: OutputMode) -> Result<String, CliError> {
    match mode {
        OutputMode::Text => Ok(listing
            .iter()
            .map(|l| format!("{}: {}", l.attribute, l.values.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputMode::Csv => {
            // CSV cannot hold a nested list, so join the values into one cell
            let rows: Vec<(&str, String)> = listing
                .iter()
                .map(|l| (l.attribute, l.values.join("|")))
                .collect();
            to_csv(&["attribute", "values"], &rows)
        }
        _ => serialize_structured(&listing, mode),
    }
}

/// Serializes data to a document format (JSON or YAML).
///
/// Text and CSV are row-oriented and rendered by their callers.
fn serialize_structured<T: Serialize + ?Sized>(
    data: &T,
    mode: OutputMode,
) -> Result<String, CliError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Text | OutputMode::Csv => Err(CliError::NotStructured(mode)),
    }
}

/// Writes `headers` followed by one serialized row per record.
fn to_csv<R: Serialize>(headers: &[&str], rows: &[R]) -> Result<String, CliError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(headers)
        .map_err(|e| CliError::Csv(e.to_string()))?;
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| CliError::Csv(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| CliError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Csv(e.to_string()))
}
