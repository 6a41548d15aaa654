use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ScoreError};
use crate::models::{Product, ProductRecord, ScoredProduct};

/// File formats accepted for batch input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(ScoreError::InvalidInput(format!(
                "unsupported file type: {} (expected .csv or .json)",
                path.display()
            ))),
        }
    }
}

/// Load products from a CSV or JSON file.
///
/// Fails on the first row whose category is not recognised.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let records: Vec<ProductRecord> = match FileFormat::from_path(path)? {
        FileFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
            rdr.deserialize::<ProductRecord>()
                .collect::<std::result::Result<Vec<_>, csv::Error>>()?
        }
        FileFormat::Json => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
    };
    debug!(rows = records.len(), path = %path.display(), "read product records");

    let products = records
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>>>()?;

    info!(count = products.len(), "loaded products");
    Ok(products)
}

/// Write scored products to a CSV or JSON file.
pub fn save_results<P: AsRef<Path>>(path: P, results: &[ScoredProduct]) -> Result<()> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Csv => {
            let mut wtr = csv::Writer::from_path(path)?;
            for result in results {
                wtr.serialize(result)?;
            }
            wtr.flush()?;
        }
        FileFormat::Json => {
            let json = serde_json::to_string_pretty(results)?;
            fs::write(path, json)?;
        }
    }
    info!(count = results.len(), path = %path.display(), "wrote results");
    Ok(())
}
