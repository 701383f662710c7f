//! Ingestion and cleaning of transaction exports
//!
//! Reads raw CSV rows and normalizes them into `TransactionRecord`s: rows
//! missing a required field are dropped, strings are trimmed, the province
//! is the first segment of the composite region string, the enterprise
//! type is truncated at the first comma, and monetary values are parsed
//! with thousands separators removed (unparseable values become zero).

use crate::graph::{Industry, Province};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while reading a transaction export
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;

/// One cleaned leasing transaction.
///
/// Produced here once and never mutated afterwards, except for the
/// ordinal `value_bin` label attached during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Lessee party identifier
    pub lessee: String,
    /// Lessor party identifier
    pub lessor: String,
    /// Province of the lessee
    pub lessee_province: Province,
    /// Province of the lessor
    pub lessor_province: Province,
    /// First-level industry of the lessee
    pub industry: Industry,
    /// Leased property value, non-negative
    pub property_value: f64,
    /// Enterprise type of the lessor (binning label)
    pub lessor_kind: String,
    /// Ordinal value bin assigned during training, 1-based
    pub value_bin: Option<u32>,
}

/// Raw CSV row as exported; every field arrives as text
#[derive(Debug, Deserialize)]
struct RawRecord {
    lessee: String,
    lessor: String,
    lessee_region: String,
    lessor_region: String,
    industry: String,
    property_value: String,
    lessor_kind: String,
}

/// Load and clean a CSV transaction export.
pub fn load_records(path: impl AsRef<Path>) -> IngestResult<Vec<TransactionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut total = 0usize;
    for row in reader.deserialize::<RawRecord>() {
        total += 1;
        match clean(row?) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    info!(
        path = %path.as_ref().display(),
        total,
        kept = records.len(),
        dropped,
        "transaction records loaded"
    );
    Ok(records)
}

/// Normalize one raw row; `None` when a required field is missing.
fn clean(raw: RawRecord) -> Option<TransactionRecord> {
    let required = [
        raw.lessee.trim(),
        raw.lessor.trim(),
        raw.lessee_region.trim(),
        raw.lessor_region.trim(),
        raw.industry.trim(),
        raw.property_value.trim(),
        raw.lessor_kind.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return None;
    }

    let lessor_kind = raw
        .lessor_kind
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(TransactionRecord {
        lessee: raw.lessee.trim().to_string(),
        lessor: raw.lessor.trim().to_string(),
        lessee_province: province_of(&raw.lessee_region),
        lessor_province: province_of(&raw.lessor_region),
        industry: Industry::new(raw.industry.trim()),
        property_value: parse_value(&raw.property_value),
        lessor_kind,
        value_bin: None,
    })
}

/// First segment of a composite `province-city-...` region string
fn province_of(region: &str) -> Province {
    Province::new(region.trim().split('-').next().unwrap_or_default().trim())
}

/// Parse a monetary value, stripping thousands separators; unparseable
/// input counts as zero.
fn parse_value(field: &str) -> f64 {
    field
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .unwrap_or(0.0)
}
