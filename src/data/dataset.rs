//! The loaded dataset and its summary statistics.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::data::{Attribute, PenguinRecord, Species};
use crate::error::{Result, RookeryError};

/// Dataset bundled with the binary.
const EMBEDDED_DATA: &str = include_str!("../../assets/penguins.json");

/// Summary statistics for one measurement column, computed over the
/// non-missing values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeStats {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Mean value.
    pub mean: f64,
    /// Standard deviation.
    pub std: f64,
    /// Count of non-missing values.
    pub valid_count: usize,
}

/// The immutable, loaded dataset.
///
/// Records are fixed after load; the dataset is shared read-only across
/// sessions behind an [`Arc`]. Per-attribute statistics are precomputed at
/// load time.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<PenguinRecord>,
    stats: HashMap<Attribute, AttributeStats>,
}

impl Dataset {
    fn from_records(records: Vec<PenguinRecord>) -> Self {
        let stats = Attribute::ALL
            .iter()
            .filter_map(|&attr| compute_stats(&records, attr).map(|s| (attr, s)))
            .collect();
        Self { records, stats }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in load order.
    pub fn records(&self) -> &[PenguinRecord] {
        &self.records
    }

    /// Get a record by row index.
    pub fn record(&self, index: usize) -> Option<&PenguinRecord> {
        self.records.get(index)
    }

    /// Number of records for a species.
    pub fn species_count(&self, species: Species) -> usize {
        self.records.iter().filter(|r| r.species == species).count()
    }

    /// Precomputed statistics for a measurement column, if any value was
    /// present.
    pub fn stats(&self, attr: Attribute) -> Option<&AttributeStats> {
        self.stats.get(&attr)
    }
}

fn compute_stats(records: &[PenguinRecord], attr: Attribute) -> Option<AttributeStats> {
    let values: Vec<f64> = records.iter().filter_map(|r| attr.value_of(r)).collect();
    if values.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let mean = sum / values.len() as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Some(AttributeStats {
        min,
        max,
        mean,
        std: var.sqrt(),
        valid_count: values.len(),
    })
}

/// Load the embedded penguin dataset.
///
/// Called once at startup; a failure here is fatal to startup.
pub fn load_dataset() -> Result<Arc<Dataset>> {
    let records: Vec<PenguinRecord> = serde_json::from_str(EMBEDDED_DATA)?;
    tracing::info!(records = records.len(), "embedded dataset loaded");
    Ok(Arc::new(Dataset::from_records(records)))
}

/// Load a dataset from a JSON file on disk.
pub fn load_dataset_from_path(path: &Path) -> Result<Arc<Dataset>> {
    let contents = std::fs::read_to_string(path).map_err(|source| RookeryError::DatasetLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<PenguinRecord> = serde_json::from_str(&contents)?;
    tracing::info!(records = records.len(), path = %path.display(), "dataset loaded");
    Ok(Arc::new(Dataset::from_records(records)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_expected_shape() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.len(), 344);
        assert_eq!(dataset.species_count(Species::Adelie), 152);
        assert_eq!(dataset.species_count(Species::Gentoo), 124);
        assert_eq!(dataset.species_count(Species::Chinstrap), 68);
    }

    #[test]
    fn statistics_are_precomputed_for_all_columns() {
        let dataset = load_dataset().unwrap();
        for attr in Attribute::ALL {
            let stats = dataset.stats(attr).unwrap();
            assert!(stats.valid_count > 0 && stats.valid_count <= dataset.len());
            assert!(stats.min <= stats.mean && stats.mean <= stats.max);
            assert!(stats.std >= 0.0);
        }
        // Two rows in the raw data are missing every measurement.
        let mass = dataset.stats(Attribute::BodyMass).unwrap();
        assert_eq!(mass.valid_count, 342);
    }

    #[test]
    fn stats_absent_for_all_missing_column() {
        let records = vec![PenguinRecord {
            species: Species::Adelie,
            island: crate::data::Island::Dream,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
            year: 2008,
        }];
        let dataset = Dataset::from_records(records);
        assert!(dataset.stats(Attribute::BillLength).is_none());
    }
}
