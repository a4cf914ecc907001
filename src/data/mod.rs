//! Dataset loading and representation.
//!
//! This module handles loading the penguin measurement dataset and exposing
//! it as an immutable, shareable table of records.

mod dataset;
mod record;

pub use dataset::{load_dataset, load_dataset_from_path, AttributeStats, Dataset};
pub use record::{Attribute, Island, PenguinRecord, Sex, Species};
