//! In-memory indexing of Market1501-style person re-identification datasets.

pub mod common;
pub mod config;
pub mod dataset;

pub use config::{Config, DatasetConfig};
pub use dataset::{DatasetSummary, ImageDataset, ImageRecord, Market1501, SplitStats, Tracklet};
