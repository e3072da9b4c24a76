//! Trace segmentation.
//!
//! This module handles:
//! - Engine identities and their block markers
//! - Filtering the raw trace down to known blocks
//! - Classifying the filtered trace into per-engine buckets
//! - The optional tree file data source

pub mod classifier;
pub mod engine;
pub mod filter;
pub mod tree;

// Re-export main types
pub use classifier::{capture_all, classify, classify_from, EngineBuckets, ScanState};
pub use engine::{Engine, PROCESSING_ORDER};
pub use filter::filter_blocks;
pub use tree::{load_tree, TreeData};
