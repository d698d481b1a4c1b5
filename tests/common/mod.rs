//! Common test utilities for wayfind integration tests
//!
//! This module provides shared helpers for building floor plans and
//! reference answers to compare routes against.

#![allow(dead_code)]

pub mod graph_builder;
pub mod metrics;

pub use graph_builder::{
    abcde_plan, abcde_snapshot, random_document, random_plan, sample_data_dir, sample_snapshot,
    RandomGraphConfig,
};
pub use metrics::{all_pairs, independent_path_weight, AllPairs};
