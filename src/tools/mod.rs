//! The tools module provides the helper pieces around the huffzip codec.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - files: Reading input files, naming and writing output files.
//! - freq_count: Frequency count of the input text.
//!
pub mod cli;
pub mod files;
pub mod freq_count;
