//! HWIO Convert
//!
//! Converts hardware-initialization traces into boot-loader register
//! command arrays, one array per hardware engine.
//!
//! This crate provides the core implementation for the
//! `hwio-convert` CLI tool.
//!
//! ## Pipeline
//!
//! 1. [`parser::filter_blocks`] keeps only the known `Begin:`/`End:` blocks
//! 2. [`parser::classify`] splits them into per-engine buckets
//! 3. [`converter::convert_lines`] turns each bucket into an `ncr_command_t` array
//! 4. [`output`] writes the `.trace` and `.c` files

pub mod commands;
pub mod converter;
pub mod output;
pub mod parser;
pub mod utils;
