//! Biome configurator core library.
//!
//! Finds directories holding legacy ESLint/Prettier configs, migrates each
//! one to `biome.json` through the external `biome migrate` command, and
//! patches the result with two fixed defaults.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Optional config file discovery and effective settings.
//! - `scan`: Directory walk with pruning and filename classification.
//! - `migrate`: Per-directory migration and the `MigrationRunner` seam.
//! - `patch`: JSON read-modify-write of `biome.json`.
//! - `models`: Scan result data models.
//! - `output`: Human-readable progress printing.
//! - `errors`: Error type shared across modules.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod errors;
pub mod migrate;
pub mod models;
pub mod output;
pub mod patch;
pub mod scan;
pub mod utils;

pub use errors::{Error, Result};
