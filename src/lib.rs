//! BatchFlow Core Library
//!
//! This library provides the core functionality for the BatchFlow
//! application: merging beverage catalog records from multiple sources,
//! persisting the kanban-style workflow state, and the headless command
//! layer a shell (CLI or GUI) drives.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
