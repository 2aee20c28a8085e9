//! Service layer for business logic.
//!
//! This module contains the components that own file I/O and state:
//! the library aggregator, the workflow store, window-geometry
//! persistence, and the style catalog loader.

pub mod library;
pub(crate) mod persist;
pub mod styles;
pub mod window;
pub mod workflow;

// Re-export commonly used types and functions
pub use library::LibraryAggregator;
pub use styles::load_style_catalog;
pub use window::WindowGeometry;
pub use workflow::WorkflowStore;
