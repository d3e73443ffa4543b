//! Core logic of the viewer.
//!
//! This module provides:
//! - [`listing`] directory index parsing and file classification
//! - [`highlight`] syntect-based source highlighting
//! - [`Sidebar`] active-file selection
//! - [`Resizer`] and [`resize::compute_widths`] for the split layout
//! - [`Viewer`] tying fetches to the display [`Surface`]

pub mod error;
pub mod highlight;
pub mod listing;
pub mod resize;
mod sidebar;
pub mod viewer;

pub use resize::Resizer;
pub use sidebar::Sidebar;
pub use viewer::{Fetcher, Surface, Viewer};
