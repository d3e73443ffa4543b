//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryEntry`], [`FileKind`], [`ClassifiedFiles`] - Directory listing
//! - [`Project`] - Project identity and URLs
//! - [`CodeContent`], [`Grammar`] - Code pane content
//! - [`LayoutMetrics`], [`PaneWidths`] - Split-pane geometry

mod code;
mod layout;
mod listing;
mod project;

pub use code::{CodeContent, Grammar};
pub use layout::{LayoutMetrics, PaneWidths};
pub use listing::{ClassifiedFiles, DirectoryEntry, FileKind};
pub use project::Project;
