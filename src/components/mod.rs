//! UI components built with Leptos.
//!
//! - [`Workbench`] - Page layout (header, sidebar, split panes)
//! - [`header`] - Project title and outbound actions
//! - [`sidebar`] - Source file list
//! - [`code`] - Highlighted source pane
//! - [`pdf`] - PDF preview pane
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod code;
pub mod header;
pub mod icons;
pub mod pdf;
pub mod sidebar;
mod workbench;

pub use workbench::Workbench;
