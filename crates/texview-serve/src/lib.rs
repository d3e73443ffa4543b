//! Development server for the texview viewer.
//!
//! Serves the built viewer for `/project/<id>` pages and the project
//! directories under `/projects/<id>/` with generated directory indexes,
//! which is what the viewer fetches its file list from.

pub mod index;
pub mod route;
pub mod server;

pub use route::{Roots, Route};
pub use server::{ServeOptions, run};
