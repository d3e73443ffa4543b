//! Viewer controller.
//!
//! Drives the directory lister, source viewer, sidebar and PDF viewer
//! against two seams:
//!
//! - [`Fetcher`] - text retrieval over HTTP
//! - [`Surface`] - the display primitives ("set code", "mark active", ...)
//!
//! The browser implementations live in [`crate::utils::HttpFetcher`] and
//! [`crate::app::ViewerState`]; tests substitute in-memory versions.
//!
//! Fetches are never cancelled. If two source files are requested in quick
//! succession the later response wins, whichever file it belongs to.

use crate::config::{ViewerConfig, messages};
use crate::core::error::FetchError;
use crate::core::listing::{classify, parse_listing};
use crate::models::{ClassifiedFiles, CodeContent, Project};

/// Text retrieval over HTTP.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// GET `url` and return the body. Non-2xx statuses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Display primitives the controller writes to.
pub trait Surface {
    /// Replace the code area content.
    fn set_code(&self, content: CodeContent);
    /// Replace the sidebar entries; the first becomes active.
    fn set_files(&self, files: Vec<String>);
    /// Mark exactly one sidebar entry active.
    fn mark_active(&self, index: usize);
    /// Point the PDF frame at `url`.
    fn set_pdf_source(&self, url: String);
    /// Show the PDF error placeholder (and hide the frame), or the reverse.
    fn show_pdf_error(&self, visible: bool);
    /// Set the download link target; `None` hides the link.
    fn set_download(&self, href: Option<String>);
}

/// Project viewer bound to a fetcher and a surface.
#[derive(Clone)]
pub struct Viewer<F, S> {
    project: Project,
    config: ViewerConfig,
    fetcher: F,
    surface: S,
}

impl<F: Fetcher, S: Surface> Viewer<F, S> {
    pub fn new(project: Project, config: ViewerConfig, fetcher: F, surface: S) -> Self {
        Self {
            project,
            config,
            fetcher,
            surface,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Fetch the directory listing and populate every pane.
    pub async fn load_listing(&self) {
        let url = self.project.listing_url();
        match self.fetcher.fetch_text(&url).await {
            Ok(html) => {
                let files = classify(parse_listing(&html), &self.config.source_extensions);
                self.show_files(files).await;
            }
            Err(err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("Listing {} failed: {}", url, err).into());
                self.surface.set_code(CodeContent::Message(format!(
                    "{}{}",
                    messages::LISTING_ERROR_PREFIX,
                    err
                )));
                self.surface.show_pdf_error(true);
            }
        }
    }

    /// Populate the sidebar and PDF pane from classified files, then load
    /// the first source file.
    pub async fn show_files(&self, files: ClassifiedFiles) {
        if files.sources.is_empty() {
            self.surface
                .set_code(CodeContent::Message(messages::NO_SOURCE_FILES.to_string()));
        }
        self.surface.set_files(files.sources.clone());

        match files.select_pdf(&self.config.pdf_preference) {
            Some(pdf) => {
                self.load_pdf(pdf);
                self.surface.set_download(Some(self.project.file_url(pdf)));
            }
            None => {
                self.surface.show_pdf_error(true);
                self.surface.set_download(None);
            }
        }

        if let Some(first) = files.sources.first() {
            self.load_source(first).await;
        }
    }

    /// Sidebar click: mark the entry active and (re)load its file.
    pub async fn select(&self, index: usize, name: &str) {
        self.surface.mark_active(index);
        self.load_source(name).await;
    }

    /// Fetch a source file into the code area. Failures are shown inline.
    pub async fn load_source(&self, name: &str) {
        let url = self.project.file_url(name);
        let content = match self.fetcher.fetch_text(&url).await {
            Ok(text) => CodeContent::source(name, text),
            Err(err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&format!("Loading {} failed: {}", url, err).into());
                CodeContent::Message(format!("{}{}", messages::FILE_ERROR_PREFIX, err))
            }
        };
        self.surface.set_code(content);
    }

    /// Point the PDF frame at a project file.
    pub fn load_pdf(&self, name: &str) {
        self.surface.show_pdf_error(false);
        self.surface.set_pdf_source(self.project.file_url(name));
    }

    /// The PDF frame finished loading.
    pub fn pdf_loaded(&self) {
        self.surface.show_pdf_error(false);
    }

    /// The PDF frame reported an error.
    pub fn pdf_failed(&self) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&"PDF frame failed to load".into());
        self.surface.show_pdf_error(true);
    }
}
