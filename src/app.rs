//! Root application module.
//!
//! Contains the main App component, AppContext definition, ViewerState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Workbench;
use crate::config::viewer_config;
use crate::core::{Resizer, Sidebar, Surface, Viewer};
use crate::models::{CodeContent, PaneWidths, Project};
use crate::utils::{HttpFetcher, dom};

// ============================================================================
// ViewerState
// ============================================================================

/// Display state of the viewer, held in Leptos signals.
///
/// This is the browser [`Surface`]: the controller writes here and the
/// components render from here.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ViewerState {
    /// Content of the code pane.
    pub code: RwSignal<CodeContent>,
    /// Source files and the active entry.
    pub sidebar: RwSignal<Sidebar>,
    /// Current `src` of the PDF frame.
    pub pdf_src: RwSignal<Option<String>>,
    /// Whether the PDF error placeholder is shown (frame hidden).
    pub pdf_error: RwSignal<bool>,
    /// Download link target; `None` hides the link.
    pub download: RwSignal<Option<String>>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            code: RwSignal::new(CodeContent::Empty),
            sidebar: RwSignal::new(Sidebar::default()),
            pdf_src: RwSignal::new(None),
            pdf_error: RwSignal::new(false),
            download: RwSignal::new(None),
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ViewerState {
    fn set_code(&self, content: CodeContent) {
        self.code.set(content);
    }

    fn set_files(&self, files: Vec<String>) {
        self.sidebar.set(Sidebar::new(files));
    }

    fn mark_active(&self, index: usize) {
        self.sidebar.update(|s| {
            s.activate(index);
        });
    }

    fn set_pdf_source(&self, url: String) {
        self.pdf_src.set(Some(url));
    }

    fn show_pdf_error(&self, visible: bool) {
        self.pdf_error.set(visible);
    }

    fn set_download(&self, href: Option<String>) {
        self.download.set(href);
    }
}

/// The controller as wired in the browser.
pub type AppViewer = Viewer<HttpFetcher, ViewerState>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; access it from any child
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Display state written by the controller.
    pub state: ViewerState,

    /// Controller bound to this page's project.
    pub viewer: StoredValue<AppViewer>,

    /// Separator drag state.
    pub resizer: RwSignal<Resizer>,

    /// Pane widths fixed by the last drag (`None` = flexible layout).
    pub widths: RwSignal<Option<PaneWidths>>,
}

impl AppContext {
    /// Creates the context for the project named in the page location.
    pub fn new() -> Self {
        let config = viewer_config();
        let project = Project::from_pathname(&dom::pathname(), &config.projects_base);

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!(
                "Viewing project '{}' from {}",
                project.id(),
                project.base_path()
            )
            .into(),
        );

        let state = ViewerState::new();
        let viewer = Viewer::new(project, config.clone(), HttpFetcher, state);

        Self {
            state,
            viewer: StoredValue::new(viewer),
            resizer: RwSignal::new(Resizer::new(config.layout.clone())),
            widths: RwSignal::new(None),
        }
    }

    /// The project being viewed.
    pub fn project(&self) -> Project {
        self.viewer.with_value(|v| v.project().clone())
    }

    /// Run the initial directory listing.
    pub fn start(&self) {
        let viewer = self.viewer.get_value();
        spawn_local(async move {
            viewer.load_listing().await;
        });
    }

    /// Handle a click on sidebar entry `index`.
    pub fn select_file(&self, index: usize, name: String) {
        let viewer = self.viewer.get_value();
        spawn_local(async move {
            viewer.select(index, &name).await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the directory listing once
/// - Renders the Workbench inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.start();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e1e;
                    color: #d4d4d4;
                    font-family: monospace;
                ">
                    <h1 style="color: #f48771; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #f48771; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #0e639c;
                            color: white;
                            border: none;
                            padding: 0.5rem 1.5rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Workbench />
        </ErrorBoundary>
    }
}
