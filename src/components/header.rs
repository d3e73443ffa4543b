//! Page header.
//!
//! Shows the project identifier and the outbound actions: open the project
//! in the external editor, and download the selected PDF.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, viewer_config};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar with project title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let project = ctx.project();
    let project_id = project.id().to_string();
    let editor_url = project.editor_url(&viewer_config().editor_url);

    let download = ctx.state.download;

    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::appName>{APP_NAME}</span>
                <span class=css::separator>"/"</span>
                <span class=css::projectId id="project-id">{project_id}</span>
            </div>

            <div class=css::actions>
                <button
                    id="open-in-editor-button"
                    class=css::actionButton
                    title="Open in editor"
                    on:click=move |_| dom::open_in_new_tab(&editor_url)
                >
                    <Icon icon=ic::EDIT />
                    <span class=css::label>"Open in editor"</span>
                </button>

                <a
                    id="download-pdf-button"
                    class=css::actionButton
                    title="Download PDF"
                    href=move || download.get().unwrap_or_default()
                    download=""
                    style:display=move || if download.get().is_some() { "" } else { "none" }
                >
                    <Icon icon=ic::DOWNLOAD />
                    <span class=css::label>"Download PDF"</span>
                </a>
            </div>
        </header>
    }
}
