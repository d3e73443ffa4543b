//! Page layout.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header                                       │
//! ├─────────┬──────────────┬─┬───────────────────┤
//! │ Sidebar │ Source pane  │║│ Preview pane      │
//! └─────────┴──────────────┴─┴───────────────────┘
//! ```
//!
//! The separator starts a drag on mouse down; window-level mouse move and
//! mouse up listeners resize the panes and end the drag.

use leptos::ev;
use leptos::prelude::*;
use leptos_use::use_event_listener;

use super::code::CodePane;
use super::header::Header;
use super::pdf::PdfPane;
use super::sidebar::FileList;
use crate::app::AppContext;
use crate::core::Resizer;
use crate::models::PaneWidths;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/workbench.module.css");

/// Full viewer layout with a draggable separator between the panes.
#[component]
pub fn Workbench() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let resizer = ctx.resizer;
    let widths = ctx.widths;

    let main_ref = NodeRef::<leptos::html::Main>::new();
    let sidebar_ref = NodeRef::<leptos::html::Aside>::new();
    let dragbar_ref = NodeRef::<leptos::html::Div>::new();

    let handle_mousedown = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        resizer.update(Resizer::press);
        dom::set_body_cursor("ew-resize");
    };

    let _ = use_event_listener(window(), ev::mousemove, move |ev| {
        if !resizer.with_untracked(Resizer::is_dragging) {
            return;
        }
        let (Some(main), Some(sidebar), Some(dragbar)) = (
            main_ref.get_untracked(),
            sidebar_ref.get_untracked(),
            dragbar_ref.get_untracked(),
        ) else {
            return;
        };
        let metrics = dom::measure_layout(&main, &sidebar, &dragbar);
        let pointer_x = f64::from(ev.client_x());
        if let Some(next) = resizer.with_untracked(|r| r.pointer_move(pointer_x, &metrics)) {
            widths.set(Some(next));
        }
    });

    let _ = use_event_listener(window(), ev::mouseup, move |_| {
        if resizer.try_update(Resizer::release).unwrap_or(false) {
            dom::set_body_cursor("");
        }
    });

    let is_dragging = Signal::derive(move || resizer.with(Resizer::is_dragging));

    let editor_style = move || {
        widths
            .get()
            .map(|w| PaneWidths::fixed_style(w.source))
            .unwrap_or_default()
    };
    let preview_style = move || {
        widths
            .get()
            .map(|w| PaneWidths::fixed_style(w.preview))
            .unwrap_or_default()
    };

    view! {
        <div class=css::workbench>
            <Header />

            <main node_ref=main_ref class=css::main>
                <aside node_ref=sidebar_ref class=css::sidebar>
                    <FileList />
                </aside>

                <section class=css::editor style=editor_style>
                    <CodePane />
                </section>

                <div
                    node_ref=dragbar_ref
                    id="dragbar"
                    class=move || {
                        if is_dragging.get() {
                            format!("{} {}", css::dragbar, css::dragging)
                        } else {
                            css::dragbar.to_string()
                        }
                    }
                    role="separator"
                    aria-orientation="vertical"
                    on:mousedown=handle_mousedown
                ></div>

                <section class=css::previewContainer style=preview_style>
                    <PdfPane />
                </section>
            </main>
        </div>
    }
}
