//! PDF preview pane.
//!
//! The browser renders the PDF inside an `<iframe>`. Its `load` and `error`
//! events toggle between the frame and the error placeholder.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;

stylance::import_crate_style!(css, "src/components/pdf.module.css");

#[component]
pub fn PdfPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let pdf_src = ctx.state.pdf_src;
    let pdf_error = ctx.state.pdf_error;

    view! {
        <div class=css::pane>
            <iframe
                id="pdf"
                class=css::frame
                title="PDF preview"
                src=move || pdf_src.get()
                style:display=move || if pdf_error.get() { "none" } else { "block" }
                on:load=move |_| ctx.viewer.with_value(|v| v.pdf_loaded())
                on:error=move |_| ctx.viewer.with_value(|v| v.pdf_failed())
            />
            <div
                id="pdf-error"
                class=css::placeholder
                style:display=move || if pdf_error.get() { "flex" } else { "none" }
            >
                <span class=css::placeholderIcon><Icon icon=ic::FILE_PDF /></span>
                <p>{messages::PDF_UNAVAILABLE}</p>
            </div>
        </div>
    }
}
