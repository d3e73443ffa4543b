//! Source code pane.
//!
//! Renders the active file through the highlighter; inline messages (load
//! errors, empty listing) are shown as plain text in the same place.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::highlight::Highlighter;
use crate::models::CodeContent;

stylance::import_crate_style!(css, "src/components/code.module.css");

#[component]
pub fn CodePane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let code = ctx.state.code;

    view! {
        <div class=format!("{} scrollbar-thin", css::pane)>
            {move || match code.get() {
                CodeContent::Empty => view! {
                    <div class=css::loading>"Loading..."</div>
                }.into_any(),
                CodeContent::Source { text, grammar, .. } => {
                    match Highlighter::highlight_html(&text, &grammar) {
                        Some(html) => view! {
                            <div id="code" class=format!("{} {}", css::code, grammar.class_name()) inner_html=html />
                        }.into_any(),
                        None => view! {
                            <pre class=css::code>
                                <code id="code" class=grammar.class_name()>{text}</code>
                            </pre>
                        }.into_any(),
                    }
                }
                CodeContent::Message(message) => view! {
                    <pre class=css::message>
                        <code id="code">{message}</code>
                    </pre>
                }.into_any(),
            }}
        </div>
    }
}
