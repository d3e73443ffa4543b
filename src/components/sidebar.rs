//! Source file list.
//!
//! One entry per source file in listing order. Clicking an entry makes it
//! the only active one and reloads its content, even if it was already
//! active.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sidebar = ctx.state.sidebar;

    let entries = Signal::derive(move || {
        sidebar.with(|s| s.files().iter().cloned().enumerate().collect::<Vec<_>>())
    });

    view! {
        <ul id="file-list" class=css::list role="listbox" aria-label="Source files">
            <For
                each=move || entries.get()
                key=|(index, name)| (*index, name.clone())
                children=move |(index, name)| {
                    view! { <FileListItem index=index name=name /> }
                }
            />
        </ul>
    }
}

#[component]
fn FileListItem(index: usize, name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sidebar = ctx.state.sidebar;

    let is_active = Signal::derive(move || sidebar.with(|s| s.is_active(index)));

    let item_class = move || {
        if is_active.get() {
            format!("{} {}", css::item, css::active)
        } else {
            css::item.to_string()
        }
    };

    let name_for_click = name.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.select_file(index, name_for_click.clone());
    };

    let title = name.clone();
    view! {
        <li
            class=item_class
            on:click=handle_click
            role="option"
            title=title
            aria-selected=move || is_active.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE_TEXT /></span>
            <span class=css::name>{name}</span>
        </li>
    }
}
