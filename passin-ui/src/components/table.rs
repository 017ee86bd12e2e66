// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin wrappers over `<table>` elements so every table shares one look.

use dioxus::prelude::*;

#[component]
pub fn Table(children: Element) -> Element {
    rsx! {
        div { class: "table-container",
            table { class: "table", {children} }
        }
    }
}

#[component]
pub fn TableRow(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        tr { class: "table-row {class}", {children} }
    }
}

#[component]
pub fn TableHeader(
    /// Fixed column width in pixels.
    #[props(default)]
    width: Option<u32>,
    children: Element,
) -> Element {
    let style = width.map(|w| format!("width: {w}px;")).unwrap_or_default();
    rsx! {
        th { class: "table-header", style: "{style}", {children} }
    }
}

#[component]
pub fn TableCell(
    #[props(default)] class: String,
    #[props(default = 1)] colspan: u32,
    children: Element,
) -> Element {
    rsx! {
        td { class: "table-cell {class}", colspan: "{colspan}", {children} }
    }
}
