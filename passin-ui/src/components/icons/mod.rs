// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline SVG icons (lucide outlines).

pub mod chevrons;
pub mod ellipsis;
pub mod search;

use dioxus::prelude::*;

/// Shared `<svg>` frame for 24x24 stroke icons.
#[component]
pub(crate) fn IconFrame(
    #[props(default = 16)] size: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}
