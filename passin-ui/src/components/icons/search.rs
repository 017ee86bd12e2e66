// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use super::IconFrame;

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        IconFrame { class: "search-icon",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}
