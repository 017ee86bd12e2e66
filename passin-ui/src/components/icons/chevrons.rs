// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use super::IconFrame;

#[component]
pub fn ChevronLeftIcon() -> Element {
    rsx! {
        IconFrame { path { d: "m15 18-6-6 6-6" } }
    }
}

#[component]
pub fn ChevronRightIcon() -> Element {
    rsx! {
        IconFrame { path { d: "m9 18 6-6-6-6" } }
    }
}

#[component]
pub fn ChevronsLeftIcon() -> Element {
    rsx! {
        IconFrame {
            path { d: "m11 17-5-5 5-5" }
            path { d: "m18 17-5-5 5-5" }
        }
    }
}

#[component]
pub fn ChevronsRightIcon() -> Element {
    rsx! {
        IconFrame {
            path { d: "m6 17 5-5-5-5" }
            path { d: "m13 17 5-5-5-5" }
        }
    }
}
