// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use super::IconFrame;

#[component]
pub fn EllipsisIcon() -> Element {
    rsx! {
        IconFrame {
            circle { cx: "12", cy: "12", r: "1" }
            circle { cx: "19", cy: "12", r: "1" }
            circle { cx: "5", cy: "12", r: "1" }
        }
    }
}
