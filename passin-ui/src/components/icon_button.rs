// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn IconButton(
    /// Render without the filled background (row actions).
    #[props(default)]
    transparent: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    #[props(default)] class: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = if transparent {
        "icon-button transparent"
    } else {
        "icon-button"
    };

    rsx! {
        button {
            class: "{variant} {class}",
            r#type: "button",
            title: "{title}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
