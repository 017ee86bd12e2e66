// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.

use dioxus::prelude::*;

use crate::pages::attendees::{EventAttendees, Home};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/events/:event_id/attendees")]
    EventAttendees { event_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Simple 404 page component.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            div { class: "not-found-body",
                h1 { "404" }
                p { "Página não encontrada: /{path}" }
                a { href: "/", "Voltar ao início" }
            }
        }
    }
}
