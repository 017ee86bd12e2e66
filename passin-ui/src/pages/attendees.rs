// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attendee pages: the configured default event and any event by id.

use dioxus::prelude::*;

use crate::components::attendee_list::AttendeeList;
use crate::components::config_error::ConfigError;
use crate::constants::default_event_id;

/// `/`: attendees of the event named in `window.__APP_CONFIG.eventId`.
#[component]
pub fn Home() -> Element {
    match default_event_id() {
        Ok(event_id) => rsx! {
            EventAttendees { event_id }
        },
        Err(e) => rsx! {
            ConfigError { message: e }
        },
    }
}

/// `/events/:event_id/attendees`
#[component]
pub fn EventAttendees(event_id: String) -> Element {
    rsx! {
        main { class: "page",
            AttendeeList { key: "{event_id}", event_id: event_id.clone() }
        }
    }
}
