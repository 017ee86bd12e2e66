/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Response types for the pass.in events API.
//!
//! Unlike an enveloped API, the attendees endpoint returns its payload at the
//! top level:
//!
//! ```json
//! { "attendees": [ { "id": 1, "name": "...", ... } ], "total": 42 }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendee identifier.
///
/// The server has shipped both numeric and string ids, so either form is
/// accepted and rendered verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum AttendeeId {
    Number(u64),
    Text(String),
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendeeId::Number(n) => write!(f, "{n}"),
            AttendeeId::Text(s) => f.write_str(s),
        }
    }
}

/// Single attendee row inside [`ListAttendeesResponse`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    /// When the attendee registered for the event.
    pub subscribed_at: DateTime<Utc>,
    /// When the attendee checked in, or `null` if they have not.
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn has_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

/// Response payload for `GET /events/{event_id}/attendees`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ListAttendeesResponse {
    /// Attendees on the requested page.
    pub attendees: Vec<Attendee>,
    /// Number of attendees matching the query across all pages.
    pub total: u64,
}
