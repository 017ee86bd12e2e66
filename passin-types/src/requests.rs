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

//! Query parameters for the pass.in events API.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /events/{event_id}/attendees`.
///
/// Both parameters are always sent, `query` as an empty string when the
/// search box is empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ListAttendeesQuery {
    /// Zero-based page index.
    #[serde(rename = "pageIndex", default)]
    pub page_index: u32,

    /// Free-text filter on attendee name.
    #[serde(default)]
    pub query: String,
}

impl ListAttendeesQuery {
    pub fn new(page_index: u32, query: impl Into<String>) -> Self {
        Self {
            page_index,
            query: query.into(),
        }
    }
}
