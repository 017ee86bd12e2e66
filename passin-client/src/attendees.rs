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

//! Attendee listing endpoint.

use passin_types::{ListAttendeesQuery, ListAttendeesResponse};

use crate::error::ApiError;
use crate::{parse_json_response, PassInApiClient};

impl PassInApiClient {
    /// List one page of an event's attendees, filtered by `query.query`.
    ///
    /// Calls `GET /events/{event_id}/attendees?pageIndex={n}&query={text}`.
    pub async fn list_attendees(
        &self,
        event_id: &str,
        query: &ListAttendeesQuery,
    ) -> Result<ListAttendeesResponse, ApiError> {
        log::debug!(
            "Listing attendees for event {event_id}: pageIndex={} query={:?}",
            query.page_index,
            query.query
        );
        let response = self.list_attendees_request(event_id, query).send().await?;
        parse_json_response(response).await
    }

    pub(crate) fn list_attendees_request(
        &self,
        event_id: &str,
        query: &ListAttendeesQuery,
    ) -> reqwest::RequestBuilder {
        let path = format!("/events/{event_id}/attendees");
        self.get(&path).query(query)
    }
}
