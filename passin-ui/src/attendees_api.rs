// SPDX-License-Identifier: MIT OR Apache-2.0

//! pass.in API client facade for the passin-ui.

use crate::constants::api_client;
pub use passin_client::ApiError as FetchError;
use passin_types::{ListAttendeesQuery, ListAttendeesResponse};

fn client() -> Result<passin_client::PassInApiClient, FetchError> {
    api_client().map_err(FetchError::Config)
}

pub async fn list_attendees(
    event_id: &str,
    page_index: u32,
    query: &str,
) -> Result<ListAttendeesResponse, FetchError> {
    let query = ListAttendeesQuery::new(page_index, query);
    let client = client()?;
    let result = client.list_attendees(event_id, &query).await?;
    log::debug!(
        "Attendees page {page_index} for {event_id} from {}: {} rows of {}",
        client.base_url(),
        result.attendees.len(),
        result.total
    );
    Ok(result)
}
