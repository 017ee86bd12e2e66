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

//! Cross-platform REST client for the pass.in events API.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use passin_client::PassInApiClient;
//! use passin_types::ListAttendeesQuery;
//!
//! # async fn example() -> Result<(), passin_client::ApiError> {
//! let client = PassInApiClient::new("http://localhost:3333");
//! let page = client
//!     .list_attendees("9e9bd979-9d10-4915-b339-3786b1634f33", &ListAttendeesQuery::new(0, ""))
//!     .await?;
//! println!("{} attendees", page.total);
//! # Ok(())
//! # }
//! ```

pub mod attendees;
pub mod error;

pub use error::ApiError;
pub use passin_types;

use reqwest::Client;

/// A typed REST client for the pass.in events API.
///
/// All methods return strongly-typed responses from [`passin_types`] and map
/// HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct PassInApiClient {
    base_url: String,
    http: Client,
}

impl PassInApiClient {
    /// Create a new client pointing at the given API base URL,
    /// e.g. `"http://localhost:3333"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a JSON body on success or map the status to [`ApiError`].
pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(response.json().await?),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}
