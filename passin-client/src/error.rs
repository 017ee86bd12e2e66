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

//! Error types for the pass.in API client.

use thiserror::Error;

/// Errors returned by [`PassInApiClient`](crate::PassInApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The event (or route) does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status, with the response body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network, transport, or body decoding error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
