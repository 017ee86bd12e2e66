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

//! Shared API types for the pass.in attendee list.
//!
//! This crate defines the contract between the pass.in events API and its
//! consumers (REST client, frontend, tests). It has no HTTP or UI
//! dependencies, so the pagination arithmetic lives here too and is tested
//! natively.

pub mod pagination;
pub mod requests;
pub mod responses;

pub use pagination::{Pagination, PAGE_SIZE};
pub use requests::ListAttendeesQuery;
pub use responses::{Attendee, AttendeeId, ListAttendeesResponse};
