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

//! Client-side pagination over a server-reported total.
//!
//! Pages are 1-based for display; the server expects a 0-based
//! `pageIndex`. The server always returns [`PAGE_SIZE`] rows per page.

/// Rows per page returned by the attendees endpoint.
pub const PAGE_SIZE: u64 = 10;

/// Current page plus the total number of matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, total: 0 }
    }
}

impl Pagination {
    pub fn new(page: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            total,
        }
    }

    /// 1-based page number. Never 0.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total rows matching the current query.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / PAGE_SIZE)`. Zero for an empty result.
    pub fn total_pages(&self) -> u32 {
        u32::try_from(self.total.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
    }

    /// Last page the user can navigate to. At least 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    /// 0-based index sent to the server as `pageIndex`.
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_first_page()
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn first(self) -> Self {
        Self { page: 1, ..self }
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1).min(self.last_page()),
            ..self
        }
    }

    pub fn last(self) -> Self {
        Self {
            page: self.last_page(),
            ..self
        }
    }

    /// Same page, new total from a fresh server response. The page is kept
    /// even if the new total no longer reaches it.
    pub fn with_total(self, total: u64) -> Self {
        Self { total, ..self }
    }
}
