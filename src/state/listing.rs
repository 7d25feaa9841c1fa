//! Fetch bookkeeping for list and detail pages.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from `begin`. A response is applied only if its
//! ticket is still the newest, so a slow early request cannot overwrite the
//! result of a later one.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::error::ApiError;

/// Identifies one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, generation: 0 }
    }
}

impl<T> Listing<T> {
    /// Mark a fetch as started and return its ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the listing untouched when a newer fetch
    /// has started since. A failed fetch keeps the previous items.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once a fetch has completed successfully with no items.
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty() && self.generation > 0
    }
}

/// A single fetched record, e.g. the order shown by the detail page.
///
/// Unlike [`Listing`], starting a fetch clears the previous record: the page
/// is about to show a different one.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail<T> {
    pub value: Option<T>,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for Detail<T> {
    fn default() -> Self {
        Self { value: None, error: None, generation: 0 }
    }
}

impl<T> Detail<T> {
    /// Clear the shown record and return the ticket for the new fetch.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.value = None;
        self.error = None;
        FetchTicket(self.generation)
    }

    /// Show `message` without fetching. In-flight fetches become stale.
    pub fn reject(&mut self, message: &str) {
        self.generation += 1;
        self.value = None;
        self.error = Some(message.to_owned());
    }

    /// Apply the outcome of the fetch identified by `ticket`; `false` when a
    /// newer fetch or rejection superseded it.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(value) => self.value = Some(value),
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }
}
