//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating listing-presenter command output and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the listings section header
pub fn has_listings_header() -> impl Predicate<str> {
    predicates::str::contains("Listings:")
}

/// Creates a predicate that checks for a numbered card index
pub fn has_card_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for a formatted price fragment
pub fn has_price(grouped: &str) -> impl Predicate<str> {
    predicates::str::contains(grouped.to_string())
}

/// Creates a predicate that checks for invalid-amount error messages
pub fn invalid_amount_error() -> impl Predicate<str> {
    predicates::str::contains("Invalid price amount")
}

/// Creates a predicate that checks for missing-listing-file error messages
pub fn listing_file_not_found() -> impl Predicate<str> {
    predicates::str::contains("Listing file does not exist")
}

/// Creates a predicate that checks for unknown-locale error messages
pub fn invalid_locale_error() -> impl Predicate<str> {
    predicates::str::contains("Unknown locale")
        .or(predicates::str::contains("invalid value"))
}
