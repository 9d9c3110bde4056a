//! The `present` command: render listing cards from a JSON file.
//!
//! Reads an array of raw listing records, assembles each one for the active
//! locale, and prints the resulting cards. A listing that fails to assemble
//! (an invalid price, typically) is logged and skipped so its siblings still
//! render.

use crate::core::{
    error::{PresenterError, Result},
    listing::RawListing,
    locale::Locale,
    output::{print_listing_card, print_section_header},
    presenter::assemble,
};
use chrono::Utc;
use std::fs;
use std::path::Path;

pub fn execute_present(file: &Path, locale: Locale) -> Result<()> {
    let listings = load_listings(file)?;
    if listings.is_empty() {
        return Err(PresenterError::no_listings_in_file(file));
    }

    log::debug!(
        "Presenting {} listings from '{}' in locale '{locale}'",
        listings.len(),
        file.display()
    );

    let now = Utc::now();
    print_section_header("Listings");

    let mut rendered = 0usize;
    for (position, raw) in listings.iter().enumerate() {
        match assemble(raw, locale, now) {
            Ok(listing) => {
                rendered += 1;
                print_listing_card(rendered, &listing);
            }
            Err(e) => {
                // One bad listing must not take down its siblings
                log::warn!(
                    "Skipping listing {} ('{}'): {e}",
                    position + 1,
                    raw.title
                );
            }
        }
    }

    log::debug!("Rendered {rendered} of {} listings", listings.len());
    Ok(())
}

fn load_listings(file: &Path) -> Result<Vec<RawListing>> {
    if !file.exists() {
        return Err(PresenterError::listing_file_not_found(file));
    }

    let content = fs::read_to_string(file)?;
    serde_json::from_str(&content).map_err(|e| PresenterError::listing_parse_failed(file, e))
}
