//! The `slug` command: print the URL-safe slug for free text.

use crate::core::{error::Result, output::print_success, slug::slugify};

pub fn execute_slug(words: &[String]) -> Result<()> {
    let text = words.join(" ");
    let slug = slugify(&text);

    log::debug!("Slugified {text:?} -> {slug:?}");
    print_success(&slug);
    Ok(())
}
