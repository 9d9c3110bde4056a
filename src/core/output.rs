//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all
//! listing-presenter output: error/success messages and the terminal listing
//! cards printed by the `present` command.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, bold white for prices,
//!   bright_black for secondary details
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Locale-neutral layout**: The card prints already-resolved strings; no
//!   locale decisions happen here

use crate::core::presenter::PresentedListing;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Render one assembled listing as a terminal card.
///
/// `index` is the 1-based position in the listing file, shown so users can
/// reference cards in conversation the way file indices work elsewhere.
pub fn print_listing_card(index: usize, listing: &PresentedListing) {
    println!(
        "{} {}",
        format!("[{index}]").bright_black(),
        listing.price.to_string().white().bold()
    );
    println!("    {}", listing.title.white());

    if let Some(condition) = &listing.condition {
        println!("    {}", format!("({condition})").bright_black());
    }

    let mut details: Vec<&str> = Vec::new();
    if let Some(mileage) = &listing.mileage {
        details.push(mileage);
    }
    if let Some(year) = &listing.year {
        details.push(year);
    }
    if !details.is_empty() {
        println!("    {}", details.join(" · ").bright_black());
    }

    if let Some(category) = &listing.category {
        let glyph = listing
            .category_icon
            .map(|icon| icon.glyph())
            .unwrap_or_default();
        println!("    {}", format!("{glyph} {category}").bright_black());
    }

    println!("    {}", listing.address.bright_black());
    if let Some(posted) = &listing.posted {
        println!("    {}", posted.bright_black());
    }

    if listing.images.is_empty() {
        println!("    {}", "no photos".bright_black());
    } else {
        let label = if listing.images.len() == 1 {
            "1 photo".to_string()
        } else {
            format!("{} photos", listing.images.len())
        };
        println!("    {}", label.bright_black());
    }

    let mut contacts: Vec<String> = Vec::new();
    if let Some(tel) = &listing.tel_link {
        contacts.push(tel.clone());
    }
    if listing.contact.can_chat {
        contacts.push("chat".to_string());
    }
    if let Some(whatsapp) = &listing.whatsapp_link {
        contacts.push(whatsapp.clone());
    }
    if !contacts.is_empty() {
        println!("    {}", contacts.join("  ").blue());
    }

    println!("    {}", listing.detail_path.blue());
    println!();
}
