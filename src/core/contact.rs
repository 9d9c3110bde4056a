//! Contact methods, availability resolution, and contact links.
//!
//! A listing may enable any subset of phone call, in-app chat, and WhatsApp.
//! An absent set means the seller never restricted anything, so every method
//! is considered enabled (permissive default). That default is applied once
//! here, at the assembler boundary, instead of null-checks scattered through
//! rendering code.
//!
//! # Public API
//! - [`ContactMethod`]: The closed set of contact channels
//! - [`ContactAvailability`]: Per-listing availability flags
//! - [`tel_link`], [`whatsapp_link`]: Deep links for the call/WhatsApp buttons

use crate::core::locale::Locale;
use serde::{Deserialize, Serialize};

/// One way of contacting a seller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Chat,
    Whatsapp,
}

/// Availability flags for each contact channel on one listing.
///
/// Phone and WhatsApp need the method enabled AND a phone number on record;
/// chat only needs the method enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactAvailability {
    pub can_call: bool,
    pub can_whatsapp: bool,
    pub can_chat: bool,
}

impl ContactAvailability {
    /// Resolve availability from the raw listing data.
    ///
    /// `methods = None` enables every method (permissive default).
    pub fn resolve(methods: Option<&[ContactMethod]>, phone_number: Option<&str>) -> Self {
        let enabled =
            |m: ContactMethod| methods.map_or(true, |methods| methods.contains(&m));
        let has_phone = phone_number.is_some_and(|number| !number.is_empty());

        Self {
            can_call: enabled(ContactMethod::Phone) && has_phone,
            can_whatsapp: enabled(ContactMethod::Whatsapp) && has_phone,
            can_chat: enabled(ContactMethod::Chat),
        }
    }
}

/// Build a `tel:` link for the call button.
pub fn tel_link(phone_number: &str) -> String {
    format!("tel:{phone_number}")
}

/// Localized WhatsApp greeting, with the listing title substituted in.
fn whatsapp_message(locale: Locale, listing_title: &str) -> String {
    match locale {
        Locale::En => format!("Hi, I'm interested in your listing: {listing_title}"),
        Locale::Ar => format!("مرحباً، أنا مهتم بإعلانك: {listing_title}"),
    }
}

/// Build a WhatsApp deep link for a listing.
///
/// The phone number is normalized to digits and `+` so it works with wa.me;
/// the prefilled message carries the listing title and is percent-encoded.
pub fn whatsapp_link(phone_number: &str, listing_title: &str, locale: Locale) -> String {
    let number: String = phone_number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let message = whatsapp_message(locale, listing_title);
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(&message))
}
