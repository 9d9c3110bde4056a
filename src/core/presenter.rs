//! Assembling raw listings into view-ready structures.
//!
//! This module composes the field resolver, price formatter, slugifier, and
//! contact resolution into a single transformation from [`RawListing`] to
//! [`PresentedListing`]. The transformation is pure: no side effects, no
//! shared state, safe to run concurrently on independent inputs.
//!
//! # Public API
//! - [`PresentedListing`]: Immutable view model for one listing card
//! - [`assemble`]: The transformation itself
//!
//! # Error Handling
//! The only failure is an invalid price, propagated from the formatter; the
//! assembler never substitutes a default price. Missing translations, empty
//! image lists, and absent contact methods are normal fallback paths.

use chrono::{DateTime, Utc};
use num_format::{Locale as NumLocale, ToFormattedString};
use serde::Serialize;

use crate::core::contact::{tel_link, whatsapp_link, ContactAvailability};
use crate::core::currency::AED;
use crate::core::error::Result;
use crate::core::icons::CategoryIcon;
use crate::core::listing::RawListing;
use crate::core::locale::{resolve_field, resolve_optional_field, Locale};
use crate::core::paths::localized_path;
use crate::core::price::{format_price, FormattedPrice};
use crate::core::slug::slugify;

/// A listing transformed for display, with every locale decision already made
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedListing {
    pub title: String,
    pub address: String,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub price: FormattedPrice,
    /// Ordered image URLs; empty when the listing has no photos
    pub images: Vec<String>,
    /// Locale-prefixed path to the detail page
    pub detail_path: String,
    pub contact: ContactAvailability,
    /// Present iff `contact.can_call`
    pub tel_link: Option<String>,
    /// Present iff `contact.can_whatsapp`
    pub whatsapp_link: Option<String>,
    /// Relative "posted 2 days ago" phrase, when the data layer supplied a timestamp
    pub posted: Option<String>,
    /// Localized category name, when the listing is categorized
    pub category: Option<String>,
    /// Icon for the category, with the fallback already applied
    pub category_icon: Option<CategoryIcon>,
    /// Grouped mileage with localized unit, e.g. "58,000 km"
    pub mileage: Option<String>,
    pub year: Option<String>,
}

/// Transform a raw listing into its view-ready form.
///
/// `now` anchors the relative timestamp so the transformation stays pure;
/// callers pass the current time once per render.
pub fn assemble(raw: &RawListing, locale: Locale, now: DateTime<Utc>) -> Result<PresentedListing> {
    let title = resolve_field(locale, &raw.title, raw.title_ar.as_deref());
    let address = resolve_field(locale, &raw.address, raw.address_ar.as_deref());
    let condition =
        resolve_optional_field(locale, raw.condition.as_deref(), raw.condition_ar.as_deref());
    let description = resolve_optional_field(
        locale,
        raw.description.as_deref(),
        raw.description_ar.as_deref(),
    );

    // An invalid price fails the whole listing; callers decide on fallbacks.
    let price = format_price(raw.price, locale, AED.symbol)?;

    let contact =
        ContactAvailability::resolve(raw.contact_methods.as_deref(), raw.phone_number.as_deref());
    let phone = raw.phone_number.as_deref().unwrap_or_default();
    let tel = contact.can_call.then(|| tel_link(phone));
    let whatsapp = contact
        .can_whatsapp
        .then(|| whatsapp_link(phone, title, locale));

    // Slugs come from the primary title so the URL is stable across locales.
    let detail_path = localized_path(locale, &format!("/listings/{}", slugify(&raw.title)));

    let posted = raw
        .created_at
        .map(|created| crate::core::relative_time::time_ago(created, now, locale));

    let category = raw
        .category
        .as_ref()
        .map(|c| resolve_field(locale, &c.name, c.name_ar.as_deref()).to_string());
    let category_icon = raw
        .category
        .as_ref()
        .map(|c| CategoryIcon::from_key(c.icon.as_deref().unwrap_or_default()));

    let vehicle = raw.vehicle_details.as_ref();
    let mileage = vehicle.and_then(|v| v.mileage).map(|km| {
        let unit = match locale {
            Locale::En => "km",
            Locale::Ar => "كم",
        };
        format!("{} {unit}", km.to_formatted_string(&NumLocale::en))
    });
    let year = vehicle.and_then(|v| v.year).map(|y| y.to_string());

    Ok(PresentedListing {
        title: title.to_string(),
        address: address.to_string(),
        condition: condition.map(str::to_string),
        description: description.map(str::to_string),
        price,
        images: raw.images.clone(),
        detail_path,
        contact,
        tel_link: tel,
        whatsapp_link: whatsapp,
        posted,
        category,
        category_icon,
        mileage,
        year,
    })
}
