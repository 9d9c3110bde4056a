//! Core functionality for the listing-presenter tool.
//!
//! This module provides the fundamental building blocks of the presentation
//! layer: locale resolution, price and slug formatting, carousel navigation,
//! contact-method handling, and the listing assembler.

pub mod carousel;
pub mod contact;
pub mod currency;
pub mod error;
pub mod icons;
pub mod listing;
pub mod locale;
pub mod output;
pub mod paths;
pub mod presenter;
pub mod price;
pub mod relative_time;
pub mod slug;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{PresenterError, Result};

// === Locale and field resolution ===
// The single source of truth for which localized field wins
pub use locale::{resolve_field, resolve_optional_field, Direction, Locale};

// === Currency configuration ===
pub use currency::{Currency, AED};

// === Price formatting ===
// Grouped whole-unit amounts with direction-aware symbol placement
pub use price::{format_price, FormattedPrice};

// === Slug generation ===
pub use slug::slugify;

// === Carousel navigation ===
// Cyclic next/prev with validated jumps
pub use carousel::Carousel;

// === Contact methods ===
// Availability flags and tel:/wa.me link building
pub use contact::{tel_link, whatsapp_link, ContactAvailability, ContactMethod};

// === Category icons ===
pub use icons::CategoryIcon;

// === Listing records ===
// Raw data-layer records and the assembled view model
pub use listing::{CategoryRecord, RawListing, VehicleDetails};
pub use presenter::{assemble, PresentedListing};

// === Relative timestamps ===
pub use relative_time::time_ago;

// === Localized paths ===
pub use paths::localized_path;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_listing_card, print_section_header, print_success};
