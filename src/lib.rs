//! Listing Presenter - Localized listing presentation for classified marketplaces.
//!
//! This library turns raw listing records into view-ready structures: it
//! resolves English/Arabic field variants, formats prices with locale-aware
//! symbol placement, generates URL slugs, cycles image-carousel indices, and
//! computes contact-method availability. Everything in the core is a pure,
//! synchronous function over immutable inputs.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Locale and localized field resolution
//! - Price, slug, and relative-time formatting
//! - Carousel index navigation
//! - The listing assembler and its view model
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    assemble,
    format_price,
    localized_path,

    // Output formatting (core functions)
    print_error,
    print_listing_card,
    print_section_header,
    print_success,

    resolve_field,
    resolve_optional_field,
    slugify,
    time_ago,

    // Carousel navigation
    Carousel,
    // Category icons
    CategoryIcon,
    CategoryRecord,
    // Contact methods
    ContactAvailability,
    ContactMethod,
    // Currency configuration
    Currency,

    Direction,
    FormattedPrice,
    // Locale handling
    Locale,
    // Assembled view model
    PresentedListing,
    // Error handling
    PresenterError,
    // Listing records
    RawListing,
    Result,

    VehicleDetails,
    AED,
};
