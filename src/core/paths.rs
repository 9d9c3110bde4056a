//! Locale-prefixed path construction.
//!
//! Every navigable path in the marketplace carries the active locale as its
//! first segment (`/en/listings/...`, `/ar/listings/...`). This helper
//! prefixes bare paths and re-prefixes paths already carrying a locale.

use crate::core::locale::Locale;

const LOCALES: [Locale; 2] = [Locale::En, Locale::Ar];

/// Return `path` with the active locale as its first segment.
pub fn localized_path(locale: Locale, path: &str) -> String {
    let own_prefix = format!("/{locale}");

    // Already carries the active locale
    if path == own_prefix || path.starts_with(&format!("{own_prefix}/")) {
        return path.to_string();
    }

    // Carries another locale: swap it
    for other in LOCALES {
        let prefix = format!("/{other}");
        if path == prefix {
            return own_prefix;
        }
        if let Some(rest) = path.strip_prefix(&format!("{prefix}/")) {
            return format!("{own_prefix}/{rest}");
        }
    }

    // Bare path: prepend
    if let Some(rest) = path.strip_prefix('/') {
        format!("{own_prefix}/{rest}")
    } else {
        format!("{own_prefix}/{path}")
    }
}
