//! Locale enumeration and localized field resolution.
//!
//! This module defines [`Locale`] and [`resolve_field`], the single source of
//! truth for choosing between a primary value and an optional Arabic variant.
//! All localized content in the crate resolves through this function; no other
//! module branches on the locale to pick a field.
//!
//! # Public API
//! - [`Locale`]: Supported display languages (English, Arabic)
//! - [`Direction`]: Text direction derived from the locale
//! - [`resolve_field`]: Pick the display value for a (primary, alternate) pair
//!
//! # Resolution Rule
//! The Arabic alternate wins iff the active locale is Arabic AND the alternate
//! is present and non-empty. In every other case the primary value is used, so
//! resolution never returns an empty string when the primary is non-empty.

use crate::core::error::PresenterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English ("en"), left-to-right
    En,
    /// Arabic ("ar"), right-to-left
    Ar,
}

/// Text direction for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    /// Get the BCP 47 language subtag for this locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Get the text direction used when laying out this locale
    pub fn direction(&self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    pub fn is_arabic(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = PresenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(PresenterError::invalid_locale(other)),
        }
    }
}

/// Resolve a localized field to its display value.
///
/// Returns the alternate iff `locale` is Arabic and the alternate is present
/// and non-empty; otherwise returns the primary. An absent or empty alternate
/// is a normal case, not a failure.
pub fn resolve_field<'a>(locale: Locale, primary: &'a str, alternate: Option<&'a str>) -> &'a str {
    match alternate {
        Some(alt) if locale.is_arabic() && !alt.is_empty() => alt,
        _ => primary,
    }
}

/// Resolve an optional localized field, e.g. a listing condition.
///
/// Absent primary means the field is simply not displayed.
pub fn resolve_optional_field<'a>(
    locale: Locale,
    primary: Option<&'a str>,
    alternate: Option<&'a str>,
) -> Option<&'a str> {
    primary.map(|p| resolve_field(locale, p, alternate))
}
