//! Locale-aware price formatting.
//!
//! This module turns raw numeric prices into display-ready strings. The
//! numeric rendering is identical for every locale (grouped Western digits,
//! no fractional part); the locale only decides whether the currency symbol
//! precedes or follows the number.
//!
//! # Public API
//! - [`FormattedPrice`]: Structured result usable by a rendering layer
//! - [`format_price`]: Format a price for a locale and currency symbol
//!
//! # Rounding
//! Amounts are rounded to the nearest whole unit with ties away from zero
//! (2.5 rounds to 3). Negative or non-finite amounts are rejected with
//! `InvalidAmount`.

use crate::core::error::{PresenterError, Result};
use crate::core::locale::{Direction, Locale};
use num_format::{Locale as NumLocale, ToFormattedString};
use serde::Serialize;
use std::fmt;

/// A formatted price, split so a rendering layer can lay out the symbol and
/// number without re-deriving locale logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPrice {
    /// Currency symbol, e.g. "د.إ"
    pub symbol: String,
    /// Grouped whole-unit amount, e.g. "1,500"
    pub number: String,
    /// True when the symbol precedes the number (LTR locales)
    pub symbol_first: bool,
}

impl fmt::Display for FormattedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol_first {
            write!(f, "{} {}", self.symbol, self.number)
        } else {
            write!(f, "{} {}", self.number, self.symbol)
        }
    }
}

/// Format a price for display.
///
/// Fails with `InvalidAmount` when `amount` is negative, NaN, or infinite.
/// Both locales group digits the same way; the locale decides symbol
/// placement only.
pub fn format_price(amount: f64, locale: Locale, symbol: &str) -> Result<FormattedPrice> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(PresenterError::invalid_amount(amount));
    }

    // f64::round is ties-away-from-zero, the documented rounding choice.
    let whole = amount.round() as u64;
    let number = whole.to_formatted_string(&NumLocale::en);

    Ok(FormattedPrice {
        symbol: symbol.to_string(),
        number,
        symbol_first: locale.direction() == Direction::Ltr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_ltr() -> Result<()> {
        let price = format_price(1500.0, Locale::En, "$")?;
        assert_eq!(price.to_string(), "$ 1,500");
        Ok(())
    }

    #[test]
    fn test_format_grouped_rtl() -> Result<()> {
        let price = format_price(1500.0, Locale::Ar, "$")?;
        assert_eq!(price.to_string(), "1,500 $");
        Ok(())
    }

    #[test]
    fn test_same_digits_regardless_of_locale() -> Result<()> {
        let en = format_price(1234567.0, Locale::En, "د.إ")?;
        let ar = format_price(1234567.0, Locale::Ar, "د.إ")?;
        assert_eq!(en.number, "1,234,567");
        assert_eq!(en.number, ar.number);
        Ok(())
    }

    #[test]
    fn test_rounding_ties_away_from_zero() -> Result<()> {
        assert_eq!(format_price(2.5, Locale::En, "$")?.number, "3");
        assert_eq!(format_price(2.4, Locale::En, "$")?.number, "2");
        assert_eq!(format_price(1499.5, Locale::En, "$")?.number, "1,500");
        Ok(())
    }

    #[test]
    fn test_zero_amount() -> Result<()> {
        assert_eq!(format_price(0.0, Locale::En, "$")?.number, "0");
        Ok(())
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = format_price(-1.0, Locale::En, "$").unwrap_err();
        assert!(matches!(err, PresenterError::InvalidAmount { .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let err = format_price(f64::NAN, Locale::En, "$").unwrap_err();
        assert!(matches!(err, PresenterError::InvalidAmount { .. }));
    }

    #[test]
    fn test_infinity_rejected() {
        let err = format_price(f64::INFINITY, Locale::En, "$").unwrap_err();
        assert!(matches!(err, PresenterError::InvalidAmount { .. }));
    }

    #[test]
    fn test_symbol_placement_flags() -> Result<()> {
        assert!(format_price(10.0, Locale::En, "$")?.symbol_first);
        assert!(!format_price(10.0, Locale::Ar, "$")?.symbol_first);
        Ok(())
    }
}
