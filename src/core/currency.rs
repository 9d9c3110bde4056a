//! Static currency configuration.
//!
//! The marketplace prices everything in a single currency; this module holds
//! its code, symbol, and localized display names. The table is fixed at
//! compile time and not runtime-configurable.

use crate::core::locale::{resolve_field, Locale};

/// A currency as displayed alongside listing prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name_en: &'static str,
    pub name_ar: &'static str,
}

/// The UAE Dirham, the marketplace's display currency
pub const AED: Currency = Currency {
    code: "AED",
    symbol: "د.إ",
    name_en: "UAE Dirham",
    name_ar: "درهم إماراتي",
};

impl Currency {
    /// Get the currency name for the active locale
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        resolve_field(locale, self.name_en, Some(self.name_ar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aed_table() {
        assert_eq!(AED.code, "AED");
        assert_eq!(AED.symbol, "د.إ");
    }

    #[test]
    fn test_localized_name() {
        assert_eq!(AED.localized_name(Locale::En), "UAE Dirham");
        assert_eq!(AED.localized_name(Locale::Ar), "درهم إماراتي");
    }
}
