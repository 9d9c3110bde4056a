//! The `price` command: format an amount for the active locale.

use crate::core::{
    currency::AED,
    error::Result,
    locale::Locale,
    output::print_success,
    price::format_price,
};

pub fn execute_price(amount: f64, locale: Locale) -> Result<()> {
    let price = format_price(amount, locale, AED.symbol)?;

    log::debug!("Formatted {amount} as '{price}' for locale '{locale}'");
    print_success(&price.to_string());
    Ok(())
}
