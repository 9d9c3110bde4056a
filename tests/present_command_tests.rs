use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod present_command_tests {
    use super::*;

    #[test]
    fn test_present_renders_numbered_cards() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file(bilingual_car_listing())?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .assert()
            .success()
            .stdout(assertions::has_listings_header())
            .stdout(assertions::has_card_index(1))
            .stdout(assertions::has_price("42,000"))
            .stdout(predicate::str::contains("Toyota Corolla 2019"))
            .stdout(predicate::str::contains("Vehicles"))
            .stdout(predicate::str::contains("Al Quoz"))
            .stdout(predicate::str::contains("3 photos"))
            .stdout(predicate::str::contains("tel:+971501234567"))
            .stdout(predicate::str::contains("https://wa.me/+971501234567"))
            .stdout(predicate::str::contains("/en/listings/toyota-corolla-2019"));

        Ok(())
    }

    #[test]
    fn test_present_arabic_locale_resolves_fields() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file(bilingual_car_listing())?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .arg("--locale")
            .arg("ar")
            .assert()
            .success()
            .stdout(predicate::str::contains("تويوتا كورولا"))
            .stdout(predicate::str::contains("القوز"))
            .stdout(assertions::has_price("42,000"))
            .stdout(predicate::str::contains("/ar/listings/toyota-corolla-2019"));

        Ok(())
    }

    #[test]
    fn test_present_minimal_listing() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file(minimal_listing())?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .assert()
            .success()
            .stdout(assertions::has_card_index(1))
            .stdout(predicate::str::contains("Sofa"))
            .stdout(predicate::str::contains("no photos"))
            // Absent contact methods default to permissive, but without a
            // phone number only chat remains
            .stdout(predicate::str::contains("chat"))
            .stdout(predicate::str::contains("tel:").not());

        Ok(())
    }

    #[test]
    fn test_present_invalid_listing_does_not_break_siblings() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file(mixed_validity_listings())?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Lamp"))
            .stdout(predicate::str::contains("Desk"))
            .stdout(predicate::str::contains("Broken").not())
            .stdout(assertions::has_card_index(1))
            .stdout(assertions::has_card_index(2));

        Ok(())
    }

    #[test]
    fn test_present_missing_file_fails() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg("/no/such/listings.json")
            .assert()
            .failure()
            .stdout(assertions::listing_file_not_found());

        Ok(())
    }

    #[test]
    fn test_present_empty_array_fails() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file("[]")?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("No listings found"));

        Ok(())
    }

    #[test]
    fn test_present_rejects_unknown_locale() -> anyhow::Result<()> {
        let (_dir, path) = write_listing_file(minimal_listing())?;

        let mut cmd = Command::cargo_bin("listing-presenter")?;
        cmd.arg("present")
            .arg(&path)
            .arg("--locale")
            .arg("fr")
            .assert()
            .failure()
            .stderr(assertions::invalid_locale_error());

        Ok(())
    }
}
