//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for writing listing JSON files into temp directories
//! to exercise the `present` command consistently.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `json` as a listings file inside a fresh temp directory.
///
/// The TempDir must stay alive for the duration of the test.
pub fn write_listing_file(json: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("listings.json");
    fs::write(&path, json)?;
    Ok((dir, path))
}

/// Scenario: a bilingual car listing with full contact data
pub fn bilingual_car_listing() -> &'static str {
    r#"[{
        "title": "Toyota Corolla 2019",
        "title_ar": "تويوتا كورولا",
        "address": "Al Quoz",
        "address_ar": "القوز",
        "condition": "used",
        "condition_ar": "مستعمل",
        "price": 42000,
        "images": ["a.jpg", "b.jpg", "c.jpg"],
        "contact_methods": ["phone", "whatsapp"],
        "phone_number": "+971501234567",
        "category": { "name": "Vehicles", "name_ar": "مركبات", "icon": "vehicles" },
        "vehicle_details": { "mileage": 58000, "year": 2019 }
    }]"#
}

/// Scenario: minimal listing with no photos and no contact restrictions
pub fn minimal_listing() -> &'static str {
    r#"[{
        "title": "Sofa",
        "address": "Deira",
        "price": 300
    }]"#
}

/// Scenario: one invalid price among valid siblings
pub fn mixed_validity_listings() -> &'static str {
    r#"[
        { "title": "Broken", "address": "Deira", "price": -1 },
        { "title": "Lamp", "address": "Satwa", "price": 120 },
        { "title": "Desk", "address": "Karama", "price": 450 }
    ]"#
}
