//! Raw listing records as supplied by the data layer.
//!
//! These are read-only snapshots handed to the assembler once per render;
//! nothing in this crate mutates them. Optional `_ar` fields carry Arabic
//! variants resolved at presentation time.

use crate::core::contact::ContactMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle-specific attributes present on car listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub mileage: Option<u64>,
    pub year: Option<u16>,
}

/// The category a listing belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    /// Kebab-case icon key, e.g. "real-estate"
    #[serde(default)]
    pub icon: Option<String>,
}

/// A listing record as fetched from the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub title: String,
    #[serde(default)]
    pub title_ar: Option<String>,
    pub address: String,
    #[serde(default)]
    pub address_ar: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_ar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    /// Absent means the seller never restricted contact methods
    #[serde(default)]
    pub contact_methods: Option<Vec<ContactMethod>>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<CategoryRecord>,
    #[serde(default)]
    pub vehicle_details: Option<VehicleDetails>,
}
