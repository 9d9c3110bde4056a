//! Category icon mapping.
//!
//! Category records carry a kebab-case icon key ("vehicles", "real-estate").
//! Instead of a stringly runtime lookup into an icon registry, the closed set
//! of renderable icons is an enum with an explicit fallback variant for keys
//! nobody recognizes.

use serde::Serialize;

/// The closed set of category icons the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryIcon {
    Vehicles,
    RealEstate,
    Electronics,
    Furniture,
    Fashion,
    Jobs,
    Services,
    Pets,
    /// Fallback for unrecognized keys
    Hobbies,
}

impl CategoryIcon {
    /// Map a kebab-case icon key onto an icon variant.
    ///
    /// Unrecognized or empty keys resolve to [`CategoryIcon::Hobbies`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "vehicles" => CategoryIcon::Vehicles,
            "real-estate" | "properties" => CategoryIcon::RealEstate,
            "electronics" => CategoryIcon::Electronics,
            "furniture" => CategoryIcon::Furniture,
            "fashion" => CategoryIcon::Fashion,
            "jobs" => CategoryIcon::Jobs,
            "services" => CategoryIcon::Services,
            "pets" => CategoryIcon::Pets,
            _ => CategoryIcon::Hobbies,
        }
    }

    /// Terminal glyph used when rendering category headers
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Vehicles => "🚗",
            CategoryIcon::RealEstate => "🏠",
            CategoryIcon::Electronics => "💻",
            CategoryIcon::Furniture => "🪑",
            CategoryIcon::Fashion => "👕",
            CategoryIcon::Jobs => "💼",
            CategoryIcon::Services => "🔧",
            CategoryIcon::Pets => "🐾",
            CategoryIcon::Hobbies => "🎨",
        }
    }
}

impl From<&str> for CategoryIcon {
    fn from(key: &str) -> Self {
        CategoryIcon::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(CategoryIcon::from_key("vehicles"), CategoryIcon::Vehicles);
        assert_eq!(
            CategoryIcon::from_key("real-estate"),
            CategoryIcon::RealEstate
        );
        assert_eq!(CategoryIcon::from_key("pets"), CategoryIcon::Pets);
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        assert_eq!(CategoryIcon::from_key(" Vehicles "), CategoryIcon::Vehicles);
        assert_eq!(CategoryIcon::from_key("ELECTRONICS"), CategoryIcon::Electronics);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(CategoryIcon::from_key("spaceships"), CategoryIcon::Hobbies);
        assert_eq!(CategoryIcon::from_key(""), CategoryIcon::Hobbies);
    }

    #[test]
    fn test_every_variant_has_a_glyph() {
        for icon in [
            CategoryIcon::Vehicles,
            CategoryIcon::RealEstate,
            CategoryIcon::Electronics,
            CategoryIcon::Furniture,
            CategoryIcon::Fashion,
            CategoryIcon::Jobs,
            CategoryIcon::Services,
            CategoryIcon::Pets,
            CategoryIcon::Hobbies,
        ] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
