//! URL-safe slug generation for listing titles.
//!
//! # Algorithm
//! Each step operates on the output of the previous one:
//! 1. Trim leading/trailing whitespace
//! 2. Lowercase (ASCII-invariant; Arabic has no case and passes through)
//! 3. Drop every character that is not alphanumeric, whitespace, or a hyphen
//! 4. Replace each maximal run of whitespace with a single hyphen
//! 5. Collapse each maximal run of hyphens into one hyphen
//! 6. Strip leading/trailing hyphens
//!
//! Trimming whitespace first and boundary hyphens last is the pinned order;
//! with it the function is idempotent: `slugify(slugify(x)) == slugify(x)`.
//! Input with no valid characters yields an empty string, not an error.

/// Produce a URL-safe slug from free text.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_separator = !slug.is_empty();
        } else if c.is_alphanumeric() {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        }
        // Everything else (punctuation, symbols) is dropped without
        // introducing a separator.
    }

    slug
}
