//! Page metadata conventions.
//!
//! Every page root carries an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a025_product_type--detail"`) and a `data-page-category` attribute.
//! The entity part matches the `domain/` directory of the page.

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("a025_product_type--detail"));
        assert!(!is_valid_page_id("a025_product_type"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a025_product_type--dashboard"));
        assert!(!is_valid_page_id("a025_product_type--list"));
    }
}
