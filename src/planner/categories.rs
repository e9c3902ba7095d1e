use crate::models::Category;
use crate::planner::constants::{CATEGORY_RULES, FALLBACK_CATEGORY};

/// Classify a raw ingredient string.
///
/// The input is trimmed and lowercased, then tested against [`CATEGORY_RULES`]
/// in order by substring. Always returns a category.
pub fn classify_ingredient(ingredient: &str) -> Category {
    let normalized = ingredient.trim().to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}
