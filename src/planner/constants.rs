use crate::models::Category;

/// Day count offered when prompting for a plan length.
pub const DEFAULT_DAYS: usize = 7;

/// Field separator for imported rows and for the ingredient list inside a row.
pub const FIELD_DELIMITER: char = ',';

/// Number of positional fields in an imported row. The last field takes the
/// remainder of the line, delimiters included.
pub const MEAL_FIELD_COUNT: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Category rules
// ─────────────────────────────────────────────────────────────────────────────

/// Keyword rules in evaluation order. The first rule with a keyword contained
/// in the normalized ingredient wins, so "pepper" always lands in Produce and
/// the Spices entry for it never fires.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Meat, &["chicken", "beef"]),
    (Category::Grains, &["rice", "pasta"]),
    (Category::Produce, &["onion", "pepper", "carrot"]),
    (Category::Sauces, &["sauce", "oil"]),
    (Category::Spices, &["salt", "pepper", "spice"]),
];

/// Category for ingredients no rule matches.
pub const FALLBACK_CATEGORY: Category = Category::Other;
