use serde::Serialize;

use crate::planner::constants::FIELD_DELIMITER;

/// One imported meal row.
///
/// Records are never mutated after import. Identity is the row position in the
/// imported set, so two records may share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MealRecord {
    pub name: String,

    pub main_dish: String,

    pub side_dish: String,

    /// Raw comma-joined ingredient list, exactly as it appeared in the file.
    pub ingredients: String,
}

impl MealRecord {
    pub fn new(
        name: impl Into<String>,
        main_dish: impl Into<String>,
        side_dish: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            main_dish: main_dish.into(),
            side_dish: side_dish.into(),
            ingredients: ingredients.into(),
        }
    }

    /// Split the ingredient field into trimmed entries.
    ///
    /// An empty field yields nothing. Empty fragments between delimiters are
    /// kept, so `"beef,,rice"` yields three entries.
    pub fn ingredient_list(&self) -> Vec<&str> {
        if self.ingredients.is_empty() {
            return Vec::new();
        }
        self.ingredients.split(FIELD_DELIMITER).map(str::trim).collect()
    }
}
