use std::collections::HashMap;

use crate::models::Category;

/// Key for one shopping list checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckKey {
    pub category: Category,
    pub item: String,
}

impl CheckKey {
    pub fn new(category: Category, item: impl Into<String>) -> Self {
        Self {
            category,
            item: item.into(),
        }
    }
}

/// User-toggled checkbox state for shopping list items.
///
/// Entries outlive the shopping list they were created for. A regenerated
/// list picks up the old state for any item that reappears.
#[derive(Debug, Clone, Default)]
pub struct CheckedItems {
    checked: HashMap<CheckKey, bool>,
}

impl CheckedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown keys read as unchecked.
    pub fn is_checked(&self, category: Category, item: &str) -> bool {
        self.checked
            .get(&CheckKey::new(category, item))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the state of one item and return the new value.
    pub fn toggle(&mut self, category: Category, item: &str) -> bool {
        let value = self
            .checked
            .entry(CheckKey::new(category, item))
            .or_insert(false);
        *value = !*value;
        *value
    }
}

/// Collapsible output sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    AvailableMeals,
    MealPlan,
    ShoppingList,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::AvailableMeals,
        Section::MealPlan,
        Section::ShoppingList,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::AvailableMeals => "Available Meals",
            Section::MealPlan => "Generated Meal Plan",
            Section::ShoppingList => "Shopping List",
        }
    }
}

/// Visibility flag per section. Everything starts visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub available_meals: bool,
    pub meal_plan: bool,
    pub shopping_list: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            available_meals: true,
            meal_plan: true,
            shopping_list: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::AvailableMeals => self.available_meals,
            Section::MealPlan => self.meal_plan,
            Section::ShoppingList => self.shopping_list,
        }
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::AvailableMeals => &mut self.available_meals,
            Section::MealPlan => &mut self.meal_plan,
            Section::ShoppingList => &mut self.shopping_list,
        };
        *flag = !*flag;
        *flag
    }

    pub fn show_all(&mut self) {
        *self = Self::default();
    }
}
