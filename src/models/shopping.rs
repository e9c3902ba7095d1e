use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Shopping list bucket.
///
/// Variant order matches classifier priority, which is also the order
/// categories are listed in a [`ShoppingList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Meat,
    Grains,
    Produce,
    Sauces,
    Spices,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Meat,
        Category::Grains,
        Category::Produce,
        Category::Sauces,
        Category::Spices,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meat => "Meat",
            Category::Grains => "Grains",
            Category::Produce => "Produce",
            Category::Sauces => "Sauces",
            Category::Spices => "Spices",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ingredient counts grouped by category.
///
/// Only categories and items that were seen at least once are present, so
/// every stored count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    categories: BTreeMap<Category, BTreeMap<String, u32>>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `item` under `category`.
    pub fn add(&mut self, category: Category, item: &str) {
        *self
            .categories
            .entry(category)
            .or_default()
            .entry(item.to_string())
            .or_insert(0) += 1;
    }

    pub fn count(&self, category: Category, item: &str) -> u32 {
        self.categories
            .get(&category)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0)
    }

    pub fn items(&self, category: Category) -> Option<&BTreeMap<String, u32>> {
        self.categories.get(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &BTreeMap<String, u32>)> {
        self.categories.iter().map(|(c, items)| (*c, items))
    }

    /// Flattened `(category, item, count)` triples in listing order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str, u32)> {
        self.categories.iter().flat_map(|(c, items)| {
            items
                .iter()
                .map(move |(item, count)| (*c, item.as_str(), *count))
        })
    }

    pub fn contains(&self, category: Category, item: &str) -> bool {
        self.count(category, item) > 0
    }

    /// Number of distinct (category, item) entries.
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_initializes_lazily() {
        let mut list = ShoppingList::new();
        assert!(list.is_empty());
        assert!(list.items(Category::Meat).is_none());

        list.add(Category::Meat, "beef");
        list.add(Category::Meat, "beef");
        list.add(Category::Produce, "onion");

        assert_eq!(list.count(Category::Meat, "beef"), 2);
        assert_eq!(list.count(Category::Produce, "onion"), 1);
        assert_eq!(list.count(Category::Grains, "rice"), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_categories_listed_in_priority_order() {
        let mut list = ShoppingList::new();
        list.add(Category::Other, "milk");
        list.add(Category::Spices, "salt");
        list.add(Category::Meat, "chicken");

        let order: Vec<Category> = list.categories().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::Meat, Category::Spices, Category::Other]);
    }

    #[test]
    fn test_serializes_as_nested_object() {
        let mut list = ShoppingList::new();
        list.add(Category::Meat, "beef");
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!({"Meat": {"beef": 1}}));
    }
}
