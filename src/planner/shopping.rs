use tracing::debug;

use crate::models::{MealPlan, ShoppingList};
use crate::planner::categories::classify_ingredient;

/// Build a fresh shopping list from every ingredient of every planned meal.
///
/// Each trimmed ingredient occurrence adds one to its (category, item) count.
/// Meals with an empty ingredient field contribute nothing.
pub fn build_shopping_list(plan: &MealPlan) -> ShoppingList {
    let mut list = ShoppingList::new();

    for meal in plan.meals() {
        for ingredient in meal.ingredient_list() {
            list.add(classify_ingredient(ingredient), ingredient);
        }
    }

    debug!(
        meals = plan.len(),
        items = list.len(),
        "built shopping list"
    );

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MealRecord, PlannedMeal};

    fn plan_of(meals: Vec<MealRecord>) -> MealPlan {
        MealPlan::new(
            meals
                .into_iter()
                .enumerate()
                .map(|(i, m)| PlannedMeal::new(i, m))
                .collect(),
        )
    }

    #[test]
    fn test_single_taco_meal() {
        let plan = plan_of(vec![MealRecord::new(
            "Taco",
            "Beef Taco",
            "Rice",
            "beef,rice,onion",
        )]);
        let list = build_shopping_list(&plan);

        assert_eq!(list.count(Category::Meat, "beef"), 1);
        assert_eq!(list.count(Category::Grains, "rice"), 1);
        assert_eq!(list.count(Category::Produce, "onion"), 1);
        assert_eq!(list.len(), 3);
        let categories: Vec<Category> = list.categories().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![Category::Meat, Category::Grains, Category::Produce]
        );
    }

    #[test]
    fn test_counts_duplicates_across_meals() {
        let plan = plan_of(vec![
            MealRecord::new("Taco", "", "", "beef, rice, onion"),
            MealRecord::new("Stir Fry", "", "", "chicken,rice,soy sauce,onion"),
            MealRecord::new("Burger", "", "", "beef,onion,salt"),
        ]);
        let list = build_shopping_list(&plan);

        assert_eq!(list.count(Category::Meat, "beef"), 2);
        assert_eq!(list.count(Category::Meat, "chicken"), 1);
        assert_eq!(list.count(Category::Grains, "rice"), 2);
        assert_eq!(list.count(Category::Produce, "onion"), 3);
        assert_eq!(list.count(Category::Sauces, "soy sauce"), 1);
        assert_eq!(list.count(Category::Spices, "salt"), 1);
    }

    #[test]
    fn test_total_count_matches_ingredient_occurrences() {
        let plan = plan_of(vec![
            MealRecord::new("A", "", "", "beef,beef,milk"),
            MealRecord::new("B", "", "", "milk,pasta"),
        ]);
        let list = build_shopping_list(&plan);

        let total: u32 = list.entries().map(|(_, _, count)| count).sum();
        assert_eq!(total, 5);
        assert!(list.entries().all(|(_, _, count)| count > 0));
    }

    #[test]
    fn test_empty_ingredient_field_is_skipped() {
        let plan = plan_of(vec![
            MealRecord::new("Leftovers", "Whatever", "", ""),
            MealRecord::new("Pasta", "", "", "pasta"),
        ]);
        let list = build_shopping_list(&plan);

        assert_eq!(list.len(), 1);
        assert_eq!(list.count(Category::Grains, "pasta"), 1);
    }

    #[test]
    fn test_item_spelling_is_preserved() {
        let plan = plan_of(vec![MealRecord::new("A", "", "", "Beef,beef")]);
        let list = build_shopping_list(&plan);

        assert_eq!(list.count(Category::Meat, "Beef"), 1);
        assert_eq!(list.count(Category::Meat, "beef"), 1);
    }

    #[test]
    fn test_empty_plan_gives_empty_list() {
        let list = build_shopping_list(&MealPlan::default());
        assert!(list.is_empty());
    }
}
