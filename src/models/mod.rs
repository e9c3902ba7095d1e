mod meal;
mod plan;
mod shopping;

pub use meal::MealRecord;
pub use plan::{MealPlan, PlannedMeal};
pub use shopping::{Category, ShoppingList};
