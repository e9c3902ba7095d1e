use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Category, MealPlan, MealRecord, ShoppingList};
use crate::planner::{build_shopping_list, generate_plan, parse_day_count};
use crate::state::checklist::{CheckedItems, Section, SectionVisibility};
use crate::state::import::{load_meals, parse_meals};

/// Everything the shell displays, with the operations that change it.
///
/// Each operation either completes and replaces the affected fields, or
/// fails before touching anything.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    meals: Vec<MealRecord>,
    plan: MealPlan,
    shopping_list: ShoppingList,
    checked: CheckedItems,
    sections: SectionVisibility,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn checked(&self) -> &CheckedItems {
        &self.checked
    }

    pub fn sections(&self) -> &SectionVisibility {
        &self.sections
    }

    /// Replace the meal set from a file. Returns the number of meals imported.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let meals = load_meals(path.as_ref()).inspect_err(|e| {
            warn!(path = %path.as_ref().display(), error = %e, "meal import failed");
        })?;
        Ok(self.replace_meals(meals))
    }

    /// Replace the meal set from already-read text.
    pub fn import_text(&mut self, text: &str) -> usize {
        self.replace_meals(parse_meals(text))
    }

    fn replace_meals(&mut self, meals: Vec<MealRecord>) -> usize {
        self.meals = meals;
        self.meals.len()
    }

    /// Generate a plan from a raw day-count answer and rebuild the shopping list.
    ///
    /// Invalid input leaves every field as it was. On success all sections
    /// become visible again. Checked items are kept.
    pub fn generate_plan<R: Rng>(&mut self, day_input: &str, rng: &mut R) -> Result<&MealPlan> {
        let days = parse_day_count(day_input).inspect_err(|e| {
            warn!(input = day_input, error = %e, "plan generation aborted");
        })?;
        Ok(self.generate_plan_for_days(days, rng))
    }

    /// Same as [`AppState::generate_plan`] with an already-validated day count.
    pub fn generate_plan_for_days<R: Rng>(&mut self, days: usize, rng: &mut R) -> &MealPlan {
        let plan = generate_plan(&self.meals, days, rng);
        let shopping_list = build_shopping_list(&plan);

        info!(
            requested = days,
            planned = plan.len(),
            items = shopping_list.len(),
            "generated meal plan"
        );

        self.plan = plan;
        self.shopping_list = shopping_list;
        self.sections.show_all();
        &self.plan
    }

    pub fn toggle_section(&mut self, section: Section) -> bool {
        self.sections.toggle(section)
    }

    pub fn toggle_item(&mut self, category: Category, item: &str) -> bool {
        self.checked.toggle(category, item)
    }
}
