use serde::Serialize;

use crate::models::MealRecord;

/// A meal scheduled for one day of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMeal {
    /// Position of the meal in the imported set.
    pub source_index: usize,

    pub meal: MealRecord,
}

impl PlannedMeal {
    pub fn new(source_index: usize, meal: MealRecord) -> Self {
        Self { source_index, meal }
    }
}

/// An ordered plan, one entry per day. Entries never repeat a source index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: Vec<PlannedMeal>,
}

impl MealPlan {
    pub fn new(days: Vec<PlannedMeal>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[PlannedMeal] {
        &self.days
    }

    /// Iterate meals with their 1-based day number.
    pub fn iter_days(&self) -> impl Iterator<Item = (usize, &MealRecord)> {
        self.days.iter().enumerate().map(|(i, p)| (i + 1, &p.meal))
    }

    pub fn meals(&self) -> impl Iterator<Item = &MealRecord> {
        self.days.iter().map(|p| &p.meal)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
