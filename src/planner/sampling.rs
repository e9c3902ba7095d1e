use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{MealPlan, MealRecord, PlannedMeal};

/// Parse a user-supplied day count.
///
/// Leading whitespace, an optional sign and the leading run of digits are
/// read; anything after the digits is ignored, so `"7 days"` is 7 and `"3.5"`
/// is 3. Input without leading digits, zero and negative values are rejected.
/// Values too large for `usize` saturate.
pub fn parse_day_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return Err(PlanError::InvalidDayCount(format!(
            "'{}' is not a number",
            trimmed
        )));
    }

    // Only overflow can fail here.
    let days = digits.parse::<usize>().unwrap_or(usize::MAX);

    if negative || days == 0 {
        return Err(PlanError::InvalidDayCount(format!(
            "'{}' is not a positive number of days",
            trimmed
        )));
    }

    Ok(days)
}

/// Pick `min(days, meals.len())` distinct meals uniformly at random.
///
/// Partially shuffles the index range, so the number of random draws equals
/// the plan length.
pub fn generate_plan<R: Rng>(meals: &[MealRecord], days: usize, rng: &mut R) -> MealPlan {
    let target = days.min(meals.len());
    let mut indices: Vec<usize> = (0..meals.len()).collect();
    let (chosen, _) = indices.partial_shuffle(rng, target);

    debug!(
        requested = days,
        available = meals.len(),
        produced = target,
        "sampled meal plan"
    );

    MealPlan::new(
        chosen
            .iter()
            .map(|&i| PlannedMeal::new(i, meals[i].clone()))
            .collect(),
    )
}
