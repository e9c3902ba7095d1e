use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Category, ShoppingList};
use crate::planner::constants::DEFAULT_DAYS;
use crate::state::{CheckedItems, Section};

/// Minimum Jaro-Winkler similarity for a fuzzy item match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of close matches offered for selection.
const MAX_SUGGESTIONS: usize = 5;

/// Top-level actions offered by the interactive shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadMeals,
    GeneratePlan,
    ToggleSection,
    CheckItems,
    FindItem,
    ExportList,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::LoadMeals,
        MenuAction::GeneratePlan,
        MenuAction::ToggleSection,
        MenuAction::CheckItems,
        MenuAction::FindItem,
        MenuAction::ExportList,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::LoadMeals => "Load meals CSV",
            MenuAction::GeneratePlan => "Generate meal plan",
            MenuAction::ToggleSection => "Show/hide a section",
            MenuAction::CheckItems => "Check off shopping items",
            MenuAction::FindItem => "Find and toggle an item by name",
            MenuAction::ExportList => "Export shopping list",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next shell action.
pub fn prompt_menu() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MenuAction::ALL[selection])
}

/// Prompt for a file path. Returns `None` when left blank.
pub fn prompt_path(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let path = input.interact_text()?;
    let path = path.trim();
    Ok((!path.is_empty()).then(|| path.to_string()))
}

/// Prompt for the number of days to plan.
///
/// Returns the raw answer; validation happens when the plan is generated.
pub fn prompt_day_count() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Enter number of days to plan for")
        .default(DEFAULT_DAYS.to_string())
        .interact_text()?;
    Ok(input)
}

/// Prompt for a section to show or hide.
pub fn prompt_section(visible: impl Fn(Section) -> bool) -> Result<Section> {
    let labels: Vec<String> = Section::ALL
        .iter()
        .map(|s| {
            let state = if visible(*s) { "shown" } else { "hidden" };
            format!("{} ({})", s.title(), state)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Toggle which section?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Section::ALL[selection])
}

/// Let the user tick shopping list items.
///
/// Returns the items whose checked state differs from before, i.e. the ones
/// to toggle.
pub fn prompt_checklist(
    list: &ShoppingList,
    checked: &CheckedItems,
) -> Result<Vec<(Category, String)>> {
    let entries: Vec<(Category, &str, u32)> = list.entries().collect();
    if entries.is_empty() {
        println!("The shopping list is empty. Generate a meal plan first.");
        return Ok(Vec::new());
    }

    let labels: Vec<String> = entries
        .iter()
        .map(|(category, item, count)| format!("{}: {} ({}x)", category, item, count))
        .collect();
    let defaults: Vec<bool> = entries
        .iter()
        .map(|(category, item, _)| checked.is_checked(*category, item))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Space to check, Enter to confirm")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(entries
        .iter()
        .enumerate()
        .filter(|(i, _)| selected.contains(i) != defaults[*i])
        .map(|(_, (category, item, _))| (*category, item.to_string()))
        .collect())
}

/// Rank shopping list items against a typed name.
///
/// An exact case-insensitive match is returned alone. Otherwise items above
/// the similarity threshold come back best first.
pub fn find_item_candidates(list: &ShoppingList, query: &str) -> Vec<(Category, String, f64)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some((category, item, _)) = list
        .entries()
        .find(|(_, item, _)| item.to_lowercase() == query)
    {
        return vec![(category, item.to_string(), 1.0)];
    }

    let mut candidates: Vec<(Category, String, f64)> = list
        .entries()
        .map(|(category, item, _)| {
            (
                category,
                item.to_string(),
                jaro_winkler(&item.to_lowercase(), &query),
            )
        })
        .filter(|(_, _, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Ask for an item name and resolve it against the shopping list.
pub fn prompt_find_item(list: &ShoppingList) -> Result<Option<(Category, String)>> {
    let input: String = Input::new()
        .with_prompt("Item name")
        .allow_empty(true)
        .interact_text()?;

    let mut candidates = find_item_candidates(list, &input);

    if candidates.is_empty() {
        println!("No matching item found for '{}'", input.trim());
        return Ok(None);
    }

    if candidates.len() == 1 {
        let (category, item, score) = candidates.remove(0);
        if score >= 1.0 {
            return Ok(Some((category, item)));
        }
        let confirm = prompt_yes_no(&format!("Did you mean '{}' ({})?", item, category), true)?;
        return Ok(confirm.then_some((category, item)));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|(category, item, _)| format!("{} ({})", item, category))
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        let (category, item, _) = candidates.swap_remove(selection);
        Ok(Some((category, item)))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
