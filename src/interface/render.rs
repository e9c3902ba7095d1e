use crate::models::{MealPlan, MealRecord, ShoppingList};
use crate::state::{AppState, CheckedItems, Section};

/// Collapsible section header, `▼` when open and `▶` when closed.
pub fn section_header(section: Section, visible: bool) -> String {
    let marker = if visible { "▼" } else { "▶" };
    format!("=== {} {} ===", section.title(), marker)
}

/// Left-aligned text table with a dashed rule under the header.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_row(headers.iter().copied(), &widths), rule];
    lines.extend(
        rows.iter()
            .map(|row| format_row(row.iter().map(String::as_str), &widths)),
    );

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn render_meals(meals: &[MealRecord]) -> String {
    let rows: Vec<Vec<String>> = meals
        .iter()
        .map(|m| {
            vec![
                m.name.clone(),
                m.main_dish.clone(),
                m.side_dish.clone(),
                m.ingredients.clone(),
            ]
        })
        .collect();
    render_table(&["Meal", "Main Dish", "Side Dish", "Ingredients"], &rows)
}

pub fn render_meal_plan(plan: &MealPlan) -> String {
    let rows: Vec<Vec<String>> = plan
        .iter_days()
        .map(|(day, m)| {
            vec![
                format!("Day {}", day),
                m.name.clone(),
                m.main_dish.clone(),
                m.side_dish.clone(),
            ]
        })
        .collect();
    render_table(&["Day", "Meal", "Main Dish", "Side Dish"], &rows)
}

/// Shopping list grouped by category, one checkbox line per item.
pub fn render_shopping_list(list: &ShoppingList, checked: &CheckedItems) -> String {
    let mut out = String::new();

    for (category, items) in list.categories() {
        out.push_str(&format!("{}\n", category));
        for (item, count) in items {
            let mark = if checked.is_checked(category, item) {
                "x"
            } else {
                " "
            };
            out.push_str(&format!("  [{}] {} ({}x)\n", mark, item, count));
        }
    }

    out
}

/// Print every non-empty section of the state in display order.
pub fn display_state(state: &AppState) {
    let sections = state.sections();

    if !state.meals().is_empty() {
        display_section(Section::AvailableMeals, sections.available_meals, || {
            render_meals(state.meals())
        });
    }

    if !state.plan().is_empty() {
        display_section(Section::MealPlan, sections.meal_plan, || {
            render_meal_plan(state.plan())
        });
    }

    if !state.shopping_list().is_empty() {
        display_section(Section::ShoppingList, sections.shopping_list, || {
            render_shopping_list(state.shopping_list(), state.checked())
        });
    }

    if state.meals().is_empty() && state.plan().is_empty() {
        println!("No meals loaded. Load a CSV file to get started.");
    }
}

fn display_section(section: Section, visible: bool, body: impl FnOnce() -> String) {
    println!();
    println!("{}", section_header(section, visible));
    if visible {
        println!();
        print!("{}", body());
    }
}

/// Print the plan and shopping list, as shown after a one-shot `plan` run.
pub fn display_meal_plan(plan: &MealPlan, list: &ShoppingList, checked: &CheckedItems) {
    if plan.is_empty() {
        println!("No meal plan generated (no meals available).");
        return;
    }

    println!();
    println!("{}", section_header(Section::MealPlan, true));
    println!();
    print!("{}", render_meal_plan(plan));

    println!();
    println!("{}", section_header(Section::ShoppingList, true));
    println!();
    print!("{}", render_shopping_list(list, checked));

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", plan.len());
    println!("Distinct items: {}", list.len());
    println!(
        "Total items: {}",
        list.entries().map(|(_, _, count)| count).sum::<u32>()
    );
    println!();
}
