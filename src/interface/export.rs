use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{MealPlan, ShoppingList};
use crate::state::CheckedItems;

/// Write the shopping list as CSV with a `category,item,count,checked` header.
pub fn write_shopping_list<W: io::Write>(
    list: &ShoppingList,
    checked: &CheckedItems,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["category", "item", "count", "checked"])?;

    for (category, item, count) in list.entries() {
        wtr.write_record([
            category.as_str(),
            item,
            count.to_string().as_str(),
            if checked.is_checked(category, item) {
                "true"
            } else {
                "false"
            },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the shopping list CSV to a file.
pub fn write_shopping_list_csv(
    list: &ShoppingList,
    checked: &CheckedItems,
    path: &Path,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_shopping_list(list, checked, file)
}

#[derive(Serialize)]
struct PlanDay<'a> {
    day: usize,
    meal: &'a str,
    main_dish: &'a str,
    side_dish: &'a str,
    ingredients: &'a str,
}

#[derive(Serialize)]
struct PlanDocument<'a> {
    plan: Vec<PlanDay<'a>>,
    shopping_list: &'a ShoppingList,
}

/// Render a plan and its shopping list as pretty-printed JSON.
pub fn plan_to_json(plan: &MealPlan, list: &ShoppingList) -> Result<String> {
    let document = PlanDocument {
        plan: plan
            .iter_days()
            .map(|(day, meal)| PlanDay {
                day,
                meal: &meal.name,
                main_dish: &meal.main_dish,
                side_dish: &meal.side_dish,
                ingredients: &meal.ingredients,
            })
            .collect(),
        shopping_list: list,
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MealRecord, PlannedMeal};
    use crate::planner::build_shopping_list;

    fn taco_plan() -> MealPlan {
        MealPlan::new(vec![PlannedMeal::new(
            0,
            MealRecord::new("Taco", "Beef Taco", "Rice", "beef,rice,onion"),
        )])
    }

    #[test]
    fn test_csv_rows() {
        let plan = taco_plan();
        let list = build_shopping_list(&plan);
        let mut checked = CheckedItems::new();
        checked.toggle(Category::Grains, "rice");

        let mut buf = Vec::new();
        write_shopping_list(&list, &checked, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "category,item,count,checked\n\
             Meat,beef,1,false\n\
             Grains,rice,1,true\n\
             Produce,onion,1,false\n"
        );
    }

    #[test]
    fn test_csv_quotes_items_with_commas() {
        let mut list = ShoppingList::new();
        list.add(Category::Other, "salt, to taste");

        let mut buf = Vec::new();
        write_shopping_list(&list, &CheckedItems::new(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Other,\"salt, to taste\",1,false"));
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = taco_plan();
        let list = build_shopping_list(&plan);

        let json: serde_json::Value = serde_json::from_str(&plan_to_json(&plan, &list).unwrap()).unwrap();
        assert_eq!(json["plan"][0]["day"], 1);
        assert_eq!(json["plan"][0]["meal"], "Taco");
        assert_eq!(json["plan"][0]["main_dish"], "Beef Taco");
        assert_eq!(json["shopping_list"]["Produce"]["onion"], 1);
    }
}
