use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::MealRecord;
use crate::planner::constants::{FIELD_DELIMITER, MEAL_FIELD_COUNT};

/// Parse meal rows from delimited text.
///
/// The first line is a header and is dropped. Each remaining line is split
/// into at most four fields, so the ingredient field keeps any further
/// delimiters. Missing trailing fields become empty strings. Rows with an
/// empty name are dropped. There is no quoting or escaping.
pub fn parse_meals(text: &str) -> Vec<MealRecord> {
    let mut skipped = 0usize;

    let meals: Vec<MealRecord> = text
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.splitn(MEAL_FIELD_COUNT, FIELD_DELIMITER);
            let mut next = || fields.next().unwrap_or_default().to_string();

            let meal = MealRecord {
                name: next(),
                main_dish: next(),
                side_dish: next(),
                ingredients: next(),
            };

            if meal.name.is_empty() {
                skipped += 1;
                None
            } else {
                Some(meal)
            }
        })
        .collect();

    debug!(imported = meals.len(), skipped, "parsed meal rows");
    meals
}

/// Read and parse a meals file.
///
/// The whole file is read before parsing, so a read failure produces no
/// records at all.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MealRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let meals = parse_meals(&content);
    info!(path = %path.display(), meals = meals.len(), "loaded meals");
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_taco_row() {
        let meals = parse_meals("Meal,Main,Side,Ingredients\nTaco,Beef Taco,Rice,beef,rice,onion");
        assert_eq!(
            meals,
            vec![MealRecord::new("Taco", "Beef Taco", "Rice", "beef,rice,onion")]
        );
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_meals("Meal,Main,Side,Ingredients").is_empty());
        assert!(parse_meals("").is_empty());
    }

    #[test]
    fn test_header_is_always_dropped() {
        // The first line is dropped even if it looks like data.
        let meals = parse_meals("Taco,Beef Taco,Rice,beef\nSoup,Broth,Bread,carrot");
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Soup");
    }

    #[test]
    fn test_short_rows_fill_with_empty_fields() {
        let meals = parse_meals("h\nToast\nEggs,Scrambled\nStew,Beef Stew,Bread");
        assert_eq!(
            meals,
            vec![
                MealRecord::new("Toast", "", "", ""),
                MealRecord::new("Eggs", "Scrambled", "", ""),
                MealRecord::new("Stew", "Beef Stew", "Bread", ""),
            ]
        );
    }

    #[test]
    fn test_rows_without_name_are_dropped() {
        let text = "h\n,Main,Side,beef\n\nPasta,Spaghetti,Salad,pasta\n,,,\n";
        let meals = parse_meals(text);
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Pasta");
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let text = "h\nB,,,\nA,,,\nB,,,x";
        let names: Vec<String> = parse_meals(text).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let meals = parse_meals("Meal,Main,Side,Ingredients\r\nTaco,Beef Taco,Rice,beef\r\n");
        assert_eq!(meals, vec![MealRecord::new("Taco", "Beef Taco", "Rice", "beef")]);
    }

    #[test]
    fn test_load_meals_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Meal,Main,Side,Ingredients\nTaco,Beef Taco,Rice,beef,rice\nCurry,Chicken Curry,Naan,chicken,rice,curry spice\n")
            .unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[1].ingredients, "chicken,rice,curry spice");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_meals(dir.path().join("missing.csv")).is_err());
    }
}
