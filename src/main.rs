use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use meal_plan_maker_rs::cli::{Cli, Command, OutputFormat};
use meal_plan_maker_rs::error::Result;
use meal_plan_maker_rs::interface::{
    MenuAction, display_meal_plan, display_state, plan_to_json, prompt_checklist,
    prompt_day_count, prompt_find_item, prompt_menu, prompt_path, prompt_section,
    write_shopping_list_csv,
};
use meal_plan_maker_rs::planner::classify_ingredient;
use meal_plan_maker_rs::state::AppState;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so rendered output and JSON on stdout stay clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Interactive { meals, seed } => cmd_interactive(meals.as_deref(), seed),
        Command::Plan {
            meals,
            days,
            seed,
            format,
            export_list,
        } => cmd_plan(&meals, days, seed, format, export_list.as_deref()),
        Command::Classify { ingredients } => cmd_classify(&ingredients),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Import, plan, and print once.
fn cmd_plan(
    meals_path: &Path,
    days: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    export_list: Option<&Path>,
) -> Result<()> {
    let mut state = AppState::new();
    let count = state.import_file(meals_path)?;

    if format == OutputFormat::Text {
        println!("Loaded {} meals", count);
    }

    let day_input = match days {
        Some(days) => days,
        None => prompt_day_count()?,
    };

    let mut rng = make_rng(seed);
    state.generate_plan(&day_input, &mut rng)?;

    match format {
        OutputFormat::Text => {
            display_meal_plan(state.plan(), state.shopping_list(), state.checked())
        }
        OutputFormat::Json => println!(
            "{}",
            plan_to_json(state.plan(), state.shopping_list())?
        ),
    }

    if let Some(path) = export_list {
        write_shopping_list_csv(state.shopping_list(), state.checked(), path)?;
        info!(path = %path.display(), "exported shopping list");
        if format == OutputFormat::Text {
            println!("Shopping list written to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_classify(ingredients: &[String]) -> Result<()> {
    let width = ingredients.iter().map(|i| i.len()).max().unwrap_or(0);
    for ingredient in ingredients {
        println!(
            "{:<width$}  {}",
            ingredient,
            classify_ingredient(ingredient),
            width = width
        );
    }
    Ok(())
}

/// Menu loop over a single application state.
///
/// Failures inside an action are reported and the loop continues with the
/// state unchanged. Only prompt I/O errors end the session.
fn cmd_interactive(meals: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let mut state = AppState::new();
    let mut rng = make_rng(seed);
    let mut last_path: Option<PathBuf> = None;

    if let Some(path) = meals {
        load_into(&mut state, path);
        last_path = Some(path.to_path_buf());
    }

    loop {
        display_state(&state);
        println!();

        match prompt_menu()? {
            MenuAction::LoadMeals => {
                let default = last_path.as_ref().map(|p| p.display().to_string());
                if let Some(path) = prompt_path("Path to meals CSV", default.as_deref())? {
                    let path = PathBuf::from(path);
                    load_into(&mut state, &path);
                    last_path = Some(path);
                }
            }
            MenuAction::GeneratePlan => {
                let input = prompt_day_count()?;
                match state.generate_plan(&input, &mut rng) {
                    Ok(plan) if plan.is_empty() => {
                        println!("No meals loaded, so the plan is empty.")
                    }
                    Ok(plan) => println!("Planned {} days.", plan.len()),
                    Err(e) => eprintln!("Plan not generated: {}", e),
                }
            }
            MenuAction::ToggleSection => {
                let sections = *state.sections();
                let section = prompt_section(|s| sections.is_visible(s))?;
                state.toggle_section(section);
            }
            MenuAction::CheckItems => {
                let changed = prompt_checklist(state.shopping_list(), state.checked())?;
                for (category, item) in changed {
                    state.toggle_item(category, &item);
                }
            }
            MenuAction::FindItem => {
                if state.shopping_list().is_empty() {
                    println!("The shopping list is empty. Generate a meal plan first.");
                } else if let Some((category, item)) = prompt_find_item(state.shopping_list())? {
                    let now = state.toggle_item(category, &item);
                    let mark = if now { "checked" } else { "unchecked" };
                    println!("{} ({}) {}", item, category, mark);
                }
            }
            MenuAction::ExportList => {
                if state.shopping_list().is_empty() {
                    println!("The shopping list is empty. Generate a meal plan first.");
                } else if let Some(path) =
                    prompt_path("Write shopping list to", Some("shopping_list.csv"))?
                {
                    match write_shopping_list_csv(
                        state.shopping_list(),
                        state.checked(),
                        Path::new(&path),
                    ) {
                        Ok(()) => println!("Shopping list written to {}", path),
                        Err(e) => eprintln!("Export failed: {}", e),
                    }
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn load_into(state: &mut AppState, path: &Path) {
    match state.import_file(path) {
        Ok(count) => println!("Loaded {} meals from {}", count, path.display()),
        Err(e) => eprintln!("Could not load {}: {}", path.display(), e),
    }
}
