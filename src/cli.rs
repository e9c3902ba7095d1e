use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// MealPlanMaker — turn a CSV of meals into a random meal plan and a shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Menu-driven session: load meals, generate plans, tick off the shopping list.
    Interactive {
        /// Meals CSV to load at startup.
        #[arg(short, long)]
        meals: Option<PathBuf>,

        /// Random seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a single plan and shopping list, then exit.
    Plan {
        /// Meals CSV (header line, then meal,main dish,side dish,ingredients...).
        #[arg(short, long)]
        meals: PathBuf,

        /// Number of days to plan. Prompted for when omitted.
        #[arg(short, long)]
        days: Option<String>,

        /// Random seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the shopping list to this CSV file.
        #[arg(long)]
        export_list: Option<PathBuf>,
    },

    /// Print the shopping category of each ingredient.
    Classify {
        /// Ingredient names.
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive {
            meals: None,
            seed: None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
