pub mod categories;
pub mod constants;
pub mod sampling;
pub mod shopping;

pub use categories::classify_ingredient;
pub use constants::*;
pub use sampling::{generate_plan, parse_day_count};
pub use shopping::build_shopping_list;
