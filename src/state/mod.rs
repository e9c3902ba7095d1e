mod app;
mod checklist;
mod import;

pub use app::AppState;
pub use checklist::{CheckKey, CheckedItems, Section, SectionVisibility};
pub use import::{load_meals, parse_meals};
