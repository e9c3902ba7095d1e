pub mod export;
pub mod prompts;
pub mod render;

pub use export::{plan_to_json, write_shopping_list, write_shopping_list_csv};
pub use prompts::{
    MenuAction, find_item_candidates, prompt_checklist, prompt_day_count, prompt_find_item,
    prompt_menu, prompt_path, prompt_section, prompt_yes_no,
};
pub use render::{
    display_meal_plan, display_state, render_meal_plan, render_meals, render_shopping_list,
    section_header,
};
