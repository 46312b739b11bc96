use weekplate_shared::mealplan::WeeklyPlan;
use weekplate_shared::recipe::Recipe;

use crate::{GroceryItem, GroceryList};

const TABLE_WIDTH: usize = 100;
const DAY_WIDTH: usize = 10;
const MEAL_WIDTH: usize = 40;
const COLUMN_WIDTH: usize = 50;
const NO_MEAL: &str = "No meal";

fn line(c: char, len: usize) -> String {
    let mut line = c.to_string().repeat(len);
    line.push('\n');
    line
}

fn row(day: &str, midday: &str, evening: &str) -> String {
    format!("| {day:<DAY_WIDTH$} | {midday:<MEAL_WIDTH$} | {evening:<MEAL_WIDTH$} |\n")
}

fn meal_cell(recipe: Option<&Recipe>) -> String {
    match recipe {
        Some(recipe) => recipe.name.chars().take(MEAL_WIDTH).collect(),
        None => NO_MEAL.to_owned(),
    }
}

/// Shortest decimal form, `2` rather than `2.0`.
pub fn format_quantity(quantity: f64) -> String {
    quantity.to_string()
}

fn item_cell(item: &GroceryItem) -> String {
    format!(
        "□ {}: {} {}",
        item.name,
        format_quantity(item.quantity),
        item.unit.label(item.quantity)
    )
}

/// Renders the printable weekly plan followed by the grocery list.
///
/// The layout is fixed width: every table row is 100 characters and the
/// grocery items are printed on two columns, the left one padded to 50.
pub fn format_plan(plan: &WeeklyPlan, groceries: &GroceryList) -> String {
    let mut out = String::from("WEEKLY PLAN\n");
    out.push_str(&line('=', TABLE_WIDTH));
    out.push('\n');

    out.push_str(&row("DAY", "MIDDAY", "EVENING"));
    out.push_str(&line('-', TABLE_WIDTH));

    for slots in plan.days() {
        out.push_str(&row(
            slots.day.title(),
            &meal_cell(slots.midday.as_ref()),
            &meal_cell(slots.evening.as_ref()),
        ));
        out.push_str(&line('-', TABLE_WIDTH));
    }

    out.push_str(&line('=', TABLE_WIDTH));

    out.push_str("\nGROCERY LIST\n");
    out.push_str(&line('=', COLUMN_WIDTH));
    out.push('\n');

    for section in groceries.sorted().sections() {
        let heading = section.category.to_string();
        out.push('\n');
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&line('-', heading.chars().count()));
        out.push('\n');

        let (left, right) = section.items.split_at(section.items.len().div_ceil(2));

        for (i, item) in left.iter().enumerate() {
            out.push_str(&format!("{:<COLUMN_WIDTH$}", item_cell(item)));
            if let Some(item) = right.get(i) {
                out.push_str(&item_cell(item));
            }
            out.push('\n');
        }
    }

    out.push_str("\n\nNotes:\n");
    out.push_str(&line('-', COLUMN_WIDTH));
    out.push_str("\n\n\n\n");

    out
}
