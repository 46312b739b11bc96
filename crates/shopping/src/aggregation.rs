use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use weekplate_shared::mealplan::WeeklyPlan;
use weekplate_shared::recipe::{IngredientCategory, IngredientUnit};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: IngredientUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrocerySection {
    pub category: IngredientCategory,
    pub items: Vec<GroceryItem>,
}

/// Shopping list derived from a weekly plan, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroceryList(Vec<GrocerySection>);

impl GroceryList {
    pub fn sections(&self) -> &[GrocerySection] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn section(&self, category: IngredientCategory) -> Option<&GrocerySection> {
        self.0.iter().find(|s| s.category == category)
    }

    /// Same list with the items of each section ordered by name, ignoring
    /// case first and falling back to a plain comparison.
    pub fn sorted(&self) -> Self {
        let mut list = self.clone();
        for section in list.0.iter_mut() {
            section.items.sort_by(|a, b| compare_names(&a.name, &b.name));
        }

        list
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sums every ingredient of every planned meal by name and unit.
///
/// Units are never converted, so `Flour 200 g` and `Flour 1 kg` stay two
/// lines. A merged line keeps the category of its first occurrence and
/// ingredients without a category land in [`IngredientCategory::Other`].
/// Sections and items keep the order in which they were first met.
pub fn aggregate(plan: &WeeklyPlan) -> GroceryList {
    let mut merged: Vec<(IngredientCategory, GroceryItem)> = vec![];
    let mut positions: HashMap<(String, IngredientUnit), usize> = HashMap::new();

    let ingredients = plan
        .days()
        .iter()
        .flat_map(|slots| slots.recipes())
        .flat_map(|recipe| recipe.ingredients.iter());

    for ingredient in ingredients {
        let key = (ingredient.name.to_owned(), ingredient.unit);

        if let Some(position) = positions.get(&key) {
            merged[*position].1.quantity += ingredient.quantity;
            continue;
        }

        positions.insert(key, merged.len());
        merged.push((
            ingredient.category.unwrap_or_default(),
            GroceryItem {
                name: ingredient.name.to_owned(),
                quantity: ingredient.quantity,
                unit: ingredient.unit,
            },
        ));
    }

    let mut sections: Vec<GrocerySection> = vec![];
    for (category, item) in merged {
        match sections.iter_mut().find(|s| s.category == category) {
            Some(section) => section.items.push(item),
            None => sections.push(GrocerySection {
                category,
                items: vec![item],
            }),
        }
    }

    GroceryList(sections)
}
