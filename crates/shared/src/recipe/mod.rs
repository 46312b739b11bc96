use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationError};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    #[strum(to_string = "midday", serialize = "midi")]
    #[serde(alias = "midi")]
    Midday,
    #[strum(to_string = "evening", serialize = "soir")]
    #[serde(alias = "soir")]
    Evening,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    #[default]
    #[strum(to_string = "g")]
    G,
    #[strum(to_string = "kg")]
    Kg,
    #[strum(to_string = "ml")]
    Ml,
    #[strum(
        to_string = "piece",
        serialize = "pieces",
        serialize = "pièce",
        serialize = "pièces"
    )]
    #[serde(alias = "pieces", alias = "pièce", alias = "pièces")]
    Piece,
}

impl IngredientUnit {
    /// Label printed next to a quantity. Only pieces get a plural form.
    pub fn label(&self, quantity: f64) -> &'static str {
        match self {
            IngredientUnit::G => "g",
            IngredientUnit::Kg => "kg",
            IngredientUnit::Ml => "ml",
            IngredientUnit::Piece if quantity > 1.0 => "pieces",
            IngredientUnit::Piece => "piece",
        }
    }
}

/// Grocery store aisle used to group the shopping list.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum IngredientCategory {
    /// Fresh vegetables, fruits and herbs
    #[strum(to_string = "Vegetables", serialize = "Légumes")]
    #[serde(rename = "Vegetables", alias = "Légumes")]
    Vegetables,
    /// Butcher and fishmonger
    #[strum(to_string = "Meats", serialize = "Viandes")]
    #[serde(rename = "Meats", alias = "Viandes")]
    Meats,
    /// Pasta, rice, potatoes, bread
    #[strum(to_string = "Starches", serialize = "Féculents")]
    #[serde(rename = "Starches", alias = "Féculents")]
    Starches,
    /// Dairy, eggs and the refrigerated aisle
    #[strum(to_string = "Fresh produce", serialize = "Produits frais")]
    #[serde(rename = "Fresh produce", alias = "Produits frais")]
    FreshProduce,
    /// Dry goods, cans, sauces, spices
    #[strum(to_string = "Grocery", serialize = "Épicerie")]
    #[serde(rename = "Grocery", alias = "Épicerie")]
    Grocery,
    #[default]
    #[strum(to_string = "Other", serialize = "Autres")]
    #[serde(rename = "Other", alias = "Autres")]
    Other,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}

fn positive_quantity(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new("quantity")
            .with_message("quantity must be a positive number".into()));
    }

    Ok(())
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "positive_quantity"))]
    pub quantity: f64,
    pub unit: IngredientUnit,
    #[serde(default)]
    pub category: Option<IngredientCategory>,
}

/// Recipe payload submitted for creation or update, without an id.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "select at least one meal time"))]
    pub tags: Vec<MealTime>,
    #[validate(length(min = 1, message = "a recipe needs at least one ingredient"), nested)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub tags: Vec<MealTime>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn from_draft(id: i64, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        }
    }

    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.to_owned(),
            tags: self.tags.to_owned(),
            ingredients: self.ingredients.to_owned(),
            instructions: self.instructions.to_owned(),
        }
    }

    pub fn has_tag(&self, meal_time: MealTime) -> bool {
        self.tags.contains(&meal_time)
    }
}

/// Narrows the catalog to the recipes offered for one slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    pub tag: Option<MealTime>,
    /// Case-insensitive name fragment, blank matches everything
    pub query: Option<String>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.tag.is_some_and(|tag| !recipe.has_tag(tag)) {
            return false;
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => recipe
                .name
                .to_lowercase()
                .contains(&query.to_lowercase()),
        }
    }
}
