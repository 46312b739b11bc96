use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use weekplate_shared::mealplan::WeeklyPlan;

use crate::{routes::AppState, template::render};

#[derive(askama::Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub plan: WeeklyPlan,
    pub groceries: Vec<(String, Vec<String>)>,
    pub recipe_count: usize,
}

pub async fn auth() -> impl IntoResponse {
    render(AuthTemplate)
}

pub async fn index(State(state): State<AppState>) -> Response {
    let plan = crate::try_page_response!(state.mealplan_command.get());
    let recipes = crate::try_page_response!(state.recipe_command.list());

    let groceries = weekplate_shopping::aggregate(&plan)
        .sorted()
        .sections()
        .iter()
        .map(|section| {
            let lines = section
                .items
                .iter()
                .map(|item| {
                    format!(
                        "{}: {} {}",
                        item.name,
                        weekplate_shopping::format_quantity(item.quantity),
                        item.unit.label(item.quantity)
                    )
                })
                .collect();

            (section.category.to_string(), lines)
        })
        .collect();

    render(IndexTemplate {
        plan,
        groceries,
        recipe_count: recipes.len(),
    })
}
