use axum::{
    Router, middleware,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod auth;
mod export;
mod grocery;
mod health;
mod pages;
mod recipes;
mod weekly_plan;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub recipe_command: weekplate_recipe::Command,
    pub mealplan_command: weekplate_mealplan::Command,
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(pages::index))
        .route("/auth", get(pages::auth))
        .route("/api/auth", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/api/recipes/{id}",
            get(recipes::find)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/api/weekly-plan",
            get(weekly_plan::get)
                .put(weekly_plan::set)
                .delete(weekly_plan::clear),
        )
        .route("/api/weekly-plan/generate", post(weekly_plan::generate))
        .route("/api/grocery-list", get(grocery::list))
        .route("/api/export/plan", get(export::plan))
        .route("/api/export/backup", get(export::backup))
        .route("/api/import/backup", post(export::import))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::middleware::access_gate,
        ))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::middleware::https_middleware,
        ))
        .with_state(app_state)
}
