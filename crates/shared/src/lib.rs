mod error;
pub mod backup;
pub mod mealplan;
pub mod recipe;

pub use error::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}
