mod recipe_catalog;
mod recipe_catalog_name_idx;
mod recipe_ingredient;
mod weekly_plan_slot;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "weekplate",
    "m0_1",
    vec_box![],
    vec_box![
        recipe_catalog::CreateTable,
        recipe_catalog_name_idx::Operation,
        recipe_ingredient::CreateTable,
        weekly_plan_slot::CreateTable
    ]
);
