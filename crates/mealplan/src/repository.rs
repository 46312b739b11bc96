use std::collections::HashMap;

use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, prelude::FromRow};
use time::OffsetDateTime;
use weekplate_db::table::WeeklyPlanSlot;
use weekplate_shared::mealplan::{DaySlots, WeeklyPlan, Weekday};

#[derive(FromRow)]
struct SlotRow {
    day: sqlx::types::Text<Weekday>,
    midday_id: Option<i64>,
    evening_id: Option<i64>,
}

/// Reads every stored day and resolves the referenced recipes.
pub async fn fetch_plan(conn: &mut SqliteConnection) -> anyhow::Result<WeeklyPlan> {
    let (sql, values) = Query::select()
        .columns([
            WeeklyPlanSlot::Day,
            WeeklyPlanSlot::MiddayId,
            WeeklyPlanSlot::EveningId,
        ])
        .from(WeeklyPlanSlot::Table)
        .build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, SlotRow, _>(&sql, values)
        .fetch_all(&mut *conn)
        .await?;

    let ids: Vec<i64> = rows
        .iter()
        .flat_map(|row| row.midday_id.into_iter().chain(row.evening_id))
        .collect();

    if ids.is_empty() {
        return Ok(WeeklyPlan::default());
    }

    let recipes: HashMap<_, _> = weekplate_recipe::fetch_recipes(conn, Some(&ids))
        .await?
        .into_iter()
        .map(|recipe| (recipe.id, recipe))
        .collect();

    Ok(WeeklyPlan::from_days(rows.into_iter().map(|row| DaySlots {
        day: row.day.0,
        midday: row.midday_id.and_then(|id| recipes.get(&id).cloned()),
        evening: row.evening_id.and_then(|id| recipes.get(&id).cloned()),
    })))
}

pub async fn upsert_slot(
    conn: &mut SqliteConnection,
    day: Weekday,
    midday: Option<i64>,
    evening: Option<i64>,
) -> anyhow::Result<()> {
    let (sql, values) = Query::insert()
        .into_table(WeeklyPlanSlot::Table)
        .columns([
            WeeklyPlanSlot::Day,
            WeeklyPlanSlot::MiddayId,
            WeeklyPlanSlot::EveningId,
            WeeklyPlanSlot::UpdatedAt,
        ])
        .values_panic([
            day.to_string().into(),
            midday.into(),
            evening.into(),
            OffsetDateTime::now_utc().unix_timestamp().into(),
        ])
        .on_conflict(
            OnConflict::column(WeeklyPlanSlot::Day)
                .update_columns([
                    WeeklyPlanSlot::MiddayId,
                    WeeklyPlanSlot::EveningId,
                    WeeklyPlanSlot::UpdatedAt,
                ])
                .to_owned(),
        )
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

/// Removes every stored day, leaving the week empty.
pub async fn purge(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    let (sql, values) = Query::delete()
        .from_table(WeeklyPlanSlot::Table)
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}
