use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::Row;
use temp_dir::TempDir;
use weekplate_db::table::WeeklyPlanSlot;
use weekplate_shared::recipe::MealTime;

mod helpers;

#[tokio::test]
async fn test_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = weekplate_recipe::Command::new(state.clone());

    let recipe = cmd
        .create(helpers::draft("Ratatouille", vec![MealTime::Evening]))
        .await?;
    let other = cmd
        .create(helpers::draft("Salad", vec![MealTime::Midday]))
        .await?;

    let (sql, values) = Query::insert()
        .into_table(WeeklyPlanSlot::Table)
        .columns([
            WeeklyPlanSlot::Day,
            WeeklyPlanSlot::MiddayId,
            WeeklyPlanSlot::EveningId,
            WeeklyPlanSlot::UpdatedAt,
        ])
        .values_panic(["monday".into(), other.id.into(), recipe.id.into(), 0.into()])
        .values_panic(["tuesday".into(), recipe.id.into(), recipe.id.into(), 0.into()])
        .build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&state.write_db).await?;

    cmd.delete(recipe.id).await?;

    let recipes = cmd.list().await?;
    assert_eq!(recipes, vec![other.clone()]);

    let rows = sqlx::query("SELECT day, midday_id, evening_id FROM weekly_plan_slot ORDER BY day")
        .fetch_all(&state.read_db)
        .await?;
    let slots: Vec<(String, Option<i64>, Option<i64>)> = rows
        .iter()
        .map(|r| (r.get("day"), r.get("midday_id"), r.get("evening_id")))
        .collect();
    assert_eq!(
        slots,
        vec![
            ("monday".to_owned(), Some(other.id), None),
            ("tuesday".to_owned(), None, None),
        ]
    );

    let err = cmd.delete(recipe.id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("recipe {} not found", recipe.id));

    Ok(())
}
