mod generate;
mod repository;

use std::{ops::Deref, str::FromStr};

use weekplate_shared::mealplan::{DaySlots, WeeklyPlan, Weekday};

pub use generate::pick_week;
pub use repository::{fetch_plan, purge, upsert_slot};

#[derive(Clone)]
pub struct Command(pub weekplate_shared::State);

impl Deref for Command {
    type Target = weekplate_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: weekplate_shared::State) -> Self {
        Self(state)
    }

    /// The seven days Monday to Sunday. Days never assigned read as empty.
    pub async fn get(&self) -> weekplate_shared::Result<WeeklyPlan> {
        let mut conn = self.read_db.acquire().await?;

        Ok(fetch_plan(&mut conn).await?)
    }

    /// Assigns both slots of one day, replacing what was there.
    pub async fn set(
        &self,
        day: &str,
        midday: Option<i64>,
        evening: Option<i64>,
    ) -> weekplate_shared::Result<DaySlots> {
        let Ok(weekday) = Weekday::from_str(day.trim().to_lowercase().as_str()) else {
            weekplate_shared::bail!("unknown day {day}");
        };

        let ids: Vec<i64> = midday.into_iter().chain(evening).collect();
        let mut tx = self.write_db.begin().await?;

        for id in ids.iter() {
            if !weekplate_recipe::recipe_exists(&mut tx, *id).await? {
                weekplate_shared::bail!("recipe {id} does not exist");
            }
        }

        upsert_slot(&mut tx, weekday, midday, evening).await?;
        let recipes = weekplate_recipe::fetch_recipes(&mut tx, Some(&ids)).await?;
        tx.commit().await?;

        let resolve =
            |id: Option<i64>| id.and_then(|id| recipes.iter().find(|r| r.id == id).cloned());

        Ok(DaySlots {
            day: weekday,
            midday: resolve(midday),
            evening: resolve(evening),
        })
    }

    /// Empties every slot of the week.
    pub async fn clear(&self) -> weekplate_shared::Result<WeeklyPlan> {
        let mut tx = self.write_db.begin().await?;
        purge(&mut tx).await?;
        tx.commit().await?;

        Ok(WeeklyPlan::default())
    }
}
