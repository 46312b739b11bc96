use rand::seq::IndexedRandom;
use strum::VariantArray;
use weekplate_shared::mealplan::{DaySlots, WeeklyPlan, Weekday};
use weekplate_shared::recipe::{MealTime, Recipe};

/// Draws one recipe per slot among the recipes tagged for it. A slot stays
/// empty when no recipe carries its tag.
pub fn pick_week<R>(recipes: &[Recipe], rng: &mut R) -> WeeklyPlan
where
    R: rand::Rng + ?Sized,
{
    let midday = tagged(recipes, MealTime::Midday);
    let evening = tagged(recipes, MealTime::Evening);

    WeeklyPlan::from_days(Weekday::VARIANTS.iter().map(|day| DaySlots {
        day: *day,
        midday: midday.choose(&mut *rng).map(|r| (*r).clone()),
        evening: evening.choose(&mut *rng).map(|r| (*r).clone()),
    }))
}

fn tagged(recipes: &[Recipe], meal_time: MealTime) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.has_tag(meal_time)).collect()
}

impl super::Command {
    /// Replaces the whole week with a random pick and returns it.
    pub async fn generate(&self) -> weekplate_shared::Result<WeeklyPlan> {
        let recipes = {
            let mut conn = self.read_db.acquire().await?;
            weekplate_recipe::fetch_recipes(&mut conn, None).await?
        };

        let plan = {
            let mut rng = rand::rng();
            pick_week(&recipes, &mut rng)
        };

        let mut tx = self.write_db.begin().await?;
        for slots in plan.days() {
            super::upsert_slot(
                &mut tx,
                slots.day,
                slots.midday.as_ref().map(|r| r.id),
                slots.evening.as_ref().map(|r| r.id),
            )
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(recipes = recipes.len(), "weekly plan generated");

        Ok(plan)
    }
}
