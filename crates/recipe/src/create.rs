use validator::Validate;
use weekplate_shared::recipe::{Recipe, RecipeDraft};

impl super::Command {
    pub async fn create(&self, input: RecipeDraft) -> weekplate_shared::Result<Recipe> {
        input.validate()?;

        let mut tx = self.write_db.begin().await?;
        let id = crate::insert_recipe(&mut tx, None, &input).await?;
        tx.commit().await?;

        Ok(Recipe::from_draft(id, trimmed(input)))
    }
}

pub(crate) fn trimmed(mut input: RecipeDraft) -> RecipeDraft {
    input.name = input.name.trim().to_owned();
    for ingredient in input.ingredients.iter_mut() {
        ingredient.name = ingredient.name.trim().to_owned();
    }

    input
}
