use temp_dir::TempDir;
use weekplate_shared::recipe::{IngredientUnit, MealTime};

mod helpers;

#[tokio::test]
async fn test_create_then_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = weekplate_recipe::Command::new(state);

    let mut input = helpers::draft("  Pasta carbonara ", vec![MealTime::Midday]);
    input
        .ingredients
        .push(helpers::ingredient("Eggs", 3.0, IngredientUnit::Piece));

    let recipe = cmd.create(input).await?;
    assert_eq!(recipe.name, "Pasta carbonara");

    let recipes = cmd.list().await?;
    assert_eq!(recipes, vec![recipe.clone()]);
    assert_eq!(recipes[0].ingredients.len(), 2);
    assert_eq!(recipes[0].ingredients[1].name, "Eggs");

    let found = cmd.find(recipe.id).await?;
    assert_eq!(found, Some(recipe));
    assert!(cmd.find(999).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_draft() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = weekplate_recipe::Command::new(state);

    let err = cmd
        .create(helpers::draft("Soup", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, weekplate_shared::Error::Validate(_)));

    let mut input = helpers::draft("Soup", vec![MealTime::Evening]);
    input.ingredients.clear();
    assert!(cmd.create(input).await.is_err());

    assert!(cmd.list().await?.is_empty());

    Ok(())
}
