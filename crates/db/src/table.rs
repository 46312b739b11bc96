use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum RecipeCatalog {
    Table,
    Id,
    Name,
    Tags,
    Instructions,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    Position,
    Name,
    Quantity,
    Unit,
    Category,
}

#[derive(Iden, Clone)]
pub enum WeeklyPlanSlot {
    Table,
    Day,
    MiddayId,
    EveningId,
    UpdatedAt,
}
