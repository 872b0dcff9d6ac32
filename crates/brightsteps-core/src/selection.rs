use brightsteps_common::{Game, GameCategory, LearningPlan};

/// Age assumed for the game list when the child's birth date is unknown.
pub const DEFAULT_SELECTION_AGE: u32 = 5;

/// Games offered on the selection screen: those suitable for `age` (or the
/// default age), optionally limited to one category, with games from the
/// current plan first. Order within each group follows the catalog.
pub fn games_for_selection<'a>(
    catalog: &'a [Game],
    age: Option<u32>,
    category: Option<GameCategory>,
    plan: Option<&LearningPlan>,
) -> Vec<&'a Game> {
    let age = age.unwrap_or(DEFAULT_SELECTION_AGE);
    let mut games: Vec<&Game> = catalog
        .iter()
        .filter(|g| g.suits_age(age))
        .filter(|g| category.map_or(true, |c| g.category == c))
        .collect();

    let recommended = |g: &Game| plan.is_some_and(|p| p.recommends(&g.id));
    games.sort_by_key(|g| !recommended(*g));
    games
}
