// Learning plan generation
//
// Maps survey answers and the child's age to a game shortlist, a session
// cadence, and a list of goals. Pure and infallible: anything missing falls
// back to the all-purpose plan.

use brightsteps_common::{
    catalog, ConcentrationTime, Game, LearningPlan, MinMax, PrimaryGoal, SurveyAnswers,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Upper bound on recommended games per plan.
pub const MAX_RECOMMENDED_GAMES: usize = 5;

pub const SPEECH_GOAL: &str = "Build vocabulary";
pub const ATTENTION_GOAL: &str = "Improve attention span";
pub const SOCIAL_GOAL: &str = "Understand emotions and social situations";
pub const LOGIC_GOAL: &str = "Develop logical thinking";

const DEFAULT_SESSION_DURATION: MinMax = MinMax::new(15, 20);
const DEFAULT_SESSIONS_PER_WEEK: MinMax = MinMax::new(3, 4);

/// Minutes per session for a concentration answer.
pub fn session_duration_for(concentration: Option<ConcentrationTime>) -> MinMax {
    match concentration {
        Some(ConcentrationTime::UnderOneMinute) => MinMax::new(10, 15),
        Some(ConcentrationTime::OneToThreeMinutes) => MinMax::new(15, 20),
        Some(ConcentrationTime::ThreeToFiveMinutes) => MinMax::new(15, 25),
        Some(ConcentrationTime::OverFiveMinutes) => MinMax::new(20, 30),
        None => DEFAULT_SESSION_DURATION,
    }
}

/// Sessions per week for a concentration answer.
pub fn sessions_per_week_for(concentration: Option<ConcentrationTime>) -> MinMax {
    match concentration {
        Some(ConcentrationTime::UnderOneMinute) => MinMax::new(2, 3),
        Some(ConcentrationTime::OneToThreeMinutes) => MinMax::new(3, 4),
        Some(ConcentrationTime::ThreeToFiveMinutes) => MinMax::new(3, 5),
        Some(ConcentrationTime::OverFiveMinutes) => MinMax::new(4, 5),
        None => DEFAULT_SESSIONS_PER_WEEK,
    }
}

/// Goal lines for a primary goal, in the fixed speech, attention, social,
/// logic order. `All` yields every line.
pub fn goals_for(goal: PrimaryGoal) -> Vec<String> {
    let topics = [
        (PrimaryGoal::Speech, SPEECH_GOAL),
        (PrimaryGoal::Attention, ATTENTION_GOAL),
        (PrimaryGoal::Social, SOCIAL_GOAL),
        (PrimaryGoal::Logic, LOGIC_GOAL),
    ];
    topics
        .into_iter()
        .filter(|(topic, _)| goal == *topic || goal == PrimaryGoal::All)
        .map(|(_, text)| text.to_string())
        .collect()
}

pub struct PlanGenerator<'a> {
    catalog: &'a [Game],
}

impl Default for PlanGenerator<'static> {
    fn default() -> Self {
        Self::new(catalog::games())
    }
}

impl<'a> PlanGenerator<'a> {
    pub fn new(catalog: &'a [Game]) -> Self {
        Self { catalog }
    }

    /// Builds a plan. `age` is `None` when no birth date is known, in which
    /// case every game is eligible.
    pub fn generate(
        &self,
        answers: &SurveyAnswers,
        age: Option<u32>,
        now: DateTime<Utc>,
    ) -> LearningPlan {
        let goal = answers.primary_goal.unwrap_or(PrimaryGoal::All);

        let eligible: Vec<&Game> =
            self.catalog.iter().filter(|g| age.map_or(true, |a| g.suits_age(a))).collect();

        let ordered: Vec<&Game> = match goal.target_category() {
            Some(target) => {
                let (front, back): (Vec<&Game>, Vec<&Game>) =
                    eligible.into_iter().partition(|g| g.category == target);
                front.into_iter().chain(back).collect()
            }
            None => eligible,
        };

        let recommended_games: Vec<Game> =
            ordered.into_iter().take(MAX_RECOMMENDED_GAMES).cloned().collect();

        debug!(
            "Plan for age {:?}, goal {}: {:?}",
            age,
            goal,
            recommended_games.iter().map(|g| g.id.as_str()).collect::<Vec<_>>()
        );

        let plan = LearningPlan {
            recommended_games,
            session_duration: session_duration_for(answers.concentration_time),
            sessions_per_week: sessions_per_week_for(answers.concentration_time),
            goals: goals_for(goal),
            created_at: now,
        };

        info!(
            "Generated learning plan with {} games, {}-{} min sessions",
            plan.recommended_games.len(),
            plan.session_duration.min,
            plan.session_duration.max
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brightsteps_common::{GameCategory, SurveyKey};

    fn answers(goal: Option<&str>, concentration: Option<&str>) -> SurveyAnswers {
        let mut answers = SurveyAnswers::default();
        if let Some(goal) = goal {
            answers.answer(SurveyKey::PrimaryGoal, goal).unwrap();
        }
        if let Some(concentration) = concentration {
            answers.answer(SurveyKey::ConcentrationTime, concentration).unwrap();
        }
        answers
    }

    #[test]
    fn test_every_recommended_game_fits_age() {
        let generator = PlanGenerator::default();
        for age in 0..=12 {
            for goal in PrimaryGoal::VALUES {
                let plan = generator.generate(&answers(Some(*goal), None), Some(age), Utc::now());
                assert!(plan.recommended_games.len() <= MAX_RECOMMENDED_GAMES);
                for game in &plan.recommended_games {
                    assert!(game.age_range.min <= age && age <= game.age_range.max);
                }
            }
        }
    }

    #[test]
    fn test_target_category_leads() {
        let plan = PlanGenerator::default().generate(
            &answers(Some("logic"), None),
            Some(6),
            Utc::now(),
        );
        let ids: Vec<&str> = plan.recommended_games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["logic-1", "logic-2", "logic-3", "speech-1", "speech-2"]);
    }

    #[test]
    fn test_social_goal_prefers_emotion_games() {
        let plan = PlanGenerator::default().generate(
            &answers(Some("social"), None),
            Some(4),
            Utc::now(),
        );
        assert!(plan.recommended_games[..3].iter().all(|g| g.category == GameCategory::Emotion));
    }

    #[test]
    fn test_all_goal_keeps_catalog_order() {
        let plan =
            PlanGenerator::default().generate(&answers(Some("all"), None), None, Utc::now());
        let ids: Vec<&str> = plan.recommended_games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["speech-1", "speech-2", "speech-3", "attention-1", "attention-2"]);
    }

    #[test]
    fn test_no_eligible_games() {
        let plan =
            PlanGenerator::default().generate(&answers(Some("logic"), None), Some(2), Utc::now());
        assert!(plan.recommended_games.is_empty());
        assert_eq!(plan.goals, vec![LOGIC_GOAL.to_string()]);
    }

    #[test]
    fn test_target_missing_for_age_falls_back_to_others() {
        let catalog = vec![
            catalog::find_game("speech-3").unwrap().clone(),
            catalog::find_game("logic-1").unwrap().clone(),
        ];
        let plan = PlanGenerator::new(&catalog).generate(
            &answers(Some("logic"), None),
            Some(10),
            Utc::now(),
        );
        let ids: Vec<&str> = plan.recommended_games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["speech-3"]);
    }

    #[test]
    fn test_cadence_tables() {
        assert_eq!(session_duration_for(None), MinMax::new(15, 20));
        assert_eq!(sessions_per_week_for(None), MinMax::new(3, 4));
        assert_eq!(
            session_duration_for(Some(ConcentrationTime::UnderOneMinute)),
            MinMax::new(10, 15)
        );
        assert_eq!(
            sessions_per_week_for(Some(ConcentrationTime::OverFiveMinutes)),
            MinMax::new(4, 5)
        );
    }

    #[test]
    fn test_goals() {
        assert_eq!(goals_for(PrimaryGoal::All).len(), 4);
        assert_eq!(goals_for(PrimaryGoal::Speech), vec![SPEECH_GOAL.to_string()]);
        assert_eq!(goals_for(PrimaryGoal::Social), vec![SOCIAL_GOAL.to_string()]);
    }

    #[test]
    fn test_empty_survey_gives_all_purpose_plan() {
        let now = Utc::now();
        let plan = PlanGenerator::default().generate(&SurveyAnswers::default(), None, now);
        assert_eq!(plan.goals.len(), 4);
        assert_eq!(plan.session_duration, MinMax::new(15, 20));
        assert_eq!(plan.sessions_per_week, MinMax::new(3, 4));
        assert_eq!(plan.recommended_games.len(), 5);
        assert_eq!(plan.created_at, now);
    }

    #[test]
    fn test_attention_plan_for_five_year_old() {
        let plan = PlanGenerator::default().generate(
            &answers(Some("attention"), Some("3_5min")),
            Some(5),
            Utc::now(),
        );
        assert_eq!(plan.session_duration, MinMax::new(15, 25));
        assert_eq!(plan.sessions_per_week, MinMax::new(3, 5));
        let ids: Vec<&str> = plan.recommended_games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["attention-1", "attention-2", "attention-3", "speech-1", "speech-2"]);
    }
}
