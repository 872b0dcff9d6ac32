// Developmental survey
//
// Seven fixed questions answered one step at a time. Answers are kept as a
// partial record until every step is filled in.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::GameCategory,
};

macro_rules! survey_enum {
    ($(#[$meta:meta])* $name:ident, $key:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(Error::UnknownSurveyValue { key: $key, value: other.to_string() }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

survey_enum!(SpeechFrequency, "speechFrequency" {
    Rarely => "rarely",
    Sometimes => "sometimes",
    Often => "often",
    VeryOften => "very_often",
});

survey_enum!(UnderstandsInstructions, "understandsInstructions" {
    No => "no",
    Partially => "partially",
    Yes => "yes",
    Fully => "fully",
});

survey_enum!(
    /// How long the child can stay on one activity. Drives plan cadence.
    ConcentrationTime, "concentrationTime" {
        UnderOneMinute => "less_1min",
        OneToThreeMinutes => "1_3min",
        ThreeToFiveMinutes => "3_5min",
        OverFiveMinutes => "more_5min",
    }
);

survey_enum!(Distractibility, "distractibility" {
    VeryOften => "very_often",
    Often => "often",
    Sometimes => "sometimes",
    Rarely => "rarely",
});

survey_enum!(NewSituationReaction, "newSituationReaction" {
    VeryAnxious => "very_anxious",
    Cautious => "cautious",
    Neutral => "neutral",
    Interested => "interested",
});

survey_enum!(PreferredActivity, "preferredActivities" {
    Music => "music",
    Drawing => "drawing",
    Movement => "movement",
    Logic => "logic",
    Other => "other",
});

survey_enum!(
    /// What the parent wants to focus on first. Drives game ordering and goals.
    PrimaryGoal, "primaryGoal" {
        Speech => "speech",
        Attention => "attention",
        Social => "social",
        Logic => "logic",
        All => "all",
    }
);

impl PrimaryGoal {
    /// Category whose games are moved to the front of a plan. `All` has none.
    pub fn target_category(&self) -> Option<GameCategory> {
        match self {
            Self::Speech => Some(GameCategory::Speech),
            Self::Attention => Some(GameCategory::Attention),
            Self::Social => Some(GameCategory::Emotion),
            Self::Logic => Some(GameCategory::Logic),
            Self::All => None,
        }
    }
}

/// Question keys in the order the survey asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyKey {
    SpeechFrequency,
    UnderstandsInstructions,
    ConcentrationTime,
    Distractibility,
    NewSituationReaction,
    PreferredActivities,
    PrimaryGoal,
}

impl SurveyKey {
    pub const ORDER: [SurveyKey; 7] = [
        SurveyKey::SpeechFrequency,
        SurveyKey::UnderstandsInstructions,
        SurveyKey::ConcentrationTime,
        SurveyKey::Distractibility,
        SurveyKey::NewSituationReaction,
        SurveyKey::PreferredActivities,
        SurveyKey::PrimaryGoal,
    ];

    pub const COUNT: usize = Self::ORDER.len();

    /// Question at a 0-based survey step. `None` past the last question.
    pub fn at(step: usize) -> Option<SurveyKey> {
        Self::ORDER.get(step).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpeechFrequency => "speechFrequency",
            Self::UnderstandsInstructions => "understandsInstructions",
            Self::ConcentrationTime => "concentrationTime",
            Self::Distractibility => "distractibility",
            Self::NewSituationReaction => "newSituationReaction",
            Self::PreferredActivities => "preferredActivities",
            Self::PrimaryGoal => "primaryGoal",
        }
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self, Self::PreferredActivities)
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::SpeechFrequency => SpeechFrequency::VALUES,
            Self::UnderstandsInstructions => UnderstandsInstructions::VALUES,
            Self::ConcentrationTime => ConcentrationTime::VALUES,
            Self::Distractibility => Distractibility::VALUES,
            Self::NewSituationReaction => NewSituationReaction::VALUES,
            Self::PreferredActivities => PreferredActivity::VALUES,
            Self::PrimaryGoal => PrimaryGoal::VALUES,
        }
    }
}

impl std::fmt::Display for SurveyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SurveyKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ORDER
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::invalid(format!("unknown survey question: {}", s)))
    }
}

/// Partially or fully answered survey.
///
/// `preferred_activities` distinguishes "never touched" (`None`) from
/// "touched but emptied again" (`Some(vec![])`); both count as unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_frequency: Option<SpeechFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub understands_instructions: Option<UnderstandsInstructions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_time: Option<ConcentrationTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distractibility: Option<Distractibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_situation_reaction: Option<NewSituationReaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_activities: Option<Vec<PreferredActivity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<PrimaryGoal>,
}

impl SurveyAnswers {
    /// Records one selection. Single-choice questions replace the previous
    /// answer; the multi-select question toggles `value` in or out.
    pub fn answer(&mut self, key: SurveyKey, value: &str) -> Result<()> {
        match key {
            SurveyKey::SpeechFrequency => self.speech_frequency = Some(value.parse()?),
            SurveyKey::UnderstandsInstructions => {
                self.understands_instructions = Some(value.parse()?)
            }
            SurveyKey::ConcentrationTime => self.concentration_time = Some(value.parse()?),
            SurveyKey::Distractibility => self.distractibility = Some(value.parse()?),
            SurveyKey::NewSituationReaction => self.new_situation_reaction = Some(value.parse()?),
            SurveyKey::PreferredActivities => {
                let activity: PreferredActivity = value.parse()?;
                let selected = self.preferred_activities.get_or_insert_with(Vec::new);
                if let Some(pos) = selected.iter().position(|a| *a == activity) {
                    selected.remove(pos);
                } else {
                    selected.push(activity);
                }
            }
            SurveyKey::PrimaryGoal => self.primary_goal = Some(value.parse()?),
        }
        Ok(())
    }

    pub fn is_answered(&self, key: SurveyKey) -> bool {
        match key {
            SurveyKey::SpeechFrequency => self.speech_frequency.is_some(),
            SurveyKey::UnderstandsInstructions => self.understands_instructions.is_some(),
            SurveyKey::ConcentrationTime => self.concentration_time.is_some(),
            SurveyKey::Distractibility => self.distractibility.is_some(),
            SurveyKey::NewSituationReaction => self.new_situation_reaction.is_some(),
            SurveyKey::PreferredActivities => {
                self.preferred_activities.as_ref().is_some_and(|a| !a.is_empty())
            }
            SurveyKey::PrimaryGoal => self.primary_goal.is_some(),
        }
    }

    /// Whether the "next" button of survey step `step` should be enabled.
    pub fn can_proceed(&self, step: usize) -> bool {
        SurveyKey::at(step).is_some_and(|key| self.is_answered(key))
    }

    pub fn is_complete(&self) -> bool {
        SurveyKey::ORDER.iter().all(|key| self.is_answered(*key))
    }

    /// Current answer rendered as its wire value(s), comma separated for
    /// the multi-select question.
    pub fn display_value(&self, key: SurveyKey) -> Option<String> {
        match key {
            SurveyKey::SpeechFrequency => self.speech_frequency.map(|v| v.to_string()),
            SurveyKey::UnderstandsInstructions => {
                self.understands_instructions.map(|v| v.to_string())
            }
            SurveyKey::ConcentrationTime => self.concentration_time.map(|v| v.to_string()),
            SurveyKey::Distractibility => self.distractibility.map(|v| v.to_string()),
            SurveyKey::NewSituationReaction => self.new_situation_reaction.map(|v| v.to_string()),
            SurveyKey::PreferredActivities => self.preferred_activities.as_ref().map(|a| {
                a.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(",")
            }),
            SurveyKey::PrimaryGoal => self.primary_goal.map(|v| v.to_string()),
        }
    }
}
