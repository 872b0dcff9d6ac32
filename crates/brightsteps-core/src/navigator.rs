// Screen navigation
//
// A flat state machine: one current screen, any screen reachable from any
// other. `Screen::expected_exits` documents which edges the presentation
// layer actually offers; it is informational and never blocks a transition.

use brightsteps_common::SurveyKey;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Welcome,
    About,
    Register,
    Login,
    ForgotPassword,
    CreateChildProfile,
    Survey,
    LoadingPlan,
    PlanResult,
    ParentDashboard,
    GameSelection,
    GamePlay,
    GameResult,
    Progress,
    Settings,
    ChildDashboard,
    ChildProfile,
}

impl Screen {
    pub const ALL: [Screen; 18] = [
        Screen::Splash,
        Screen::Welcome,
        Screen::About,
        Screen::Register,
        Screen::Login,
        Screen::ForgotPassword,
        Screen::CreateChildProfile,
        Screen::Survey,
        Screen::LoadingPlan,
        Screen::PlanResult,
        Screen::ParentDashboard,
        Screen::GameSelection,
        Screen::GamePlay,
        Screen::GameResult,
        Screen::Progress,
        Screen::Settings,
        Screen::ChildDashboard,
        Screen::ChildProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Welcome => "welcome",
            Self::About => "about",
            Self::Register => "register",
            Self::Login => "login",
            Self::ForgotPassword => "forgot-password",
            Self::CreateChildProfile => "create-child-profile",
            Self::Survey => "survey",
            Self::LoadingPlan => "loading-plan",
            Self::PlanResult => "plan-result",
            Self::ParentDashboard => "parent-dashboard",
            Self::GameSelection => "game-selection",
            Self::GamePlay => "game-play",
            Self::GameResult => "game-result",
            Self::Progress => "progress",
            Self::Settings => "settings",
            Self::ChildDashboard => "child-dashboard",
            Self::ChildProfile => "child-profile",
        }
    }

    /// Screens the presentation layer is expected to move to from `self`.
    pub fn expected_exits(&self) -> &'static [Screen] {
        use Screen::*;
        match self {
            Splash => &[Welcome, ParentDashboard],
            Welcome => &[Register, About, Login],
            About => &[Welcome],
            Register => &[Welcome, CreateChildProfile, Login],
            Login => &[Welcome, ParentDashboard, ForgotPassword, Register],
            ForgotPassword => &[Login],
            CreateChildProfile => &[Register, Survey],
            Survey => &[CreateChildProfile, LoadingPlan],
            LoadingPlan => &[PlanResult],
            PlanResult => &[ParentDashboard],
            ParentDashboard => &[ChildDashboard, GameSelection, Progress, ChildProfile, Settings],
            GameSelection => &[ParentDashboard, GamePlay],
            GamePlay => &[GameResult, GameSelection],
            GameResult => &[GamePlay, GameSelection],
            Progress => &[ParentDashboard],
            Settings => &[ParentDashboard, Welcome],
            ChildDashboard => &[ParentDashboard, GameSelection, Progress],
            ChildProfile => &[ParentDashboard, Survey, Welcome],
        }
    }

    pub fn is_expected_exit(&self, to: Screen) -> bool {
        self.expected_exits().contains(&to)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Screen {
    type Err = brightsteps_common::Error;

    fn from_str(s: &str) -> brightsteps_common::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| brightsteps_common::Error::invalid(format!("unknown screen: {}", s)))
    }
}

/// Transient navigation state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_screen: Screen,
    pub survey_step: usize,
    pub child_mode: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { current_screen: Screen::Splash, survey_step: 0, child_mode: false }
    }
}

pub struct Navigator<'a> {
    state: &'a mut NavigationState,
}

impl<'a> Navigator<'a> {
    pub fn new(state: &'a mut NavigationState) -> Self {
        Self { state }
    }

    pub fn current(&self) -> Screen {
        self.state.current_screen
    }

    /// Moves to `screen` unconditionally and returns the screen that was left.
    pub fn set_screen(&mut self, screen: Screen) -> Screen {
        let from = self.state.current_screen;
        if !from.is_expected_exit(screen) && from != screen {
            debug!("Unlisted screen transition {} -> {}", from, screen);
        } else {
            debug!("Screen transition {} -> {}", from, screen);
        }
        self.state.current_screen = screen;
        from
    }

    /// Sets the survey cursor. Values past the last question are stored as
    /// given; callers clamp.
    pub fn set_survey_step(&mut self, step: usize) {
        if step >= SurveyKey::COUNT {
            debug!("Survey step {} is past the last question", step);
        }
        self.state.survey_step = step;
    }

    pub fn survey_step(&self) -> usize {
        self.state.survey_step
    }

    pub fn current_question(&self) -> Option<SurveyKey> {
        SurveyKey::at(self.state.survey_step)
    }

    pub fn set_child_mode(&mut self, child_mode: bool) {
        debug!("Child mode set to {}", child_mode);
        self.state.child_mode = child_mode;
    }

    pub fn is_child_mode(&self) -> bool {
        self.state.child_mode
    }
}
