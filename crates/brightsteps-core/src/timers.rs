// Screen-scoped timers
//
// Each timer belongs to the screen that armed it. Entering a screen aborts
// whatever the previous screen left running, so a timer can never outlive
// its screen. Events carry the arming screen so a consumer can drop any that
// were already queued when the screen changed.

use std::time::Duration;

use brightsteps_common::config::TimingConfig;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::{interval_at, sleep, Instant},
};
use tracing::{debug, warn};

use crate::navigator::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Splash delay is over.
    SplashElapsed,
    /// Simulated plan generation finished.
    PlanReady,
    /// One minute of active play.
    ScreenTimeTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub screen: Screen,
    pub kind: TimerKind,
}

/// Aborts the task when dropped.
struct ArmedTimer {
    screen: Screen,
    kind: TimerKind,
    handle: JoinHandle<()>,
}

impl Drop for ArmedTimer {
    fn drop(&mut self) {
        debug!("Cancelling {:?} timer of {}", self.kind, self.screen);
        self.handle.abort();
    }
}

pub struct ScreenTimers {
    splash_delay: Duration,
    plan_delay: Duration,
    tick_period: Duration,
    sender: UnboundedSender<TimerEvent>,
    armed: Option<ArmedTimer>,
}

impl ScreenTimers {
    pub fn new(timing: &TimingConfig) -> (Self, UnboundedReceiver<TimerEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let timers = Self {
            splash_delay: Duration::from_millis(timing.splash_delay_ms),
            plan_delay: Duration::from_millis(timing.plan_generation_delay_ms),
            tick_period: Duration::from_secs(timing.screen_time_tick_secs),
            sender,
            armed: None,
        };
        (timers, receiver)
    }

    /// Cancels the running timer and arms the one `screen` owns, if any.
    pub fn on_screen_entered(&mut self, screen: Screen) {
        self.cancel_all();

        let kind = match screen {
            Screen::Splash => TimerKind::SplashElapsed,
            Screen::LoadingPlan => TimerKind::PlanReady,
            Screen::GamePlay => TimerKind::ScreenTimeTick,
            _ => return,
        };

        if tokio::runtime::Handle::try_current().is_err() {
            warn!("No async runtime, {:?} timer for {} not armed", kind, screen);
            return;
        }

        let event = TimerEvent { screen, kind };
        let sender = self.sender.clone();
        let handle = match kind {
            TimerKind::SplashElapsed => tokio::spawn(one_shot(self.splash_delay, event, sender)),
            TimerKind::PlanReady => tokio::spawn(one_shot(self.plan_delay, event, sender)),
            TimerKind::ScreenTimeTick => tokio::spawn(recurring(self.tick_period, event, sender)),
        };

        debug!("Armed {:?} timer for {}", kind, screen);
        self.armed = Some(ArmedTimer { screen, kind, handle });
    }

    pub fn cancel_all(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.as_ref().is_some_and(|t| !t.handle.is_finished())
    }

    pub fn armed_kind(&self) -> Option<TimerKind> {
        self.armed.as_ref().map(|t| t.kind)
    }
}

async fn one_shot(delay: Duration, event: TimerEvent, sender: UnboundedSender<TimerEvent>) {
    sleep(delay).await;
    let _ = sender.send(event);
}

async fn recurring(period: Duration, event: TimerEvent, sender: UnboundedSender<TimerEvent>) {
    let mut ticker = interval_at(Instant::now() + period, period);
    loop {
        ticker.tick().await;
        if sender.send(event).is_err() {
            break;
        }
    }
}
