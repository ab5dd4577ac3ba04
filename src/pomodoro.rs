use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::app::App;
use crate::error::AppError;
use crate::model::{PomodoroKind, PomodoroSettings};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PhaseOutcome {
    pub kind: PomodoroKind,
    pub minutes: u32,
    pub skipped: bool,
}

/// Focus/break cycle. Counts down whole seconds; the caller provides ticks.
#[derive(Clone, Debug)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    mode: PomodoroKind,
    remaining_secs: u64,
    running: bool,
    completed_focus: u32,
}

impl PomodoroTimer {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            mode: PomodoroKind::Focus,
            remaining_secs: phase_secs(settings.focus_duration),
            running: false,
            completed_focus: 0,
        }
    }

    pub fn mode(&self) -> PomodoroKind {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self, mode: PomodoroKind) {
        self.running = false;
        self.mode = mode;
        self.remaining_secs = self.total_secs();
    }

    /// Advances one second. Returns the finished phase when the countdown
    /// reaches zero; the timer is then stopped on the next phase.
    pub fn tick(&mut self) -> Option<PhaseOutcome> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }
        let outcome = PhaseOutcome {
            kind: self.mode,
            minutes: self.settings.minutes_for(self.mode),
            skipped: false,
        };
        self.advance();
        Some(outcome)
    }

    /// Counts down `secs` seconds at once without finishing the phase.
    pub fn elapse(&mut self, secs: u64) {
        let step = secs.min(self.remaining_secs.saturating_sub(1));
        self.remaining_secs -= step;
    }

    /// Ends the current phase early, crediting the elapsed minutes.
    pub fn skip(&mut self) -> PhaseOutcome {
        let elapsed = self.total_secs().saturating_sub(self.remaining_secs);
        let outcome = PhaseOutcome {
            kind: self.mode,
            minutes: u32::try_from((elapsed + 30) / 60).unwrap_or(u32::MAX),
            skipped: true,
        };
        self.advance();
        outcome
    }

    fn total_secs(&self) -> u64 {
        phase_secs(self.settings.minutes_for(self.mode))
    }

    fn advance(&mut self) {
        let next = match self.mode {
            PomodoroKind::Focus => {
                self.completed_focus = self.completed_focus.saturating_add(1);
                let every = self.settings.sessions_before_long_break;
                if every != 0 && self.completed_focus % every == 0 {
                    PomodoroKind::LongBreak
                } else {
                    PomodoroKind::Break
                }
            }
            PomodoroKind::Break | PomodoroKind::LongBreak => PomodoroKind::Focus,
        };
        self.reset(next);
    }
}

fn phase_secs(minutes: u32) -> u64 {
    u64::from(minutes) * 60
}

/// Runs the countdown on a periodic tick, recording every finished phase in
/// the store, until `phases` phases have completed or Ctrl-C arrives.
pub async fn run_timer(
    app: &mut App,
    timer: &mut PomodoroTimer,
    tick: Duration,
    phases: usize,
) -> Result<Vec<PhaseOutcome>, AppError> {
    let mut outcomes = Vec::new();
    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // first tick of a tokio interval fires immediately
    ticker.tick().await;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while outcomes.len() < phases {
        if !timer.is_running() {
            info!(
                mode = timer.mode().as_str(),
                seconds = timer.remaining_secs(),
                "pomodoro phase started"
            );
            timer.start();
        }
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(outcome) = timer.tick() {
                    debug!(kind = outcome.kind.as_str(), minutes = outcome.minutes, "pomodoro phase finished");
                    app.record_pomodoro_phase(outcome).await?;
                    outcomes.push(outcome);
                }
            }
            _ = &mut ctrl_c => {
                timer.pause();
                info!("pomodoro timer interrupted");
                break;
            }
        }
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PomodoroSettings {
        PomodoroSettings {
            focus_duration: 1,
            break_duration: 1,
            long_break_duration: 2,
            sessions_before_long_break: 2,
        }
    }

    fn finish_phase(timer: &mut PomodoroTimer) -> PhaseOutcome {
        timer.start();
        loop {
            if let Some(outcome) = timer.tick() {
                return outcome;
            }
        }
    }

    #[test]
    fn idle_timer_does_not_count_down() {
        let mut timer = PomodoroTimer::new(settings());
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn focus_phase_completes_after_its_duration() {
        let mut timer = PomodoroTimer::new(settings());
        timer.start();
        for _ in 0..59 {
            assert_eq!(timer.tick(), None);
        }
        let outcome = timer.tick().expect("phase finished");
        assert_eq!(outcome.kind, PomodoroKind::Focus);
        assert_eq!(outcome.minutes, 1);
        assert!(!outcome.skipped);
        assert_eq!(timer.mode(), PomodoroKind::Break);
        assert!(!timer.is_running());
    }

    #[test]
    fn long_break_follows_every_nth_focus() {
        let mut timer = PomodoroTimer::new(settings());
        let kinds: Vec<_> = (0..4).map(|_| finish_phase(&mut timer).kind).collect();
        assert_eq!(
            kinds,
            vec![
                PomodoroKind::Focus,
                PomodoroKind::Break,
                PomodoroKind::Focus,
                PomodoroKind::LongBreak
            ]
        );
        assert_eq!(timer.mode(), PomodoroKind::Focus);
        assert_eq!(timer.completed_focus(), 2);
    }

    #[test]
    fn skip_credits_elapsed_minutes() {
        let mut timer = PomodoroTimer::new(PomodoroSettings::default());
        timer.start();
        for _ in 0..(10 * 60) {
            timer.tick();
        }
        let outcome = timer.skip();
        assert_eq!(outcome.kind, PomodoroKind::Focus);
        assert_eq!(outcome.minutes, 10);
        assert!(outcome.skipped);
        assert_eq!(timer.mode(), PomodoroKind::Break);
        assert_eq!(timer.remaining_secs(), 5 * 60);
    }

    #[test]
    fn very_long_phases_count_in_wide_seconds() {
        let settings = PomodoroSettings {
            focus_duration: 80_000_000,
            break_duration: u32::MAX,
            ..PomodoroSettings::default()
        };
        let mut timer = PomodoroTimer::new(settings);
        assert_eq!(timer.remaining_secs(), 4_800_000_000);

        timer.start();
        timer.elapse(600);
        assert_eq!(timer.remaining_secs(), 4_800_000_000 - 600);
        let outcome = timer.skip();
        assert_eq!(outcome.minutes, 10);
        assert_eq!(timer.mode(), PomodoroKind::Break);
        assert_eq!(timer.remaining_secs(), u64::from(u32::MAX) * 60);

        timer.start();
        timer.elapse(u64::MAX);
        assert_eq!(timer.remaining_secs(), 1);
        let outcome = timer.skip();
        assert_eq!(outcome.minutes, u32::MAX);
    }

    #[test]
    fn elapse_never_finishes_the_phase() {
        let mut timer = PomodoroTimer::new(settings());
        timer.start();
        timer.elapse(1_000);
        assert_eq!(timer.remaining_secs(), 1);
        assert_eq!(timer.mode(), PomodoroKind::Focus);
        assert!(timer.tick().is_some());
    }

    #[test]
    fn zero_length_phase_finishes_on_first_tick() {
        let mut timer = PomodoroTimer::new(PomodoroSettings {
            focus_duration: 0,
            ..settings()
        });
        timer.start();
        assert!(timer.tick().is_some());
    }
}
