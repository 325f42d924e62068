//! Phase-sequencing playback state machine.
//!
//! One linear driver is reused for every phase. Forward runs sweep it 0 -> 1
//! and advance the active phase on completion; reverse runs step back to the
//! previous phase immediately and sweep the driver 1 -> 0.

use std::{rc::Rc, time::Duration};

use crate::{
    animation::PlayableAnimation,
    config::ScrubConfig,
    driver::{DriverStatus, LinearDriver, ProgressDriver, Tick},
    report::{self, ProgressReport},
    timing,
};

/// Named states of the controller, derived from its fields and its driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ControllerState {
    Idle,
    PlayingForward,
    PlayingReverse,
    /// Phase 0 with nothing played.
    AtLowerBound,
    /// Every phase played.
    AtUpperBound,
}

pub struct PlaybackController<D: ProgressDriver = LinearDriver> {
    animation: Rc<PlayableAnimation>,
    driver: D,
    base_duration: Duration,
    active_phase: usize,
    phase_progress: f64,
    playing_forward: bool,
    speed: f64,
}

impl PlaybackController<LinearDriver> {
    pub fn new(animation: Rc<PlayableAnimation>) -> Self {
        Self::with_driver(animation, LinearDriver::new(), &ScrubConfig::default())
    }
}

impl<D: ProgressDriver> PlaybackController<D> {
    pub fn with_driver(animation: Rc<PlayableAnimation>, driver: D, config: &ScrubConfig) -> Self {
        Self {
            animation,
            driver,
            base_duration: config.base_duration(),
            active_phase: 0,
            phase_progress: 0.0,
            playing_forward: true,
            speed: config.initial_speed,
        }
    }

    /// Play the active phase forward from the start.
    ///
    /// Ignored once every phase has been played.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn play_forward(&mut self) {
        if self.active_phase >= self.animation.len() {
            tracing::debug!("already at the last phase, ignoring");
            return;
        }

        let duration = self.run_duration();
        self.driver.start(0.0, 1.0, duration);
        tracing::debug!(phase = self.active_phase, ?duration, "forward run started");
    }

    /// Step back to the previous phase and play it in reverse.
    ///
    /// The phase index moves immediately, before any tick. Ignored at phase 0.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn play_previous_in_reverse(&mut self) {
        if self.active_phase == 0 {
            tracing::debug!("already at the first phase, ignoring");
            return;
        }

        self.active_phase -= 1;
        self.phase_progress = 1.0;
        let duration = self.run_duration();
        self.driver.start(1.0, 0.0, duration);
        tracing::debug!(phase = self.active_phase, ?duration, "reverse run started");
    }

    /// Takes effect on the next run; an in-flight run keeps its duration.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        tracing::debug!("speed updated");
    }

    /// Pump the driver by `dt` and dispatch whatever it reports.
    ///
    /// Returns `true` while the driver is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(tick) = self.driver.step(dt) {
            self.on_tick(tick);
        }
        self.driver.is_running()
    }

    fn on_tick(&mut self, tick: Tick) {
        let reversing = self.driver.target() < 1.0;
        if reversing {
            self.phase_progress = 1.0 - tick.value;
            self.playing_forward = false;
            if let Some(phase) = self.animation.phase(self.active_phase) {
                let arg = phase.reverse_argument(self.phase_progress);
                tracing::trace!(phase = self.active_phase, arg, "reverse tick");
                phase.reverse(arg);
            }
        } else {
            self.phase_progress = tick.value;
            self.playing_forward = true;
            if let Some(phase) = self.animation.phase(self.active_phase) {
                tracing::trace!(phase = self.active_phase, progress = tick.value, "forward tick");
                phase.forward(self.phase_progress);
            }
        }

        match tick.status {
            Some(DriverStatus::Completed) => self.on_completed(),
            Some(DriverStatus::Dismissed) => {
                tracing::debug!(phase = self.active_phase, "reverse run dismissed");
            }
            None => {}
        }
    }

    fn on_completed(&mut self) {
        if self.playing_forward && self.active_phase < self.animation.len() {
            self.active_phase += 1;
            self.phase_progress = 0.0;
            tracing::debug!(phase = self.active_phase, "phase advanced");
        }
    }

    fn run_duration(&self) -> Option<Duration> {
        let duration = timing::phase_duration(self.base_duration, self.speed);
        if duration.is_none() {
            tracing::warn!(speed = self.speed, "speed never completes a run");
        }
        duration
    }

    /// Completion fraction of phase `index` for display.
    pub fn phase_reportable_progress(&self, index: usize) -> f64 {
        report::reportable_progress(
            index,
            self.active_phase,
            self.phase_progress,
            self.playing_forward,
        )
    }

    pub fn report(&self) -> ProgressReport {
        ProgressReport::capture(self)
    }

    pub fn state(&self) -> ControllerState {
        if self.driver.is_running() {
            return if self.driver.target() < 1.0 {
                ControllerState::PlayingReverse
            } else {
                ControllerState::PlayingForward
            };
        }
        if self.active_phase == 0 && self.phase_reportable_progress(0) == 0.0 {
            return ControllerState::AtLowerBound;
        }
        if self.active_phase >= self.animation.len() {
            return ControllerState::AtUpperBound;
        }
        ControllerState::Idle
    }

    pub fn animation(&self) -> &PlayableAnimation {
        &self.animation
    }

    pub fn active_phase_index(&self) -> usize {
        self.active_phase
    }

    pub fn phase_progress(&self) -> f64 {
        self.phase_progress
    }

    pub fn is_playing_forward(&self) -> bool {
        self.playing_forward
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: ProgressDriver> Drop for PlaybackController<D> {
    fn drop(&mut self) {
        if self.driver.is_running() {
            tracing::debug!("controller dropped mid-run, cancelling driver");
        }
        self.driver.cancel();
    }
}
