//! # Animation Driver
//!
//! Advances the wheel's progress angle at a fixed cadence while running.
//!
//! ## Key Components:
//! - `FrameScheduler` - Host-provided clock plus a single pending callback slot
//! - `Animator` - Running flag and progress angle, mutated only by `tick`
//!
//! ## Scheduling Model:
//! Everything runs on the host's UI thread. The host owns the scheduler and
//! calls `Animator::tick` once the scheduled deadline has passed. Cancelling is
//! best effort: a tick that is delivered after `stop` sees the stopped state
//! and does nothing.

use log::{debug, trace};
use std::time::Duration;

use crate::drawable::Invalidate;

/// Target time between ticks: 1000/60 ms, truncated to whole milliseconds
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

/// Progress wraps back to zero once it goes past this many degrees
pub const FULL_TURN: i32 = 360;

/// Clock and one-shot callback slot supplied by the host event loop
pub trait FrameScheduler {
    /// Current time on the scheduler's monotonic clock
    fn now(&self) -> Duration;

    /// Ask for a tick no sooner than `deadline`, replacing any pending request
    fn schedule_at(&mut self, deadline: Duration);

    /// Drop the pending tick, if any
    fn cancel(&mut self);
}

/// Lifecycle of the spinning animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone, Default)]
pub struct Animator {
    state: AnimationState,
    progress: i32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Current progress angle in degrees
    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Invalidate {
        if self.is_running() {
            return Invalidate::No;
        }
        debug!("Starting progress wheel animation at {}°", self.progress);
        self.schedule_next(scheduler)
    }

    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if !self.is_running() {
            return;
        }
        debug!("Stopping progress wheel animation at {}°", self.progress);
        self.state = AnimationState::Stopped;
        scheduler.cancel();
    }

    /// Scheduled callback: advance by `spin_speed` degrees and reschedule
    pub fn tick(&mut self, spin_speed: i32, scheduler: &mut impl FrameScheduler) -> Invalidate {
        if !self.is_running() {
            trace!("Ignoring tick delivered after stop");
            return Invalidate::No;
        }

        self.progress = self.progress.wrapping_add(spin_speed);
        // A value of exactly 360 is drawn for one frame before wrapping
        if self.progress > FULL_TURN {
            self.progress = 0;
        }
        trace!("Tick: progress {}°", self.progress);

        self.schedule_next(scheduler)
    }

    fn schedule_next(&mut self, scheduler: &mut impl FrameScheduler) -> Invalidate {
        self.state = AnimationState::Running;
        let deadline = scheduler.now() + FRAME_INTERVAL;
        scheduler.schedule_at(deadline);
        Invalidate::Yes
    }
}
