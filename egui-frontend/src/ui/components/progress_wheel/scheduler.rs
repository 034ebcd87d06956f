//! # egui Frame Scheduler
//!
//! egui repaints on demand, so a scheduled tick is a pending deadline plus a
//! `request_repaint_after` for the remaining delay. The widget checks
//! `take_due` while it is being laid out and fires the tick from there.

use eframe::egui;
use progress_wheel_shared::FrameScheduler;
use std::time::Duration;

pub struct EguiScheduler {
    ctx: egui::Context,
    pending: Option<Duration>,
}

impl EguiScheduler {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            pending: None,
        }
    }

    pub fn ctx(&self) -> &egui::Context {
        &self.ctx
    }

    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Consume the pending tick if its deadline has been reached
    pub fn take_due(&mut self) -> bool {
        match self.pending {
            Some(deadline) if deadline <= self.now() => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl FrameScheduler for EguiScheduler {
    fn now(&self) -> Duration {
        let seconds = self.ctx.input(|input| input.time);
        Duration::from_secs_f64(seconds.max(0.0))
    }

    fn schedule_at(&mut self, deadline: Duration) {
        self.pending = Some(deadline);
        self.ctx.request_repaint_after(deadline.saturating_sub(self.now()));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
