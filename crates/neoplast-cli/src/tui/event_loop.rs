use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

/// Events delivered to a running application.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Application logic update timing.
    Tick,
    /// Screen draw timing.
    Render,
    /// Key input, mouse or resize from the terminal.
    Crossterm(event::Event),
}

/// Produces tick, render and terminal events from two fixed intervals.
///
/// Ticks take priority over renders when both are due, so game time never
/// stalls behind drawing.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
}

impl EventLoop {
    pub(super) fn new(tick_rate: f64, frame_rate: f64) -> Self {
        let now = Instant::now();
        Self {
            tick_interval: Duration::from_secs_f64(1.0 / tick_rate),
            render_interval: Duration::from_secs_f64(1.0 / frame_rate),
            last_tick: now,
            last_render: now,
        }
    }

    /// Returns the next event, blocking until a deadline passes or the
    /// terminal reports input.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                return Ok(TuiEvent::Render);
            }

            let next_deadline = Ord::min(
                self.last_tick + self.tick_interval,
                self.last_render + self.render_interval,
            );
            if event::poll(next_deadline.saturating_duration_since(now))? {
                return Ok(event::read()?.into());
            }
        }
    }
}
