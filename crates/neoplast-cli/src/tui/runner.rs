use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// Terminal runtime: owns the event loop and drives an [`App`] until it asks
/// to exit.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Creates a runtime with the given logic tick rate and frame rate (Hz).
    #[must_use]
    pub fn new(tick_rate: f64, frame_rate: f64) -> Self {
        Self {
            events: EventLoop::new(tick_rate, frame_rate),
        }
    }

    /// Runs the application inside the terminal's alternate screen with
    /// mouse capture enabled.
    ///
    /// - `Tick` calls `app.update()`
    /// - `Render` draws via `app.draw()`
    /// - terminal events go to `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            execute!(io::stdout(), EnableMouseCapture)?;
            let result = (|| {
                while !app.should_exit() {
                    match self.events.next()? {
                        TuiEvent::Tick => app.update(),
                        TuiEvent::Render => {
                            terminal.draw(|frame| app.draw(frame))?;
                        }
                        TuiEvent::Crossterm(event) => app.handle_event(&event),
                    }
                }
                Ok(())
            })();
            execute!(io::stdout(), DisableMouseCapture)?;
            result
        })
    }
}
