use crossterm::event::Event;
use ratatui::Frame;

/// Trait for applications driven by [`Tui::run`](crate::tui::Tui::run).
pub trait App {
    /// Returns whether the runtime should stop.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, mouse, resize).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called on each render event).
    fn draw(&self, frame: &mut Frame<'_>);

    /// Advances application logic (called on each tick event).
    fn update(&mut self);
}
