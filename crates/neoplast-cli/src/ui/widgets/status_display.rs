use neoplast_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::widgets::style;

/// One-line session status: level, clock, cumulative score and the latest
/// similarity preview.
#[derive(Debug)]
pub(crate) struct StatusDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = self.session.stats();
        let match_text = self
            .session
            .last_score()
            .map_or_else(|| "--".to_owned(), |score| format!("{score}%"));

        let line = Line::from(vec![
            Span::styled(" LEVEL ", style::DIMMED),
            Span::styled(stats.level().to_string(), style::DEFAULT),
            Span::styled("   TIME ", style::DIMMED),
            Span::styled(format!("{}s", self.session.time_left()), style::DEFAULT),
            Span::styled("   TOTAL ", style::DIMMED),
            Span::styled(stats.total_score().to_string(), style::DEFAULT),
            Span::styled("   MATCH ", style::DIMMED),
            Span::styled(match_text, style::DEFAULT),
        ]);
        line.style(style::DEFAULT).render(area, buf);
    }
}
