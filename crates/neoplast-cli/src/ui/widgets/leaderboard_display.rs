use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Widget,
};

use crate::{score_store::Leaderboard, ui::widgets::style};

/// Top-score table, one centered line per entry.
#[derive(Debug)]
pub(crate) struct LeaderboardDisplay<'a> {
    board: &'a Leaderboard,
}

impl<'a> LeaderboardDisplay<'a> {
    pub(crate) fn new(board: &'a Leaderboard) -> Self {
        Self { board }
    }

    /// The rendered rows, also used to embed the table in the game-over
    /// overlay.
    pub(crate) fn lines(&self) -> Vec<Line<'static>> {
        if self.board.entries().is_empty() {
            return vec![Line::from(Span::styled("no scores yet", style::DIMMED)).centered()];
        }

        self.board
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Line::from(vec![
                    Span::styled(format!("#{}  ", index + 1), style::DIMMED),
                    Span::styled(format!("{:>5} pts  ", entry.score), style::DEFAULT),
                    Span::styled(entry.date.format("%Y-%m-%d").to_string(), style::DIMMED),
                ])
                .centered()
            })
            .collect()
    }
}

impl Widget for LeaderboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &LeaderboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from(self.lines()).render(area, buf);
    }
}
