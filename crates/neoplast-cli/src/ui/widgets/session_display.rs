use neoplast_engine::{GameSession, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, Clear, Widget},
};

use crate::{
    score_store::Leaderboard,
    ui::{
        GameLayout,
        widgets::{
            CanvasDisplay, LeaderboardDisplay, PaletteDisplay, StatusDisplay, ToolbarDisplay,
            color, style,
        },
    },
};

/// The full play view: status line, target and player panels, palette and
/// tool bars, plus the start and game-over overlays.
#[derive(Debug)]
pub(crate) struct SessionDisplay<'a> {
    session: &'a GameSession,
    leaderboard: &'a Leaderboard,
}

impl<'a> SessionDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession, leaderboard: &'a Leaderboard) -> Self {
        Self {
            session,
            leaderboard,
        }
    }

    fn render_start_overlay(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled("N E O P L A S T", style::HIGHLIGHT)).centered(),
            Line::raw(""),
            Line::raw("Recreate the target painting before the clock runs out.").centered(),
            Line::raw("Split blocks, paint them, match 60% or better to advance.").centered(),
            Line::raw(""),
            Line::raw("ENTER to start").centered(),
        ];
        render_overlay(area, lines, buf);
    }

    fn render_game_over_overlay(&self, area: Rect, buf: &mut Buffer) {
        let stats = self.session.stats();
        let level_score = self.session.last_score().unwrap_or(0);

        let mut lines = vec![
            Line::from(Span::styled(
                " GAME OVER ",
                Style::new().fg(color::WHITE).bg(color::RED),
            ))
            .centered(),
            Line::raw(""),
            Line::raw(format!(
                "Level {} score: {level_score}% (needed 60%)",
                stats.level()
            ))
            .centered(),
            Line::raw(format!("Final total: {}", stats.total_score())).centered(),
            Line::raw(""),
            Line::from(Span::styled("BEST SCORES", style::DIMMED)).centered(),
        ];
        lines.extend(LeaderboardDisplay::new(self.leaderboard).lines());
        lines.push(Line::raw(""));
        lines.push(Line::raw("R to restart").centered());

        render_overlay(area, lines, buf);
    }
}

fn render_overlay(area: Rect, lines: Vec<Line<'_>>, buf: &mut Buffer) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = area.centered(Constraint::Length(60), Constraint::Length(height));

    let block = BlockWidget::bordered()
        .border_style(style::DIMMED)
        .style(style::DEFAULT);
    let inner = block.inner(popup);

    Clear.render(popup, buf);
    block.render(popup, buf);
    Text::from(lines).render(inner, buf);
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, style::DEFAULT);
        let layout = GameLayout::compute(area);

        let border_style = match self.session.session_state() {
            SessionState::NotStarted => style::DIMMED,
            SessionState::Playing => style::DEFAULT,
            SessionState::GameOver => Style::new().fg(color::RED).bg(color::BACKGROUND),
        };

        StatusDisplay::new(self.session).render(layout.status, buf);
        CanvasDisplay::new(self.session.target())
            .block(
                BlockWidget::bordered()
                    .title(Line::from("TARGET").centered())
                    .border_style(border_style)
                    .style(style::DEFAULT),
            )
            .render(layout.target, buf);
        CanvasDisplay::new(self.session.player())
            .block(
                BlockWidget::bordered()
                    .title(Line::from("CANVAS").centered())
                    .border_style(border_style)
                    .style(style::DEFAULT),
            )
            .render(layout.player, buf);
        PaletteDisplay::new(self.session.selected_color()).render(layout.palette, buf);
        ToolbarDisplay::new(self.session.selected_tool()).render(layout.toolbar, buf);

        match self.session.session_state() {
            SessionState::NotStarted => self.render_start_overlay(area, buf),
            SessionState::GameOver => self.render_game_over_overlay(area, buf),
            SessionState::Playing => {}
        }
    }
}
