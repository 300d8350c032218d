use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen regions of the play view.
///
/// Derived purely from the terminal area, so input handling can recompute
/// exactly the layout the renderer used and map mouse positions back onto
/// the player canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GameLayout {
    pub(crate) status: Rect,
    pub(crate) target: Rect,
    pub(crate) player: Rect,
    pub(crate) palette: Rect,
    pub(crate) toolbar: Rect,
    pub(crate) help: Rect,
}

impl GameLayout {
    pub(crate) fn compute(area: Rect) -> Self {
        let [status, canvases, palette, toolbar, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [target, player] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .areas(canvases);

        Self {
            status,
            target,
            player,
            palette,
            toolbar,
            help,
        }
    }

    /// The player panel without its border: the cells that show leaves and
    /// accept clicks.
    pub(crate) fn player_canvas(&self) -> Rect {
        self.player.inner(Margin::new(1, 1))
    }
}
