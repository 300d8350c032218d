pub(crate) use self::{
    canvas_display::*, leaderboard_display::*, palette_display::*, session_display::*,
    status_display::*, toolbar_display::*,
};

mod canvas_display;
mod leaderboard_display;
mod palette_display;
mod session_display;
mod status_display;
mod toolbar_display;

pub(crate) mod color {
    use neoplast_engine::BlockColor;
    use ratatui::style::Color;

    // The Mondrian palette.
    pub(crate) const WHITE: Color = Color::Rgb(240, 240, 240);
    pub(crate) const RED: Color = Color::Rgb(227, 0, 34);
    pub(crate) const BLUE: Color = Color::Rgb(0, 120, 191);
    pub(crate) const YELLOW: Color = Color::Rgb(255, 209, 0);
    pub(crate) const BLACK: Color = Color::Rgb(17, 17, 17);

    /// Unpainted canvas blocks.
    pub(crate) const UNPAINTED: Color = Color::Rgb(70, 70, 70);
    /// Screen background and panel fill.
    pub(crate) const BACKGROUND: Color = Color::Rgb(30, 30, 30);
    /// Borders and dimmed text.
    pub(crate) const FRAME: Color = Color::Rgb(150, 150, 150);

    pub(crate) const fn of(block_color: BlockColor) -> Color {
        match block_color {
            BlockColor::White => WHITE,
            BlockColor::Red => RED,
            BlockColor::Blue => BLUE,
            BlockColor::Yellow => YELLOW,
            BlockColor::Black => BLACK,
        }
    }
}

pub(crate) mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub(crate) const DEFAULT: Style = fg_bg(color::WHITE, color::BACKGROUND);
    pub(crate) const DIMMED: Style = fg_bg(color::FRAME, color::BACKGROUND);
    pub(crate) const HIGHLIGHT: Style = fg_bg(color::YELLOW, color::BACKGROUND);
}
