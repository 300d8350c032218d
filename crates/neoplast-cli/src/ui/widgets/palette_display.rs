use neoplast_engine::BlockColor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::widgets::{color, style};

/// Color swatch bar. Number keys pick a swatch; the selection is bracketed.
#[derive(Debug)]
pub(crate) struct PaletteDisplay {
    selected: BlockColor,
}

impl PaletteDisplay {
    pub(crate) fn new(selected: BlockColor) -> Self {
        Self { selected }
    }
}

impl Widget for PaletteDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PaletteDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" COLORS ", style::DIMMED)];
        for (index, block_color) in BlockColor::ALL.iter().enumerate() {
            let selected = *block_color == self.selected;
            let key = index + 1;
            let label = if selected {
                format!("[{key}]")
            } else {
                format!(" {key} ")
            };
            spans.push(Span::styled(
                label,
                if selected {
                    style::HIGHLIGHT
                } else {
                    style::DEFAULT
                },
            ));
            spans.push(Span::styled(
                "██",
                Style::new().fg(color::of(*block_color)),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans).style(style::DEFAULT).render(area, buf);
    }
}
