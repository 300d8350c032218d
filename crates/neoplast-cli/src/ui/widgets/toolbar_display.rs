use neoplast_engine::Tool;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::widgets::style;

/// Tool bar. Shows the split and paint tools with their keys; the selection
/// is bracketed.
#[derive(Debug)]
pub(crate) struct ToolbarDisplay {
    selected: Tool,
}

impl ToolbarDisplay {
    const ENTRIES: [(char, &'static str, Tool); 3] = [
        ('H', "split ─", Tool::SplitHorizontal),
        ('V', "split │", Tool::SplitVertical),
        ('P', "paint", Tool::Paint),
    ];

    pub(crate) fn new(selected: Tool) -> Self {
        Self { selected }
    }
}

impl Widget for ToolbarDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ToolbarDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" TOOLS  ", style::DIMMED)];
        for (key, label, tool) in ToolbarDisplay::ENTRIES {
            let selected = tool == self.selected;
            let text = if selected {
                format!("[{key}] {label}")
            } else {
                format!(" {key}  {label}")
            };
            spans.push(Span::styled(
                text,
                if selected {
                    style::HIGHLIGHT
                } else {
                    style::DEFAULT
                },
            ));
            spans.push(Span::raw("  "));
        }
        Line::from(spans).style(style::DEFAULT).render(area, buf);
    }
}
