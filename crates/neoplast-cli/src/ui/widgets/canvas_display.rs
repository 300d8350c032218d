use neoplast_engine::Block;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::color;

/// Renders a partition tree into its area.
///
/// Walks the tree's leaves depth-first and maps each leaf's unit-square
/// rectangle onto the cell grid; internal nodes contribute nothing visual.
/// Unpainted leaves show as the neutral canvas tone.
#[derive(Debug)]
pub(crate) struct CanvasDisplay<'a> {
    canvas: &'a Block,
    block: Option<BlockWidget<'a>>,
}

impl<'a> CanvasDisplay<'a> {
    pub(crate) fn new(canvas: &'a Block) -> Self {
        Self {
            canvas,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

impl Widget for CanvasDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CanvasDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        for leaf in self.canvas.leaves() {
            let cells = map_to_cells(leaf.rect(), area);
            let fill = leaf.color().map_or(color::UNPAINTED, color::of);
            buf.set_style(cells, Style::new().bg(fill));
        }
    }
}

/// Maps a unit-square rectangle to whole cells of `area`.
///
/// Both edges of a leaf are rounded against the same grid, so two leaves
/// sharing an edge in the unit square share a cell boundary on screen: no
/// gaps, no overlap.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn map_to_cells(rect: neoplast_engine::Rect, area: Rect) -> Rect {
    let scale_x = f64::from(area.width);
    let scale_y = f64::from(area.height);

    let left = (rect.x() * scale_x).round() as u16;
    let top = (rect.y() * scale_y).round() as u16;
    let right = ((rect.x() + rect.width()) * scale_x).round() as u16;
    let bottom = ((rect.y() + rect.height()) * scale_y).round() as u16;

    let right = right.min(area.width);
    let bottom = bottom.min(area.height);

    Rect::new(
        area.x + left,
        area.y + top,
        right.saturating_sub(left),
        bottom.saturating_sub(top),
    )
}
