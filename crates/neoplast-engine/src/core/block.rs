use crate::{
    PaintError, SplitError,
    core::{
        color::BlockColor,
        rect::{Rect, SplitAxis},
    },
};

/// A node of the partition tree.
///
/// Every tree starts as a single unpainted leaf covering [`Rect::UNIT`].
/// [`split`](Self::split) irreversibly converts a leaf into an internal node
/// whose two children exactly tile its rectangle along the chosen axis; there
/// is no merge. Only leaves carry a color and only leaves can be painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    rect: Rect,
    kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq)]
enum BlockKind {
    Leaf {
        color: Option<BlockColor>,
    },
    Split {
        axis: SplitAxis,
        children: Box<[Block; 2]>,
    },
}

impl Block {
    /// Creates an unpainted leaf covering the unit square, the root of a
    /// fresh canvas.
    #[must_use]
    pub fn unit() -> Self {
        Self::leaf(Rect::UNIT)
    }

    fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            kind: BlockKind::Leaf { color: None },
        }
    }

    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, BlockKind::Leaf { .. })
    }

    /// The paint color. `None` for unpainted leaves and for internal nodes,
    /// whose color is not meaningful.
    #[must_use]
    pub const fn color(&self) -> Option<BlockColor> {
        match self.kind {
            BlockKind::Leaf { color } => color,
            BlockKind::Split { .. } => None,
        }
    }

    /// The split axis of an internal node; `None` on a leaf.
    #[must_use]
    pub const fn split_axis(&self) -> Option<SplitAxis> {
        match self.kind {
            BlockKind::Leaf { .. } => None,
            BlockKind::Split { axis, .. } => Some(axis),
        }
    }

    /// The child pair of an internal node, in stored (draw) order.
    #[must_use]
    pub fn children(&self) -> Option<&[Self; 2]> {
        match &self.kind {
            BlockKind::Leaf { .. } => None,
            BlockKind::Split { children, .. } => Some(children),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut [Self; 2]> {
        match &mut self.kind {
            BlockKind::Leaf { .. } => None,
            BlockKind::Split { children, .. } => Some(children),
        }
    }

    /// Converts this leaf into an internal node with two fresh unpainted leaf
    /// children computed by [`Rect::split`].
    ///
    /// Fails with no mutation if the block already has children, or if
    /// `ratio` lies outside the open interval `(0, 1)` (a degenerate ratio
    /// would create a zero-area child).
    pub fn split(&mut self, axis: SplitAxis, ratio: f64) -> Result<(), SplitError> {
        if !self.is_leaf() {
            return Err(SplitError::AlreadySplit);
        }
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(SplitError::RatioOutOfRange);
        }

        let (first, second) = self.rect.split(axis, ratio);
        self.kind = BlockKind::Split {
            axis,
            children: Box::new([Self::leaf(first), Self::leaf(second)]),
        };
        Ok(())
    }

    /// Paints this leaf. Fails with no mutation on an internal node.
    pub fn set_color(&mut self, color: BlockColor) -> Result<(), PaintError> {
        match &mut self.kind {
            BlockKind::Leaf { color: slot } => {
                *slot = Some(color);
                Ok(())
            }
            BlockKind::Split { .. } => Err(PaintError),
        }
    }

    /// Point-location query under the half-open containment rule.
    ///
    /// A leaf returns itself unconditionally; callers query the root with a
    /// point inside the unit square. An internal node descends into whichever
    /// child contains the point and returns `None` if neither does. For a
    /// well-formed tree and an in-range point that indicates a structural
    /// invariant violation, not an expected outcome.
    #[must_use]
    pub fn block_at(&self, x: f64, y: f64) -> Option<&Self> {
        match &self.kind {
            BlockKind::Leaf { .. } => Some(self),
            BlockKind::Split { children, .. } => children
                .iter()
                .find(|child| child.rect.contains(x, y))
                .and_then(|child| child.block_at(x, y)),
        }
    }

    /// Mutable variant of [`Self::block_at`], used to apply player edits.
    pub fn block_at_mut(&mut self, x: f64, y: f64) -> Option<&mut Self> {
        if matches!(self.kind, BlockKind::Leaf { .. }) {
            return Some(self);
        }
        match &mut self.kind {
            BlockKind::Leaf { .. } => unreachable!("leaf handled above"),
            BlockKind::Split { children, .. } => children
                .iter_mut()
                .find(|child| child.rect.contains(x, y))
                .and_then(|child| child.block_at_mut(x, y)),
        }
    }

    /// Lazy depth-first iterator over the leaf blocks, children in stored
    /// order. This is the render query: leaves are the only visual elements
    /// of a canvas.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

/// Depth-first leaf iterator created by [`Block::leaves`].
#[derive(Debug)]
pub struct Leaves<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(block) = self.stack.pop() {
            match &block.kind {
                BlockKind::Leaf { .. } => return Some(block),
                BlockKind::Split { children, .. } => {
                    let [first, second] = &**children;
                    // Second pushed first so the first child is yielded first.
                    self.stack.push(second);
                    self.stack.push(first);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a small irregular tree: root split vertically, left half split
    /// horizontally, bottom-left split vertically again.
    fn sample_tree() -> Block {
        let mut root = Block::unit();
        root.split(SplitAxis::Vertical, 0.4).unwrap();
        root.block_at_mut(0.1, 0.5)
            .unwrap()
            .split(SplitAxis::Horizontal, 0.25)
            .unwrap();
        root.block_at_mut(0.1, 0.9)
            .unwrap()
            .split(SplitAxis::Vertical, 0.5)
            .unwrap();
        root
    }

    fn overlap_area(a: &Rect, b: &Rect) -> f64 {
        let width = (a.x() + a.width()).min(b.x() + b.width()) - a.x().max(b.x());
        let height = (a.y() + a.height()).min(b.y() + b.height()) - a.y().max(b.y());
        width.max(0.0) * height.max(0.0)
    }

    #[test]
    fn test_leaves_tile_the_unit_square() {
        let tree = sample_tree();
        let rects: Vec<Rect> = tree.leaves().map(|leaf| leaf.rect()).collect();

        let total: f64 = rects.iter().map(Rect::area).sum();
        assert!((total - 1.0).abs() < 1e-12);

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(overlap_area(a, b) < 1e-12, "leaves {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn test_children_tile_the_parent_along_the_axis() {
        let mut root = Block::unit();
        root.split(SplitAxis::Horizontal, 0.3).unwrap();

        let [top, bottom] = root.children().unwrap();
        assert_eq!(root.split_axis(), Some(SplitAxis::Horizontal));
        assert_eq!(top.rect().width(), root.rect().width());
        assert_eq!(bottom.rect().width(), root.rect().width());
        assert!(
            (top.rect().height() + bottom.rect().height() - root.rect().height()).abs() < 1e-12
        );
        assert_eq!(bottom.rect().y(), top.rect().y() + top.rect().height());
    }

    #[test]
    fn test_second_split_fails_without_mutation() {
        let mut root = Block::unit();
        root.split(SplitAxis::Vertical, 0.5).unwrap();
        let after_first = root.clone();

        let result = root.split(SplitAxis::Horizontal, 0.3);
        assert!(matches!(result, Err(SplitError::AlreadySplit)));
        assert_eq!(root, after_first);
    }

    #[test]
    fn test_degenerate_ratios_are_rejected() {
        let mut root = Block::unit();
        for ratio in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let result = root.split(SplitAxis::Vertical, ratio);
            assert!(matches!(result, Err(SplitError::RatioOutOfRange)));
            assert!(root.is_leaf());
        }
    }

    #[test]
    fn test_paint_only_applies_to_leaves() {
        let mut root = Block::unit();
        root.split(SplitAxis::Vertical, 0.5).unwrap();
        root.block_at_mut(0.75, 0.5)
            .unwrap()
            .set_color(BlockColor::Blue)
            .unwrap();
        let before = root.clone();

        assert!(root.set_color(BlockColor::Red).is_err());
        assert_eq!(root, before);
        assert_eq!(root.color(), None);
    }

    #[test]
    fn test_point_location_returns_the_containing_leaf() {
        let tree = sample_tree();
        for i in 0..20 {
            for j in 0..20 {
                let x = f64::from(i) / 20.0;
                let y = f64::from(j) / 20.0;
                let leaf = tree.block_at(x, y).expect("in-range point must resolve");
                assert!(leaf.is_leaf());
                assert!(leaf.rect().contains(x, y));
            }
        }
    }

    #[test]
    fn test_leaf_returns_itself_even_for_out_of_range_points() {
        let root = Block::unit();
        let found = root.block_at(2.0, -1.0).unwrap();
        assert_eq!(found.rect(), Rect::UNIT);
    }

    #[test]
    fn test_leaves_are_yielded_depth_first_in_stored_order() {
        let mut root = Block::unit();
        root.split(SplitAxis::Vertical, 0.5).unwrap();
        root.block_at_mut(0.25, 0.5)
            .unwrap()
            .split(SplitAxis::Horizontal, 0.5)
            .unwrap();

        let xs: Vec<(f64, f64)> = root
            .leaves()
            .map(|leaf| (leaf.rect().x(), leaf.rect().y()))
            .collect();
        // Left-top, left-bottom, then right.
        assert_eq!(xs, vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.0)]);
        assert_eq!(root.leaf_count(), 3);
    }

    #[test]
    fn test_fresh_leaves_are_unpainted() {
        let mut root = Block::unit();
        root.set_color(BlockColor::Yellow).unwrap();
        root.split(SplitAxis::Horizontal, 0.5).unwrap();

        let [top, bottom] = root.children().unwrap();
        assert_eq!(top.color(), None);
        assert_eq!(bottom.color(), None);
    }
}
