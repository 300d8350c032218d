/// Direction along which a block's rectangle is divided in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SplitAxis {
    /// Stacks the two parts vertically (top and bottom).
    Horizontal,
    /// Places the two parts side by side (left and right).
    Vertical,
}

/// Axis-aligned rectangle in unit-square coordinates.
///
/// A rectangle occupies the half-open region `[x, x + width) × [y, y + height)`.
/// The root rectangle of every partition tree is [`Rect::UNIT`]; all other
/// rectangles are produced by [`Rect::split`] and therefore tile it exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// The unit square `(0, 0, 1, 1)`.
    pub const UNIT: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Half-open containment test: `x ∈ [x, x + width)`, `y ∈ [y, y + height)`.
    ///
    /// The half-open rule makes the two halves of a split rectangle disjoint,
    /// so a point resolves to at most one of them.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Splits the rectangle into two parts that exactly tile it.
    ///
    /// A horizontal split gives the top part `ratio` of the height, a
    /// vertical split gives the left part `ratio` of the width. The second
    /// part is computed as the remainder, so the parts tile the parent with
    /// no gap and no overlap even when the scaled extent rounds.
    #[must_use]
    pub fn split(&self, axis: SplitAxis, ratio: f64) -> (Self, Self) {
        match axis {
            SplitAxis::Horizontal => {
                let top = self.height * ratio;
                (
                    Self::new(self.x, self.y, self.width, top),
                    Self::new(self.x, self.y + top, self.width, self.height - top),
                )
            }
            SplitAxis::Vertical => {
                let left = self.width * ratio;
                (
                    Self::new(self.x, self.y, left, self.height),
                    Self::new(self.x + left, self.y, self.width - left, self.height),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_is_half_open() {
        let rect = Rect::new(0.25, 0.25, 0.5, 0.5);

        assert!(rect.contains(0.25, 0.25));
        assert!(rect.contains(0.5, 0.5));
        assert!(!rect.contains(0.75, 0.5));
        assert!(!rect.contains(0.5, 0.75));
        assert!(!rect.contains(0.2, 0.5));
    }

    #[test]
    fn test_horizontal_split_stacks_parts() {
        let (top, bottom) = Rect::UNIT.split(SplitAxis::Horizontal, 0.3);

        assert_eq!(top, Rect::new(0.0, 0.0, 1.0, 0.3));
        assert_eq!(bottom.y(), 0.3);
        assert_eq!(bottom.width(), 1.0);
        assert!((top.height() + bottom.height() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_split_places_parts_side_by_side() {
        let (left, right) = Rect::UNIT.split(SplitAxis::Vertical, 0.6);

        assert_eq!(left, Rect::new(0.0, 0.0, 0.6, 1.0));
        assert_eq!(right.x(), 0.6);
        assert!((left.width() + right.width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_split_parts_tile_exactly_for_awkward_ratios() {
        // The remainder rule must hold even for ratios with no exact binary
        // representation.
        let rect = Rect::new(0.1, 0.2, 0.7, 0.55);
        let (first, second) = rect.split(SplitAxis::Horizontal, 1.0 / 3.0);

        assert!((first.height() + second.height() - rect.height()).abs() < 1e-12);
        assert_eq!(second.y(), rect.y() + first.height());

        let (first, second) = rect.split(SplitAxis::Vertical, 0.123_456);
        assert!((first.width() + second.width() - rect.width()).abs() < 1e-12);
        assert_eq!(second.x(), rect.x() + first.width());
    }

    #[test]
    fn test_split_halves_are_disjoint_at_the_seam() {
        let (top, bottom) = Rect::UNIT.split(SplitAxis::Horizontal, 0.5);

        assert!(!top.contains(0.5, 0.5));
        assert!(bottom.contains(0.5, 0.5));
    }
}
