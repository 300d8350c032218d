use rand::{Rng, seq::IndexedRandom as _};

/// Paint colors of the palette.
///
/// The palette is fixed; a leaf is either unpainted or carries exactly one of
/// these. Target generation draws from [`BlockColor::sample_weighted`], which
/// favors the primaries over black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    White,
    Red,
    Blue,
    Yellow,
    Black,
}

impl BlockColor {
    /// Number of palette colors (5).
    pub const LEN: usize = 5;

    /// Every palette color, in swatch order.
    pub const ALL: [Self; Self::LEN] = [
        Self::White,
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Black,
    ];

    /// Draw table: white, red, blue and yellow carry weight 2, black weight 1.
    const WEIGHTED: [Self; 9] = [
        Self::White,
        Self::White,
        Self::Red,
        Self::Red,
        Self::Blue,
        Self::Blue,
        Self::Yellow,
        Self::Yellow,
        Self::Black,
    ];

    /// Draws a palette color uniformly by weight from the given source.
    pub fn sample_weighted<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::WEIGHTED
            .choose(rng)
            .expect("the draw table is non-empty")
    }

    /// Swatch label shown in the palette bar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Black => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_all_lists_every_color_once() {
        assert_eq!(BlockColor::ALL.len(), BlockColor::LEN);
        for (i, a) in BlockColor::ALL.iter().enumerate() {
            for b in &BlockColor::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_weighted_draw_covers_the_palette() {
        // With 2000 draws every color should appear; black least often.
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts = [0u32; BlockColor::LEN];
        for _ in 0..2000 {
            let color = BlockColor::sample_weighted(&mut rng);
            let index = BlockColor::ALL.iter().position(|c| *c == color).unwrap();
            counts[index] += 1;
        }

        assert!(counts.iter().all(|&n| n > 0));
        let black = counts[BlockColor::LEN - 1];
        assert!(counts[..BlockColor::LEN - 1].iter().all(|&n| n > black));
    }

    #[test]
    fn test_weighted_draw_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                BlockColor::sample_weighted(&mut a),
                BlockColor::sample_weighted(&mut b)
            );
        }
    }
}
