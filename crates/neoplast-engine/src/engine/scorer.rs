//! Monte-Carlo similarity between two canvases.
//!
//! The score is an area estimate: its expected value is the fraction of the
//! unit square on which the two trees agree in leaf color, and the sampling
//! variance shrinks as [`SAMPLES`] grows. Exact geometric equality is
//! deliberately not measured.

use rand::Rng;

use crate::core::Block;

/// Sample points drawn per comparison.
pub const SAMPLES: u32 = 150;

/// Minimum similarity score that counts a level as passed.
pub const PASS_THRESHOLD: u8 = 60;

/// Estimates the visual similarity of two canvases as an integer percentage
/// in `[0, 100]`.
///
/// Draws [`SAMPLES`] points uniformly in `[0,1)²` and counts the points whose
/// leaves carry equal colors in both trees; unpainted matches only unpainted.
/// Returns `floor(matches / SAMPLES * 100)`.
#[must_use]
pub fn similarity<R: Rng + ?Sized>(player: &Block, target: &Block, rng: &mut R) -> u8 {
    let mut matches = 0;
    for _ in 0..SAMPLES {
        let x = rng.random_range(0.0..1.0);
        let y = rng.random_range(0.0..1.0);

        match (player.block_at(x, y), target.block_at(x, y)) {
            (Some(player_leaf), Some(target_leaf)) => {
                if player_leaf.color() == target_leaf.color() {
                    matches += 1;
                }
            }
            // Unreachable for well-formed trees; floating point aside.
            _ => tracing::warn!(x, y, "sample point did not resolve to a leaf"),
        }
    }

    u8::try_from(matches * 100 / SAMPLES).expect("a percentage fits in u8")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use crate::{
        core::{BlockColor, SplitAxis},
        engine::generate_target,
    };

    use super::*;

    fn paint_at(tree: &mut Block, x: f64, y: f64, color: BlockColor) {
        tree.block_at_mut(x, y).unwrap().set_color(color).unwrap();
    }

    #[test]
    fn test_a_tree_is_fully_similar_to_itself() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tree = generate_target(6, &mut rng);

        for _ in 0..10 {
            assert_eq!(similarity(&tree, &tree, &mut rng), 100);
        }
    }

    #[test]
    fn test_disjoint_palettes_score_zero() {
        let mut a = Block::unit();
        a.split(SplitAxis::Vertical, 0.5).unwrap();
        paint_at(&mut a, 0.25, 0.5, BlockColor::Red);
        paint_at(&mut a, 0.75, 0.5, BlockColor::Red);

        let mut b = Block::unit();
        b.split(SplitAxis::Horizontal, 0.3).unwrap();
        paint_at(&mut b, 0.5, 0.1, BlockColor::Blue);
        paint_at(&mut b, 0.5, 0.8, BlockColor::Blue);

        let mut rng = Pcg32::seed_from_u64(17);
        assert_eq!(similarity(&a, &b, &mut rng), 0);
    }

    #[test]
    fn test_unpainted_matches_only_unpainted() {
        let blank = Block::unit();

        let mut rng = Pcg32::seed_from_u64(23);
        assert_eq!(similarity(&blank, &Block::unit(), &mut rng), 100);

        let painted = generate_target(3, &mut rng);
        assert_eq!(similarity(&blank, &painted, &mut rng), 0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(31);
        for _ in 0..20 {
            let a = generate_target(2, &mut rng);
            let b = generate_target(2, &mut rng);
            let score = similarity(&a, &b, &mut rng);
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_single_leaf_player_scores_below_100_against_level_one_target() {
        // Level 1 gives depth 2 and the root split is forced, so the target
        // has at least two painted regions while the player has one
        // unpainted block.
        let mut rng = Pcg32::seed_from_u64(1);
        let target = generate_target(1, &mut rng);
        assert!(!target.is_leaf());

        let player = Block::unit();
        assert!(similarity(&player, &target, &mut rng) < 100);
    }
}
