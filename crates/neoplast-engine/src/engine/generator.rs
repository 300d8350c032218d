use rand::Rng;

use crate::core::{Block, BlockColor, SplitAxis};

/// Recursion depth never exceeds this, however high the level climbs.
const MAX_DEPTH: u32 = 5;

/// Probability that a leaf splits again during recursive subdivision.
const SPLIT_CHANCE: f64 = 0.7;

/// Recursion depth for a difficulty level: `min(5, 1 + ceil(level / 2))`.
#[must_use]
pub fn target_depth(level: u32) -> u32 {
    MAX_DEPTH.min(1 + level.div_ceil(2))
}

/// Generates the target canvas for the given difficulty level.
///
/// The root is always split first (uniform random axis, ratio in
/// `[0.3, 0.7]`), so a target is never a single flat color. Below the root,
/// each leaf splits with probability [`SPLIT_CHANCE`] (ratio in `[0.2, 0.8]`)
/// until the remaining depth reaches zero, and every resulting leaf is
/// painted from the weighted palette.
///
/// Deterministic in `rng`: the same source state produces the same tree.
pub fn generate_target<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Block {
    let mut root = Block::unit();

    let ratio = rng.random_range(0.3..=0.7);
    root.split(random_axis(rng), ratio)
        .expect("a fresh root is an unsplit leaf");

    random_split(&mut root, target_depth(level), rng);
    paint_leaves(&mut root, rng);
    root
}

fn random_axis<R: Rng + ?Sized>(rng: &mut R) -> SplitAxis {
    if rng.random_bool(0.5) {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    }
}

fn random_split<R: Rng + ?Sized>(block: &mut Block, depth: u32, rng: &mut R) {
    if depth == 0 {
        return;
    }

    // Already-split nodes (the forced root split) keep their structure; the
    // depth limit still applies to their subtrees.
    if let Some(children) = block.children_mut() {
        for child in children {
            random_split(child, depth - 1, rng);
        }
        return;
    }

    if rng.random_bool(SPLIT_CHANCE) {
        let ratio = rng.random_range(0.2..=0.8);
        if block.split(random_axis(rng), ratio).is_ok()
            && let Some(children) = block.children_mut()
        {
            for child in children {
                random_split(child, depth - 1, rng);
            }
        }
    }
}

fn paint_leaves<R: Rng + ?Sized>(block: &mut Block, rng: &mut R) {
    if let Some(children) = block.children_mut() {
        for child in children {
            paint_leaves(child, rng);
        }
    } else {
        let color = BlockColor::sample_weighted(rng);
        block.set_color(color).expect("unsplit blocks are leaves");
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_depth_grows_with_level_and_caps_at_five() {
        assert_eq!(target_depth(1), 2);
        assert_eq!(target_depth(2), 2);
        assert_eq!(target_depth(3), 3);
        assert_eq!(target_depth(4), 3);
        assert_eq!(target_depth(7), 5);
        assert_eq!(target_depth(8), 5);
        assert_eq!(target_depth(100), 5);
    }

    #[test]
    fn test_target_is_never_a_single_leaf() {
        for level in 1..=10 {
            for seed in 0..20 {
                let mut rng = Pcg32::seed_from_u64(seed);
                let target = generate_target(level, &mut rng);
                assert!(
                    !target.is_leaf(),
                    "level {level} seed {seed} produced an unsplit target"
                );
                assert!(target.leaf_count() >= 2);
            }
        }
    }

    #[test]
    fn test_every_leaf_is_painted() {
        let mut rng = Pcg32::seed_from_u64(11);
        let target = generate_target(5, &mut rng);
        for leaf in target.leaves() {
            assert!(leaf.color().is_some());
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_rng_state() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        assert_eq!(generate_target(4, &mut a), generate_target(4, &mut b));
    }

    #[test]
    fn test_leaves_tile_the_unit_square() {
        let mut rng = Pcg32::seed_from_u64(3);
        let target = generate_target(9, &mut rng);
        let total: f64 = target.leaves().map(|leaf| leaf.rect().area()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
