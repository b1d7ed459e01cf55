// Host-side tests for the heart-tree simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod tree {
        include!("../src/core/tree.rs");
    }
}

use rand::prelude::*;
use sim::constants::*;
use sim::tree::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn params() -> TreeParams {
    TreeParams {
        x_frac: 0.5,
        base_y_frac: 1.0,
        width: 800.0,
        height: 600.0,
    }
}

#[test]
fn trunk_climbs_and_shrinks() {
    let tree = Tree::generate(params(), &mut rng(7));
    assert_eq!(tree.trunk_hearts.len(), TRUNK_HEART_COUNT);
    for pair in tree.trunk_hearts.windows(2) {
        // Upward means more negative y relative to the anchor.
        assert!(pair[1].offset.y < pair[0].offset.y);
        assert!(pair[1].size < pair[0].size);
        // Zig-zag alternates sides.
        assert!(pair[0].offset.x * pair[1].offset.x < 0.0);
    }
}

#[test]
fn topology_counts_stay_in_range() {
    for seed in 0..20u64 {
        let tree = Tree::generate(params(), &mut rng(seed));
        let branches = tree.branches.len();
        assert!((BRANCH_COUNT_MIN..=BRANCH_COUNT_MAX).contains(&branches));
        for branch in &tree.branches {
            let hearts = branch.segments.len();
            assert!((BRANCH_STEPS_MIN + 1..=BRANCH_STEPS_MAX + 1).contains(&hearts));
        }
        let leaves = tree.leaf_hearts.len();
        assert!(leaves >= branches * LEAVES_PER_BRANCH_MIN);
        assert!(leaves <= branches * LEAVES_PER_BRANCH_MAX);
    }
}

#[test]
fn leaf_timings_and_branch_sizes_are_well_formed() {
    let tree = Tree::generate(params(), &mut rng(15));
    for leaf in &tree.leaf_hearts {
        assert!(leaf.fall_duration >= LEAF_FALL_DURATION_EPSILON_SEC);
        assert!(leaf.fall_delay >= 0.0);
        assert!((0.0..1.0).contains(&leaf.fall_progress));
        assert!(leaf.hue >= LEAF_HUE_MIN);
        assert!(leaf.hue <= LEAF_HUE_MIN + LEAF_HUE_SPAN);
        assert_eq!(leaf.state, LeafState::Attached);
    }
    for branch in &tree.branches {
        for pair in branch.segments.windows(2) {
            assert!(pair[1].size <= pair[0].size);
        }
    }
}

#[test]
fn anchor_follows_fractional_placement() {
    let tree = Tree::generate(
        TreeParams {
            x_frac: 0.25,
            base_y_frac: 1.0,
            width: 400.0,
            height: 300.0,
        },
        &mut rng(1),
    );
    assert!((tree.anchor.x - 100.0).abs() < 1e-3);
    assert!((tree.anchor.y - 300.0).abs() < 1e-3);
}

#[test]
fn malformed_params_fall_back_to_defaults() {
    let tree = Tree::generate(
        TreeParams {
            x_frac: f32::NAN,
            base_y_frac: f32::INFINITY,
            width: -5.0,
            height: 0.0,
        },
        &mut rng(2),
    );
    assert!(tree.anchor.x.is_finite());
    assert!(tree.anchor.y.is_finite());
    let defaults = TreeParams::default();
    assert!((tree.size.x - defaults.width).abs() < 1e-3);
    assert!((tree.size.y - defaults.height).abs() < 1e-3);
}

#[test]
fn same_seed_same_tree() {
    let a = Tree::generate(params(), &mut rng(99));
    let b = Tree::generate(params(), &mut rng(99));
    assert_eq!(a.branches.len(), b.branches.len());
    assert_eq!(a.leaf_hearts.len(), b.leaf_hearts.len());
    for (la, lb) in a.leaf_hearts.iter().zip(&b.leaf_hearts) {
        assert_eq!(la.offset, lb.offset);
        assert_eq!(la.size, lb.size);
    }
}

#[test]
fn sway_approaches_pointer_side_and_stays_bounded() {
    let mut tree = Tree::generate(params(), &mut rng(3));
    // Keep the canopy inert so only sway is exercised.
    for leaf in tree.leaf_hearts.iter_mut() {
        leaf.fall_delay = 1_000.0;
    }
    let mut r = rng(4);
    let mut prev = tree.sway;
    for _ in 0..120 {
        tree.update(1.0 / 60.0, 800.0, &mut r); // pointer at the right edge
        assert!(tree.sway >= prev);
        assert!(tree.sway <= SWAY_MAX_RAD + 1e-6);
        prev = tree.sway;
    }
    assert!((tree.sway - SWAY_MAX_RAD).abs() < 0.01);

    // Pointer dead center targets zero lean.
    tree.update(1.0 / 60.0, 400.0, &mut r);
    assert!(tree.sway_target.abs() < 1e-6);
}

/// A leaf with no remaining delay and a one-second fall must complete the
/// whole delay-then-fall sequence within a single 1.01 s step.
#[test]
fn big_step_completes_fall_and_bursts() {
    let mut tree = Tree::generate(params(), &mut rng(5));
    for leaf in tree.leaf_hearts.iter_mut() {
        leaf.fall_delay = 1_000.0;
    }
    {
        let leaf = &mut tree.leaf_hearts[0];
        leaf.fall_delay = 0.0;
        leaf.fall_duration = 1.0;
        leaf.fall_progress = 0.0;
        leaf.state = LeafState::Attached;
    }
    let mut r = rng(6);
    tree.update(1.01, 400.0, &mut r);
    assert_eq!(tree.leaf_hearts[0].state, LeafState::Sparkling);
    assert_eq!(tree.sparkles.len(), SPARKLES_PER_BURST);
}

#[test]
fn sparkles_expire_and_leaf_reattaches() {
    let mut tree = Tree::generate(params(), &mut rng(8));
    for leaf in tree.leaf_hearts.iter_mut() {
        leaf.fall_delay = 1_000.0;
    }
    tree.leaf_hearts[0].fall_delay = 0.0;
    tree.leaf_hearts[0].fall_duration = 1.0;
    let mut r = rng(9);
    tree.update(1.01, 400.0, &mut r);
    assert!(!tree.sparkles.is_empty());

    // Longest sparkle life is well under a second; one more second clears
    // the burst and finishes the sparkle window.
    tree.update(1.0, 400.0, &mut r);
    assert!(tree.sparkles.is_empty());
    let leaf = &tree.leaf_hearts[0];
    assert_eq!(leaf.state, LeafState::Attached);
    assert_eq!(leaf.fall_progress, 0.0);
    assert!(leaf.fall_delay >= LEAF_RESPAWN_DELAY_MIN_SEC);
    assert!(leaf.fall_delay <= LEAF_RESPAWN_DELAY_MIN_SEC + LEAF_RESPAWN_DELAY_SPAN_SEC);
}

#[test]
fn sparkling_leaf_fades_then_hides() {
    let mut tree = Tree::generate(params(), &mut rng(10));
    for leaf in tree.leaf_hearts.iter_mut() {
        leaf.fall_delay = 1_000.0;
    }
    tree.leaf_hearts[0].fall_delay = 0.0;
    tree.leaf_hearts[0].fall_duration = 1.0;
    let mut r = rng(11);
    tree.update(1.01, 400.0, &mut r);

    let fresh = &tree.leaf_hearts[0];
    assert!(leaf_visible(fresh));
    assert!(leaf_alpha(fresh) > 0.9);

    // Push past the suppression fraction of the sparkle window.
    tree.update(SPARKLE_WINDOW_SEC * SPARKLE_SUPPRESS_FRAC + 0.05, 400.0, &mut r);
    let dissolved = &tree.leaf_hearts[0];
    assert!(!leaf_visible(dissolved));
    assert!(leaf_alpha(dissolved) < 1.0);
}

#[test]
fn fall_ease_is_monotone_ease_out() {
    assert!(fall_ease(0.0).abs() < 1e-6);
    assert!((fall_ease(1.0) - 1.0).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=10 {
        let v = fall_ease(i as f32 / 10.0);
        assert!(v >= prev);
        prev = v;
    }
    // Ease-out: the first half covers more than half the distance.
    assert!(fall_ease(0.5) > 0.5);
}

#[test]
fn falling_leaf_ends_below_its_branch() {
    let mut tree = Tree::generate(params(), &mut rng(12));
    let leaf = &mut tree.leaf_hearts[0];
    leaf.state = LeafState::Falling;
    leaf.fall_progress = 0.0;
    let top = leaf_world_offset(leaf, 0.0);
    leaf.fall_progress = 1.0;
    let bottom = leaf_world_offset(leaf, 0.0);
    assert!(bottom.y > top.y + LEAF_FALL_DISTANCE_PX * 0.9);
}

#[test]
fn branch_segment_alpha_decreases_toward_tip() {
    let mut prev = branch_segment_alpha(0);
    assert!(prev <= 1.0);
    for i in 1..8 {
        let a = branch_segment_alpha(i);
        assert!(a <= prev);
        assert!(a >= 0.0);
        prev = a;
    }
}

#[test]
fn update_survives_nonfinite_dt() {
    let mut tree = Tree::generate(params(), &mut rng(13));
    let mut r = rng(14);
    tree.update(f32::NAN, 400.0, &mut r);
    tree.update(-1.0, 400.0, &mut r);
    assert!(tree.sway.is_finite());
    for leaf in &tree.leaf_hearts {
        assert!(leaf.fall_progress.is_finite());
    }
}
