// Procedural heart trees: trunk and branches built from heart shapes,
// leaf hearts that fall, burst into sparkles, and reattach.
//
// Everything here is platform-free and deterministic given an RNG: topology
// is randomized once in `Tree::generate` and only animated attributes
// (sway, leaf state, sparkles) change afterwards. All stored positions are
// offsets relative to the tree anchor; the renderer adds the anchor back
// and applies the sway rotation to trunk and branches only, so falling
// leaves keep a vertical trajectory regardless of lean.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use super::constants::*;

/// Life cycle of a leaf heart. The cycle is infinite and restartable:
/// Attached -> Falling -> Sparkling -> Attached -> ...
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafState {
    Attached,
    Falling,
    Sparkling,
}

#[derive(Clone, Debug)]
pub struct TrunkHeart {
    pub offset: Vec2,
    pub size: f32,
    pub phase: f32,
}

#[derive(Clone, Debug)]
pub struct BranchHeart {
    pub offset: Vec2,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct Branch {
    pub tip: Vec2,
    pub phase: f32,
    /// Chain of hearts from trunk top to tip, sizes non-increasing.
    pub segments: Vec<BranchHeart>,
}

#[derive(Clone, Debug)]
pub struct LeafHeart {
    pub branch_tip: Vec2,
    pub phase: f32,
    pub offset: Vec2,
    pub size: f32,
    pub fall_progress: f32,
    pub fall_duration: f32,
    pub fall_delay: f32,
    pub state: LeafState,
    pub sparkle_elapsed: f32,
    pub hue: f32,
}

/// Short-lived particle spawned when a leaf finishes its fall.
#[derive(Clone, Debug)]
pub struct Sparkle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub remaining_life: f32,
    pub size: f32,
    pub hue: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct TreeParams {
    /// Horizontal anchor as a fraction of the surface width.
    pub x_frac: f32,
    /// Baseline as a fraction of the surface height (1.0 = bottom edge).
    pub base_y_frac: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            x_frac: 0.5,
            base_y_frac: 1.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

pub struct Tree {
    pub anchor: Vec2,
    pub size: Vec2,
    pub sway: f32,
    pub sway_target: f32,
    pub trunk_hearts: Vec<TrunkHeart>,
    pub branches: Vec<Branch>,
    pub leaf_hearts: Vec<LeafHeart>,
    pub sparkles: Vec<Sparkle>,
}

impl Tree {
    /// Build a full tree. Randomization happens only here; the caller gates
    /// on a nonzero surface size before calling.
    pub fn generate(params: TreeParams, rng: &mut StdRng) -> Self {
        let defaults = TreeParams::default();
        // Malformed placement falls back to defaults rather than producing
        // NaN geometry that would poison every later frame.
        let x_frac = if params.x_frac.is_finite() {
            params.x_frac.clamp(0.0, 1.0)
        } else {
            defaults.x_frac
        };
        let base_y_frac = if params.base_y_frac.is_finite() {
            params.base_y_frac.clamp(0.0, 1.0)
        } else {
            defaults.base_y_frac
        };
        let width = if params.width.is_finite() && params.width > 0.0 {
            params.width
        } else {
            defaults.width
        };
        let height = if params.height.is_finite() && params.height > 0.0 {
            params.height
        } else {
            defaults.height
        };

        let anchor = Vec2::new(x_frac * width, base_y_frac * height);

        let mut trunk_hearts = Vec::with_capacity(TRUNK_HEART_COUNT);
        for i in 0..TRUNK_HEART_COUNT {
            let zig = if i % 2 == 0 {
                -TRUNK_ZIGZAG_PX
            } else {
                TRUNK_ZIGZAG_PX
            };
            trunk_hearts.push(TrunkHeart {
                offset: Vec2::new(zig, -TRUNK_BASE_LIFT_PX - i as f32 * TRUNK_SPACING_PX),
                size: TRUNK_BASE_SIZE - i as f32 * TRUNK_SIZE_STEP,
                phase: i as f32 * TRUNK_PHASE_STEP,
            });
        }

        let trunk_top = Vec2::new(0.0, -TRUNK_TOP_LIFT_PX);
        let branch_count = rng.gen_range(BRANCH_COUNT_MIN..=BRANCH_COUNT_MAX);
        let mut branches = Vec::with_capacity(branch_count);
        for _ in 0..branch_count {
            let tip = Vec2::new(
                (rng.gen::<f32>() - 0.5) * BRANCH_SPREAD_X_PX,
                -(BRANCH_RISE_MIN_PX + rng.gen::<f32>() * BRANCH_RISE_SPAN_PX),
            );
            let steps = rng.gen_range(BRANCH_STEPS_MIN..=BRANCH_STEPS_MAX);
            let mut segments = Vec::with_capacity(steps + 1);
            for s in 0..=steps {
                let t = s as f32 / steps as f32;
                let jitter = Vec2::new(
                    (s as f32).sin() * BRANCH_JITTER_X_PX,
                    (s as f32 * 0.7).cos() * BRANCH_JITTER_Y_PX,
                );
                segments.push(BranchHeart {
                    offset: trunk_top.lerp(tip, t) + jitter,
                    size: BRANCH_BASE_SIZE - t * BRANCH_TIP_SHRINK,
                });
            }
            branches.push(Branch {
                tip,
                phase: rng.gen::<f32>() * std::f32::consts::TAU,
                segments,
            });
        }

        let mut leaf_hearts = Vec::new();
        for branch in &branches {
            let leaves = rng.gen_range(LEAVES_PER_BRANCH_MIN..=LEAVES_PER_BRANCH_MAX);
            for _ in 0..leaves {
                leaf_hearts.push(LeafHeart {
                    branch_tip: branch.tip,
                    phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    offset: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * LEAF_OFFSET_SPAN_PX,
                        (rng.gen::<f32>() - 0.5) * LEAF_OFFSET_SPAN_PX,
                    ),
                    size: LEAF_SIZE_MIN + rng.gen::<f32>() * LEAF_SIZE_SPAN,
                    // Desynchronized at creation so the canopy never falls in
                    // lockstep.
                    fall_progress: rng.gen::<f32>(),
                    fall_duration: (LEAF_FALL_DURATION_MIN_SEC
                        + rng.gen::<f32>() * LEAF_FALL_DURATION_SPAN_SEC)
                        .max(LEAF_FALL_DURATION_EPSILON_SEC),
                    fall_delay: rng.gen::<f32>() * LEAF_FALL_DELAY_MAX_SEC,
                    state: LeafState::Attached,
                    sparkle_elapsed: 0.0,
                    hue: LEAF_HUE_MIN + rng.gen::<f32>() * LEAF_HUE_SPAN,
                });
            }
        }

        Self {
            anchor,
            size: Vec2::new(width, height),
            sway: 0.0,
            sway_target: 0.0,
            trunk_hearts,
            branches,
            leaf_hearts,
            sparkles: Vec::new(),
        }
    }

    /// Advance one frame: sway easing, leaf state machines, sparkle physics.
    /// Mutates in place and never draws. `pointer_x` is in surface pixels.
    pub fn update(&mut self, dt: f32, pointer_x: f32, rng: &mut StdRng) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let dx = ((pointer_x / self.size.x) - 0.5) * 2.0;
        self.sway_target = dx.clamp(-1.0, 1.0) * SWAY_MAX_RAD;
        // Exponential smoothing toward the target, frame-rate independent.
        let alpha = 1.0 - (-dt / SWAY_TAU_SEC).exp();
        self.sway += (self.sway_target - self.sway) * alpha;

        let Tree {
            leaf_hearts,
            sparkles,
            ..
        } = self;
        // Existing sparkles age first; bursts spawned below enter the next
        // frame with their full life.
        for s in sparkles.iter_mut() {
            s.position += s.velocity * dt;
            s.velocity.y += SPARKLE_GRAVITY_PX_SEC2 * dt;
            s.remaining_life -= dt;
        }
        // Filter-based prune; never mutate while traversing.
        sparkles.retain(|s| s.remaining_life > 0.0);

        for leaf in leaf_hearts.iter_mut() {
            step_leaf(leaf, dt, sparkles, rng);
        }
    }
}

/// One frame of a leaf's life cycle. Delta time left over when the fall
/// delay expires is carried into fall progress, so a single large `dt` can
/// complete the delay-then-fall sequence in one call.
fn step_leaf(leaf: &mut LeafHeart, dt: f32, sparkles: &mut Vec<Sparkle>, rng: &mut StdRng) {
    leaf.phase += dt * LEAF_PHASE_RATE;
    match leaf.state {
        LeafState::Attached => {
            if leaf.fall_delay > dt {
                leaf.fall_delay -= dt;
            } else {
                let carry = dt - leaf.fall_delay;
                leaf.fall_delay = 0.0;
                leaf.state = LeafState::Falling;
                advance_fall(leaf, carry, sparkles, rng);
            }
        }
        LeafState::Falling => advance_fall(leaf, dt, sparkles, rng),
        LeafState::Sparkling => {
            leaf.sparkle_elapsed += dt;
            if leaf.sparkle_elapsed >= SPARKLE_WINDOW_SEC {
                leaf.state = LeafState::Attached;
                leaf.fall_progress = 0.0;
                leaf.fall_delay = LEAF_RESPAWN_DELAY_MIN_SEC
                    + rng.gen::<f32>() * LEAF_RESPAWN_DELAY_SPAN_SEC;
            }
        }
    }
}

fn advance_fall(leaf: &mut LeafHeart, dt: f32, sparkles: &mut Vec<Sparkle>, rng: &mut StdRng) {
    let duration = leaf.fall_duration.max(LEAF_FALL_DURATION_EPSILON_SEC);
    leaf.fall_progress += dt / duration;
    // >= rather than == so the leaf can never get numerically stuck.
    if leaf.fall_progress >= 1.0 {
        leaf.state = LeafState::Sparkling;
        leaf.sparkle_elapsed = 0.0;
        let burst: SmallVec<[Sparkle; SPARKLES_PER_BURST]> = (0..SPARKLES_PER_BURST)
            .map(|_| Sparkle {
                position: leaf.branch_tip
                    + leaf.offset
                    + Vec2::new((rng.gen::<f32>() - 0.5) * SPARKLE_SCATTER_X_PX, 0.0),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * SPARKLE_SPEED_X_PX_SEC,
                    -(SPARKLE_RISE_MIN_PX_SEC + rng.gen::<f32>() * SPARKLE_RISE_SPAN_PX_SEC),
                ),
                remaining_life: SPARKLE_LIFE_MIN_SEC + rng.gen::<f32>() * SPARKLE_LIFE_SPAN_SEC,
                size: SPARKLE_SIZE_MIN + rng.gen::<f32>() * SPARKLE_SIZE_SPAN,
                hue: leaf.hue,
            })
            .collect();
        sparkles.extend(burst);
    }
}

/// Ease-out curve used for the fall drop.
#[inline]
pub fn fall_ease(t: f32) -> f32 {
    1.0 - (1.0 - t).max(0.0).powf(1.5)
}

/// Leaf placement relative to the tree anchor, in unrotated world space.
pub fn leaf_world_offset(leaf: &LeafHeart, time: f32) -> Vec2 {
    let tip_x = leaf.branch_tip.x
        + (time * LEAF_TIP_WAVE_FREQ + leaf.phase).sin() * LEAF_TIP_WAVE_AMP_PX;
    let tip_y = leaf.branch_tip.y;
    match leaf.state {
        LeafState::Attached | LeafState::Sparkling => Vec2::new(
            tip_x + leaf.offset.x + leaf.phase.sin() * LEAF_IDLE_JITTER_PX,
            tip_y + leaf.offset.y,
        ),
        LeafState::Falling => {
            let t = leaf.fall_progress.clamp(0.0, 1.0);
            let drift = (leaf.phase + t * 4.0).sin() * LEAF_DRIFT_AMP_PX;
            Vec2::new(
                tip_x + leaf.offset.x + drift,
                tip_y
                    + leaf.offset.y
                    + fall_ease(t) * LEAF_FALL_DISTANCE_PX
                    + (t * std::f32::consts::PI).sin() * LEAF_FALL_ARC_PX,
            )
        }
    }
}

/// A sparkling leaf is suppressed once it has "dissolved" into its burst.
#[inline]
pub fn leaf_visible(leaf: &LeafHeart) -> bool {
    leaf.state != LeafState::Sparkling
        || leaf.sparkle_elapsed < SPARKLE_WINDOW_SEC * SPARKLE_SUPPRESS_FRAC
}

/// Leaf opacity; fades over the sparkle window, full otherwise.
#[inline]
pub fn leaf_alpha(leaf: &LeafHeart) -> f32 {
    match leaf.state {
        LeafState::Sparkling => (1.0 - leaf.sparkle_elapsed / SPARKLE_WINDOW_SEC).clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// Idle rotation for a trunk heart.
#[inline]
pub fn trunk_idle_rotation(phase: f32, time: f32) -> f32 {
    (time * TRUNK_IDLE_FREQ + phase).sin() * TRUNK_IDLE_AMP_RAD
}

/// Horizontal wave applied to a branch segment while drawing.
#[inline]
pub fn branch_segment_wave(branch_phase: f32, segment_index: usize, time: f32) -> f32 {
    (time * BRANCH_WAVE_FREQ + branch_phase + segment_index as f32 * BRANCH_WAVE_PHASE_STEP).sin()
        * BRANCH_WAVE_AMP_PX
}

/// Per-segment alpha, decreasing toward the branch tip.
#[inline]
pub fn branch_segment_alpha(segment_index: usize) -> f32 {
    (BRANCH_ALPHA_BASE - segment_index as f32 * BRANCH_ALPHA_STEP).max(0.0)
}
