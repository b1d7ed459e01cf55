/// Animation tuning constants for trees, particles, and the pointer trail.
///
/// These constants express intended behavior (time constants, clamp limits,
/// layout spans) and keep magic numbers out of the code.
// Largest delta time a single frame may consume. Tab backgrounding and
// debugger pauses otherwise make leaves skip whole fall cycles at once.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
pub const TRAIL_MAX_FRAME_DT_SEC: f32 = 0.05;

// Sway: lean toward the pointer, smoothed with a time constant so the tree
// lags pointer motion without overshoot.
pub const SWAY_MAX_RAD: f32 = 0.08;
pub const SWAY_TAU_SEC: f32 = 0.25;

// Trunk layout: a short chain of stacked hearts, zig-zagging and shrinking
// toward the top.
pub const TRUNK_HEART_COUNT: usize = 5;
pub const TRUNK_ZIGZAG_PX: f32 = 7.0;
pub const TRUNK_BASE_LIFT_PX: f32 = 35.0;
pub const TRUNK_SPACING_PX: f32 = 22.0;
pub const TRUNK_BASE_SIZE: f32 = 22.0;
pub const TRUNK_SIZE_STEP: f32 = 2.0;
pub const TRUNK_PHASE_STEP: f32 = 0.4;
pub const TRUNK_IDLE_FREQ: f32 = 0.25;
pub const TRUNK_IDLE_AMP_RAD: f32 = 0.03;
// Branch chains start this far above the trunk base.
pub const TRUNK_TOP_LIFT_PX: f32 = 60.0;

// Branch topology (randomized once at creation, stable for the session).
pub const BRANCH_COUNT_MIN: usize = 6;
pub const BRANCH_COUNT_MAX: usize = 9;
pub const BRANCH_SPREAD_X_PX: f32 = 140.0;
pub const BRANCH_RISE_MIN_PX: f32 = 100.0;
pub const BRANCH_RISE_SPAN_PX: f32 = 220.0;
// Steps per chain; a chain of `steps` segments has `steps + 1` hearts.
pub const BRANCH_STEPS_MIN: usize = 4;
pub const BRANCH_STEPS_MAX: usize = 6;
pub const BRANCH_BASE_SIZE: f32 = 6.0;
pub const BRANCH_TIP_SHRINK: f32 = 3.0;
pub const BRANCH_MIN_DRAW_SIZE: f32 = 3.0;
pub const BRANCH_JITTER_X_PX: f32 = 8.0;
pub const BRANCH_JITTER_Y_PX: f32 = 5.0;
pub const BRANCH_WAVE_FREQ: f32 = 0.2;
pub const BRANCH_WAVE_AMP_PX: f32 = 3.0;
pub const BRANCH_WAVE_PHASE_STEP: f32 = 0.3;
pub const BRANCH_ALPHA_BASE: f32 = 0.85;
pub const BRANCH_ALPHA_STEP: f32 = 0.08;

// Leaves: attachment, size, hue, and fall timing ranges.
pub const LEAVES_PER_BRANCH_MIN: usize = 4;
pub const LEAVES_PER_BRANCH_MAX: usize = 7;
pub const LEAF_OFFSET_SPAN_PX: f32 = 40.0;
pub const LEAF_SIZE_MIN: f32 = 4.0;
pub const LEAF_SIZE_SPAN: f32 = 5.0;
pub const LEAF_HUE_MIN: f32 = 340.0;
pub const LEAF_HUE_SPAN: f32 = 30.0;
pub const LEAF_FALL_DELAY_MAX_SEC: f32 = 2.0;
pub const LEAF_FALL_DURATION_MIN_SEC: f32 = 3.0;
pub const LEAF_FALL_DURATION_SPAN_SEC: f32 = 4.0;
// Lower bound keeps `dt / fall_duration` finite even for malformed input.
pub const LEAF_FALL_DURATION_EPSILON_SEC: f32 = 1e-3;
pub const LEAF_RESPAWN_DELAY_MIN_SEC: f32 = 1.0;
pub const LEAF_RESPAWN_DELAY_SPAN_SEC: f32 = 2.0;
pub const LEAF_FALL_DISTANCE_PX: f32 = 180.0;
pub const LEAF_FALL_ARC_PX: f32 = 20.0;
pub const LEAF_DRIFT_AMP_PX: f32 = 8.0;
pub const LEAF_IDLE_JITTER_PX: f32 = 3.0;
pub const LEAF_TIP_WAVE_AMP_PX: f32 = 4.0;
pub const LEAF_TIP_WAVE_FREQ: f32 = 0.25;
pub const LEAF_PHASE_RATE: f32 = 0.5;

// Sparkle burst fired when a leaf finishes falling.
pub const SPARKLES_PER_BURST: usize = 8;
pub const SPARKLE_WINDOW_SEC: f32 = 0.8;
// The leaf is suppressed once this fraction of the sparkle window has
// elapsed, so it reads as having dissolved into the burst.
pub const SPARKLE_SUPPRESS_FRAC: f32 = 0.3;
pub const SPARKLE_LIFE_MIN_SEC: f32 = 0.4;
pub const SPARKLE_LIFE_SPAN_SEC: f32 = 0.4;
pub const SPARKLE_SCATTER_X_PX: f32 = 20.0;
pub const SPARKLE_SPEED_X_PX_SEC: f32 = 60.0;
pub const SPARKLE_RISE_MIN_PX_SEC: f32 = 60.0;
pub const SPARKLE_RISE_SPAN_PX_SEC: f32 = 120.0;
pub const SPARKLE_GRAVITY_PX_SEC2: f32 = 30.0;
pub const SPARKLE_SIZE_MIN: f32 = 2.0;
pub const SPARKLE_SIZE_SPAN: f32 = 3.0;

// Ambient floating hearts (background field, toroidal wrap).
pub const FLOATING_HEART_COUNT: usize = 40;
pub const FLOATING_SPEED_X_PX_SEC: f32 = 20.0;
pub const FLOATING_RISE_MIN_PX_SEC: f32 = 10.0;
pub const FLOATING_RISE_SPAN_PX_SEC: f32 = 30.0;
pub const FLOATING_SIZE_MIN: f32 = 6.0;
pub const FLOATING_SIZE_SPAN: f32 = 10.0;
pub const FLOATING_WRAP_MARGIN_PX: f32 = 20.0;
pub const FLOATING_ALPHA: f32 = 0.5;

// Hearts that rise from a tap on the big tree canvas.
pub const CLICK_HEARTS_PER_TAP: usize = 5;
pub const CLICK_HEART_LIFE_SEC: f32 = 1.2;
pub const CLICK_HEART_FADE_PER_SEC: f32 = 0.8;
pub const CLICK_HEART_SCATTER_X_PX: f32 = 30.0;
pub const CLICK_HEART_RISE_MIN_PX_SEC: f32 = 120.0;
pub const CLICK_HEART_RISE_SPAN_PX_SEC: f32 = 180.0;
pub const CLICK_HEART_SIDE_PX_SEC: f32 = 45.0;
pub const CLICK_HEART_DAMP_PER_SEC: f32 = 1.2;
pub const CLICK_HEART_SIZE_MIN: f32 = 6.0;
pub const CLICK_HEART_SIZE_SPAN: f32 = 8.0;

// Pointer/touch trail.
pub const TRAIL_SAMPLE_MIN_INTERVAL_SEC: f64 = 1.0 / 30.0;
pub const TRAIL_MAX_AGE_SEC: f32 = 0.6;
pub const TRAIL_MAX_POINTS: usize = 24;
pub const TRAIL_DOT_SIZE_PX: f32 = 5.0;

// Confetti celebration fired from the gate's Yes button.
pub const CONFETTI_GRAVITY_PX_SEC2: f32 = 350.0;
pub const CONFETTI_DRAG_PER_SEC: f32 = 0.6;
pub const CONFETTI_LIFE_MIN_SEC: f32 = 2.5;
pub const CONFETTI_LIFE_SPAN_SEC: f32 = 1.0;
pub const CONFETTI_SIZE_MIN: f32 = 5.0;
pub const CONFETTI_SIZE_SPAN: f32 = 5.0;
pub const CONFETTI_SPIN_MAX_RAD_SEC: f32 = 8.0;
pub const CELEBRATION_DURATION_SEC: f32 = 1.6;
// The big center burst fires this long after the celebration starts.
pub const CELEBRATION_BIG_DELAY_SEC: f32 = 0.3;
pub const CELEBRATION_STREAM_COUNT: usize = 12;
pub const CELEBRATION_STREAM_SPREAD_DEG: f32 = 90.0;
pub const CELEBRATION_STREAM_VELOCITY: f32 = 600.0;
pub const CELEBRATION_BIG_COUNT: usize = 300;
pub const CELEBRATION_BIG_SPREAD_DEG: f32 = 140.0;
pub const CELEBRATION_BIG_VELOCITY: f32 = 800.0;
