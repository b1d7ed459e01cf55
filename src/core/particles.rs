// Ambient particle sets: the floating-heart background field, rising
// hearts spawned by taps, and the confetti celebration.

use glam::Vec2;
use rand::prelude::*;

use super::constants::*;

/// Background heart drifting across the surface, wrapping at the edges.
#[derive(Clone, Debug)]
pub struct FloatingHeart {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub hue: f32,
}

pub fn spawn_floating_hearts(count: usize, width: f32, height: f32, rng: &mut StdRng) -> Vec<FloatingHeart> {
    (0..count)
        .map(|_| FloatingHeart {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * FLOATING_SPEED_X_PX_SEC,
                -(FLOATING_RISE_MIN_PX_SEC + rng.gen::<f32>() * FLOATING_RISE_SPAN_PX_SEC),
            ),
            size: FLOATING_SIZE_MIN + rng.gen::<f32>() * FLOATING_SIZE_SPAN,
            hue: LEAF_HUE_MIN + rng.gen::<f32>() * LEAF_HUE_SPAN,
        })
        .collect()
}

/// Integrate and wrap toroidally on both axes, preserving velocity.
pub fn update_floating_hearts(hearts: &mut [FloatingHeart], dt: f32, width: f32, height: f32) {
    let m = FLOATING_WRAP_MARGIN_PX;
    for h in hearts.iter_mut() {
        h.position += h.velocity * dt;
        if h.position.x > width + m {
            h.position.x = -m;
        } else if h.position.x < -m {
            h.position.x = width + m;
        }
        if h.position.y > height + m {
            h.position.y = -m;
        } else if h.position.y < -m {
            h.position.y = height + m;
        }
    }
}

/// Heart that rises and fades after a tap on the big tree canvas.
#[derive(Clone, Debug)]
pub struct ClickHeart {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub size: f32,
    pub hue: f32,
}

pub fn push_click_hearts(out: &mut Vec<ClickHeart>, origin: Vec2, rng: &mut StdRng) {
    for _ in 0..CLICK_HEARTS_PER_TAP {
        out.push(ClickHeart {
            position: origin
                + Vec2::new((rng.gen::<f32>() - 0.5) * CLICK_HEART_SCATTER_X_PX, 0.0),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * CLICK_HEART_SIDE_PX_SEC,
                -(CLICK_HEART_RISE_MIN_PX_SEC + rng.gen::<f32>() * CLICK_HEART_RISE_SPAN_PX_SEC),
            ),
            life: CLICK_HEART_LIFE_SEC,
            size: CLICK_HEART_SIZE_MIN + rng.gen::<f32>() * CLICK_HEART_SIZE_SPAN,
            hue: LEAF_HUE_MIN + rng.gen::<f32>() * 25.0,
        });
    }
}

pub fn update_click_hearts(hearts: &mut Vec<ClickHeart>, dt: f32) {
    for h in hearts.iter_mut() {
        h.position += h.velocity * dt;
        h.velocity.y *= (-CLICK_HEART_DAMP_PER_SEC * dt).exp();
        h.life -= dt * CLICK_HEART_FADE_PER_SEC;
    }
    hearts.retain(|h| h.life > 0.0);
}

/// Fire-and-forget burst request, mirroring the emitter contract
/// (`count`, `spread`, `startVelocity`, fractional origin).
#[derive(Clone, Copy, Debug)]
pub struct BurstParams {
    pub count: usize,
    pub spread_deg: f32,
    pub start_velocity: f32,
    /// Origin as fractions of the surface size.
    pub origin_frac: Vec2,
}

#[derive(Clone, Debug)]
pub struct ConfettiPiece {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub size: f32,
    pub spin: f32,
    pub spin_rate: f32,
    /// Index into the renderer's palette.
    pub color: usize,
}

/// Owns the confetti particles for one surface.
#[derive(Default)]
pub struct ConfettiField {
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn burst(&mut self, params: BurstParams, width: f32, height: f32, rng: &mut StdRng) {
        let half_spread = params.spread_deg.to_radians() * 0.5;
        let origin = Vec2::new(params.origin_frac.x * width, params.origin_frac.y * height);
        for _ in 0..params.count {
            // Angle measured from straight up.
            let angle = (rng.gen::<f32>() - 0.5) * 2.0 * half_spread;
            let speed = params.start_velocity * (0.6 + rng.gen::<f32>() * 0.4);
            self.pieces.push(ConfettiPiece {
                position: origin,
                velocity: Vec2::new(angle.sin() * speed, -angle.cos() * speed),
                life: CONFETTI_LIFE_MIN_SEC + rng.gen::<f32>() * CONFETTI_LIFE_SPAN_SEC,
                size: CONFETTI_SIZE_MIN + rng.gen::<f32>() * CONFETTI_SIZE_SPAN,
                spin: rng.gen::<f32>() * std::f32::consts::TAU,
                spin_rate: (rng.gen::<f32>() - 0.5) * 2.0 * CONFETTI_SPIN_MAX_RAD_SEC,
                color: rng.gen_range(0..CONFETTI_PALETTE_LEN),
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in self.pieces.iter_mut() {
            p.velocity *= (-CONFETTI_DRAG_PER_SEC * dt).exp();
            p.velocity.y += CONFETTI_GRAVITY_PX_SEC2 * dt;
            p.position += p.velocity * dt;
            p.spin += p.spin_rate * dt;
            p.life -= dt;
        }
        self.pieces.retain(|p| p.life > 0.0);
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

pub const CONFETTI_PALETTE_LEN: usize = 3;

/// Gate celebration: a stream of small top bursts for the whole window plus
/// one big center burst shortly after the start.
#[derive(Default)]
pub struct Celebration {
    remaining: f32,
    big_fired: bool,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.remaining = CELEBRATION_DURATION_SEC;
        self.big_fired = false;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn tick(
        &mut self,
        dt: f32,
        field: &mut ConfettiField,
        width: f32,
        height: f32,
        rng: &mut StdRng,
    ) {
        if self.remaining <= 0.0 {
            return;
        }
        self.remaining -= dt;
        field.burst(
            BurstParams {
                count: CELEBRATION_STREAM_COUNT,
                spread_deg: CELEBRATION_STREAM_SPREAD_DEG,
                start_velocity: CELEBRATION_STREAM_VELOCITY,
                origin_frac: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>() * 0.3),
            },
            width,
            height,
            rng,
        );
        if !self.big_fired && self.remaining <= CELEBRATION_DURATION_SEC - CELEBRATION_BIG_DELAY_SEC
        {
            self.big_fired = true;
            field.burst(
                BurstParams {
                    count: CELEBRATION_BIG_COUNT,
                    spread_deg: CELEBRATION_BIG_SPREAD_DEG,
                    start_velocity: CELEBRATION_BIG_VELOCITY,
                    origin_frac: Vec2::new(0.5, 0.55),
                },
                width,
                height,
                rng,
            );
        }
    }
}
