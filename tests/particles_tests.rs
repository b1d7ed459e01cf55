// Host-side tests for the particle fields and the pointer trail.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use glam::Vec2;
use rand::prelude::*;
use sim::constants::*;
use sim::particles::*;
use sim::trail::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn floating_hearts_spawn_in_bounds_and_rise() {
    let hearts = spawn_floating_hearts(FLOATING_HEART_COUNT, 800.0, 600.0, &mut rng(1));
    assert_eq!(hearts.len(), FLOATING_HEART_COUNT);
    for h in &hearts {
        assert!(h.position.x >= 0.0 && h.position.x <= 800.0);
        assert!(h.position.y >= 0.0 && h.position.y <= 600.0);
        assert!(h.velocity.y < 0.0);
        assert!(h.size >= FLOATING_SIZE_MIN);
        assert!(h.size <= FLOATING_SIZE_MIN + FLOATING_SIZE_SPAN);
    }
}

#[test]
fn floating_hearts_wrap_toroidally_with_velocity_intact() {
    let mut hearts = vec![
        FloatingHeart {
            position: Vec2::new(799.0, 300.0),
            velocity: Vec2::new(100.0, 0.0),
            size: 8.0,
            hue: 350.0,
        },
        FloatingHeart {
            position: Vec2::new(400.0, 1.0),
            velocity: Vec2::new(0.0, -100.0),
            size: 8.0,
            hue: 350.0,
        },
    ];
    // One second pushes both well past the wrap margin.
    update_floating_hearts(&mut hearts, 1.0, 800.0, 600.0);
    assert!((hearts[0].position.x - -FLOATING_WRAP_MARGIN_PX).abs() < 1e-3);
    assert_eq!(hearts[0].velocity, Vec2::new(100.0, 0.0));
    assert!((hearts[1].position.y - (600.0 + FLOATING_WRAP_MARGIN_PX)).abs() < 1e-3);
    assert_eq!(hearts[1].velocity, Vec2::new(0.0, -100.0));
}

#[test]
fn taps_spawn_rising_hearts_that_fade_out() {
    let mut hearts = Vec::new();
    push_click_hearts(&mut hearts, Vec2::new(200.0, 200.0), &mut rng(2));
    assert_eq!(hearts.len(), CLICK_HEARTS_PER_TAP);
    for h in &hearts {
        assert!(h.velocity.y < 0.0);
        assert!((h.position.x - 200.0).abs() <= CLICK_HEART_SCATTER_X_PX / 2.0 + 1e-3);
        assert!((h.life - CLICK_HEART_LIFE_SEC).abs() < 1e-6);
    }

    let start_y = hearts[0].position.y;
    update_click_hearts(&mut hearts, 0.1);
    assert!(hearts[0].position.y < start_y);

    // Life drains at CLICK_HEART_FADE_PER_SEC, so a couple of seconds
    // clears the whole batch.
    for _ in 0..40 {
        update_click_hearts(&mut hearts, 0.1);
    }
    assert!(hearts.is_empty());
}

#[test]
fn confetti_burst_launches_upward_within_spread() {
    let mut field = ConfettiField::new();
    field.burst(
        BurstParams {
            count: 50,
            spread_deg: 90.0,
            start_velocity: 600.0,
            origin_frac: Vec2::new(0.5, 0.5),
        },
        800.0,
        600.0,
        &mut rng(3),
    );
    assert_eq!(field.pieces().len(), 50);
    for p in field.pieces() {
        assert_eq!(p.position, Vec2::new(400.0, 300.0));
        // 90 degrees of spread around straight up keeps everything rising.
        assert!(p.velocity.y < 0.0);
        assert!(p.color < CONFETTI_PALETTE_LEN);
    }
}

#[test]
fn confetti_falls_under_gravity_and_expires() {
    let mut field = ConfettiField::new();
    field.burst(
        BurstParams {
            count: 10,
            spread_deg: 0.0,
            start_velocity: 100.0,
            origin_frac: Vec2::new(0.5, 0.0),
        },
        800.0,
        600.0,
        &mut rng(4),
    );
    let vy_before = field.pieces()[0].velocity.y;
    field.update(0.1);
    assert!(field.pieces()[0].velocity.y > vy_before);

    for _ in 0..40 {
        field.update(0.1);
    }
    assert!(field.is_empty());
}

#[test]
fn celebration_streams_then_fires_big_burst() {
    let mut celebration = Celebration::new();
    assert!(!celebration.is_active());
    celebration.start();
    assert!(celebration.is_active());

    let mut field = ConfettiField::new();
    let mut r = rng(5);

    celebration.tick(0.2, &mut field, 800.0, 600.0, &mut r);
    assert_eq!(field.pieces().len(), CELEBRATION_STREAM_COUNT);

    // The second tick crosses the big-burst delay.
    celebration.tick(0.2, &mut field, 800.0, 600.0, &mut r);
    assert_eq!(
        field.pieces().len(),
        2 * CELEBRATION_STREAM_COUNT + CELEBRATION_BIG_COUNT
    );

    // Run the window out; afterwards nothing new is emitted.
    for _ in 0..10 {
        celebration.tick(0.2, &mut field, 800.0, 600.0, &mut r);
    }
    assert!(!celebration.is_active());
    let settled = field.pieces().len();
    celebration.tick(0.2, &mut field, 800.0, 600.0, &mut r);
    assert_eq!(field.pieces().len(), settled);
}

#[test]
fn trail_throttles_samples() {
    let mut trail = Trail::new();
    assert!(trail.try_add(Vec2::new(0.0, 0.0), 10.0));
    assert!(!trail.try_add(Vec2::new(1.0, 1.0), 10.0 + TRAIL_SAMPLE_MIN_INTERVAL_SEC * 0.5));
    assert!(trail.try_add(Vec2::new(2.0, 2.0), 10.0 + TRAIL_SAMPLE_MIN_INTERVAL_SEC * 1.5));
    assert_eq!(trail.points().len(), 2);
}

#[test]
fn trail_caps_point_count() {
    let mut trail = Trail::new();
    let mut now = 0.0;
    for i in 0..(TRAIL_MAX_POINTS + 10) {
        now += TRAIL_SAMPLE_MIN_INTERVAL_SEC * 2.0;
        assert!(trail.try_add(Vec2::new(i as f32, 0.0), now));
    }
    assert_eq!(trail.points().len(), TRAIL_MAX_POINTS);
    // Oldest points were dropped, newest kept.
    assert!((trail.points().last().map(|p| p.position.x)).is_some_and(|x| x > 30.0));
}

#[test]
fn trail_points_age_out() {
    let mut trail = Trail::new();
    trail.try_add(Vec2::new(0.0, 0.0), 0.0);
    trail.update(TRAIL_MAX_AGE_SEC * 0.5);
    assert_eq!(trail.points().len(), 1);
    let mid = trail_point_alpha(&trail.points()[0]);
    assert!(mid > 0.0 && mid < 1.0);

    trail.update(TRAIL_MAX_AGE_SEC);
    assert!(trail.points().is_empty());
}
