// Cursor/touch trail: a short ordered run of recent pointer samples, aged
// every frame and throttled on input so memory and draw cost stay bounded.

use glam::Vec2;

use super::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub position: Vec2,
    pub age: f32,
}

/// Points are kept oldest-first; the most recent point renders most opaque.
pub struct Trail {
    points: Vec<TrailPoint>,
    last_sample_sec: f64,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(TRAIL_MAX_POINTS),
            last_sample_sec: f64::NEG_INFINITY,
        }
    }

    /// Record a pointer sample unless one was taken too recently.
    /// Returns whether the sample was accepted.
    pub fn try_add(&mut self, position: Vec2, now_sec: f64) -> bool {
        if now_sec - self.last_sample_sec < TRAIL_SAMPLE_MIN_INTERVAL_SEC {
            return false;
        }
        self.last_sample_sec = now_sec;
        self.points.push(TrailPoint { position, age: 0.0 });
        if self.points.len() > TRAIL_MAX_POINTS {
            let excess = self.points.len() - TRAIL_MAX_POINTS;
            self.points.drain(..excess);
        }
        true
    }

    /// Age all points and drop the ones past the maximum age.
    pub fn update(&mut self, dt: f32) {
        for p in self.points.iter_mut() {
            p.age += dt;
        }
        self.points.retain(|p| p.age <= TRAIL_MAX_AGE_SEC);
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

/// Opacity for one trail point, 1.0 when fresh fading to 0.0 at max age.
#[inline]
pub fn trail_point_alpha(point: &TrailPoint) -> f32 {
    (1.0 - point.age / TRAIL_MAX_AGE_SEC).clamp(0.0, 1.0)
}
