//! Per-surface animation loops. Each visual surface owns its canvas, its
//! scene state, and its RNG, and is driven by its own requestAnimationFrame
//! loop; surfaces share nothing but the process-wide pointer position.

use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::*;
use crate::core::{
    push_click_hearts, spawn_floating_hearts, update_click_hearts, update_floating_hearts,
    Celebration, ClickHeart, ConfettiField, FloatingHeart, Trail, Tree, TreeParams,
};
use crate::input::{self, PointerState};
use crate::render;

/// One drawable region with its own loop.
pub trait Surface {
    fn frame(&mut self);
    /// Loops stop scheduling once their canvas leaves the document, so dead
    /// surfaces cannot accumulate.
    fn is_live(&self) -> bool;
}

/// Drive a surface with requestAnimationFrame until it reports not live.
pub fn start_loop(surface: Rc<RefCell<dyn Surface>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let surface_tick = surface.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !surface_tick.borrow().is_live() {
            // Not rescheduled; the loop ends here.
            return;
        }
        surface_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Derive a per-surface seed from the session base seed, so surfaces are
/// decorrelated but the whole session is reproducible from one number.
#[inline]
pub fn mix_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// Three trees, floating hearts, gradient-and-stars backdrop.
    Opening,
    /// One big centered tree that reacts to taps with rising hearts.
    SingleTree,
    /// Two flanking trees behind a content section.
    Scenic,
}

impl SceneKind {
    fn anchors(self) -> &'static [f32] {
        match self {
            SceneKind::Opening => &[0.2, 0.5, 0.8],
            SceneKind::SingleTree => &[0.5],
            SceneKind::Scenic => &[0.15, 0.85],
        }
    }
}

/// Surface lifecycle: trees exist only once the canvas has a nonzero size.
/// `resize` (observed as a size change between frames) is the only
/// transition trigger.
enum SceneState {
    Uninitialized,
    Ready {
        built_size: Vec2,
        trees: Vec<Tree>,
        floating: Vec<FloatingHeart>,
        click_hearts: Vec<ClickHeart>,
    },
}

pub struct SceneSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    kind: SceneKind,
    state: SceneState,
    rng: StdRng,
    pointer: Rc<RefCell<PointerState>>,
    /// Tap positions queued by the click handler, drained each frame.
    pending_taps: Rc<RefCell<Vec<Vec2>>>,
    last_instant: Instant,
    elapsed: f32,
}

impl SceneSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        kind: SceneKind,
        seed: u64,
        pointer: Rc<RefCell<PointerState>>,
        pending_taps: Rc<RefCell<Vec<Vec2>>>,
    ) -> Self {
        Self {
            canvas,
            ctx,
            kind,
            state: SceneState::Uninitialized,
            rng: StdRng::seed_from_u64(seed),
            pointer,
            pending_taps,
            last_instant: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Build (or rebuild after a resize) the trees and particles. A zero
    /// size keeps the surface Uninitialized; it retries on a later frame.
    fn ensure_ready(&mut self, w: f32, h: f32) {
        let needs_build = match &self.state {
            SceneState::Uninitialized => true,
            SceneState::Ready { built_size, .. } => {
                (built_size.x - w).abs() > 1.0 || (built_size.y - h).abs() > 1.0
            }
        };
        if !needs_build {
            return;
        }
        let trees = self
            .kind
            .anchors()
            .iter()
            .map(|&x_frac| {
                Tree::generate(
                    TreeParams {
                        x_frac,
                        base_y_frac: 1.0,
                        width: w,
                        height: h,
                    },
                    &mut self.rng,
                )
            })
            .collect::<Vec<_>>();
        let floating = if self.kind == SceneKind::Opening {
            spawn_floating_hearts(FLOATING_HEART_COUNT, w, h, &mut self.rng)
        } else {
            Vec::new()
        };
        log::info!(
            "scene {:?}: built {} tree(s) at {}x{}",
            self.kind,
            trees.len(),
            w as u32,
            h as u32
        );
        self.state = SceneState::Ready {
            built_size: Vec2::new(w, h),
            trees,
            floating,
            click_hearts: Vec::new(),
        };
    }
}

impl Surface for SceneSurface {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed += dt;

        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.ensure_ready(w, h);

        let pointer_px = {
            let p = self.pointer.borrow();
            input::client_to_canvas_px(p.x, p.y, &self.canvas)
        };

        let SceneState::Ready {
            trees,
            floating,
            click_hearts,
            ..
        } = &mut self.state
        else {
            return;
        };

        for tree in trees.iter_mut() {
            tree.update(dt, pointer_px.x, &mut self.rng);
        }
        update_floating_hearts(floating, dt, w, h);
        for tap in self.pending_taps.borrow_mut().drain(..) {
            push_click_hearts(click_hearts, tap, &mut self.rng);
        }
        update_click_hearts(click_hearts, dt);

        if self.kind == SceneKind::Opening {
            render::paint_opening_backdrop(&self.ctx, w, h, self.elapsed);
        } else {
            self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        }
        for tree in trees.iter() {
            render::draw_tree(&self.ctx, tree, self.elapsed);
        }
        render::draw_floating_hearts(&self.ctx, floating);
        render::draw_click_hearts(&self.ctx, click_hearts);
    }

    fn is_live(&self) -> bool {
        self.canvas.is_connected()
    }
}

/// Full-viewport overlay that renders the pointer trail. Trail points are
/// recorded in CSS pixels by the pointer handlers; drawing scales by the
/// device pixel ratio.
pub struct TrailSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    trail: Rc<RefCell<Trail>>,
    last_instant: Instant,
}

impl TrailSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        trail: Rc<RefCell<Trail>>,
    ) -> Self {
        Self {
            canvas,
            ctx,
            trail,
            last_instant: Instant::now(),
        }
    }
}

impl Surface for TrailSurface {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f32()
            .min(TRAIL_MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut trail = self.trail.borrow_mut();
        trail.update(dt);

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.ctx.save();
        _ = self.ctx.scale(dpr, dpr);
        render::draw_trail(&self.ctx, &trail);
        self.ctx.restore();
    }

    fn is_live(&self) -> bool {
        self.canvas.is_connected()
    }
}

/// Confetti canvas for the gate celebration. The gate's Yes handler starts
/// the shared [`Celebration`]; this surface emits its bursts and integrates
/// the pieces.
pub struct ConfettiSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ConfettiField,
    celebration: Rc<RefCell<Celebration>>,
    rng: StdRng,
    last_instant: Instant,
}

impl ConfettiSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        celebration: Rc<RefCell<Celebration>>,
        seed: u64,
    ) -> Self {
        Self {
            canvas,
            ctx,
            field: ConfettiField::new(),
            celebration,
            rng: StdRng::seed_from_u64(seed),
            last_instant: Instant::now(),
        }
    }
}

impl Surface for ConfettiSurface {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.celebration
            .borrow_mut()
            .tick(dt, &mut self.field, w, h, &mut self.rng);
        self.field.update(dt);
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        render::draw_confetti(&self.ctx, &self.field);
    }

    fn is_live(&self) -> bool {
        self.canvas.is_connected()
    }
}
