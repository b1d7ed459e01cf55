//! Canvas2D rendering. Pure with respect to state: functions here read tree
//! and particle state and issue draw calls, never mutating anything.
//!
//! Draw order inside [`draw_tree`] matters: trunk and branches are drawn
//! under the sway rotation around the anchor, then leaves and sparkles in
//! unrotated world space so a falling leaf drops vertically however far the
//! tree leans.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use crate::core::constants::*;
use crate::core::{
    branch_segment_alpha, branch_segment_wave, leaf_alpha, leaf_visible, leaf_world_offset,
    trail_point_alpha, trunk_idle_rotation, ClickHeart, ConfettiField, FloatingHeart, Trail, Tree,
};

const TAU: f64 = std::f64::consts::TAU;

const TRUNK_FILL: &str = "rgba(200, 110, 130, 0.9)";
const TRUNK_STROKE: &str = "rgba(160, 80, 100, 0.5)";
const TRUNK_GLOW: &str = "rgba(240, 160, 180, 0.7)";

pub const CONFETTI_PALETTE: [&str; 3] = ["#e87a8a", "#f4a5b0", "#ffdde8"];

/// Two symmetric cubic lobes meeting at a bottom point and a top cleft.
pub fn heart_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, scale: f64) {
    let top = y - 0.9 * scale;
    ctx.begin_path();
    ctx.move_to(x, top + 0.3 * scale);
    ctx.bezier_curve_to(
        x + 0.9 * scale,
        top - 0.4 * scale,
        x + 1.2 * scale,
        top + 0.6 * scale,
        x,
        top + 1.2 * scale,
    );
    ctx.bezier_curve_to(
        x - 1.2 * scale,
        top + 0.6 * scale,
        x - 0.9 * scale,
        top - 0.4 * scale,
        x,
        top + 0.3 * scale,
    );
    ctx.close_path();
}

/// Fill a heart at `pos`, optionally with a soft glow shadow in the same
/// color. Surface state is saved and restored around the call.
pub fn draw_heart(ctx: &CanvasRenderingContext2d, pos: Vec2, size: f32, fill: &str, glow: bool) {
    ctx.save();
    if glow {
        ctx.set_shadow_color(fill);
        ctx.set_shadow_blur(12.0 + size as f64 * 2.0);
    }
    heart_path(ctx, pos.x as f64, pos.y as f64, size as f64);
    ctx.set_fill_style_str(fill);
    ctx.fill();
    ctx.restore();
}

pub fn draw_tree(ctx: &CanvasRenderingContext2d, tree: &Tree, time: f32) {
    let ax = tree.anchor.x as f64;
    let ay = tree.anchor.y as f64;

    ctx.save();
    _ = ctx.translate(ax, ay);
    _ = ctx.rotate(tree.sway as f64);

    for th in &tree.trunk_hearts {
        ctx.save();
        _ = ctx.translate(th.offset.x as f64, th.offset.y as f64);
        _ = ctx.rotate(trunk_idle_rotation(th.phase, time) as f64);
        heart_path(ctx, 0.0, 0.0, th.size as f64);
        ctx.set_shadow_color(TRUNK_GLOW);
        ctx.set_shadow_blur(18.0);
        ctx.set_fill_style_str(TRUNK_FILL);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        ctx.set_stroke_style_str(TRUNK_STROKE);
        ctx.set_line_width(1.5);
        ctx.stroke();
        ctx.restore();
    }

    for branch in &tree.branches {
        for (idx, seg) in branch.segments.iter().enumerate() {
            let wave = branch_segment_wave(branch.phase, idx, time);
            let fill = format!("hsla(345, 55%, 72%, {:.3})", branch_segment_alpha(idx));
            draw_heart(
                ctx,
                Vec2::new(seg.offset.x + wave, seg.offset.y),
                seg.size.max(BRANCH_MIN_DRAW_SIZE),
                &fill,
                true,
            );
        }
    }

    ctx.restore();

    for leaf in &tree.leaf_hearts {
        if !leaf_visible(leaf) {
            continue;
        }
        let pos = tree.anchor + leaf_world_offset(leaf, time);
        let fill = format!(
            "hsla({:.0}, 70%, 75%, {:.3})",
            leaf.hue,
            leaf_alpha(leaf) * 0.95
        );
        draw_heart(ctx, pos, leaf.size, &fill, true);
    }

    for s in &tree.sparkles {
        let pos = tree.anchor + s.position;
        let alpha = s.remaining_life.clamp(0.0, 1.0);
        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(pos.x as f64, pos.y as f64, s.size as f64, 0.0, TAU);
        ctx.set_fill_style_str(&format!("hsla({:.0}, 80%, 85%, {:.3})", s.hue, alpha));
        ctx.set_shadow_color(&format!("hsl({:.0}, 80%, 80%)", s.hue));
        ctx.set_shadow_blur(6.0);
        ctx.fill();
        ctx.restore();
    }
}

pub fn draw_floating_hearts(ctx: &CanvasRenderingContext2d, hearts: &[FloatingHeart]) {
    for h in hearts {
        let fill = format!("hsla({:.0}, 70%, 80%, {:.2})", h.hue, FLOATING_ALPHA);
        draw_heart(ctx, h.position, h.size, &fill, true);
    }
}

pub fn draw_click_hearts(ctx: &CanvasRenderingContext2d, hearts: &[ClickHeart]) {
    for h in hearts {
        let alpha = h.life.clamp(0.0, 1.0);
        let fill = format!("hsla({:.0}, 75%, 78%, {:.3})", h.hue, alpha);
        draw_heart(ctx, h.position, h.size, &fill, true);
    }
}

pub fn draw_trail(ctx: &CanvasRenderingContext2d, trail: &Trail) {
    for p in trail.points() {
        let alpha = trail_point_alpha(p);
        if alpha <= 0.0 {
            continue;
        }
        let radius = TRAIL_DOT_SIZE_PX * (0.4 + 0.6 * alpha);
        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(
            p.position.x as f64,
            p.position.y as f64,
            radius as f64,
            0.0,
            TAU,
        );
        ctx.set_fill_style_str(&format!("hsla(345, 80%, 80%, {:.3})", alpha * 0.8));
        ctx.set_shadow_color("hsl(345, 80%, 75%)");
        ctx.set_shadow_blur(8.0);
        ctx.fill();
        ctx.restore();
    }
}

pub fn draw_confetti(ctx: &CanvasRenderingContext2d, field: &ConfettiField) {
    for p in field.pieces() {
        let alpha = p.life.clamp(0.0, 1.0);
        ctx.save();
        _ = ctx.translate(p.position.x as f64, p.position.y as f64);
        _ = ctx.rotate(p.spin as f64);
        ctx.set_global_alpha(alpha as f64);
        ctx.set_fill_style_str(CONFETTI_PALETTE[p.color % CONFETTI_PALETTE.len()]);
        let s = p.size as f64;
        ctx.fill_rect(-s * 0.5, -s * 0.25, s, s * 0.5);
        ctx.restore();
    }
}

/// Soft pink vertical gradient plus a deterministic twinkling star field,
/// used behind the opening scene.
pub fn paint_opening_backdrop(ctx: &CanvasRenderingContext2d, width: f32, height: f32, time: f32) {
    let w = width as f64;
    let h = height as f64;
    let grad = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    _ = grad.add_color_stop(0.0, "#fff5f8");
    _ = grad.add_color_stop(0.35, "#ffe8f2");
    _ = grad.add_color_stop(0.65, "#fce8f5");
    _ = grad.add_color_stop(1.0, "#f8e8f8");
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Star positions hash from the index so the field is stable per session
    // without storing any state.
    let count = 80;
    for i in 0..count {
        let seed = i as f64 * 1.1;
        let x = (seed * 37.0) % w.max(1.0);
        let y = (seed * 53.0) % h.max(1.0);
        let twinkle = (0.4 + 0.6 * (time as f64 * 0.5 + seed).sin()).max(0.0);
        ctx.begin_path();
        _ = ctx.arc(x, y, 1.0 + (i % 3) as f64, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba(232, 122, 138, {:.3})", twinkle * 0.5));
        ctx.fill();
    }
}
