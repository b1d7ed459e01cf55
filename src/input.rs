use glam::Vec2;
use web_sys as web;

/// Process-wide pointer position in viewport (client) pixels.
///
/// Written by the pointer/touch handlers only; every surface loop reads it
/// once per frame and converts to its own canvas space.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Convert viewport client coordinates to canvas backing pixels.
#[inline]
pub fn client_to_canvas_px(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (x_css / w) * canvas.width() as f32,
            (y_css / h) * canvas.height() as f32,
        )
    } else {
        Vec2::new(canvas.width() as f32 * 0.5, canvas.height() as f32 * 0.5)
    }
}
