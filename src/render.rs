//! Frame drawing. [`render`] only reads [`GameState`]; the drawing target is
//! anything implementing [`Surface`], which is the 2D canvas context in the
//! browser.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::game::GameState;
use crate::physics::Rect;

pub const PLATFORM_COLOR: &str = "#654321";
pub const PLAYER_COLOR: &str = "#ff6347";
pub const TEXT_COLOR: &str = "#000";
pub const STATUS_FONT: &str = "18px Arial";
pub const STATUS_POS: (f64, f64) = (10.0, 20.0);

/// Minimal immediate-mode drawing target.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, color: &str, rect: Rect);
    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f64, y: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, color: &str, r: Rect) {
        self.set_fill_style(&JsValue::from_str(color));
        CanvasRenderingContext2d::fill_rect(self, r.x, r.y, r.width, r.height);
    }

    fn fill_text(&mut self, color: &str, font: &str, text: &str, x: f64, y: f64) {
        self.set_fill_style(&JsValue::from_str(color));
        self.set_font(font);
        // fill_text only fails on a detached context; nothing to recover.
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }
}

pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let bounds = state.bounds();
    surface.clear(bounds.width, bounds.height);

    for platform in state.level().platforms() {
        surface.fill_rect(PLATFORM_COLOR, platform.rect());
    }

    surface.fill_rect(PLAYER_COLOR, state.player.rect());

    let (tx, ty) = STATUS_POS;
    surface.fill_text(TEXT_COLOR, STATUS_FONT, &state.status_line(), tx, ty);
}
