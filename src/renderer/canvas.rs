//! Canvas 2D backend

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::{DrawCmd, Frame};

/// Replays frames onto a canvas element
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Canvas size in pixels
    pub size: (u32, u32),
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: (canvas.width(), canvas.height()),
        })
    }

    /// Draw every command in order
    pub fn render(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        for cmd in &frame.commands {
            match cmd {
                DrawCmd::FillRect { rect, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
                }
                DrawCmd::StrokeRect { rect, color } => {
                    ctx.set_stroke_style_str(color);
                    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
                }
                DrawCmd::Text { text, x, y, style } => {
                    ctx.set_fill_style_str(style.color);
                    ctx.set_font(style.font);
                    ctx.set_text_align("center");
                    if let Some((glow, blur)) = style.glow {
                        ctx.set_shadow_color(glow);
                        ctx.set_shadow_blur(blur);
                    }
                    ctx.fill_text(text, *x, *y)?;
                    ctx.set_shadow_blur(0.0);
                }
            }
        }

        Ok(())
    }
}
