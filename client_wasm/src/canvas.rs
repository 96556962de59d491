//! 2D canvas implementation of the drawing contract

use game_core::{Canvas, Color, Rect, TextImage};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::{describe, ClientError};

const SCORE_FONT: &str = "40px 'DejaVu Sans', sans-serif";

/// Score text ready to be stamped onto the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasText {
    text: String,
    color: Color,
}

pub fn css_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        f64::from(color.a) / 255.0
    )
}

/// Width cap for `fillText`; none when the text could not be measured
fn text_max_width(dest: Rect) -> Option<f64> {
    (dest.w > 0).then(|| f64::from(dest.w))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the `<canvas id=...>` element to the playfield and grab its 2D context
    pub fn attach(document: &Document, id: &str, width: i32, height: i32) -> Result<Self, ClientError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| ClientError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::NotACanvas(id.to_string()))?;
        canvas.set_width(width.max(0) as u32);
        canvas.set_height(height.max(0) as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(ClientError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::NoContext2d)?;
        ctx.set_font(SCORE_FONT);
        ctx.set_text_baseline("top");

        Ok(Self { canvas, ctx })
    }

    /// Blank the canvas once the game is over
    pub fn release(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(x, y, w, h);
    }
}

impl Canvas for CanvasSurface {
    type Texture = CanvasText;

    fn clear(&mut self, color: Color) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.fill(0.0, 0.0, f64::from(w), f64::from(h), color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.w),
            f64::from(rect.h),
            color,
        );
    }

    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.fill(f64::from(x), f64::from(y), 1.0, 1.0, color);
    }

    fn render_text(&mut self, text: &str, color: Color) -> TextImage<CanvasText> {
        let (width, height) = match self.ctx.measure_text(text) {
            Ok(metrics) => (
                metrics.width().ceil() as i32,
                (metrics.actual_bounding_box_ascent() + metrics.actual_bounding_box_descent())
                    .ceil() as i32,
            ),
            Err(e) => {
                tracing::warn!(text, error = %describe(&e), "text measurement failed");
                (0, 0)
            }
        };

        TextImage {
            texture: CanvasText {
                text: text.to_string(),
                color,
            },
            width,
            height,
        }
    }

    fn copy(&mut self, texture: &CanvasText, dest: Rect) {
        self.ctx.set_fill_style_str(&css_color(texture.color));
        let (x, y) = (f64::from(dest.x), f64::from(dest.y));
        let drawn = match text_max_width(dest) {
            Some(max_width) => self.ctx.fill_text_with_max_width(&texture.text, x, y, max_width),
            None => self.ctx.fill_text(&texture.text, x, y),
        };
        if let Err(e) = drawn {
            tracing::warn!(text = %texture.text, error = %describe(&e), "text draw failed");
        }
    }

    fn destroy_texture(&mut self, texture: CanvasText) {
        // Nothing is allocated outside Rust for canvas text
        drop(texture);
    }

    fn present(&mut self) {
        // The browser composites the canvas once the tick callback returns
    }
}
