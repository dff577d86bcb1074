//! Canvas2D backend: walks the draw list from `runner_core::render_model`.

use runner_core::{Config, DrawCmd, RectPx};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const SKY: &str = "#f7f7f7";
const INK: &str = "#222";
const CLOUD: &str = "#d9d9d9";
const BOARD: &str = "#2e7d32";
const BOARD_TEXT: &str = "#ffffff";

/// Spacing of the dashes scrolling along the ground line.
const GROUND_DASH_PERIOD: f64 = 48.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, config: &Config) -> Result<Self, JsValue> {
        canvas.set_width(config.arena_width as u32);
        canvas.set_height(config.arena_height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: config.arena_width as f64,
            height: config.arena_height as f64,
        })
    }

    /// Draw one frame. `now_ms` only drives the ground-dash scroll so the
    /// floor still reads as moving between simulation ticks.
    pub fn draw(&self, cmds: &[DrawCmd], now_ms: f64, character_image: Option<&HtmlImageElement>) {
        self.ctx
            .set_fill_style(&JsValue::from_str(SKY));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for cmd in cmds {
            match cmd {
                DrawCmd::Ground { y } => self.draw_ground(*y as f64, now_ms),
                DrawCmd::Cloud { x, y, w } => self.draw_cloud(*x as f64, *y as f64, *w as f64),
                DrawCmd::Character { rect } => self.draw_character(rect, character_image),
                DrawCmd::SignPost { rect } => self.fill_rect(rect, INK),
                DrawCmd::SignBoard { rect } => self.draw_board(rect),
                DrawCmd::Score { value } => self.draw_score(*value),
            }
        }
    }

    fn fill_rect(&self, rect: &RectPx, style: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(style));
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn draw_ground(&self, y: f64, now_ms: f64) {
        self.ctx.set_fill_style(&JsValue::from_str(INK));
        self.ctx.fill_rect(0.0, y, self.width, 2.0);

        // Dashes scroll left so the ground reads as moving
        let offset = (now_ms * 0.12) % GROUND_DASH_PERIOD;
        let mut x = -offset;
        while x < self.width {
            self.ctx.fill_rect(x, y + 8.0, 14.0, 2.0);
            x += GROUND_DASH_PERIOD;
        }
    }

    fn draw_cloud(&self, x: f64, y: f64, w: f64) {
        self.ctx.set_fill_style(&JsValue::from_str(CLOUD));
        self.ctx.fill_rect(x, y, w, 8.0);
        self.ctx.fill_rect(x + w * 0.2, y - 6.0, w * 0.6, 6.0);
    }

    fn draw_character(&self, rect: &RectPx, image: Option<&HtmlImageElement>) {
        match image {
            Some(img) => {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    rect.x as f64,
                    rect.y as f64,
                    rect.w as f64,
                    rect.h as f64,
                );
            }
            None => self.fill_rect(rect, INK),
        }
    }

    fn draw_board(&self, rect: &RectPx) {
        self.fill_rect(rect, BOARD);
        self.ctx.set_fill_style(&JsValue::from_str(BOARD_TEXT));
        self.ctx.set_font("bold 12px monospace");
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(
                "JUMP",
                (rect.x + rect.w / 2.0) as f64,
                (rect.y + rect.h / 2.0 + 4.0) as f64,
            )
            .ok();
    }

    fn draw_score(&self, value: u32) {
        self.ctx.set_fill_style(&JsValue::from_str(INK));
        self.ctx.set_font("16px monospace");
        self.ctx.set_text_align("right");
        self.ctx
            .fill_text(&format!("{value:05}"), self.width - 16.0, 28.0)
            .ok();
    }
}
