//! HTML canvas 2D surface
//!
//! Bitmaps are requested at construction and load in the background. Until
//! an image has decoded (or if it fails to), entities fall back to their
//! fill color.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::settings::Settings;
use crate::sim::{Color, SpriteId, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    enemy: HtmlImageElement,
    projectile: HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            enemy: load_image(&settings.enemy_sprite)?,
            projectile: load_image(&settings.projectile_sprite)?,
        })
    }

    fn image(&self, sprite: SpriteId) -> &HtmlImageElement {
        match sprite {
            SpriteId::Enemy => &self.enemy,
            SpriteId::Projectile => &self.projectile,
        }
    }
}

/// Start loading an image; does not wait for it
fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    log::info!("Loading sprite {src}");
    Ok(image)
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32) {
        let result = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.image(sprite),
            x as f64,
            y as f64,
            w as f64,
            h as f64,
        );
        if let Err(e) = result {
            log::warn!("Failed to draw {sprite:?}: {e:?}");
        }
    }

    fn sprite_ready(&self, sprite: SpriteId) -> bool {
        let image = self.image(sprite);
        // A broken image is "complete" with no pixels
        image.complete() && image.natural_width() > 0
    }
}
