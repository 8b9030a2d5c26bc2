use bezier_pen::draw::svg::Svg;
use bezier_pen::draw::{DrawPrimitive, DOT_RADIUS, LABEL_OFFSET};
use bezier_pen::render::Color;
use bezier_pen::{EngineConfiguration, RenderPrimitive};
use js_sys::Error;
use nalgebra::Vector2;
use serde::Deserialize;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[derive(Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

fn to_js<E: std::fmt::Display>(error: E) -> JsValue {
    Error::new(&error.to_string()).into()
}

#[wasm_bindgen]
pub struct Pen(bezier_pen::Pen);

#[wasm_bindgen]
impl Pen {
    /// Missing fields of `config` fall back to their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: &JsValue) -> Result<Pen, JsValue> {
        let config: EngineConfiguration = if config.is_undefined() || config.is_null() {
            EngineConfiguration::default()
        } else {
            config.into_serde().map_err(to_js)?
        };
        bezier_pen::Pen::new(config).map(Pen).map_err(to_js)
    }

    #[wasm_bindgen(js_name = onClick)]
    pub fn on_click(&mut self, x: f64, y: f64) {
        self.0.on_click(Vector2::new(x, y));
    }

    /// Same as `onClick` but takes an `{x, y}` object
    #[wasm_bindgen(js_name = onClickPoint)]
    pub fn on_click_point(&mut self, point: &JsValue) -> Result<(), JsValue> {
        let point: Point = point.into_serde().map_err(to_js)?;
        self.0.on_click(point.into());
        Ok(())
    }

    #[wasm_bindgen(js_name = setOrder)]
    pub fn set_order(&mut self, order: usize) -> Result<(), JsValue> {
        self.0.set_order(order).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setGuideCount)]
    pub fn set_guide_count(&mut self, guide_count: usize) -> Result<(), JsValue> {
        self.0.set_guide_count(guide_count).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setClosed)]
    pub fn set_closed(&mut self, closed: bool) {
        self.0.set_closed(closed);
    }

    #[wasm_bindgen(js_name = setShowControlSegments)]
    pub fn set_show_control_segments(&mut self, show: bool) {
        self.0.set_show_control_segments(show);
    }

    #[wasm_bindgen(js_name = setShowCurveSegments)]
    pub fn set_show_curve_segments(&mut self, show: bool) {
        self.0.set_show_curve_segments(show);
    }

    /// The current primitives as an array of plain objects
    #[wasm_bindgen]
    pub fn primitives(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(&self.0.primitives()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toSvg)]
    pub fn to_svg(&self, size: f64) -> String {
        let mut svg = Svg::new(size);
        svg.add_primitives(self.0.primitives());
        svg.to_string()
    }

    /// Clears the canvas and paints the current primitives onto it.
    #[wasm_bindgen]
    pub fn draw(&self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let canvas = ctx.canvas();
        if let Some(canvas) = canvas {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }

        for primitive in self.0.primitives() {
            if !primitive.is_visible() {
                continue;
            }
            match primitive {
                RenderPrimitive::Dot {
                    position, color, ..
                } => {
                    ctx.begin_path();
                    ctx.arc(position.x, position.y, DOT_RADIUS, 0.0, TAU)?;
                    ctx.set_fill_style(&css(color));
                    ctx.fill();
                }
                RenderPrimitive::Segment {
                    from, to, color, ..
                } => {
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.set_stroke_style(&css(color));
                    ctx.stroke();
                }
                RenderPrimitive::Label { position, text } => {
                    let color = css(&Color::Green);
                    let (x, y) = (position.x + LABEL_OFFSET.0, position.y + LABEL_OFFSET.1);
                    ctx.set_fill_style(&color);
                    ctx.set_stroke_style(&color);
                    ctx.fill_text(text, x, y)?;
                    ctx.stroke_text(text, x, y)?;
                }
            }
        }
        Ok(())
    }
}

fn css(color: &Color) -> JsValue {
    JsValue::from_str(&color.to_string())
}

/// Edge length of the drawing surface for the current viewport
#[wasm_bindgen(js_name = surfaceSize)]
pub fn surface_size(viewport_width: f64, viewport_height: f64) -> f64 {
    bezier_pen::config::surface_size(viewport_width, viewport_height)
}

/// File name for a screenshot taken at `timestamp`
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(timestamp: &str) -> String {
    bezier_pen::draw::svg::export_file_name(timestamp)
}
