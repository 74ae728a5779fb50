//! WebAssembly bindings for a browser UI
//!
//! The page owns the widgets and the requestAnimationFrame loop; it pushes
//! control values into an [`Engine`] and draws the JSON scene it gets back.
//! The free functions mirror the engine's pure API one-to-one; the ones that
//! need a view take zoom and canvas size and fail for a degenerate one.

use wasm_bindgen::prelude::*;

use crate::format::format_number;
use crate::plane::{self, ScreenArc, View};
use crate::scene::compose;
use crate::settings::Settings;
use crate::spin::Spin;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Argand plane engine loaded");
}

#[wasm_bindgen(js_name = resolveMagnitude)]
pub fn resolve_magnitude(mantissa: f64, exponent: f64) -> f64 {
    plane::resolve_magnitude(mantissa, exponent)
}

#[wasm_bindgen(js_name = niceStep)]
pub fn nice_step(span: f64, target_lines: Option<f64>) -> f64 {
    plane::nice_step(
        span,
        target_lines.unwrap_or(crate::consts::DEFAULT_TARGET_LINES),
    )
}

#[wasm_bindgen]
pub fn ticks(step: f64, half: f64) -> Vec<f64> {
    plane::ticks(step, half)
}

/// [x, y] of r·e^(iθ)
#[wasm_bindgen(js_name = computePoint)]
pub fn compute_point(r: f64, theta: f64) -> Vec<f64> {
    plane::compute_point(r, theta).to_array().to_vec()
}

/// [px, py], or an error for a degenerate view
#[wasm_bindgen(js_name = toScreen)]
pub fn to_screen(x: f64, y: f64, zoom: f64, width: u32, height: u32) -> Result<Vec<f64>, JsError> {
    let view = View::new(zoom, width, height).ok_or_else(|| JsError::new("invalid view"))?;
    Ok(plane::to_screen(x, y, &view).to_array().to_vec())
}

/// [x, y] in world units for a pixel position, or an error for a degenerate view
#[wasm_bindgen(js_name = toWorld)]
pub fn to_world(px: f64, py: f64, zoom: f64, width: u32, height: u32) -> Result<Vec<f64>, JsError> {
    let view = View::new(zoom, width, height).ok_or_else(|| JsError::new("invalid view"))?;
    Ok(view.to_world(glam::DVec2::new(px, py)).to_array().to_vec())
}

/// Angle arc from 0 to θ in pixels
#[wasm_bindgen(js_name = computeArc)]
pub fn compute_arc(
    theta: f64,
    r: f64,
    zoom: f64,
    width: u32,
    height: u32,
) -> Result<ArcPath, JsError> {
    let view = View::new(zoom, width, height).ok_or_else(|| JsError::new("invalid view"))?;
    Ok(ArcPath {
        arc: plane::compute_arc(theta, r, &view),
    })
}

/// Screen-space angle arc handed to JavaScript
#[wasm_bindgen]
pub struct ArcPath {
    arc: ScreenArc,
}

#[wasm_bindgen]
impl ArcPath {
    /// Radius in pixels
    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.arc.radius
    }

    #[wasm_bindgen(getter, js_name = largeArcFlag)]
    pub fn large_arc_flag(&self) -> bool {
        self.arc.large_arc
    }

    #[wasm_bindgen(getter, js_name = sweepFlag)]
    pub fn sweep_flag(&self) -> bool {
        self.arc.sweep
    }

    /// [px, py] at angle 0
    #[wasm_bindgen(getter)]
    pub fn start(&self) -> Vec<f64> {
        self.arc.start.to_array().to_vec()
    }

    /// [px, py] at angle θ
    #[wasm_bindgen(getter)]
    pub fn endpoint(&self) -> Vec<f64> {
        self.arc.end.to_array().to_vec()
    }

    /// SVG path data for the arc
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.arc.to_svg_path()
    }
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format(value: f64) -> String {
    format_number(value)
}

/// Stateful handle holding the current controls and spin driver
#[wasm_bindgen]
pub struct Engine {
    settings: Settings,
    spin: Spin,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine from stored settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        let settings = Settings::load();
        let spin = Spin::new(settings.spin_rate);
        Engine { settings, spin }
    }

    #[wasm_bindgen(getter)]
    pub fn theta(&self) -> f64 {
        self.settings.theta
    }

    /// Angle wrapped to [-π, π) for a circular dial
    #[wasm_bindgen(getter, js_name = dialTheta)]
    pub fn dial_theta(&self) -> f64 {
        crate::normalize_angle(self.settings.theta)
    }

    #[wasm_bindgen(setter)]
    pub fn set_theta(&mut self, theta: f64) {
        if theta.is_finite() {
            self.settings.theta = theta;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mantissa(&self) -> f64 {
        self.settings.mantissa
    }

    #[wasm_bindgen(setter)]
    pub fn set_mantissa(&mut self, mantissa: f64) {
        self.settings.mantissa = mantissa;
    }

    #[wasm_bindgen(getter)]
    pub fn exponent(&self) -> f64 {
        self.settings.exponent
    }

    #[wasm_bindgen(setter)]
    pub fn set_exponent(&mut self, exponent: f64) {
        self.settings.exponent = exponent;
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.settings.zoom
    }

    /// Ignored unless positive and finite
    #[wasm_bindgen(setter)]
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.settings.zoom = zoom;
        }
    }

    #[wasm_bindgen(js_name = setCanvasSize)]
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.settings.canvas_width = width;
            self.settings.canvas_height = height;
        }
    }

    #[wasm_bindgen(js_name = setProjections)]
    pub fn set_projections(&mut self, on: bool) {
        self.settings.show_projections = on;
    }

    #[wasm_bindgen(js_name = setArc)]
    pub fn set_arc(&mut self, on: bool) {
        self.settings.show_arc = on;
    }

    #[wasm_bindgen(js_name = setSpinning)]
    pub fn set_spinning(&mut self, on: bool) {
        if on {
            self.spin.start();
        } else {
            self.spin.stop();
        }
    }

    #[wasm_bindgen(js_name = setSpinRate)]
    pub fn set_spin_rate(&mut self, rate: f64) {
        if rate.is_finite() {
            self.settings.spin_rate = rate;
            self.spin.rate = rate;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn spinning(&self) -> bool {
        self.spin.is_running()
    }

    /// Advance θ for a requestAnimationFrame timestamp (milliseconds)
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        self.settings.theta = self.spin.frame(now_ms / 1000.0, self.settings.theta);
        self.settings.theta
    }

    /// Compose the current scene as JSON
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsError> {
        let view = self
            .settings
            .view()
            .ok_or_else(|| JsError::new("invalid view"))?;
        let scene = compose(&self.settings.controls(), &self.settings.toggles(), &view);
        scene.to_json().map_err(|e| JsError::new(&e.to_string()))
    }

    /// Persist the current controls
    pub fn save(&self) {
        self.settings.save();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
