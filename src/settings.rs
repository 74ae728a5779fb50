//! Plot settings and control state
//!
//! Persisted in LocalStorage on the web, or read from a JSON file by the
//! native demo.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::plane::View;
use crate::scene::{Controls, Toggles};

/// Persisted control state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Complex number ===
    /// Angle (radians)
    pub theta: f64,
    /// Magnitude mantissa
    pub mantissa: f64,
    /// Magnitude exponent
    pub exponent: f64,

    // === View ===
    /// Pixels per world unit
    pub zoom: f64,
    /// Canvas width (pixels)
    pub canvas_width: u32,
    /// Canvas height (pixels)
    pub canvas_height: u32,

    // === Guides ===
    /// Show projections onto the axes
    pub show_projections: bool,
    /// Show the angle arc
    pub show_arc: bool,

    // === Animation ===
    /// Spin rate (radians per second)
    pub spin_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        let controls = Controls::default();
        let toggles = Toggles::default();
        Self {
            theta: controls.theta,
            mantissa: controls.mantissa,
            exponent: controls.exponent,

            zoom: DEFAULT_ZOOM,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,

            show_projections: toggles.projections,
            show_arc: toggles.arc,

            spin_rate: DEFAULT_SPIN_RATE,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "argand_plane_settings";

    /// Replace values the engine can't use with their defaults
    ///
    /// Mantissa and exponent are left alone: the magnitude resolver already
    /// handles any value, and the user should see what they typed.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !self.theta.is_finite() {
            self.theta = defaults.theta;
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            log::warn!("Invalid zoom {}, using {}", self.zoom, defaults.zoom);
            self.zoom = defaults.zoom;
        }
        if self.canvas_width == 0 {
            self.canvas_width = defaults.canvas_width;
        }
        if self.canvas_height == 0 {
            self.canvas_height = defaults.canvas_height;
        }
        if !self.spin_rate.is_finite() {
            self.spin_rate = defaults.spin_rate;
        }
    }

    /// Current numeric controls
    pub fn controls(&self) -> Controls {
        Controls {
            theta: self.theta,
            mantissa: self.mantissa,
            exponent: self.exponent,
        }
    }

    /// Current guide toggles
    pub fn toggles(&self) -> Toggles {
        Toggles {
            projections: self.show_projections,
            arc: self.show_arc,
        }
    }

    /// View for the current zoom and canvas, if they describe one
    pub fn view(&self) -> Option<View> {
        View::new(self.zoom, self.canvas_width, self.canvas_height)
    }

    /// Parse and sanitize settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
