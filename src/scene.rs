//! Per-frame scene composition
//!
//! Turns the raw control state into an ordered list of screen-space
//! primitives. This is the single place the "safe to draw" gates are
//! applied: any element whose coordinates overflow is left out of the list,
//! so a backend can draw every command it receives without checks.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::format::{format_complex, format_degrees, format_number};
use crate::plane::{
    ArcDescriptor, GridTicks, ScreenArc, View, compute_point, magnitude_circle_radius,
    magnitude_circle_visible, projections, resolve_magnitude,
};

/// Horizontal gap between a label and its anchor (pixels)
const LABEL_GAP: f64 = 4.0;
/// Baseline drop for labels set below the real axis (pixels)
const LABEL_DROP: f64 = 14.0;

/// Raw numeric control state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    /// Angle in radians (unwrapped)
    pub theta: f64,
    /// Magnitude mantissa
    pub mantissa: f64,
    /// Magnitude exponent (truncated and clamped on use)
    pub exponent: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            theta: std::f64::consts::FRAC_PI_4,
            mantissa: 1.0,
            exponent: 0.0,
        }
    }
}

impl Controls {
    /// r = mantissa × 10^exponent
    pub fn magnitude(&self) -> f64 {
        resolve_magnitude(self.mantissa, self.exponent)
    }
}

/// Which optional guides to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    /// Dashed guides from z to each axis
    pub projections: bool,
    /// Angle arc from 0 to θ
    pub arc: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            projections: true,
            arc: true,
        }
    }
}

/// Drawing role of a line, for the backend's styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Grid,
    Axis,
    Projection,
    Vector,
}

/// Drawing role of a circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleRole {
    Unit,
    Magnitude,
}

/// One screen-space primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneCommand {
    Line {
        start: DVec2,
        end: DVec2,
        role: LineRole,
    },
    Circle {
        center: DVec2,
        radius: f64,
        role: CircleRole,
    },
    Arc {
        arc: ScreenArc,
        /// Same arc as SVG path data
        path: String,
    },
    Point {
        position: DVec2,
    },
    Label {
        position: DVec2,
        text: String,
    },
}

/// Text readouts for the control panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    /// |z|
    pub magnitude: String,
    /// θ in radians
    pub theta: String,
    /// θ in degrees
    pub degrees: String,
    /// z in rectangular form
    pub rectangular: String,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub view: View,
    /// Resolved magnitude
    pub r: f64,
    /// z in world units
    pub point: DVec2,
    pub grid: GridTicks,
    /// Draw list, back to front
    pub commands: Vec<SceneCommand>,
    pub readout: Readout,
}

impl Scene {
    /// Serialize for a JavaScript renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Compose the draw list for one frame
pub fn compose(controls: &Controls, toggles: &Toggles, view: &View) -> Scene {
    let r = controls.magnitude();
    let point = compute_point(r, controls.theta);
    let grid = GridTicks::for_view(view);
    let center = view.center();
    let width = f64::from(view.width());
    let height = f64::from(view.height());

    let mut commands = Vec::with_capacity(grid.xs.len() * 2 + grid.ys.len() * 2 + 12);

    // Grid lines and tick labels; the zero lines are drawn as axes below
    for &x in grid.xs.iter().filter(|x| **x != 0.0) {
        let sx = view.to_screen(DVec2::new(x, 0.0)).x;
        commands.push(SceneCommand::Line {
            start: DVec2::new(sx, 0.0),
            end: DVec2::new(sx, height),
            role: LineRole::Grid,
        });
        commands.push(SceneCommand::Label {
            position: DVec2::new(sx + LABEL_GAP, center.y + LABEL_DROP),
            text: format_number(x),
        });
    }
    for &y in grid.ys.iter().filter(|y| **y != 0.0) {
        let sy = view.to_screen(DVec2::new(0.0, y)).y;
        commands.push(SceneCommand::Line {
            start: DVec2::new(0.0, sy),
            end: DVec2::new(width, sy),
            role: LineRole::Grid,
        });
        commands.push(SceneCommand::Label {
            position: DVec2::new(center.x + LABEL_GAP, sy - LABEL_GAP),
            text: format_number(y),
        });
    }

    commands.push(SceneCommand::Line {
        start: DVec2::new(0.0, center.y),
        end: DVec2::new(width, center.y),
        role: LineRole::Axis,
    });
    commands.push(SceneCommand::Line {
        start: DVec2::new(center.x, 0.0),
        end: DVec2::new(center.x, height),
        role: LineRole::Axis,
    });

    commands.push(SceneCommand::Circle {
        center,
        radius: view.zoom(),
        role: CircleRole::Unit,
    });

    if magnitude_circle_visible(r, view) {
        commands.push(SceneCommand::Circle {
            center,
            radius: magnitude_circle_radius(r, view),
            role: CircleRole::Magnitude,
        });
    } else {
        log::debug!(
            "Skipping magnitude circle: radius {}px",
            magnitude_circle_radius(r, view)
        );
    }

    if toggles.arc {
        let descriptor = ArcDescriptor::new(controls.theta, r);
        let arc = descriptor.to_screen(view);
        if descriptor.is_degenerate() {
            log::debug!("Skipping zero-length angle arc");
        } else if arc.is_drawable() {
            commands.push(SceneCommand::Arc {
                path: arc.to_svg_path(),
                arc,
            });
        } else {
            log::debug!("Skipping angle arc for theta {}", controls.theta);
        }
    }

    let screen = view.to_screen(point);
    if View::is_drawable(screen) {
        if toggles.projections {
            if let Some(guides) = projections(point, view) {
                commands.push(SceneCommand::Line {
                    start: guides.point,
                    end: guides.real_foot,
                    role: LineRole::Projection,
                });
                commands.push(SceneCommand::Line {
                    start: guides.point,
                    end: guides.imag_foot,
                    role: LineRole::Projection,
                });
            }
        }
        commands.push(SceneCommand::Line {
            start: center,
            end: screen,
            role: LineRole::Vector,
        });
        commands.push(SceneCommand::Point { position: screen });
        commands.push(SceneCommand::Label {
            position: screen + DVec2::new(LABEL_GAP, -LABEL_GAP),
            text: "z".to_string(),
        });
    } else {
        log::debug!("Skipping vector and point: screen position {:?}", screen);
    }

    let readout = Readout {
        magnitude: format_number(r),
        theta: format_number(controls.theta),
        degrees: format_degrees(controls.theta),
        rectangular: format_complex(point),
    };

    Scene {
        view: *view,
        r,
        point,
        grid,
        commands,
        readout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::compute_arc;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn is_finite(command: &SceneCommand) -> bool {
        match command {
            SceneCommand::Line { start, end, .. } => start.is_finite() && end.is_finite(),
            SceneCommand::Circle { center, radius, .. } => {
                center.is_finite() && radius.is_finite()
            }
            SceneCommand::Arc { arc, .. } => arc.is_drawable(),
            SceneCommand::Point { position } | SceneCommand::Label { position, .. } => {
                position.is_finite()
            }
        }
    }

    fn count(scene: &Scene, pred: impl Fn(&SceneCommand) -> bool) -> usize {
        scene.commands.iter().filter(|c| pred(*c)).count()
    }

    fn has_magnitude_circle(scene: &Scene) -> bool {
        count(scene, |c| {
            matches!(c, SceneCommand::Circle { role: CircleRole::Magnitude, .. })
        }) == 1
    }

    fn has_vector(scene: &Scene) -> bool {
        count(scene, |c| matches!(c, SceneCommand::Line { role: LineRole::Vector, .. })) == 1
    }

    #[test]
    fn test_unit_scenario() {
        let view = View::new(100.0, 760, 520).unwrap();
        let controls = Controls {
            theta: 0.0,
            mantissa: 1.0,
            exponent: 0.0,
        };
        let scene = compose(&controls, &Toggles::default(), &view);
        assert_eq!(scene.r, 1.0);
        assert_eq!(scene.point, DVec2::new(1.0, 0.0));
        assert!(has_vector(&scene));
        assert!(has_magnitude_circle(&scene));

        // Zero-length arc at angle 0 has nothing to draw
        let arc = compute_arc(controls.theta, scene.r, &view);
        assert_eq!(arc.start, arc.end);
        assert_eq!(count(&scene, |c| matches!(c, SceneCommand::Arc { .. })), 0);
        assert_eq!(scene.readout.rectangular, "1 + 0i");
        assert_eq!(scene.readout.degrees, "0°");
    }

    #[test]
    fn test_quarter_turn_scenario() {
        let controls = Controls {
            theta: PI / 2.0,
            mantissa: 5.0,
            exponent: 2.0,
        };
        let view = View::new(1.0, 760, 520).unwrap();
        let scene = compose(&controls, &Toggles::default(), &view);
        assert_eq!(scene.r, 500.0);
        assert!(scene.point.x.abs() < 1e-9);
        assert!((scene.point.y - 500.0).abs() < 1e-9);
        assert!(has_magnitude_circle(&scene));
        assert_eq!(scene.readout.magnitude, "500");

        let zoomed = View::new(5.0, 760, 520).unwrap();
        let scene = compose(&controls, &Toggles::default(), &zoomed);
        assert!(!has_magnitude_circle(&scene));
        assert!(has_vector(&scene));
    }

    #[test]
    fn test_out_of_range_exponent_scenario() {
        let controls = Controls {
            theta: 0.4,
            mantissa: 1.0,
            exponent: 400.0,
        };
        let view = View::new(100.0, 760, 520).unwrap();
        let scene = compose(&controls, &Toggles::default(), &view);
        assert!((scene.r / 1e300 - 1.0).abs() < 1e-12);
        assert!(scene.point.is_finite());
        assert!(!has_magnitude_circle(&scene));
        assert_eq!(scene.readout.magnitude, "1.00e+300");
    }

    #[test]
    fn test_overflowing_point_is_omitted() {
        let controls = Controls {
            theta: 1.0,
            mantissa: 9.0,
            exponent: 300.0,
        };
        let view = View::new(1e10, 760, 520).unwrap();
        let scene = compose(&controls, &Toggles::default(), &view);
        assert!(!has_vector(&scene));
        assert_eq!(count(&scene, |c| matches!(c, SceneCommand::Point { .. })), 0);
        let projection_lines = count(&scene, |c| {
            matches!(c, SceneCommand::Line { role: LineRole::Projection, .. })
        });
        assert_eq!(projection_lines, 0);
        // The arc stays on the unit circle so it survives
        assert_eq!(count(&scene, |c| matches!(c, SceneCommand::Arc { .. })), 1);
    }

    #[test]
    fn test_toggles_only_filter_commands() {
        let controls = Controls::default();
        let view = View::new(100.0, 760, 520).unwrap();
        let on = compose(&controls, &Toggles::default(), &view);
        let off = compose(
            &controls,
            &Toggles {
                projections: false,
                arc: false,
            },
            &view,
        );
        assert_eq!(on.point, off.point);
        assert_eq!(on.grid, off.grid);
        assert_eq!(on.commands.len(), off.commands.len() + 3);
        assert_eq!(count(&off, |c| matches!(c, SceneCommand::Arc { .. })), 0);
    }

    #[test]
    fn test_axes_not_duplicated_by_grid() {
        let view = View::new(5.0, 760, 520).unwrap();
        let scene = compose(&Controls::default(), &Toggles::default(), &view);
        let role_count = |role: LineRole| {
            count(&scene, |c| matches!(c, SceneCommand::Line { role: r, .. } if *r == role))
        };
        assert_eq!(
            role_count(LineRole::Grid),
            scene.grid.xs.len() - 1 + scene.grid.ys.len() - 1
        );
        assert_eq!(role_count(LineRole::Axis), 2);
    }

    #[test]
    fn test_zero_magnitude_drops_arc() {
        let controls = Controls {
            theta: 1.0,
            mantissa: 0.0,
            exponent: 0.0,
        };
        let view = View::new(100.0, 760, 520).unwrap();
        let scene = compose(&controls, &Toggles::default(), &view);
        assert_eq!(count(&scene, |c| matches!(c, SceneCommand::Arc { .. })), 0);
        assert!(has_vector(&scene));
    }

    #[test]
    fn test_label_placement() {
        let view = View::new(100.0, 760, 520).unwrap();
        let scene = compose(&Controls::default(), &Toggles::default(), &view);
        let labels: Vec<(DVec2, &str)> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                SceneCommand::Label { position, text } => Some((*position, text.as_str())),
                _ => None,
            })
            .collect();

        // x = 1 sits right of its gridline, below the real axis
        assert!(labels.contains(&(DVec2::new(484.0, 274.0), "1")));
        // y = 1 sits right of the imaginary axis, just above its gridline
        assert!(labels.contains(&(DVec2::new(384.0, 156.0), "1")));

        let z = view.to_screen(scene.point);
        assert!(labels.contains(&(z + DVec2::new(LABEL_GAP, -LABEL_GAP), "z")));
    }

    #[test]
    fn test_scene_json() {
        let view = View::new(100.0, 760, 520).unwrap();
        let scene = compose(&Controls::default(), &Toggles::default(), &view);
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"kind\":\"arc\""));
        assert!(json.contains("\"role\":\"vector\""));
    }

    proptest! {
        #[test]
        fn prop_scene_always_finite(
            theta in -50.0..50.0f64,
            mantissa in -10.0..10.0f64,
            exponent in -400.0..400.0f64,
            zoom_exp in -6i32..12,
        ) {
            let view = View::new(10_f64.powi(zoom_exp), 760, 520).unwrap();
            let controls = Controls { theta, mantissa, exponent };
            let scene = compose(&controls, &Toggles::default(), &view);
            prop_assert!(scene.commands.iter().all(is_finite));
        }
    }
}
