use glam::Vec2;

use crate::galaxy::star::Star;
use crate::view::camera::CameraTransform;
use crate::view::state::ViewMode;

/// Static hints for the navigation panel.
pub const NAVIGATION_HINTS: [&str; 3] = ["Navigation:", "Drag to move", "Scroll to zoom"];

/// Snapshot of the state the info panel describes.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContext<'a> {
    pub mode: ViewMode,
    pub star_count: usize,
    /// Star shown in detail, or the one being flown to.
    pub focus: Option<&'a Star>,
    pub progress_percent: u32,
    pub debug: bool,
    pub pointer: Vec2,
    pub camera: CameraTransform,
}

/// Text lines for the info panel, top to bottom.
pub fn info_lines(ctx: &OverlayContext) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);
    match (ctx.mode, ctx.focus) {
        (ViewMode::Detail, Some(star)) => {
            lines.push(format!("{} System", star.name));
            lines.push(format!("Planets: {}", star.planets.len()));
            lines.push("Click anywhere to return".to_string());
        }
        (ViewMode::TransitioningToDetail, Some(star)) => {
            lines.push(format!("Approaching {}", star.name));
            lines.push(format!("{}%", ctx.progress_percent));
        }
        _ => {
            lines.push("Galaxy View".to_string());
            lines.push(format!("Stars: {}", ctx.star_count));
            lines.push("Click on a star to explore".to_string());
            if ctx.debug {
                lines.push("Debug Mode ON".to_string());
                lines.push(format!("MouseX: {:.0} MouseY: {:.0}", ctx.pointer.x, ctx.pointer.y));
                lines.push(format!("ZoomLevel: {:.2}", ctx.camera.zoom));
                lines.push(format!("Camera: {:.0}, {:.0}", ctx.camera.pan.x, ctx.camera.pan.y));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::StarId;
    use crate::galaxy::star::{Planet, StarColor};

    fn star() -> Star {
        let planet = Planet {
            distance: 30.0,
            size: 4.0,
            color: StarColor::rgb(120, 120, 120),
            angular_speed: 0.01,
            angle: 0.0,
        };
        Star {
            id: StarId(0),
            position: Vec2::ZERO,
            size: 3.0,
            color: StarColor::rgb(255, 255, 255),
            name: "Polaris Prime".into(),
            pulse_rate: 1.0,
            frequency: 220.0,
            planets: vec![planet.clone(), planet],
            pulse: 0.0,
        }
    }

    fn ctx(mode: ViewMode, focus: Option<&Star>, debug: bool) -> OverlayContext<'_> {
        OverlayContext {
            mode,
            star_count: 87,
            focus,
            progress_percent: 42,
            debug,
            pointer: Vec2::new(321.4, 210.6),
            camera: CameraTransform { pan: Vec2::new(12.4, -7.6), zoom: 1.234 },
        }
    }

    #[test]
    fn overview_lines() {
        let lines = info_lines(&ctx(ViewMode::Overview, None, false));
        assert_eq!(lines, ["Galaxy View", "Stars: 87", "Click on a star to explore"]);
    }

    #[test]
    fn debug_lines_only_in_overview() {
        let lines = info_lines(&ctx(ViewMode::Overview, None, true));
        assert_eq!(lines[3], "Debug Mode ON");
        assert_eq!(lines[4], "MouseX: 321 MouseY: 211");
        assert_eq!(lines[5], "ZoomLevel: 1.23");
        assert_eq!(lines[6], "Camera: 12, -8");

        let s = star();
        let detail = info_lines(&ctx(ViewMode::Detail, Some(&s), true));
        assert_eq!(detail, ["Polaris Prime System", "Planets: 2", "Click anywhere to return"]);
    }

    #[test]
    fn transition_shows_progress() {
        let s = star();
        let lines = info_lines(&ctx(ViewMode::TransitioningToDetail, Some(&s), false));
        assert_eq!(lines, ["Approaching Polaris Prime", "42%"]);
    }
}
