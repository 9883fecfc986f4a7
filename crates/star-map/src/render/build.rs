use glam::Vec2;

use crate::galaxy::star::{Planet, Star};
use crate::render::instance::{PlanetInstance, RenderBuffer, StarInstance};
use crate::view::camera::Camera;
use crate::view::state::{ViewMode, ViewStateMachine};

fn star_instance(star: &Star, at: Vec2) -> StarInstance {
    let [r, g, b, _] = star.color.to_f32();
    StarInstance {
        x: at.x,
        y: at.y,
        size: star.size,
        pulse: star.pulse,
        r,
        g,
        b,
        hit_radius: star.hit_radius(),
    }
}

fn planet_instance(planet: &Planet, center: Vec2) -> PlanetInstance {
    let [r, g, b, _] = planet.color.to_f32();
    let p = center + planet.offset();
    PlanetInstance {
        x: p.x,
        y: p.y,
        size: planet.size,
        orbit_radius: planet.distance,
        r,
        g,
        b,
        angle: planet.angle,
    }
}

/// Fill star, planet and camera data for the current view.
///
/// Overview and transition draw every star at its world position under the
/// camera. Detail draws only the selected star at the canvas center with its
/// planets; the camera is at identity there, so world equals screen.
/// Dust is left to [`build_dust`](crate::render::dust::build_dust).
pub fn build_render_buffer(
    stars: &[Star],
    view: &ViewStateMachine,
    camera: &Camera,
    buffer: &mut RenderBuffer,
) {
    buffer.stars.clear();
    buffer.planets.clear();
    buffer.camera = camera.uniform();

    match view.mode() {
        ViewMode::Overview | ViewMode::TransitioningToDetail => {
            buffer
                .stars
                .extend(stars.iter().map(|s| star_instance(s, s.position)));
        }
        ViewMode::Detail => {
            let Some(star) = view.selected().and_then(|id| stars.get(id.index())) else {
                return;
            };
            let center = camera.center();
            buffer.stars.push(star_instance(star, center));
            buffer
                .planets
                .extend(star.planets.iter().map(|p| planet_instance(p, center)));
        }
    }
}
