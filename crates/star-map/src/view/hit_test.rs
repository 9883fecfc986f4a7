use glam::Vec2;

use crate::api::types::StarId;
use crate::galaxy::star::Star;
use crate::view::camera::Camera;

/// Resolve a screen-space click to a star.
///
/// The point goes through the inverse camera transform, then stars are
/// scanned in generation order and the FIRST one whose hit circle contains
/// the point wins. Overlapping hit circles therefore favour earlier stars.
pub fn resolve(stars: &[Star], screen: Vec2, camera: &Camera) -> Option<StarId> {
    resolve_world(stars, camera.screen_to_world(screen))
}

/// Same as [`resolve`] for a point already in world space.
pub fn resolve_world(stars: &[Star], world: Vec2) -> Option<StarId> {
    stars.iter().find(|star| star.contains(world)).map(|star| star.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::noise::NoiseField;
    use crate::core::rng::Rng;
    use crate::galaxy::generator::GalaxyGenerator;
    use crate::galaxy::star::StarColor;
    use crate::view::camera::CameraTransform;

    fn star(id: u32, x: f32, y: f32, size: f32) -> Star {
        Star {
            id: StarId(id),
            position: Vec2::new(x, y),
            size,
            color: StarColor::rgb(255, 255, 255),
            name: format!("Star {}", id),
            pulse_rate: 1.0,
            frequency: 300.0,
            planets: Vec::new(),
            pulse: 0.0,
        }
    }

    #[test]
    fn empty_list_resolves_to_none() {
        let cam = Camera::new(800.0, 600.0);
        assert_eq!(resolve(&[], Vec2::new(400.0, 300.0), &cam), None);
    }

    #[test]
    fn miss_resolves_to_none() {
        let cam = Camera::new(800.0, 600.0);
        let stars = [star(0, 100.0, 100.0, 2.0)];
        assert_eq!(resolve(&stars, Vec2::new(500.0, 500.0), &cam), None);
    }

    #[test]
    fn overlapping_circles_prefer_earlier_star() {
        let cam = Camera::new(800.0, 600.0);
        let stars = [star(0, 300.0, 300.0, 4.0), star(1, 310.0, 300.0, 4.0)];
        // Both circles (radius 20) cover (308, 300).
        assert_eq!(resolve(&stars, Vec2::new(308.0, 300.0), &cam), Some(StarId(0)));
        // Only star 1 covers (325, 300).
        assert_eq!(resolve(&stars, Vec2::new(325.0, 300.0), &cam), Some(StarId(1)));
    }

    #[test]
    fn click_goes_through_inverse_transform() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.apply(CameraTransform { pan: Vec2::new(100.0, -50.0), zoom: 2.0 });
        let stars = [star(0, 600.0, 200.0, 3.0)];
        let screen = cam.world_to_screen(stars[0].position);
        assert_eq!(resolve(&stars, screen, &cam), Some(StarId(0)));
        // Clicking the untransformed world position misses.
        assert_eq!(resolve(&stars, stars[0].position, &cam), None);
    }

    #[test]
    fn round_trip_for_generated_galaxy() {
        let noise = NoiseField::new(31);
        let mut rng = Rng::new(31);
        let galaxy = GalaxyGenerator::new(&noise, &mut rng).generate(60, 1280.0, 800.0);

        let cameras = [
            CameraTransform::IDENTITY,
            CameraTransform { pan: Vec2::new(35.0, -12.0), zoom: 0.5 },
            CameraTransform { pan: Vec2::new(-220.0, 140.0), zoom: 3.0 },
            CameraTransform { pan: Vec2::new(10.0, 10.0), zoom: 5.0 },
        ];
        for transform in cameras {
            let mut cam = Camera::new(1280.0, 800.0);
            cam.apply(transform);
            for s in &galaxy.stars {
                let screen = cam.world_to_screen(s.position);
                let hit = resolve(&galaxy.stars, screen, &cam).expect("star center must hit");
                // First-match: either the star itself or an earlier star whose circle covers it.
                if hit != s.id {
                    assert!(hit < s.id);
                    assert!(galaxy.stars[hit.index()].contains(s.position));
                }
            }
        }
    }
}
