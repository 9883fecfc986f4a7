use crate::api::types::StarId;
use crate::config::ViewParams;
use crate::galaxy::star::Star;
use crate::view::camera::Camera;
use crate::view::transition::Transition;

/// The three mutually exclusive view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// All stars visible; the user camera is active.
    #[default]
    Overview,
    /// A timed flight onto a star is running. Input is ignored.
    TransitioningToDetail,
    /// One system is shown at the canvas center.
    Detail,
}

impl ViewMode {
    /// Numeric code for the host (0, 1, 2).
    pub fn code(self) -> u32 {
        match self {
            ViewMode::Overview => 0,
            ViewMode::TransitioningToDetail => 1,
            ViewMode::Detail => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::TransitioningToDetail => "transitioning",
            ViewMode::Detail => "detail",
        }
    }
}

/// What [`ViewStateMachine::update`] did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Camera converged toward the user targets.
    Smoothed,
    /// Camera was driven by the running transition.
    Animated,
    /// The transition finished and the given star is now in detail.
    EnteredDetail(StarId),
}

/// Owns the view mode, the selected star and the running transition.
///
/// The camera is borrowed per call so the machine never holds a reference
/// into the controller's state.
#[derive(Debug, Clone)]
pub struct ViewStateMachine {
    mode: ViewMode,
    selected: Option<StarId>,
    transition: Option<Transition>,
    params: ViewParams,
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new(ViewParams::default())
    }
}

impl ViewStateMachine {
    pub fn new(params: ViewParams) -> Self {
        Self {
            mode: ViewMode::Overview,
            selected: None,
            transition: None,
            params,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Star shown in detail. `None` outside [`ViewMode::Detail`].
    pub fn selected(&self) -> Option<StarId> {
        self.selected
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Drag and scroll only reach the camera in the overview.
    pub fn accepts_navigation(&self) -> bool {
        self.mode == ViewMode::Overview
    }

    /// Transition progress in [0, 1] at `now`; 0 when nothing is running.
    pub fn progress(&self, now: f64) -> f32 {
        self.transition.as_ref().map_or(0.0, |t| t.progress(now))
    }

    /// Start flying to `star`. Only valid from the overview; returns whether
    /// a transition was started.
    pub fn begin_transition(&mut self, star: &Star, camera: &Camera, now: f64) -> bool {
        if self.mode != ViewMode::Overview {
            return false;
        }
        self.transition = Some(Transition::toward(star, camera, now, &self.params));
        self.mode = ViewMode::TransitioningToDetail;
        log::info!("view: flying to {} (star {})", star.name, star.id.0);
        true
    }

    /// Advance one frame. Either samples the transition into the camera or
    /// lets the camera smooth toward its targets, never both.
    pub fn update(&mut self, now: f64, camera: &mut Camera) -> ViewUpdate {
        let Some(transition) = self.transition.as_ref() else {
            camera.tick();
            return ViewUpdate::Smoothed;
        };

        if !transition.is_complete(now) {
            camera.apply(transition.sample(now));
            return ViewUpdate::Animated;
        }

        let target = transition.target;
        self.transition = None;
        self.selected = Some(target);
        self.mode = ViewMode::Detail;
        camera.reset();
        log::info!("view: entered detail of star {}", target.0);
        ViewUpdate::EnteredDetail(target)
    }

    /// Detail back to overview. Returns false (and does nothing) in any other mode.
    pub fn return_to_overview(&mut self) -> bool {
        if self.mode != ViewMode::Detail {
            return false;
        }
        self.selected = None;
        self.mode = ViewMode::Overview;
        log::info!("view: returned to overview");
        true
    }

    /// Jump straight into detail without animating. Refused while a
    /// transition is running.
    pub fn enter_detail_immediately(&mut self, id: StarId, camera: &mut Camera) -> bool {
        if self.mode == ViewMode::TransitioningToDetail {
            return false;
        }
        self.selected = Some(id);
        self.mode = ViewMode::Detail;
        camera.reset();
        log::info!("view: showing star {} directly", id.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::star::StarColor;
    use crate::view::camera::CameraTransform;
    use glam::Vec2;

    fn star() -> Star {
        Star {
            id: StarId(3),
            position: Vec2::new(620.0, 180.0),
            size: 4.0,
            color: StarColor::rgb(240, 230, 160),
            name: "Deneb Theta".into(),
            pulse_rate: 1.5,
            frequency: 320.0,
            planets: Vec::new(),
            pulse: 0.0,
        }
    }

    fn moved_camera() -> Camera {
        let mut cam = Camera::new(800.0, 600.0);
        cam.set_target(Vec2::new(30.0, -20.0), 2.0);
        for _ in 0..40 {
            cam.tick();
        }
        cam
    }

    #[test]
    fn starts_in_overview() {
        let view = ViewStateMachine::default();
        assert_eq!(view.mode(), ViewMode::Overview);
        assert!(view.selected().is_none());
        assert!(view.accepts_navigation());
        assert_eq!(view.progress(0.0), 0.0);
    }

    #[test]
    fn first_frame_equals_snapshot() {
        let mut view = ViewStateMachine::default();
        let mut cam = moved_camera();
        let snapshot = cam.transform();
        assert!(view.begin_transition(&star(), &cam, 4.0));
        assert_eq!(view.update(4.0, &mut cam), ViewUpdate::Animated);
        assert_eq!(cam.transform(), snapshot);
    }

    #[test]
    fn completion_resets_camera_and_selects() {
        let mut view = ViewStateMachine::default();
        let mut cam = moved_camera();
        view.begin_transition(&star(), &cam, 0.0);
        assert_eq!(view.update(0.5, &mut cam), ViewUpdate::Animated);
        assert!(cam.zoom() > 2.0);
        assert_eq!(view.update(1.0, &mut cam), ViewUpdate::EnteredDetail(StarId(3)));
        assert_eq!(view.mode(), ViewMode::Detail);
        assert_eq!(view.selected(), Some(StarId(3)));
        assert!(view.transition().is_none());
        assert_eq!(cam.transform(), CameraTransform::IDENTITY);
        assert_eq!(cam.target(), CameraTransform::IDENTITY);
    }

    #[test]
    fn second_selection_during_transition_is_ignored() {
        let mut view = ViewStateMachine::default();
        let cam = moved_camera();
        assert!(view.begin_transition(&star(), &cam, 0.0));
        let before = view.transition().cloned();
        let mut other = star();
        other.id = StarId(9);
        assert!(!view.begin_transition(&other, &cam, 0.2));
        assert_eq!(view.transition().cloned(), before);
        assert!(!view.accepts_navigation());
    }

    #[test]
    fn transition_overrides_user_targets() {
        let mut view = ViewStateMachine::default();
        let mut cam = moved_camera();
        let target = cam.target();
        view.begin_transition(&star(), &cam, 0.0);
        view.update(0.3, &mut cam);
        // Smoothing is suspended, so the target survives untouched.
        assert_eq!(cam.target(), target);
        assert_ne!(cam.transform().zoom, target.zoom);
    }

    #[test]
    fn return_only_from_detail() {
        let mut view = ViewStateMachine::default();
        assert!(!view.return_to_overview());
        let mut cam = Camera::new(800.0, 600.0);
        view.begin_transition(&star(), &cam, 0.0);
        assert!(!view.return_to_overview());
        view.update(2.0, &mut cam);
        assert!(view.return_to_overview());
        assert_eq!(view.mode(), ViewMode::Overview);
        assert!(view.selected().is_none());
    }

    #[test]
    fn immediate_detail_refused_while_transitioning() {
        let mut view = ViewStateMachine::default();
        let mut cam = moved_camera();
        view.begin_transition(&star(), &cam, 0.0);
        assert!(!view.enter_detail_immediately(StarId(0), &mut cam));

        let mut view = ViewStateMachine::default();
        assert!(view.enter_detail_immediately(StarId(0), &mut cam));
        assert_eq!(view.mode(), ViewMode::Detail);
        assert_eq!(view.selected(), Some(StarId(0)));
        assert_eq!(cam.transform(), CameraTransform::IDENTITY);
    }

    #[test]
    fn same_inputs_same_camera_path() {
        let run = || {
            let mut view = ViewStateMachine::default();
            let mut cam = moved_camera();
            view.begin_transition(&star(), &cam, 1.0);
            let mut path = Vec::new();
            for i in 0..70 {
                view.update(1.0 + i as f64 / 60.0, &mut cam);
                path.push(cam.transform());
            }
            path
        };
        assert_eq!(run(), run());
    }
}
