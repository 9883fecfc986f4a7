use bytemuck::{Pod, Zeroable};

/// Identity of a star: its generation index in the galaxy.
/// Stable for the lifetime of the explorer (the star list is never resized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(pub u32);

impl StarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Event kinds carried in [`ViewEvent::kind`].
pub mod event_kind {
    /// A star was hit by a click; the camera transition begins. `a` = star index.
    pub const STAR_SELECTED: f32 = 1.0;
    /// Detail view is now showing a system. `a` = star index.
    pub const ENTERED_DETAIL: f32 = 2.0;
    /// Back in the overview.
    pub const RETURNED_TO_OVERVIEW: f32 = 3.0;
    /// The generator placed fewer stars than requested. `a` = placed, `b` = requested.
    pub const GENERATION_SHORT: f32 = 4.0;
    /// The tone bank was activated. `a` = tone count.
    pub const AUDIO_STARTED: f32 = 5.0;
    /// Debug overlay toggled. `a` = 1 when on.
    pub const DEBUG_TOGGLED: f32 = 6.0;
}

/// An event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ViewEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl ViewEvent {
    pub const FLOATS: usize = 4;

    pub fn star_selected(id: StarId) -> Self {
        Self { kind: event_kind::STAR_SELECTED, a: id.0 as f32, ..Default::default() }
    }

    pub fn entered_detail(id: StarId) -> Self {
        Self { kind: event_kind::ENTERED_DETAIL, a: id.0 as f32, ..Default::default() }
    }

    pub fn returned_to_overview() -> Self {
        Self { kind: event_kind::RETURNED_TO_OVERVIEW, ..Default::default() }
    }

    pub fn generation_short(placed: usize, requested: usize) -> Self {
        Self {
            kind: event_kind::GENERATION_SHORT,
            a: placed as f32,
            b: requested as f32,
            ..Default::default()
        }
    }

    pub fn audio_started(tones: usize) -> Self {
        Self { kind: event_kind::AUDIO_STARTED, a: tones as f32, ..Default::default() }
    }

    pub fn debug_toggled(on: bool) -> Self {
        Self {
            kind: event_kind::DEBUG_TOGGLED,
            a: if on { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<ViewEvent>(), ViewEvent::FLOATS * 4);
    }

    #[test]
    fn view_event_casts_to_floats() {
        let events = [ViewEvent::star_selected(StarId(7)), ViewEvent::generation_short(60, 100)];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats, &[1.0, 7.0, 0.0, 0.0, 4.0, 60.0, 100.0, 0.0]);
    }
}
