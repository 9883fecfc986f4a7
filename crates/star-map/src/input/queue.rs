/// Buttons the host page draws above the map. They live inside the UI band,
/// so they arrive as commands instead of clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Activate the per-star tones.
    StartAudio,
    /// Flip hit rings and the debug overlay lines.
    ToggleDebug,
    /// Jump straight into the first generated system.
    ShowFirstSystem,
    /// Leave the detail view.
    ReturnToGalaxy,
}

impl UiCommand {
    /// Decode the numeric kind used on the JS side (1 to 4).
    pub fn from_kind(kind: u32) -> Option<Self> {
        match kind {
            1 => Some(UiCommand::StartAudio),
            2 => Some(UiCommand::ToggleDebug),
            3 => Some(UiCommand::ShowFirstSystem),
            4 => Some(UiCommand::ReturnToGalaxy),
            _ => None,
        }
    }

    pub fn kind(self) -> u32 {
        match self {
            UiCommand::StartAudio => 1,
            UiCommand::ToggleDebug => 2,
            UiCommand::ShowFirstSystem => 3,
            UiCommand::ReturnToGalaxy => 4,
        }
    }
}

/// Input events the explorer understands. All coordinates are screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse press/release without movement.
    Click { x: f32, y: f32 },
    /// Pointer moved by (dx, dy) while a button is held.
    Drag { dx: f32, dy: f32 },
    /// Wheel delta; positive zooms out.
    Scroll { delta: f32 },
    /// Canvas resized.
    Resize { width: f32, height: f32 },
    /// Pointer position, used for proximity tones.
    PointerMove { x: f32, y: f32 },
    Command(UiCommand),
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Click { x: 10.0, y: 200.0 });
        q.push(InputEvent::Scroll { delta: -120.0 });
        q.push(InputEvent::Command(UiCommand::ToggleDebug));
        assert_eq!(q.len(), 3);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::Click { x: 10.0, y: 200.0 });
        assert_eq!(events[2], InputEvent::Command(UiCommand::ToggleDebug));
        assert!(q.is_empty());
    }

    #[test]
    fn command_kinds_round_trip() {
        for kind in 1..=4 {
            let cmd = UiCommand::from_kind(kind).expect("known kind");
            assert_eq!(cmd.kind(), kind);
        }
        assert_eq!(UiCommand::from_kind(0), None);
        assert_eq!(UiCommand::from_kind(5), None);
    }
}
