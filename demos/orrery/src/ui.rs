/// Host-UI state that lives in Rust: the draggable panel's position
/// machine and the label/readout strings the host displays verbatim.

/// Format a slider value for its numeric readout (two decimals).
pub fn format_speed(value: f32) -> String {
    format!("{value:.2}")
}

/// Pause button label for the current state.
pub fn pause_label(paused: bool) -> &'static str {
    if paused { "Resume" } else { "Pause" }
}

/// Theme button label for the current state.
pub fn theme_label(dark: bool) -> &'static str {
    if dark { "Light Mode" } else { "Dark Mode" }
}

/// Drag state for the control panel.
///
/// The host sends the grab offset (pointer minus the panel's top-left
/// corner, trivially known at the DOM) when a drag begins on the handle;
/// from then on every pointer move repositions the panel so that corner
/// tracks the pointer minus the offset. Exclusive with camera dragging
/// and without effect on simulation state.
#[derive(Debug, Default)]
pub struct PanelDrag {
    /// Pointer offset from the panel corner, present while dragging.
    grab_offset: Option<(f32, f32)>,
    /// Last computed panel position, kept after the drag ends.
    pub pos: Option<(f32, f32)>,
}

impl PanelDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag with the given grab offset.
    pub fn grab(&mut self, offset_x: f32, offset_y: f32) {
        self.grab_offset = Some((offset_x, offset_y));
    }

    /// Track a pointer move. Returns the new panel position while a drag
    /// is active, `None` otherwise.
    pub fn track(&mut self, pointer_x: f32, pointer_y: f32) -> Option<(f32, f32)> {
        let (ox, oy) = self.grab_offset?;
        let pos = (pointer_x - ox, pointer_y - oy);
        self.pos = Some(pos);
        Some(pos)
    }

    /// End the drag. The panel stays where it was left.
    pub fn release(&mut self) {
        self.grab_offset = None;
    }

    pub fn active(&self) -> bool {
        self.grab_offset.is_some()
    }
}
