//! Actions the shell applies after a frame's widgets have been laid out.
//!
//! Toolbar buttons, tabs and keyboard shortcuts all produce [`Action`]s; the
//! app collects them while drawing and applies them in one place so no
//! widget closure needs mutable access to the workspace.

use eframe::egui::{Key, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    NewDraft,
    CloseDraft(usize),
    SelectDraft(usize),
    Capture,
    Paste,
    DeleteSelection,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Status-bar slider moved to this position.
    ZoomSlider(i32),
}

impl Action {
    /// Keyboard shortcut mapping for the main window.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::F11 => Some(Action::Capture),
            Key::Delete | Key::Backspace => Some(Action::DeleteSelection),
            Key::N if modifiers.command => Some(Action::NewDraft),
            Key::V if modifiers.command => Some(Action::Paste),
            Key::Plus | Key::Equals if modifiers.command => Some(Action::ZoomIn),
            Key::Minus if modifiers.command => Some(Action::ZoomOut),
            Key::Num0 if modifiers.command => Some(Action::ResetZoom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts() {
        let none = Modifiers::NONE;
        let cmd = Modifiers::COMMAND;

        assert_eq!(Action::from_key(Key::F11, none), Some(Action::Capture));
        assert_eq!(Action::from_key(Key::Delete, none), Some(Action::DeleteSelection));
        assert_eq!(Action::from_key(Key::Backspace, none), Some(Action::DeleteSelection));
        assert_eq!(Action::from_key(Key::N, cmd), Some(Action::NewDraft));
        assert_eq!(Action::from_key(Key::V, cmd), Some(Action::Paste));
        assert_eq!(Action::from_key(Key::Equals, cmd), Some(Action::ZoomIn));
        assert_eq!(Action::from_key(Key::Num0, cmd), Some(Action::ResetZoom));

        assert_eq!(Action::from_key(Key::N, none), None);
        assert_eq!(Action::from_key(Key::V, none), None);
        assert_eq!(Action::from_key(Key::Escape, none), None);
    }
}
