//! Keyboard shortcuts.

use crate::app::Editor;
use crate::input::KeyEvent;

impl Editor {
    /// Handle a key press. Returns `true` when the key was consumed.
    ///
    /// - `Delete` / `Backspace` deletes the selection, if there is a primary item
    /// - Ctrl+Z (Cmd+Z on macOS) undoes the last commit
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match event.key.as_str() {
            "Delete" | "Backspace" => {
                if self.canvas.selection.primary().is_none() {
                    return false;
                }
                self.delete_selected();
                true
            }
            "z" | "Z" if event.modifiers.secondary() => {
                self.undo();
                true
            }
            _ => false,
        }
    }
}
