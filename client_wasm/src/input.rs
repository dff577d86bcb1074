//! Keyboard mapping for the runner controls.

/// What a key press means to the game, independent of the event plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Jump,
    Duck,
}

/// Maps a `KeyboardEvent.code` to a control intent. Unmapped keys return
/// `None` so the page keeps its default behaviour for them.
pub fn intent_for_code(code: &str) -> Option<KeyIntent> {
    match code {
        "Space" | "ArrowUp" => Some(KeyIntent::Jump),
        "ArrowDown" => Some(KeyIntent::Duck),
        _ => None,
    }
}
