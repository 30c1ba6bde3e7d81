//! Keyboard input handling

use game_core::Params;
use proto::HostEvent;

/// Map a `KeyboardEvent.key` value to the legacy key code the match binds.
/// Keys the match does not care about map to `None`.
pub fn key_code(key: &str) -> Option<u32> {
    match key {
        "ArrowUp" => Some(Params::KEY_UP),
        "ArrowDown" => Some(Params::KEY_DOWN),
        "p" | "P" => Some(Params::KEY_PAUSE),
        "r" | "R" => Some(Params::KEY_RESET),
        _ => None,
    }
}

/// Arrow keys would scroll the page
pub fn should_prevent_default(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown")
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<HostEvent> {
    key_code(key).map(|code| HostEvent::KeyDown { code })
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<HostEvent> {
    key_code(key).map(|code| HostEvent::KeyUp { code })
}
