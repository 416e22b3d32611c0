use raylib::prelude::*;
use crate::state::Command;

const KEYS: [KeyboardKey; 3] = [
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_LEFT,
];

const MOUSE_BUTTONS: [MouseButton; 3] = [
    MouseButton::MOUSE_BUTTON_LEFT,
    MouseButton::MOUSE_BUTTON_RIGHT,
    MouseButton::MOUSE_BUTTON_MIDDLE,
];

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Command::Next),
        KeyboardKey::KEY_LEFT => Some(Command::Previous),
        _ => None,
    }
}

/// Reads this frame's navigation input. Any mouse button counts as "next".
pub fn poll(rl: &RaylibHandle) -> Option<Command> {
    let key = KEYS
        .into_iter()
        .find(|&key| rl.is_key_pressed(key))
        .and_then(command_for_key);
    if key.is_some() {
        return key;
    }

    MOUSE_BUTTONS
        .into_iter()
        .any(|button| rl.is_mouse_button_pressed(button))
        .then_some(Command::Next)
}
