//! Keyboard bindings shared by the native and web shells.

use crate::mode::TakeoffMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(TakeoffMode),
    Next,
    Previous,
    Reset,
    ToggleMute,
    ToggleStyle,
    TogglePanel,
}

/// Map a key name (as reported by `KeyboardEvent.key` / winit logical keys) to an action.
#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "1" | "s" | "S" => Some(Action::Select(TakeoffMode::Slow)),
        "2" | "m" | "M" => Some(Action::Select(TakeoffMode::Moderate)),
        "3" | "f" | "F" => Some(Action::Select(TakeoffMode::Fast)),
        "ArrowRight" => Some(Action::Next),
        "ArrowLeft" => Some(Action::Previous),
        "r" | "R" => Some(Action::Reset),
        " " | "k" | "K" => Some(Action::ToggleMute),
        "e" | "E" => Some(Action::ToggleStyle),
        "h" | "H" => Some(Action::TogglePanel),
        _ => None,
    }
}

/// Mode an action switches to, given the current one. `None` for non-selection actions.
#[inline]
pub fn target_mode(action: Action, current: TakeoffMode) -> Option<TakeoffMode> {
    match action {
        Action::Select(mode) => Some(mode),
        Action::Next => Some(current.next()),
        Action::Previous => Some(current.previous()),
        Action::Reset => Some(TakeoffMode::Slow),
        _ => None,
    }
}
