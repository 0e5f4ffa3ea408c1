//! Key bindings: raw key names to logical controls and actions.
//!
//! This is the only place device key names exist. Everything past
//! [`KeyBindings`] speaks [`PlayerCommand`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use skylark_core::commands::PlayerCommand;
use skylark_core::controls::Control;

/// One-shot actions fired on key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimAction {
    CycleCamera,
    ToggleLandingGear,
    TogglePause,
}

impl SimAction {
    pub fn command(self) -> PlayerCommand {
        match self {
            SimAction::CycleCamera => PlayerCommand::CycleCamera,
            SimAction::ToggleLandingGear => PlayerCommand::ToggleLandingGear,
            SimAction::TogglePause => PlayerCommand::TogglePause,
        }
    }
}

/// What a key does: hold a control, or fire an action.
///
/// In a settings file either form is a bare string, e.g. `"PitchUp"` or
/// `"CycleCamera"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyAction {
    Action(SimAction),
    Control(Control),
}

/// Key name → action table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let defaults = [
            ("ArrowUp", KeyAction::Control(Control::PitchUp)),
            ("ArrowDown", KeyAction::Control(Control::PitchDown)),
            ("ArrowLeft", KeyAction::Control(Control::RollLeft)),
            ("ArrowRight", KeyAction::Control(Control::RollRight)),
            ("w", KeyAction::Control(Control::ThrottleUp)),
            ("s", KeyAction::Control(Control::ThrottleDown)),
            ("f", KeyAction::Control(Control::FlapsExtend)),
            ("v", KeyAction::Control(Control::FlapsRetract)),
            ("c", KeyAction::Action(SimAction::CycleCamera)),
            ("g", KeyAction::Action(SimAction::ToggleLandingGear)),
            ("p", KeyAction::Action(SimAction::TogglePause)),
        ];
        Self {
            bindings: defaults
                .into_iter()
                .map(|(key, action)| (key.to_string(), action))
                .collect(),
        }
    }
}

impl KeyBindings {
    /// Bind `key`, replacing any existing binding for it.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        self.bindings.insert(key.into(), action);
    }

    pub fn unbind(&mut self, key: &str) {
        self.bindings.remove(key);
    }

    pub fn action(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Command for a key going down. Unbound keys produce nothing.
    pub fn on_press(&self, key: &str) -> Option<PlayerCommand> {
        match self.action(key)? {
            KeyAction::Control(control) => Some(PlayerCommand::PressControl { control }),
            KeyAction::Action(action) => Some(action.command()),
        }
    }

    /// Command for a key coming up. Actions fire on press only.
    pub fn on_release(&self, key: &str) -> Option<PlayerCommand> {
        match self.action(key)? {
            KeyAction::Control(control) => Some(PlayerCommand::ReleaseControl { control }),
            KeyAction::Action(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
