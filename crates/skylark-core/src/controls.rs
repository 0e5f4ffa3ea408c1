//! Logical flight controls and the held-control set.
//!
//! The core never sees device key codes; the input source maps them to
//! [`Control`] identifiers before anything reaches the simulation.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A logical control the pilot can hold down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    ThrottleUp,
    ThrottleDown,
    FlapsExtend,
    FlapsRetract,
    /// Any identifier this build does not know about. Never held.
    #[serde(other)]
    Unknown,
}

impl Control {
    /// Every known control, in declaration order.
    pub const ALL: [Control; 8] = [
        Control::PitchUp,
        Control::PitchDown,
        Control::RollLeft,
        Control::RollRight,
        Control::ThrottleUp,
        Control::ThrottleDown,
        Control::FlapsExtend,
        Control::FlapsRetract,
    ];

    /// The set bit for this control, or `None` for [`Control::Unknown`].
    pub fn flag(self) -> Option<ControlInputSet> {
        match self {
            Control::PitchUp => Some(ControlInputSet::PITCH_UP),
            Control::PitchDown => Some(ControlInputSet::PITCH_DOWN),
            Control::RollLeft => Some(ControlInputSet::ROLL_LEFT),
            Control::RollRight => Some(ControlInputSet::ROLL_RIGHT),
            Control::ThrottleUp => Some(ControlInputSet::THROTTLE_UP),
            Control::ThrottleDown => Some(ControlInputSet::THROTTLE_DOWN),
            Control::FlapsExtend => Some(ControlInputSet::FLAPS_EXTEND),
            Control::FlapsRetract => Some(ControlInputSet::FLAPS_RETRACT),
            Control::Unknown => None,
        }
    }
}

bitflags! {
    /// Set of currently held controls.
    ///
    /// `Copy`, so a tick always works on its own immutable snapshot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ControlInputSet: u8 {
        const PITCH_UP = 1 << 0;
        const PITCH_DOWN = 1 << 1;
        const ROLL_LEFT = 1 << 2;
        const ROLL_RIGHT = 1 << 3;
        const THROTTLE_UP = 1 << 4;
        const THROTTLE_DOWN = 1 << 5;
        const FLAPS_EXTEND = 1 << 6;
        const FLAPS_RETRACT = 1 << 7;
    }
}

impl Default for ControlInputSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl ControlInputSet {
    /// Build a set from a list of controls. Unknown controls are skipped.
    pub fn from_controls(controls: &[Control]) -> Self {
        controls
            .iter()
            .filter_map(|control| control.flag())
            .fold(Self::empty(), |set, flag| set | flag)
    }

    /// Whether `control` is held. Always false for [`Control::Unknown`].
    pub fn is_held(&self, control: Control) -> bool {
        control.flag().is_some_and(|flag| self.contains(flag))
    }

    /// -1.0, 0.0 or 1.0 depending on which of two opposing controls is held.
    /// Both held cancel out.
    pub fn axis(&self, positive: Control, negative: Control) -> f64 {
        let mut value = 0.0;
        if self.is_held(positive) {
            value += 1.0;
        }
        if self.is_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Held controls, in [`Control::ALL`] order.
    pub fn controls(&self) -> impl Iterator<Item = Control> + '_ {
        Control::ALL
            .into_iter()
            .filter(move |control| self.is_held(*control))
    }
}
