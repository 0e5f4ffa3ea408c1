//! Input aggregation: the set of controls the pilot is holding.
//!
//! Press and release events reach the engine as queued commands and are
//! applied here in arrival order at the tick boundary. The tick then reads
//! one `Copy` snapshot, so a control toggled between ticks is either fully
//! visible to a tick or fully absent.

use skylark_core::controls::{Control, ControlInputSet};

/// Tracks held controls between ticks.
#[derive(Debug, Default)]
pub struct InputAggregator {
    held: ControlInputSet,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a control as held. Unknown controls are ignored.
    pub fn activate(&mut self, control: Control) {
        if let Some(flag) = control.flag() {
            self.held.insert(flag);
        }
    }

    /// Mark a control as released. Unknown controls are ignored.
    pub fn deactivate(&mut self, control: Control) {
        if let Some(flag) = control.flag() {
            self.held.remove(flag);
        }
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.held = ControlInputSet::empty();
    }

    /// Current held set. Does not mutate.
    pub fn snapshot(&self) -> ControlInputSet {
        self.held
    }
}
