//! Snapshot sinks: where each tick's `FrameSnapshot` goes.

use std::sync::mpsc;

use skylark_core::state::FrameSnapshot;

/// Presentation-side consumer of per-tick snapshots.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &FrameSnapshot);
}

/// Forwards every snapshot over a channel. A dropped receiver is ignored.
pub struct ChannelSink {
    tx: mpsc::Sender<FrameSnapshot>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<FrameSnapshot>) -> Self {
        Self { tx }
    }

    /// A sink plus the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::Receiver<FrameSnapshot>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl SnapshotSink for ChannelSink {
    fn emit(&mut self, snapshot: &FrameSnapshot) {
        let _ = self.tx.send(snapshot.clone());
    }
}

/// Collects snapshots in memory.
impl SnapshotSink for Vec<FrameSnapshot> {
    fn emit(&mut self, snapshot: &FrameSnapshot) {
        self.push(snapshot.clone());
    }
}

/// Discards everything.
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn emit(&mut self, _snapshot: &FrameSnapshot) {}
}
