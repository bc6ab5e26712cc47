use glam::DVec3;

use crate::api::types::ScaleMode;

/// Control events the simulation understands.
/// Pushed by the host at any time; drained exactly once at the start of the
/// next tick, so every toggle lands atomically on a tick boundary and the
/// rest of the frame sees a single consistent settings snapshot.
#[derive(Debug, Clone, Copy)]
pub enum ControlEvent {
    /// Switch the distance/size display convention.
    SetScaleMode(ScaleMode),
    /// Hand camera ownership to (true) or take it back from (false) the
    /// host's free-fly orbit control.
    SetFreeFly(bool),
    /// Time acceleration factor. Negative values are rejected at apply time.
    SetTimeAcceleration(f64),
    /// Normalized scroll progress in [0, 1]. Latest value wins within a tick.
    SetScrollProgress(f64),
    /// Host hands the live camera pose back when leaving free-fly, so
    /// damping resumes from where the user left the camera.
    SyncCameraPose { position: DVec3, look_at: DVec3 },
}

/// A queue of pending control events.
/// The host writes into the queue; the simulation reads and drains it each tick.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new control event.
    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order. Clears the queue.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}
