/// Coalesces recompute requests into at most one per display frame.
///
/// A notification marks work as pending and asks the caller to schedule a
/// frame only when none is outstanding. The frame callback calls
/// [`FrameGate::begin_frame`], which reopens the gate for the next burst.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
    scheduled: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must request a new animation frame.
    pub fn notify(&mut self) -> bool {
        self.pending = true;
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback. Returns whether an update is due.
    pub fn begin_frame(&mut self) -> bool {
        self.scheduled = false;
        std::mem::take(&mut self.pending)
    }

    /// Forget an outstanding frame, e.g. after its handle was dropped.
    pub fn cancel(&mut self) {
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
