//! Two-state dark-mode switch with a draggable thumb.
//!
//! The switch itself ([`ToggleSwitch`]) is a plain state machine over track
//! geometry and pointer x coordinates. [`DarkModeToggle`] pairs it with a
//! [`PreferenceStore`] and writes the flag only when a gesture completes with
//! a different state than before.

use crate::preference::{load_dark_mode, save_dark_mode, PreferenceStore};

pub const THUMB_WIDTH: f64 = 18.0;
/// Track border width on both sides combined.
pub const TRACK_BORDER_INSET: f64 = 2.0;
/// Pointer travel under which a press and release is a tap.
pub const DRAG_SLOP_PX: f64 = 4.0;
/// Window after a release during which the browser's synthetic click is ignored.
pub const CLICK_SUPPRESS_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Off,
    On,
}

impl ToggleState {
    /// Anything but the exact string `"true"` reads as off.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => ToggleState::On,
            _ => ToggleState::Off,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            ToggleState::On => "true",
            ToggleState::Off => "false",
        }
    }

    pub fn is_on(self) -> bool {
        self == ToggleState::On
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleState::On => ToggleState::Off,
            ToggleState::Off => ToggleState::On,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
    pub thumb_width: f64,
    pub border_inset: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            thumb_width: THUMB_WIDTH,
            border_inset: TRACK_BORDER_INSET,
        }
    }

    pub fn max_offset(&self) -> f64 {
        (self.width - self.thumb_width - self.border_inset).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn thumb_center(&self, offset: f64) -> f64 {
        self.left + offset + self.thumb_width / 2.0
    }

    pub fn rest_offset(&self, state: ToggleState) -> f64 {
        match state {
            ToggleState::On => self.max_offset(),
            ToggleState::Off => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    start_x: f64,
    start_offset: f64,
    offset: f64,
    moved: bool,
}

/// Result of a completed gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleOutcome {
    pub state: ToggleState,
    pub thumb_offset: f64,
    pub changed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ToggleSwitch {
    state: ToggleState,
    drag: Option<DragSession>,
    suppress_click_until_ms: Option<f64>,
}

impl ToggleSwitch {
    pub fn new(state: ToggleState) -> Self {
        Self {
            state,
            drag: None,
            suppress_click_until_ms: None,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_offset(&self) -> Option<f64> {
        self.drag.map(|session| session.offset)
    }

    /// True while the current press has not travelled past [`DRAG_SLOP_PX`].
    pub fn is_tap(&self) -> bool {
        self.drag.is_some_and(|session| !session.moved)
    }

    pub fn click(&mut self, track: &TrackGeometry, now_ms: f64) -> Option<ToggleOutcome> {
        if self.drag.is_some() {
            return None;
        }
        if let Some(until) = self.suppress_click_until_ms.take() {
            if now_ms <= until {
                return None;
            }
        }
        Some(self.settle(self.state.flipped(), track))
    }

    pub fn drag_start(&mut self, pointer_x: f64, track: &TrackGeometry) {
        let offset = track.rest_offset(self.state);
        self.drag = Some(DragSession {
            start_x: pointer_x,
            start_offset: offset,
            offset,
            moved: false,
        });
    }

    /// Follows the pointer horizontally. Returns the clamped thumb offset.
    pub fn drag_move(&mut self, pointer_x: f64, track: &TrackGeometry) -> Option<f64> {
        let session = self.drag.as_mut()?;
        let delta = pointer_x - session.start_x;
        if delta.abs() > DRAG_SLOP_PX {
            session.moved = true;
        }
        session.offset = track.clamp_offset(session.start_offset + delta);
        Some(session.offset)
    }

    pub fn drag_release(&mut self, track: &TrackGeometry, now_ms: f64) -> Option<ToggleOutcome> {
        let session = self.drag.take()?;
        self.suppress_click_until_ms = Some(now_ms + CLICK_SUPPRESS_MS);
        let next = if track.thumb_center(session.offset) > track.center() {
            ToggleState::On
        } else {
            ToggleState::Off
        };
        Some(self.settle(next, track))
    }

    /// Abandons a drag without changing state. Returns the rest offset to snap back to.
    pub fn cancel_drag(&mut self, track: &TrackGeometry) -> Option<f64> {
        self.drag.take()?;
        Some(track.rest_offset(self.state))
    }

    fn settle(&mut self, next: ToggleState, track: &TrackGeometry) -> ToggleOutcome {
        let changed = next != self.state;
        self.state = next;
        ToggleOutcome {
            state: next,
            thumb_offset: track.rest_offset(next),
            changed,
        }
    }
}

/// Switch bound to the persisted `darkMode` flag.
pub struct DarkModeToggle<S: PreferenceStore> {
    switch: ToggleSwitch,
    store: S,
}

impl<S: PreferenceStore> DarkModeToggle<S> {
    pub fn load(store: S) -> Self {
        let state = load_dark_mode(&store);
        Self {
            switch: ToggleSwitch::new(state),
            store,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.switch.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.switch.is_dragging()
    }

    pub fn is_tap(&self) -> bool {
        self.switch.is_tap()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn click(&mut self, track: &TrackGeometry, now_ms: f64) -> Option<ToggleOutcome> {
        let outcome = self.switch.click(track, now_ms)?;
        self.persist(&outcome);
        Some(outcome)
    }

    pub fn drag_start(&mut self, pointer_x: f64, track: &TrackGeometry) {
        self.switch.drag_start(pointer_x, track);
    }

    pub fn drag_move(&mut self, pointer_x: f64, track: &TrackGeometry) -> Option<f64> {
        self.switch.drag_move(pointer_x, track)
    }

    pub fn drag_release(&mut self, track: &TrackGeometry, now_ms: f64) -> Option<ToggleOutcome> {
        let outcome = self.switch.drag_release(track, now_ms)?;
        self.persist(&outcome);
        Some(outcome)
    }

    pub fn cancel_drag(&mut self, track: &TrackGeometry) -> Option<f64> {
        self.switch.cancel_drag(track)
    }

    fn persist(&mut self, outcome: &ToggleOutcome) {
        if !outcome.changed {
            return;
        }
        // Store implementations report their own failures.
        let _ = save_dark_mode(&mut self.store, outcome.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackGeometry {
        TrackGeometry::new(100.0, 41.0)
    }

    #[test]
    fn stored_values_map_to_states() {
        assert_eq!(ToggleState::from_stored(Some("true")), ToggleState::On);
        assert_eq!(ToggleState::from_stored(Some("false")), ToggleState::Off);
        assert_eq!(ToggleState::from_stored(Some("TRUE ")), ToggleState::Off);
        assert_eq!(ToggleState::from_stored(None), ToggleState::Off);
    }

    #[test]
    fn track_offsets() {
        let track = track();
        assert_eq!(track.max_offset(), 21.0);
        assert_eq!(track.rest_offset(ToggleState::On), 21.0);
        assert_eq!(track.rest_offset(ToggleState::Off), 0.0);
        assert_eq!(track.clamp_offset(-5.0), 0.0);
        assert_eq!(track.clamp_offset(99.0), 21.0);
        assert_eq!(TrackGeometry::new(0.0, 10.0).max_offset(), 0.0);
    }

    #[test]
    fn drag_clamps_to_track() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        switch.drag_start(110.0, &track);
        assert!(switch.is_dragging());
        assert_eq!(switch.drag_move(200.0, &track), Some(21.0));
        assert_eq!(switch.drag_move(0.0, &track), Some(0.0));
        assert_eq!(switch.drag_move(118.0, &track), Some(8.0));
        assert_eq!(switch.state(), ToggleState::Off);
    }

    #[test]
    fn drag_from_on_starts_at_right_rest() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::On);
        switch.drag_start(130.0, &track);
        assert_eq!(switch.drag_offset(), Some(21.0));
        assert_eq!(switch.drag_move(120.0, &track), Some(11.0));
        let outcome = switch.drag_release(&track, 0.0).unwrap();
        assert_eq!(outcome.state, ToggleState::Off);
        assert_eq!(outcome.thumb_offset, 0.0);
        assert!(outcome.changed);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        assert_eq!(switch.drag_move(50.0, &track()), None);
        assert_eq!(switch.drag_release(&track(), 0.0), None);
    }

    #[test]
    fn short_drag_is_a_tap_until_slop_is_exceeded() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        assert!(!switch.is_tap());
        switch.drag_start(110.0, &track);
        assert!(switch.is_tap());
        switch.drag_move(113.0, &track);
        assert!(switch.is_tap());
        switch.drag_move(110.0 + DRAG_SLOP_PX + 1.0, &track);
        assert!(!switch.is_tap());
    }

    #[test]
    fn short_release_is_decided_by_thumb_position() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        switch.drag_start(105.0, &track);
        switch.drag_move(108.0, &track);
        let outcome = switch.drag_release(&track, 1000.0).unwrap();
        assert_eq!(outcome.state, ToggleState::Off);
        assert_eq!(outcome.thumb_offset, 0.0);
        assert!(!outcome.changed);

        let mut switch = ToggleSwitch::new(ToggleState::On);
        switch.drag_start(125.0, &track);
        let outcome = switch.drag_release(&track, 1000.0).unwrap();
        assert_eq!(outcome.state, ToggleState::On);
        assert!(!outcome.changed);
    }

    #[test]
    fn click_right_after_release_is_swallowed() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        switch.drag_start(110.0, &track);
        switch.drag_move(140.0, &track);
        switch.drag_release(&track, 1000.0).unwrap();
        assert_eq!(switch.state(), ToggleState::On);
        assert_eq!(switch.click(&track, 1001.0), None);
        assert_eq!(switch.state(), ToggleState::On);
        let later = switch.click(&track, 5000.0).unwrap();
        assert_eq!(later.state, ToggleState::Off);
    }

    #[test]
    fn stale_suppression_does_not_eat_later_click() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        switch.drag_start(110.0, &track);
        switch.drag_move(140.0, &track);
        switch.drag_release(&track, 1000.0);
        let outcome = switch.click(&track, 1000.0 + CLICK_SUPPRESS_MS + 1.0).unwrap();
        assert_eq!(outcome.state, ToggleState::Off);
    }

    #[test]
    fn click_during_drag_is_ignored() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::Off);
        switch.drag_start(110.0, &track);
        assert_eq!(switch.click(&track, 0.0), None);
    }

    #[test]
    fn cancel_snaps_back_without_change() {
        let track = track();
        let mut switch = ToggleSwitch::new(ToggleState::On);
        switch.drag_start(130.0, &track);
        switch.drag_move(90.0, &track);
        assert_eq!(switch.cancel_drag(&track), Some(21.0));
        assert_eq!(switch.state(), ToggleState::On);
        assert!(!switch.is_dragging());
    }
}
