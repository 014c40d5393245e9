// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag adapter: turn raw pointer positions into cumulative pan gesture phases.
//!
//! ## Usage
//!
//! 1) Call [`DragState::press`] when the pointer goes down.
//! 2) On each move event, call [`DragState::motion`] to get a
//!    [`GesturePhase::Changed`] with the total translation since the press.
//! 3) Finish with [`DragState::release`] (commit) or [`DragState::cancel`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//! use understory_event_state::gesture::GesturePhase;
//!
//! let mut drag = DragState::default();
//!
//! assert_eq!(drag.press(Point::new(10.0, 20.0)), GesturePhase::Began(Vec2::ZERO));
//! assert!(drag.is_dragging());
//!
//! // The translation is relative to the press position, not the last move.
//! drag.motion(Point::new(12.0, 20.0));
//! let phase = drag.motion(Point::new(15.0, 25.0));
//! assert_eq!(phase, Some(GesturePhase::Changed(Vec2::new(5.0, 5.0))));
//!
//! assert_eq!(
//!     drag.release(Point::new(18.0, 25.0)),
//!     Some(GesturePhase::Ended(Vec2::new(8.0, 5.0)))
//! );
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::gesture::GesturePhase;

/// Tracks a pointer drag and reports cumulative translation.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Starts a new drag at `pos`, abandoning any drag in progress.
    pub fn press(&mut self, pos: Point) -> GesturePhase<Vec2> {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        GesturePhase::Began(Vec2::ZERO)
    }

    /// Records a pointer move. Returns `None` when no drag is active.
    pub fn motion(&mut self, pos: Point) -> Option<GesturePhase<Vec2>> {
        let start = self.start_pos?;
        self.last_pos = Some(pos);
        Some(GesturePhase::Changed(pos - start))
    }

    /// Ends the drag at `pos`. Returns `None` when no drag is active.
    pub fn release(&mut self, pos: Point) -> Option<GesturePhase<Vec2>> {
        let start = self.start_pos?;
        self.end();
        Some(GesturePhase::Ended(pos - start))
    }

    /// Cancels the drag. Returns `None` when no drag is active.
    pub fn cancel(&mut self) -> Option<GesturePhase<Vec2>> {
        self.start_pos?;
        self.end();
        Some(GesturePhase::Cancelled)
    }

    /// Total translation from the start position to the last recorded position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.total_offset(), None);
    }

    #[test]
    fn press_begins_with_zero_translation() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        assert_eq!(drag.press(start), GesturePhase::Began(Vec2::ZERO));
        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
    }

    #[test]
    fn motion_is_cumulative_from_press() {
        let mut drag = DragState::default();
        drag.press(Point::new(0.0, 0.0));

        assert_eq!(
            drag.motion(Point::new(5.0, 3.0)),
            Some(GesturePhase::Changed(Vec2::new(5.0, 3.0)))
        );
        assert_eq!(
            drag.motion(Point::new(8.0, 7.0)),
            Some(GesturePhase::Changed(Vec2::new(8.0, 7.0)))
        );
        assert_eq!(drag.total_offset(), Some(Vec2::new(8.0, 7.0)));
    }

    #[test]
    fn motion_without_press_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.motion(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn release_ends_with_final_translation() {
        let mut drag = DragState::default();
        drag.press(Point::new(100.0, 100.0));
        drag.motion(Point::new(90.0, 85.0));

        assert_eq!(
            drag.release(Point::new(80.0, 80.0)),
            Some(GesturePhase::Ended(Vec2::new(-20.0, -20.0)))
        );
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn cancel_only_reports_when_dragging() {
        let mut drag = DragState::default();
        assert_eq!(drag.cancel(), None);

        drag.press(Point::new(1.0, 1.0));
        assert_eq!(drag.cancel(), Some(GesturePhase::Cancelled));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn press_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.press(Point::new(0.0, 0.0));
        drag.motion(Point::new(10.0, 10.0));

        drag.press(Point::new(50.0, 60.0));
        assert_eq!(
            drag.motion(Point::new(55.0, 65.0)),
            Some(GesturePhase::Changed(Vec2::new(5.0, 5.0)))
        );
    }
}
