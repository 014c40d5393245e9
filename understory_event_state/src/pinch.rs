// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch adapter: turn two touch points into cumulative zoom gesture phases.
//!
//! The reported value is the ratio between the current finger distance and
//! the distance when the pinch began, which is what magnification gesture
//! recognizers report.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::gesture::GesturePhase;
//! use understory_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! let phase = pinch.touch_start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! assert_eq!(phase, Some(GesturePhase::Began(1.0)));
//!
//! let phase = pinch.touch_move(Point::new(0.0, 0.0), Point::new(150.0, 0.0));
//! assert_eq!(phase, Some(GesturePhase::Changed(1.5)));
//! ```

use kurbo::Point;

use crate::gesture::GesturePhase;

/// Finger spans below this many pixels are too noisy to derive a ratio from.
pub const MIN_PINCH_SPAN: f64 = 10.0;

/// Tracks a two‑finger pinch and reports the cumulative scale ratio.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchState {
    /// Distance between the fingers when the pinch began.
    pub initial_span: Option<f64>,
    /// Most recent ratio reported.
    pub last_ratio: Option<f64>,
}

impl PinchState {
    /// Starts a pinch from two touch points.
    ///
    /// Returns `None` (and stays idle) if the fingers are closer than
    /// [`MIN_PINCH_SPAN`].
    pub fn touch_start(&mut self, a: Point, b: Point) -> Option<GesturePhase<f64>> {
        let span = a.distance(b);
        if span.is_nan() || span < MIN_PINCH_SPAN {
            self.end();
            return None;
        }
        self.initial_span = Some(span);
        self.last_ratio = Some(1.0);
        Some(GesturePhase::Began(1.0))
    }

    /// Updates the pinch with the current touch points.
    pub fn touch_move(&mut self, a: Point, b: Point) -> Option<GesturePhase<f64>> {
        let ratio = a.distance(b) / self.initial_span?;
        self.last_ratio = Some(ratio);
        Some(GesturePhase::Changed(ratio))
    }

    /// Ends the pinch when a finger lifts, committing the last reported ratio.
    pub fn touch_end(&mut self) -> Option<GesturePhase<f64>> {
        let ratio = self.last_ratio?;
        self.initial_span?;
        self.end();
        Some(GesturePhase::Ended(ratio))
    }

    /// Cancels the pinch. Returns `None` when no pinch is active.
    pub fn touch_cancel(&mut self) -> Option<GesturePhase<f64>> {
        self.initial_span?;
        self.end();
        Some(GesturePhase::Cancelled)
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.initial_span.is_some()
    }

    fn end(&mut self) {
        self.initial_span = None;
        self.last_ratio = None;
    }
}
