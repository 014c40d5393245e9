// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture phase tracking for continuous gestures (pan, pinch‑zoom, rotate).
//!
//! Platform gesture recognizers report a *cumulative* value relative to the
//! start of the gesture: a total translation, a total scale ratio, and so on.
//! [`GestureTracker`] turns the stream of [`GesturePhase`]s for one gesture
//! kind into [`GestureTransition`]s that tell the caller whether to update its
//! transient state, commit it, or throw it away.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::gesture::{GesturePhase, GestureTracker, GestureTransition};
//!
//! let mut zoom = GestureTracker::<f64>::new();
//!
//! assert_eq!(zoom.handle(GesturePhase::Began(1.0)), GestureTransition::Update(1.0));
//! assert_eq!(zoom.handle(GesturePhase::Changed(1.5)), GestureTransition::Update(1.5));
//! // Each update replaces the previous value; only the final one is committed.
//! assert_eq!(zoom.handle(GesturePhase::Ended(2.0)), GestureTransition::Commit(2.0));
//! assert!(!zoom.is_active());
//! ```

/// One phase of a continuous gesture, carrying the cumulative value since it began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GesturePhase<T> {
    /// The gesture was recognized.
    Began(T),
    /// The gesture moved; the value is cumulative, not incremental.
    Changed(T),
    /// The gesture finished normally with its final cumulative value.
    Ended(T),
    /// The gesture was interrupted (for example by a system event).
    Cancelled,
}

/// What the owner of a gesture's transient state should do after a phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureTransition<T> {
    /// Replace the in‑flight value.
    Update(T),
    /// Apply the final value to persistent state, then clear the in‑flight value.
    Commit(T),
    /// Clear the in‑flight value without applying it.
    Reset,
    /// Nothing to do; the phase did not apply in the current state.
    Ignored,
}

/// Lifecycle state of a [`GestureTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureStatus<T> {
    /// No gesture in progress. Also the state after an end or cancel.
    #[default]
    Idle,
    /// A gesture is in progress with the given latest cumulative value.
    Active(T),
}

/// Tracks the `Idle → Active → Idle` lifecycle of one gesture kind.
///
/// Independent gesture kinds (for example pan and zoom) each get their own
/// tracker and may be active at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureTracker<T> {
    status: GestureStatus<T>,
}

impl<T: Copy> GestureTracker<T> {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: GestureStatus::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> GestureStatus<T> {
        self.status
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, GestureStatus::Active(_))
    }

    /// Latest cumulative value of the active gesture, if any.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match self.status {
            GestureStatus::Active(value) => Some(value),
            GestureStatus::Idle => None,
        }
    }

    /// Feeds one phase and returns what the caller should do with it.
    ///
    /// - `Began` always (re)starts the gesture.
    /// - `Changed` while idle starts the gesture implicitly; some recognizers
    ///   only report changes.
    /// - `Ended` and `Cancelled` while idle are ignored so a stray end never
    ///   commits anything.
    pub fn handle(&mut self, phase: GesturePhase<T>) -> GestureTransition<T> {
        match (phase, self.status) {
            (GesturePhase::Began(value) | GesturePhase::Changed(value), _) => {
                self.status = GestureStatus::Active(value);
                GestureTransition::Update(value)
            }
            (GesturePhase::Ended(value), GestureStatus::Active(_)) => {
                self.status = GestureStatus::Idle;
                GestureTransition::Commit(value)
            }
            (GesturePhase::Cancelled, GestureStatus::Active(_)) => {
                self.status = GestureStatus::Idle;
                GestureTransition::Reset
            }
            (GesturePhase::Ended(_) | GesturePhase::Cancelled, GestureStatus::Idle) => {
                GestureTransition::Ignored
            }
        }
    }

    /// Abandons any active gesture, as if it had been cancelled.
    ///
    /// Returns `true` if a gesture was active.
    pub fn reset(&mut self) -> bool {
        let was_active = self.is_active();
        self.status = GestureStatus::Idle;
        was_active
    }
}
