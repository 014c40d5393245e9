// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Combines the document's steady transform with in‑flight gesture deltas.
//!
//! While a pan or pinch is in progress its delta lives only here, in a
//! [`GestureState`]. Reading the effective transform has no side effects;
//! the document is written exactly once per gesture, when it ends.

use kurbo::Vec2;
use understory_event_state::gesture::{GesturePhase, GestureTracker, GestureTransition};
use understory_view2d::ViewTransform;

use crate::document::Document;
use crate::error::{CanvasError, check_pan, check_zoom};

/// A tagged gesture event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Drag‑to‑pan; the value is the cumulative screen translation.
    Pan(GesturePhase<Vec2>),
    /// Pinch‑to‑zoom; the value is the cumulative scale ratio.
    Zoom(GesturePhase<f64>),
}

/// Transient deltas of the gestures in progress. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Multiplicative zoom on top of the steady zoom.
    pub in_flight_zoom: f64,
    /// Additive pan on top of the steady pan, in document units.
    pub in_flight_pan: Vec2,
}

impl GestureState {
    /// No gesture in progress.
    pub const IDLE: Self = Self {
        in_flight_zoom: 1.0,
        in_flight_pan: Vec2::ZERO,
    };
}

impl Default for GestureState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Per‑kind gesture trackers plus the transient [`GestureState`].
///
/// Pan and zoom are independent and may be active at the same time.
#[derive(Clone, Debug, Default)]
pub struct GestureCompositor {
    pan: GestureTracker<Vec2>,
    zoom: GestureTracker<f64>,
    state: GestureState,
}

impl GestureCompositor {
    /// Creates a compositor with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current in‑flight deltas.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while either gesture kind is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pan.is_active() || self.zoom.is_active()
    }

    /// Steady zoom times the in‑flight zoom factor.
    #[must_use]
    pub fn effective_zoom<B>(&self, document: &Document<B>) -> f64 {
        document.steady_zoom() * self.state.in_flight_zoom
    }

    /// The transform used for display and hit mapping right now.
    ///
    /// The pan is `(steady + in_flight) * effective_zoom`, i.e. screen pixels.
    #[must_use]
    pub fn effective_transform<B>(&self, document: &Document<B>) -> ViewTransform {
        ViewTransform::from_document_pan(
            self.effective_zoom(document),
            document.steady_pan() + self.state.in_flight_pan,
        )
    }

    /// Routes a tagged event to [`handle_pan`](Self::handle_pan) or
    /// [`handle_zoom`](Self::handle_zoom).
    pub fn handle<B>(
        &mut self,
        event: GestureEvent,
        document: &mut Document<B>,
    ) -> Result<(), CanvasError> {
        match event {
            GestureEvent::Pan(phase) => self.handle_pan(phase, document),
            GestureEvent::Zoom(phase) => self.handle_zoom(phase, document),
        }
    }

    /// Applies a pinch phase.
    ///
    /// Updates replace the in‑flight factor with the gesture's cumulative
    /// ratio. A non‑positive ratio is rejected: on update the previous
    /// in‑flight factor is kept, on end the gesture is dropped uncommitted.
    pub fn handle_zoom<B>(
        &mut self,
        phase: GesturePhase<f64>,
        document: &mut Document<B>,
    ) -> Result<(), CanvasError> {
        match self.zoom.handle(phase) {
            GestureTransition::Update(ratio) => {
                self.state.in_flight_zoom = check_zoom(ratio).inspect_err(|_| {
                    tracing::trace!(ratio, "rejected in-flight zoom");
                })?;
                Ok(())
            }
            GestureTransition::Commit(ratio) => {
                self.state.in_flight_zoom = 1.0;
                document.commit_zoom(ratio)
            }
            GestureTransition::Reset => {
                tracing::trace!("zoom gesture cancelled");
                self.state.in_flight_zoom = 1.0;
                Ok(())
            }
            GestureTransition::Ignored => {
                tracing::trace!(?phase, "zoom phase ignored");
                Ok(())
            }
        }
    }

    /// Applies a drag phase.
    ///
    /// The cumulative screen translation is divided by the current effective
    /// zoom so the in‑flight delta is in document units and stays correct if
    /// a pinch changes the zoom mid‑drag. A non‑finite translation is
    /// rejected: on update the previous in‑flight delta is kept, on end the
    /// gesture is dropped uncommitted.
    pub fn handle_pan<B>(
        &mut self,
        phase: GesturePhase<Vec2>,
        document: &mut Document<B>,
    ) -> Result<(), CanvasError> {
        match self.pan.handle(phase) {
            GestureTransition::Update(translation) => {
                let delta = translation / self.effective_zoom(document);
                self.state.in_flight_pan = check_pan(delta).inspect_err(|_| {
                    tracing::trace!(
                        dx = translation.x,
                        dy = translation.y,
                        "rejected in-flight pan"
                    );
                })?;
                Ok(())
            }
            GestureTransition::Commit(translation) => {
                let delta = translation / self.effective_zoom(document);
                self.state.in_flight_pan = Vec2::ZERO;
                document.commit_pan(delta)
            }
            GestureTransition::Reset => {
                tracing::trace!("pan gesture cancelled");
                self.state.in_flight_pan = Vec2::ZERO;
                Ok(())
            }
            GestureTransition::Ignored => {
                tracing::trace!(?phase, "pan phase ignored");
                Ok(())
            }
        }
    }

    /// Abandons all gestures in progress without committing anything.
    pub fn cancel_all(&mut self) {
        self.pan.reset();
        self.zoom.reset();
        self.state = GestureState::IDLE;
    }
}
