// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};
use understory_view2d::{CoordinateMapper, ViewTransform, zoom_to_fit};

use crate::background::{BackgroundImage, LoadOutcome};
use crate::compositor::{GestureCompositor, GestureEvent, GestureState};
use crate::config::CanvasConfig;
use crate::document::{Document, ItemId};
use crate::drop::{DropAction, DropOutcome, DropPayload, PayloadKind, PendingDrop, route};
use crate::error::CanvasError;
use crate::render::{BackgroundPlacement, ItemPlacements};

/// A pannable, zoomable sticker canvas.
///
/// `Canvas` ties a [`Document`] to a viewport and the gestures acting on
/// it. All events are expected on one thread, in arrival order; every
/// method runs synchronously and returns promptly.
///
/// `B` is the host's decoded image type. It only needs to report its size.
#[derive(Clone, Debug)]
pub struct Canvas<B> {
    document: Document<B>,
    gestures: GestureCompositor,
    viewport: Size,
    config: CanvasConfig,
}

impl<B: BackgroundImage> Canvas<B> {
    /// Creates a canvas with an empty document and a zero‑sized viewport.
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        let document = Document::new(config.initial_zoom)?;
        Ok(Self::from_parts(document, config))
    }

    /// Creates a canvas over an existing document.
    pub fn with_document(document: Document<B>, config: CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self::from_parts(document, config))
    }

    fn from_parts(document: Document<B>, config: CanvasConfig) -> Self {
        Self {
            document,
            gestures: GestureCompositor::new(),
            viewport: Size::ZERO,
            config,
        }
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &Document<B> {
        &self.document
    }

    /// Consumes the canvas, abandoning any gesture in progress, and returns the document.
    #[must_use]
    pub fn into_document(self) -> Document<B> {
        self.document
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Current viewport size in screen pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Updates the viewport size.
    ///
    /// Item locations are viewport‑independent, so nothing moves in document
    /// space. The steady transform is kept as is; only a load completion or a
    /// double tap refits it.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// In‑flight gesture deltas.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    /// Steady transform combined with any in‑flight gesture.
    #[must_use]
    pub fn effective_transform(&self) -> ViewTransform {
        self.gestures.effective_transform(&self.document)
    }

    /// Screen/document mapper for the current viewport and effective transform.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.viewport, self.effective_transform())
    }

    /// Feeds a pan or zoom gesture event.
    ///
    /// Errors are reported for rejected zoom or pan values; the document is
    /// left unchanged in that case.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Result<(), CanvasError> {
        self.gestures.handle(event, &mut self.document)
    }

    /// Abandons all gestures in progress, for example when the window loses focus.
    pub fn cancel_gestures(&mut self) {
        self.gestures.cancel_all();
    }

    /// Double tap: fit the background into the whole viewport.
    ///
    /// The tap location is not used. Returns `true` if the steady transform
    /// was replaced.
    pub fn double_tap(&mut self, _screen_point: Point) -> bool {
        self.zoom_to_fit()
    }

    /// Fits the loaded background into the viewport.
    ///
    /// Returns `false`, leaving the steady transform untouched, when there is
    /// no loaded background or either size has no area.
    pub fn zoom_to_fit(&mut self) -> bool {
        let Some(content) = self.document.background().map(BackgroundImage::size) else {
            return false;
        };
        let Some(fit) = zoom_to_fit(content, self.viewport) else {
            tracing::trace!(?content, viewport = ?self.viewport, "zoom to fit not applicable");
            return false;
        };
        match self.document.reset_steady(fit.zoom) {
            Ok(()) => {
                tracing::debug!(zoom = fit.zoom, "zoomed to fit");
                true
            }
            Err(err) => {
                // Only reachable with absurd sizes whose ratio overflows.
                tracing::trace!(%err, "zoom to fit rejected");
                false
            }
        }
    }

    /// Requests a new background source.
    ///
    /// Returns `true` if the host should now start loading it and report
    /// back through [`on_background_loaded`](Self::on_background_loaded) or
    /// [`on_background_load_failed`](Self::on_background_load_failed).
    pub fn set_background_source(&mut self, source: impl Into<String>) -> bool {
        self.document.set_background_source(Some(source.into()))
    }

    /// Removes the background.
    pub fn clear_background(&mut self) {
        self.document.set_background_source(None);
    }

    /// Load completion from the host.
    ///
    /// Ignored unless `for_source` is the current background source. When
    /// applied, the image becomes the background and the view is zoomed to
    /// fit it.
    pub fn on_background_loaded(&mut self, image: B, for_source: &str) -> LoadOutcome {
        if !self.is_current_source(for_source) {
            tracing::trace!(for_source, "discarding stale background load");
            return LoadOutcome::Stale;
        }
        self.document.set_background_ref(Some(image));
        let fitted = self.zoom_to_fit();
        tracing::debug!(for_source, fitted, "background loaded");
        LoadOutcome::Applied { fitted }
    }

    /// Load failure from the host. Ignored unless `for_source` is current.
    pub fn on_background_load_failed(&mut self, for_source: &str) -> LoadOutcome {
        if !self.is_current_source(for_source) {
            tracing::trace!(for_source, "discarding stale background failure");
            return LoadOutcome::Stale;
        }
        tracing::debug!(for_source, "background load failed");
        self.document.mark_background_failed();
        LoadOutcome::Failed
    }

    fn is_current_source(&self, source: &str) -> bool {
        self.document.background_source() == Some(source)
    }

    /// Returns `true` while a requested background is still loading.
    ///
    /// Hosts typically show a progress indicator instead of the items meanwhile.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document.is_loading()
    }

    /// Handles a drop whose payloads are already resolved.
    ///
    /// When the outcome is [`DropOutcome::BackgroundReplaced`] the host
    /// should start loading the new background source.
    pub fn handle_drop(&mut self, payloads: &[DropPayload], screen_point: Point) -> DropOutcome {
        let location = self.mapper().to_document(screen_point);
        self.apply_drop(route(payloads), location)
    }

    /// Starts a drop whose payloads resolve later.
    ///
    /// The drop location is mapped into document space now, with the
    /// effective transform at drop time. Returns `None` if no payload kind
    /// is supported, in which case the drop is not handled.
    pub fn begin_drop(
        &mut self,
        kinds: impl IntoIterator<Item = PayloadKind>,
        screen_point: Point,
    ) -> Option<PendingDrop> {
        let location = self.mapper().to_document(screen_point);
        let pending = PendingDrop::new(kinds, location);
        if pending.is_none() {
            tracing::trace!("drop has no supported payload");
        }
        pending
    }

    /// Dispatches a pending drop using whatever payloads have resolved so far.
    ///
    /// Consumes the drop so it can only take effect once.
    pub fn dispatch_drop(&mut self, pending: PendingDrop) -> DropOutcome {
        self.apply_drop(pending.route(), pending.location())
    }

    fn apply_drop(&mut self, action: Option<DropAction<'_>>, location: Point) -> DropOutcome {
        match action {
            Some(DropAction::ReplaceBackground(url)) => {
                if self.document.set_background_source(Some(url.into())) {
                    DropOutcome::BackgroundReplaced
                } else {
                    tracing::trace!(url, "dropped background is already current");
                    DropOutcome::BackgroundUnchanged
                }
            }
            Some(DropAction::PlaceText(text)) => {
                match self.place(text, location, self.config.default_font_size) {
                    Ok(id) => DropOutcome::ItemPlaced(id),
                    Err(err) => {
                        tracing::trace!(%err, "dropped text not placed");
                        DropOutcome::NotHandled
                    }
                }
            }
            None => {
                tracing::trace!("drop not handled");
                DropOutcome::NotHandled
            }
        }
    }

    /// Places a symbol at a document‑space location.
    pub fn place(
        &mut self,
        symbol: impl Into<String>,
        location: Point,
        font_size: f64,
    ) -> Result<ItemId, CanvasError> {
        self.document.add_item(symbol, location, font_size)
    }

    /// Screen placements of all items, back to front.
    #[must_use]
    pub fn item_placements(&self) -> ItemPlacements<'_> {
        ItemPlacements::new(self.document.items(), self.mapper())
    }

    /// Screen placement of the background, if one is loaded.
    #[must_use]
    pub fn background_placement(&self) -> Option<BackgroundPlacement<'_, B>> {
        let mapper = self.mapper();
        self.document
            .background()
            .map(|image| BackgroundPlacement::new(image, &mapper))
    }
}
