// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The durable document: background, steady pan/zoom and placed items.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::background::BackgroundStatus;
use crate::error::{CanvasError, check_font_size, check_location, check_pan, check_zoom};

/// Identifier of a [`PlacedItem`], unique within its document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(u64);

impl ItemId {
    /// Raw numeric value of the id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A symbol placed on the document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedItem {
    id: ItemId,
    symbol: String,
    location: Point,
    font_size: f64,
}

impl PlacedItem {
    /// The item's id, assigned when it was added.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The glyph or short string shown for this item.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Location in document space, relative to the document's logical center.
    ///
    /// This does not depend on the viewport size, so it stays valid across resizes.
    #[must_use]
    pub fn location(&self) -> Point {
        self.location
    }

    /// Nominal font size before zoom is applied.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

/// Persistent canvas state.
///
/// The document is the single source of truth for the steady transform and
/// the placed items. Its fields are read through accessors and changed only
/// through the named operations below, each of which either succeeds or
/// leaves the document untouched.
///
/// The background is tracked in two parts: the *source* that was requested
/// and the loaded image `B` for it. The two are briefly out of step while a
/// load is in flight.
#[derive(Clone, Debug)]
pub struct Document<B> {
    background_source: Option<String>,
    background: Option<B>,
    background_failed: bool,
    steady_zoom: f64,
    steady_pan: Vec2,
    items: Vec<PlacedItem>,
    next_id: u64,
}

impl<B> Document<B> {
    /// Creates an empty document with the given steady zoom and no pan.
    pub fn new(steady_zoom: f64) -> Result<Self, CanvasError> {
        Ok(Self {
            background_source: None,
            background: None,
            background_failed: false,
            steady_zoom: check_zoom(steady_zoom)?,
            steady_pan: Vec2::ZERO,
            items: Vec::new(),
            next_id: 0,
        })
    }

    /// The requested background source, if any.
    #[must_use]
    pub fn background_source(&self) -> Option<&str> {
        self.background_source.as_deref()
    }

    /// The loaded background image, if any.
    #[must_use]
    pub fn background(&self) -> Option<&B> {
        self.background.as_ref()
    }

    /// Where the background is in its load lifecycle.
    #[must_use]
    pub fn background_status(&self) -> BackgroundStatus {
        match (&self.background_source, &self.background) {
            (_, Some(_)) => BackgroundStatus::Loaded,
            (Some(_), None) if self.background_failed => BackgroundStatus::Failed,
            (Some(_), None) => BackgroundStatus::Loading,
            (None, None) => BackgroundStatus::Empty,
        }
    }

    /// Returns `true` while a requested background has neither loaded nor failed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.background_status() == BackgroundStatus::Loading
    }

    /// Persisted zoom in effect when no gesture is active. Always `> 0`.
    #[must_use]
    pub fn steady_zoom(&self) -> f64 {
        self.steady_zoom
    }

    /// Persisted pan offset in document units.
    #[must_use]
    pub fn steady_pan(&self) -> Vec2 {
        self.steady_pan
    }

    /// Placed items in z‑order, front‑most last.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&PlacedItem> {
        // Ids are handed out in increasing order and items are only appended.
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|index| &self.items[index])
    }

    /// Requests a new background source.
    ///
    /// Returns `true` if the host should start loading `source`. Changing the
    /// source drops the previously loaded image. Requesting the current source
    /// again is a no‑op unless its last load failed, in which case it is retried.
    pub fn set_background_source(&mut self, source: Option<String>) -> bool {
        if source == self.background_source && !self.background_failed {
            return false;
        }
        tracing::debug!(source = ?source, "background source changed");
        let wants_load = source.is_some();
        self.background_source = source;
        self.background = None;
        self.background_failed = false;
        wants_load
    }

    /// Stores (or clears) the loaded background image.
    pub fn set_background_ref(&mut self, image: Option<B>) {
        self.background_failed = false;
        self.background = image;
    }

    /// Records that loading the current source failed.
    pub fn mark_background_failed(&mut self) {
        self.background = None;
        self.background_failed = self.background_source.is_some();
    }

    /// Appends a new item on top of the others and returns its id.
    pub fn add_item(
        &mut self,
        symbol: impl Into<String>,
        location: Point,
        font_size: f64,
    ) -> Result<ItemId, CanvasError> {
        let location = check_location(location)?;
        let font_size = check_font_size(font_size)?;
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let symbol = symbol.into();
        tracing::debug!(id = id.0, %symbol, x = location.x, y = location.y, "item placed");
        self.items.push(PlacedItem {
            id,
            symbol,
            location,
            font_size,
        });
        Ok(id)
    }

    /// Multiplies the steady zoom by `factor`.
    pub fn commit_zoom(&mut self, factor: f64) -> Result<(), CanvasError> {
        check_zoom(factor)?;
        let zoom = check_zoom(self.steady_zoom * factor)?;
        tracing::debug!(factor, zoom, "zoom committed");
        self.steady_zoom = zoom;
        Ok(())
    }

    /// Adds `delta` (document units) to the steady pan.
    pub fn commit_pan(&mut self, delta: Vec2) -> Result<(), CanvasError> {
        let pan = self.steady_pan + delta;
        check_pan(delta)?;
        if !pan.is_finite() {
            return Err(CanvasError::InvalidPan(delta));
        }
        tracing::debug!(dx = delta.x, dy = delta.y, "pan committed");
        self.steady_pan = pan;
        Ok(())
    }

    /// Clears the steady pan and sets the steady zoom to `zoom`.
    pub fn reset_steady(&mut self, zoom: f64) -> Result<(), CanvasError> {
        self.steady_zoom = check_zoom(zoom)?;
        self.steady_pan = Vec2::ZERO;
        tracing::debug!(zoom, "steady transform reset");
        Ok(())
    }
}
