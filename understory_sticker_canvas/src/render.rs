// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values handed to the renderer.
//!
//! The canvas never draws. It exposes where things go on screen for the
//! current effective transform, and the host's renderer does the rest.

use core::iter::FusedIterator;
use core::slice;

use kurbo::{Point, Rect, Vec2};
use understory_view2d::CoordinateMapper;

use crate::background::BackgroundImage;
use crate::document::{ItemId, PlacedItem};

/// Screen placement of one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement<'a> {
    /// The item's id.
    pub id: ItemId,
    /// The glyph to draw.
    pub symbol: &'a str,
    /// Center of the glyph in screen coordinates.
    pub position: Point,
    /// Font size after zoom.
    pub font_size: f64,
}

/// Screen placement of the background image.
///
/// The image is centered in the viewport, scaled by `zoom`, then shifted
/// by `offset` pixels. `rect` is the resulting screen rectangle.
#[derive(Debug)]
pub struct BackgroundPlacement<'a, B> {
    /// The loaded image.
    pub image: &'a B,
    /// Effective zoom to draw the image at.
    pub zoom: f64,
    /// Effective pan in screen pixels.
    pub offset: Vec2,
    /// Where the scaled image lands on screen.
    pub rect: Rect,
}

impl<'a, B: BackgroundImage> BackgroundPlacement<'a, B> {
    pub(crate) fn new(image: &'a B, mapper: &CoordinateMapper) -> Self {
        let transform = mapper.transform();
        let center = mapper.to_screen(Point::ORIGIN);
        Self {
            image,
            zoom: transform.zoom,
            offset: transform.pan,
            rect: Rect::from_center_size(center, image.size() * transform.zoom),
        }
    }
}

/// Iterator over [`ItemPlacement`]s in z‑order (back to front).
#[derive(Clone, Debug)]
pub struct ItemPlacements<'a> {
    items: slice::Iter<'a, PlacedItem>,
    mapper: CoordinateMapper,
}

impl<'a> ItemPlacements<'a> {
    pub(crate) fn new(items: &'a [PlacedItem], mapper: CoordinateMapper) -> Self {
        Self {
            items: items.iter(),
            mapper,
        }
    }

    fn place(&self, item: &'a PlacedItem) -> ItemPlacement<'a> {
        ItemPlacement {
            id: item.id(),
            symbol: item.symbol(),
            position: self.mapper.to_screen(item.location()),
            font_size: self.mapper.to_screen_length(item.font_size()),
        }
    }
}

impl<'a> Iterator for ItemPlacements<'a> {
    type Item = ItemPlacement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some(self.place(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl DoubleEndedIterator for ItemPlacements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.items.next_back()?;
        Some(self.place(item))
    }
}

impl ExactSizeIterator for ItemPlacements<'_> {}

impl FusedIterator for ItemPlacements<'_> {}
