// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Uniform zoom plus a screen‑space pan offset.
///
/// The transform maps document space (centered on the document's logical
/// origin) into a view whose origin is the top‑left corner of the viewport:
/// document points are scaled by `zoom`, moved to the viewport center, then
/// shifted by `pan` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform zoom factor. Expected to be finite and `> 0`.
    pub zoom: f64,
    /// Pan offset in screen pixels, applied after zoom.
    pub pan: Vec2,
}

impl ViewTransform {
    /// Unit zoom, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };

    /// Creates a transform from a zoom factor and a screen‑space pan.
    #[must_use]
    pub const fn new(zoom: f64, pan: Vec2) -> Self {
        Self { zoom, pan }
    }

    /// Builds the effective transform from a steady document‑space pan and zoom.
    ///
    /// `document_pan` is expressed in document units; the returned `pan` is
    /// that offset multiplied by `zoom`, i.e. in screen pixels.
    #[must_use]
    pub fn from_document_pan(zoom: f64, document_pan: Vec2) -> Self {
        Self {
            zoom,
            pan: document_pan * zoom,
        }
    }

    /// Returns `true` if the zoom is finite and strictly positive and the pan is finite.
    ///
    /// Only valid transforms are invertible.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.zoom.is_finite() && self.zoom > 0.0 && self.pan.is_finite()
    }

    /// Affine mapping document coordinates into screen coordinates for `viewport`.
    #[must_use]
    pub fn document_to_screen(&self, viewport: Size) -> Affine {
        Affine::translate(viewport.to_vec2() * 0.5 + self.pan) * Affine::scale(self.zoom)
    }

    /// Affine mapping screen coordinates into document coordinates for `viewport`.
    #[must_use]
    pub fn screen_to_document(&self, viewport: Size) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-(viewport.to_vec2() * 0.5 + self.pan))
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Maps points between screen space and document space.
///
/// A mapper is a snapshot: it pairs a viewport size with the transform in
/// effect when it was created and holds no other state. Both directions are
/// exact inverses of each other (up to floating‑point rounding) as long as
/// the transform [is valid](ViewTransform::is_valid).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    viewport: Size,
    transform: ViewTransform,
}

impl CoordinateMapper {
    /// Creates a mapper for the given viewport size and effective transform.
    #[must_use]
    pub const fn new(viewport: Size, transform: ViewTransform) -> Self {
        Self {
            viewport,
            transform,
        }
    }

    /// The viewport size this mapper was built for.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The transform this mapper applies.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Converts a screen point into document space.
    ///
    /// The point is made relative to the viewport center, then the pan is
    /// removed, then the zoom.
    #[must_use]
    pub fn to_document(&self, screen: Point) -> Point {
        let centered = screen.to_vec2() - self.viewport.to_vec2() * 0.5;
        let unpanned = centered - self.transform.pan;
        (unpanned / self.transform.zoom).to_point()
    }

    /// Converts a document point into screen space.
    ///
    /// Zoom is applied first, then the point is moved to the viewport center,
    /// then panned.
    #[must_use]
    pub fn to_screen(&self, document: Point) -> Point {
        let zoomed = document.to_vec2() * self.transform.zoom;
        let recentered = zoomed + self.viewport.to_vec2() * 0.5;
        (recentered + self.transform.pan).to_point()
    }

    /// Scales a document‑space length (for example a font size) into screen pixels.
    #[must_use]
    pub fn to_screen_length(&self, length: f64) -> f64 {
        length * self.transform.zoom
    }
}
