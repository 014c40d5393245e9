// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view2d --heading-base-level=0

//! Understory View 2D: centered pan/zoom transforms and coordinate mapping.
//!
//! This crate provides small, headless building blocks for canvases whose
//! document space is centered on a logical origin and viewed through a
//! resizable viewport. It focuses on:
//! - A uniform zoom + screen‑space pan transform ([`ViewTransform`]).
//! - Mapping points between screen and document space ([`CoordinateMapper`]).
//! - Computing a letterboxed zoom‑to‑fit transform ([`zoom_to_fit`]).
//!
//! It does **not** own any scene graph, gesture handling or rendering
//! backend. Callers are expected to:
//! - Keep their own persisted pan/zoom and combine it with any in‑flight
//!   gesture deltas before building a [`ViewTransform`].
//! - Build a fresh [`CoordinateMapper`] whenever the viewport size or the
//!   transform changes; mappers are cheap `Copy` snapshots.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_view2d::{CoordinateMapper, ViewTransform, zoom_to_fit};
//!
//! // A 200x100 image inside a 400x800 window.
//! let viewport = Size::new(400.0, 800.0);
//! let fit = zoom_to_fit(Size::new(200.0, 100.0), viewport).unwrap();
//! assert_eq!(fit.zoom, 2.0);
//!
//! // The viewport center is the document origin.
//! let mapper = CoordinateMapper::new(viewport, fit);
//! assert_eq!(mapper.to_document(Point::new(200.0, 400.0)), Point::ORIGIN);
//!
//! // Document‑space pan is scaled into screen pixels.
//! let panned = ViewTransform::from_document_pan(2.0, Vec2::new(20.0, 0.0));
//! assert_eq!(panned.pan, Vec2::new(40.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis‑aligned with a **uniform** zoom factor.
//! - Pan is stored in screen pixels on [`ViewTransform`]; document‑space
//!   pan is converted with [`ViewTransform::from_document_pan`].
//! - Zoom‑to‑fit never clamps; degenerate sizes yield `None` so that the
//!   caller keeps its previous state.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod transform;

pub use fit::{fitted_size, zoom_to_fit};
pub use transform::{CoordinateMapper, ViewTransform};
