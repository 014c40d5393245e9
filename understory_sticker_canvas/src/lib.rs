// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sticker_canvas --heading-base-level=0

//! Understory Sticker Canvas: symbols placed over a background image, with
//! pan, pinch‑zoom, double‑tap‑to‑fit and drag‑and‑drop.
//!
//! This crate is the headless core of a sticker board. It owns:
//! - The durable [`Document`]: background source and image, steady pan/zoom,
//!   and placed items in z‑order.
//! - The [`GestureCompositor`], which layers in‑flight pan/zoom deltas on top
//!   of the steady transform and commits them once, when a gesture ends.
//! - Drop routing: URLs replace the background, text becomes a new item at
//!   the drop point (see [`route`] and [`PendingDrop`]).
//! - The load boundary for asynchronously decoded background images.
//!
//! It does **not** decode images, draw anything, or persist documents.
//! Hosts are expected to:
//! - Deliver gestures as [`GestureEvent`]s carrying cumulative values (the
//!   `understory_event_state` drag/pinch adapters can produce them from raw
//!   pointer input).
//! - Start an image load whenever [`Canvas::set_background_source`] returns
//!   `true` or a drop reports [`DropOutcome::BackgroundReplaced`], and report
//!   back with the source the result belongs to.
//! - Draw from [`Canvas::item_placements`] and [`Canvas::background_placement`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_event_state::gesture::GesturePhase;
//! use understory_sticker_canvas::{Canvas, CanvasConfig, DropPayload, GestureEvent};
//!
//! // `Size` doubles as a trivial image handle that only knows its size.
//! let mut canvas = Canvas::<Size>::new(CanvasConfig::default()).unwrap();
//! canvas.set_viewport_size(Size::new(400.0, 800.0));
//!
//! // The host loads the image, then reports back; the view zooms to fit.
//! assert!(canvas.set_background_source("https://example.com/bg.png"));
//! canvas.on_background_loaded(Size::new(200.0, 100.0), "https://example.com/bg.png");
//! assert_eq!(canvas.document().steady_zoom(), 2.0);
//!
//! // Dropping text at the viewport center places it at the document origin.
//! let outcome = canvas.handle_drop(&[DropPayload::text("😀")], Point::new(200.0, 400.0));
//! assert!(outcome.is_handled());
//! assert_eq!(canvas.document().items()[0].location(), Point::ORIGIN);
//!
//! // A 40px drag at zoom 2 moves the document by 20 units.
//! canvas.handle_gesture(GestureEvent::Pan(GesturePhase::Began(Vec2::ZERO))).unwrap();
//! canvas.handle_gesture(GestureEvent::Pan(GesturePhase::Ended(Vec2::new(40.0, 0.0)))).unwrap();
//! assert_eq!(canvas.document().steady_pan(), Vec2::new(20.0, 0.0));
//! ```
//!
//! ## Logging
//!
//! State commits are reported with `tracing` at `debug` level, discarded
//! input (stale loads, ignored phases, unhandled drops) at `trace` level.
//! The crate never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod background;
mod canvas;
mod compositor;
mod config;
mod document;
mod drop;
mod error;
mod render;

pub use background::{BackgroundImage, BackgroundStatus, LoadOutcome};
pub use canvas::Canvas;
pub use compositor::{GestureCompositor, GestureEvent, GestureState};
pub use config::{CanvasConfig, DEFAULT_FONT_SIZE};
pub use document::{Document, ItemId, PlacedItem};
pub use drop::{DropAction, DropOutcome, DropPayload, PayloadKind, PendingDrop, route};
pub use error::CanvasError;
pub use render::{BackgroundPlacement, ItemPlacement, ItemPlacements};
