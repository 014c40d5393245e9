// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background image handles and load bookkeeping.
//!
//! Loading is asynchronous and owned by the host: the canvas only records
//! which source is wanted, and the host reports back with
//! [`Canvas::on_background_loaded`](crate::Canvas::on_background_loaded) or
//! [`Canvas::on_background_load_failed`](crate::Canvas::on_background_load_failed),
//! naming the source the result belongs to. Results for any other source are
//! stale and are dropped.

use kurbo::Size;

/// A decoded background image, opaque to the canvas apart from its size.
pub trait BackgroundImage {
    /// Natural size of the image content, in document units.
    fn size(&self) -> Size;
}

impl BackgroundImage for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Where the background is in its load lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundStatus {
    /// No background has been requested.
    Empty,
    /// A source is set but its image has not arrived yet.
    Loading,
    /// The image for the current source is available.
    Loaded,
    /// Loading the current source failed. The source stays set.
    Failed,
}

/// What happened to a load completion reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image was stored as the background.
    ///
    /// `fitted` is `false` when zoom‑to‑fit was not applicable (for example
    /// because the viewport has no area yet); the steady transform was then
    /// left alone.
    Applied {
        /// Whether zoom‑to‑fit replaced the steady transform.
        fitted: bool,
    },
    /// The failure was recorded against the current source.
    Failed,
    /// The completion was for a source that is no longer current and was discarded.
    Stale,
}
