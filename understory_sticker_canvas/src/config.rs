// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{CanvasError, check_font_size, check_zoom};

/// Font size given to symbols placed by a text drop, before zoom.
pub const DEFAULT_FONT_SIZE: f64 = 40.0;

/// Tunables for a [`Canvas`](crate::Canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Base font size of items placed by dropping text.
    pub default_font_size: f64,
    /// Steady zoom of a freshly created document.
    pub initial_zoom: f64,
}

impl CanvasConfig {
    /// Default configuration: 40pt symbols, unit zoom.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            initial_zoom: 1.0,
        }
    }

    /// Sets the base font size used for dropped text.
    #[must_use]
    pub const fn with_default_font_size(mut self, size: f64) -> Self {
        self.default_font_size = size;
        self
    }

    /// Sets the steady zoom of a fresh document.
    #[must_use]
    pub const fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Checks that both values are finite and positive.
    pub fn validate(&self) -> Result<(), CanvasError> {
        check_font_size(self.default_font_size)?;
        check_zoom(self.initial_zoom)?;
        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new()
    }
}
