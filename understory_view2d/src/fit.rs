// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::ViewTransform;

/// Computes the steady transform that fits `content` entirely inside `viewport`.
///
/// The zoom is the smaller of the two axis ratios, so one axis of the content
/// exactly fills the viewport and the other is letterboxed. The pan is zero,
/// which centers the content's logical origin in the viewport.
///
/// Returns `None` when any dimension of either size is zero, negative or NaN;
/// callers should then leave their current transform untouched.
#[must_use]
pub fn zoom_to_fit(content: Size, viewport: Size) -> Option<ViewTransform> {
    if !has_area(content) || !has_area(viewport) {
        return None;
    }
    let horizontal = viewport.width / content.width;
    let vertical = viewport.height / content.height;
    Some(ViewTransform::new(horizontal.min(vertical), Vec2::ZERO))
}

/// Returns the on‑screen size of `content` after [`zoom_to_fit`].
///
/// `None` under the same conditions as [`zoom_to_fit`].
#[must_use]
pub fn fitted_size(content: Size, viewport: Size) -> Option<Size> {
    zoom_to_fit(content, viewport).map(|fit| content * fit.zoom)
}

fn has_area(size: Size) -> bool {
    // Written so NaN fails the check too.
    size.width > 0.0 && size.height > 0.0
}
