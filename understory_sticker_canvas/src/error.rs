// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Error returned when an operation would break a canvas invariant.
///
/// State is never modified by an operation that returns an error.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// A zoom scale or factor was zero, negative or not finite.
    #[error("zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
    /// A pan delta was not finite.
    #[error("pan delta must be finite, got ({}, {})", .0.x, .0.y)]
    InvalidPan(Vec2),
    /// An item font size was zero, negative or not finite.
    #[error("font size must be finite and positive, got {0}")]
    InvalidFontSize(f64),
    /// An item location was not finite.
    #[error("item location must be finite, got ({}, {})", .0.x, .0.y)]
    InvalidLocation(Point),
}

pub(crate) fn check_zoom(zoom: f64) -> Result<f64, CanvasError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom)
    } else {
        Err(CanvasError::InvalidZoom(zoom))
    }
}

pub(crate) fn check_pan(delta: Vec2) -> Result<Vec2, CanvasError> {
    if delta.is_finite() {
        Ok(delta)
    } else {
        Err(CanvasError::InvalidPan(delta))
    }
}

pub(crate) fn check_location(location: Point) -> Result<Point, CanvasError> {
    if location.is_finite() {
        Ok(location)
    } else {
        Err(CanvasError::InvalidLocation(location))
    }
}

pub(crate) fn check_font_size(size: f64) -> Result<f64, CanvasError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(CanvasError::InvalidFontSize(size))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Vec2};

    use super::{CanvasError, check_font_size, check_location, check_pan, check_zoom};

    #[test]
    fn checks_accept_only_finite_positive_values() {
        assert_eq!(check_zoom(0.5), Ok(0.5));
        assert_eq!(check_zoom(0.0), Err(CanvasError::InvalidZoom(0.0)));
        assert!(check_zoom(f64::NAN).is_err());
        assert!(check_zoom(f64::INFINITY).is_err());
        assert_eq!(check_font_size(40.0), Ok(40.0));
        assert_eq!(check_font_size(-1.0), Err(CanvasError::InvalidFontSize(-1.0)));
        assert_eq!(check_pan(Vec2::new(3.0, -4.0)), Ok(Vec2::new(3.0, -4.0)));
        assert!(check_pan(Vec2::new(0.0, f64::NEG_INFINITY)).is_err());
        assert!(check_location(Point::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CanvasError::InvalidZoom(-2.0).to_string(),
            "zoom must be finite and positive, got -2"
        );
        assert_eq!(
            CanvasError::InvalidPan(Vec2::new(f64::NAN, 1.0)).to_string(),
            "pan delta must be finite, got (NaN, 1)"
        );
        assert_eq!(
            CanvasError::InvalidLocation(Point::new(f64::NEG_INFINITY, 0.0)).to_string(),
            "item location must be finite, got (-inf, 0)"
        );
    }
}
