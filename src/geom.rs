//! Geometric primitives used by the plotting pipeline.
//!
//! A [`Point`] is used for both plot-space and screen-space coordinates; the
//! space is determined by context and never encoded in the type.

/// A point in plot space or screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot-space extent of a viewing window.
///
/// A window with non-positive width or height produces mirrored or
/// non-finite projections; degenerate sizes are not defended against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width in plot units.
    pub w: f64,
    /// Height in plot units.
    pub h: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a new surface size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
