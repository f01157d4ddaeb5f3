//! The visible plot-space window and its projection to the surface.

use crate::geom::{Point, Size, SurfaceSize};
use crate::mapper::map;

/// The rectangular plot-space window currently visible.
///
/// A view is defined by a center point and a size, both in plot units. The
/// corners are derived on demand and never cached, so mutating the center or
/// size takes effect on the next projection call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotView {
    /// Center of the visible window in plot space.
    pub center: Point,
    /// Width and height of the visible window in plot units.
    pub size: Size,
}

impl PlotView {
    /// Create a view from a center point and a size.
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Top-left corner of the visible window in plot space.
    pub fn top_left(&self) -> Point {
        Point::new(
            self.center.x - self.size.w / 2.0,
            self.center.y + self.size.h / 2.0,
        )
    }

    /// Bottom-right corner of the visible window in plot space.
    pub fn bottom_right(&self) -> Point {
        let top_left = self.top_left();
        Point::new(top_left.x + self.size.w, top_left.y - self.size.h)
    }

    /// Map a plot-space point into screen space.
    ///
    /// Screen-space y grows downward, so the y mapping targets the inverted
    /// range `[surface.height, 0]`.
    pub fn project(&self, p: Point, surface: SurfaceSize) -> Point {
        Point::new(
            map(
                p.x,
                self.center.x - self.size.w / 2.0,
                self.center.x + self.size.w / 2.0,
                0.0,
                surface.width,
            ),
            map(
                p.y,
                self.center.y - self.size.h / 2.0,
                self.center.y + self.size.h / 2.0,
                surface.height,
                0.0,
            ),
        )
    }

    /// Map a screen-space point back into plot space.
    ///
    /// Exact algebraic inverse of [`PlotView::project`] for the same view
    /// and surface dimensions.
    pub fn unproject(&self, p: Point, surface: SurfaceSize) -> Point {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        Point::new(
            map(p.x, 0.0, surface.width, top_left.x, bottom_right.x),
            map(p.y, surface.height, 0.0, bottom_right.y, top_left.y),
        )
    }

    /// Scale both window dimensions by a factor, keeping the center fixed.
    pub fn zoom_by(&mut self, factor: f64) {
        self.size.w *= factor;
        self.size.h *= factor;
    }
}
