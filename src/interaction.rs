//! Interaction primitives: host events, drag sessions, and wheel zoom.
//!
//! Events are an explicit enum consumed by a single dispatch function on the
//! scene, so the same semantics hold regardless of how the host delivers
//! its callbacks.

use std::time::Duration;

use crate::geom::{Point, SurfaceSize};
use crate::view::PlotView;

/// Identifier of one pointer among concurrently active pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// A host input or scheduling event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer was pressed at the given screen coordinates.
    PointerDown {
        /// Pointer identifier.
        pointer: PointerId,
        /// Screen-space position.
        position: Point,
    },
    /// A pointer moved to the given screen coordinates.
    PointerMove {
        /// Pointer identifier.
        pointer: PointerId,
        /// Screen-space position.
        position: Point,
    },
    /// A pointer was released.
    PointerUp {
        /// Pointer identifier.
        pointer: PointerId,
    },
    /// The wheel turned by a vertical delta.
    Wheel {
        /// Vertical wheel delta; one detent is typically 125.
        delta_y: f64,
    },
    /// The surface was resized to the observed pixel dimensions.
    Resize {
        /// New pixel dimensions.
        size: SurfaceSize,
    },
    /// One animation frame elapsed.
    Tick {
        /// Monotonic time since the scene started.
        elapsed: Duration,
    },
}

/// One active drag gesture.
///
/// The session freezes a snapshot of the view at pointer-down and every
/// subsequent move is resolved against that snapshot plus the pointer delta,
/// never against the live view, so repeated small deltas cannot compound
/// into drift. The session is read-only after creation and discarded on the
/// matching pointer-up.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pointer: PointerId,
    anchor: Point,
    origin: PlotView,
}

impl DragSession {
    /// Start a drag at the given screen position.
    pub fn begin(
        view: &PlotView,
        surface: SurfaceSize,
        pointer: PointerId,
        position: Point,
    ) -> Self {
        Self {
            pointer,
            anchor: view.unproject(position, surface),
            origin: *view,
        }
    }

    /// Check whether an event's pointer belongs to this session.
    pub fn matches(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// The view center implied by the pointer having moved to `position`.
    ///
    /// The position is unprojected through the frozen snapshot; the center
    /// shifts by the negative of the plot-space delta in x and the positive
    /// of it in y, reflecting the inverted screen/plot y convention.
    pub fn center_for(&self, position: Point, surface: SurfaceSize) -> Point {
        let current = self.origin.unproject(position, surface);
        Point::new(
            self.origin.center.x - (current.x - self.anchor.x),
            self.origin.center.y + (current.y - self.anchor.y),
        )
    }
}

/// Zoom factor applied to the view size for a wheel delta.
///
/// One detent (`delta_y == 125`) grows the window by 10%; a negative delta
/// shrinks it.
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    1.0 + 0.1 * delta_y / 125.0
}
