//! waveplot is an interactive 2D function plotter core: a Cartesian grid,
//! sampled curves drawn over it, and pan/zoom driven by host pointer and
//! wheel events.
//!
//! The crate is backend-agnostic: rendering targets the [`Surface`] trait
//! and host input arrives through the [`Event`] enum, dispatched by a
//! [`Scene`] that owns all application state. Everything runs on one
//! logical thread, re-rendered once per host animation tick.

#![forbid(unsafe_code)]

pub mod geom;
pub mod integrate;
pub mod interaction;
pub mod mapper;
pub mod render;
pub mod sample;
pub mod scene;
pub mod style;
pub mod view;

pub use geom::{Point, Size, SurfaceSize};
pub use integrate::{fourier_components, integrate};
pub use interaction::{DragSession, Event, PointerId, wheel_zoom_factor};
pub use mapper::map;
pub use render::{
    Color, LineStyle, RenderCommand, RenderList, Surface, draw_curve, draw_grid,
};
pub use sample::{CurveCache, WaveParams, sample};
pub use scene::{Curve, CurveFn, Scene, SceneBuilder, SceneError};
pub use style::Theme;
pub use view::PlotView;
