//! The scene: application state, event dispatch, and the per-frame driver.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, trace};

use crate::geom::{Point, Size, SurfaceSize};
use crate::interaction::{DragSession, Event, wheel_zoom_factor};
use crate::render::{LineStyle, Surface, draw_curve, draw_grid};
use crate::sample::{CurveCache, WaveParams, sample};
use crate::style::Theme;
use crate::view::PlotView;

/// Errors from scene configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A curve with this logical name is already registered.
    #[error("curve `{0}` is already registered")]
    DuplicateCurve(String),
}

/// The function a curve displays.
#[derive(Clone)]
pub enum CurveFn {
    /// Time-invariant function; its samples are cached by curve name.
    Fixed(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
    /// Function of the per-frame wave parameters; resampled every render.
    Animated(Arc<dyn Fn(WaveParams, f64) -> f64 + Send + Sync>),
}

impl fmt::Debug for CurveFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(_) => write!(f, "CurveFn::Fixed(..)"),
            Self::Animated(_) => write!(f, "CurveFn::Animated(..)"),
        }
    }
}

/// A named displayable curve.
#[derive(Debug, Clone)]
pub struct Curve {
    name: String,
    function: CurveFn,
    start: f64,
    end: f64,
    samples: usize,
    style: Option<LineStyle>,
}

impl Curve {
    /// Create a time-invariant curve.
    pub fn fixed(name: impl Into<String>, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::with_function(name, CurveFn::Fixed(Arc::new(f)))
    }

    /// Create a curve of the per-frame wave parameters.
    pub fn animated(
        name: impl Into<String>,
        f: impl Fn(WaveParams, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::with_function(name, CurveFn::Animated(Arc::new(f)))
    }

    fn with_function(name: impl Into<String>, function: CurveFn) -> Self {
        Self {
            name: name.into(),
            function,
            start: -10.0,
            end: 10.0,
            samples: 500,
            style: None,
        }
    }

    /// Set the sampling domain.
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set an explicit stroke style instead of the palette color.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Access the curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the sampling domain.
    pub fn domain(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Check whether the curve is resampled every frame.
    pub fn is_animated(&self) -> bool {
        matches!(self.function, CurveFn::Animated(_))
    }
}

/// Application state for one interactive plot.
///
/// The scene owns the live view, the drag state, the per-frame wave
/// parameters, and the registered curves. Host events arrive through
/// [`Scene::handle`]; each animation tick delivers [`Event::Tick`] and then
/// calls [`Scene::render`]. All of this runs on one logical thread; input
/// events interleave with ticks and the next render observes the latest
/// state.
#[derive(Debug)]
pub struct Scene {
    view: PlotView,
    surface_size: SurfaceSize,
    drag: Option<DragSession>,
    params: WaveParams,
    curves: Vec<Curve>,
    cache: CurveCache,
    granularity: f64,
    theme: Theme,
}

impl Scene {
    /// Create a scene with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a scene with custom configuration.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// Access the live view.
    pub fn view(&self) -> &PlotView {
        &self.view
    }

    /// Access the live view mutably.
    pub fn view_mut(&mut self) -> &mut PlotView {
        &mut self.view
    }

    /// Access the current wave parameters.
    pub fn params(&self) -> WaveParams {
        self.params
    }

    /// Access the registered curves.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Check whether a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Register a curve.
    ///
    /// Logical names must be unique; they key the sample cache for fixed
    /// curves.
    pub fn add_curve(&mut self, curve: Curve) -> Result<(), SceneError> {
        if self.curves.iter().any(|existing| existing.name == curve.name) {
            return Err(SceneError::DuplicateCurve(curve.name));
        }
        self.cache.invalidate(&curve.name);
        self.curves.push(curve);
        Ok(())
    }

    /// Remove a curve and its cached samples. Returns true if it existed.
    pub fn remove_curve(&mut self, name: &str) -> bool {
        let Some(index) = self.curves.iter().position(|curve| curve.name == name) else {
            return false;
        };
        self.curves.remove(index);
        self.cache.invalidate(name);
        true
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: Event) {
        trace!(?event, "dispatch");
        match event {
            Event::PointerDown { pointer, position } => {
                // At most one active drag; later pointers are ignored.
                if self.drag.is_none() {
                    self.drag = Some(DragSession::begin(
                        &self.view,
                        self.surface_size,
                        pointer,
                        position,
                    ));
                }
            }
            Event::PointerMove { pointer, position } => {
                if let Some(drag) = &self.drag
                    && drag.matches(pointer)
                {
                    self.view.center = drag.center_for(position, self.surface_size);
                }
            }
            Event::PointerUp { pointer } => {
                if self.drag.is_some_and(|drag| drag.matches(pointer)) {
                    self.drag = None;
                }
            }
            Event::Wheel { delta_y } => {
                self.view.zoom_by(wheel_zoom_factor(delta_y));
            }
            Event::Resize { size } => {
                debug!(width = size.width, height = size.height, "surface resized");
                self.surface_size = size;
            }
            Event::Tick { elapsed } => {
                self.params = WaveParams::drift(elapsed.as_secs_f64());
            }
        }
    }

    /// Render one frame: clear, grid, then every curve.
    ///
    /// Fixed curves come from the sample cache; animated curves are
    /// resampled with the current wave parameters.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        draw_grid(surface, &self.view, self.granularity, &self.theme);

        let params = self.params;
        for (index, curve) in self.curves.iter().enumerate() {
            let scratch: Vec<Point>;
            let points: &[Point] = match &curve.function {
                CurveFn::Fixed(f) => self.cache.get_or_sample(
                    &curve.name,
                    |x| f(x),
                    curve.start,
                    curve.end,
                    curve.samples,
                ),
                CurveFn::Animated(f) => {
                    scratch = sample(|x| f(params, x), curve.start, curve.end, curve.samples);
                    scratch.as_slice()
                }
            };
            let style = curve
                .style
                .unwrap_or_else(|| LineStyle::new(self.theme.curve_color(index), 2.0));
            draw_curve(surface, &self.view, points, style);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a scene before construction.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    view: PlotView,
    surface_size: SurfaceSize,
    granularity: f64,
    theme: Theme,
}

impl SceneBuilder {
    /// Set the initial view.
    pub fn view(mut self, view: PlotView) -> Self {
        self.view = view;
        self
    }

    /// Set the initial surface pixel dimensions.
    pub fn surface_size(mut self, size: SurfaceSize) -> Self {
        self.surface_size = size;
        self
    }

    /// Set the minor gridline spacing in plot units.
    pub fn granularity(mut self, granularity: f64) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Build the scene.
    pub fn build(self) -> Scene {
        Scene {
            view: self.view,
            surface_size: self.surface_size,
            drag: None,
            params: WaveParams::default(),
            curves: Vec::new(),
            cache: CurveCache::new(),
            granularity: self.granularity,
            theme: self.theme,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            view: PlotView::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
            surface_size: SurfaceSize::new(800.0, 600.0),
            granularity: 0.5,
            theme: Theme::default(),
        }
    }
}
