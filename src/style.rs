//! Visual styling for grids and curves.

use crate::render::{Color, LineStyle};

/// Visual theme for a plot scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Style of the two axis lines through the origin.
    pub axis: LineStyle,
    /// Style of minor gridlines.
    pub grid_minor: LineStyle,
    /// Style of major gridlines (whole plot units).
    pub grid_major: LineStyle,
    /// Colors assigned to curves in registration order.
    pub palette: Vec<Color>,
}

impl Theme {
    /// Color for the curve at the given registration index.
    ///
    /// The palette wraps around when there are more curves than colors.
    pub fn curve_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        let grid = Color::new(0.5, 0.5, 0.5, 0.4);
        Self {
            axis: LineStyle::new(Color::new(0.2, 0.2, 0.2, 1.0), 2.0),
            grid_minor: LineStyle::new(grid, 1.0),
            grid_major: LineStyle::new(grid, 1.5),
            palette: vec![
                Color::new(0.85, 0.35, 0.2, 1.0),
                Color::new(0.2, 0.55, 0.85, 1.0),
                Color::new(0.35, 0.75, 0.35, 1.0),
                Color::new(0.75, 0.35, 0.75, 1.0),
            ],
        }
    }
}
