// File: crates/benchplot-core/src/style.rs
// Summary: Immutable styling shared by every chart render.

use plotters::style::{RGBColor, WHITE};

use crate::record::Operation;

/// Line color for the insert role (matplotlib tab green).
pub const INSERT_COLOR: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
/// Line color for the delete role (matplotlib tab purple).
pub const DELETE_COLOR: RGBColor = RGBColor(0x94, 0x67, 0xbd);
/// Fallback for operations outside the fixed vocabulary.
pub const OTHER_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

/// Process-wide chart styling. Constructed once, passed to the renderer,
/// never mutated, so repeated or parallel renders cannot interfere.
#[derive(Clone, Debug)]
pub struct StyleConfig {
    /// Canvas size in pixels (12x6 in at 150 dpi).
    pub width: u32,
    pub height: u32,
    /// Outer margin around the plot area, in pixels.
    pub margin: u32,
    /// Reserved space for axis tick labels and descriptions.
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub font: &'static str,
    pub title_size: u32,
    pub label_size: u32,
    pub legend_size: u32,
    pub line_width: u32,
    /// Opacity of the gridline mesh.
    pub grid_opacity: f64,
    pub background: RGBColor,
    pub insert_line: RGBColor,
    pub delete_line: RGBColor,
    pub other_line: RGBColor,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 900,
            margin: 24,
            x_label_area: 70,
            y_label_area: 100,
            font: "sans-serif",
            title_size: 34,
            label_size: 28,
            legend_size: 26,
            line_width: 2,
            grid_opacity: 0.3,
            background: WHITE,
            insert_line: INSERT_COLOR,
            delete_line: DELETE_COLOR,
            other_line: OTHER_COLOR,
        }
    }
}

impl StyleConfig {
    /// Fixed color per semantic role, so a series keeps its color across
    /// every chart variant in a report.
    pub fn color_for(&self, operation: &Operation) -> RGBColor {
        match operation {
            Operation::Insert => self.insert_line,
            Operation::Delete => self.delete_line,
            Operation::Other(_) => self.other_line,
        }
    }
}
