// File: crates/benchplot-core/src/chart.rs
// Summary: Chart spec and headless PNG rendering pipeline over plotters.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::Error;
use crate::series::{CumulativeSeries, PreparedSeries};
use crate::style::StyleConfig;

/// One line on a chart: a prepared series plus its legend label and color.
#[derive(Clone, Debug)]
pub struct SeriesSlot {
    pub label: String,
    pub color: RGBColor,
    pub series: PreparedSeries,
}

/// Everything needed to render one image. Built per render call and
/// discarded afterwards.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output_path: PathBuf,
    /// Fixed upper y bound, used to normalize visual scale across report
    /// generations. Auto-scaled with headroom when absent.
    pub y_axis_cap: Option<u64>,
    pub series: Vec<SeriesSlot>,
}

impl ChartSpec {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            output_path: output_path.into(),
            y_axis_cap: None,
            series: Vec::new(),
        }
    }

    pub fn with_y_cap(mut self, cap: u64) -> Self {
        self.y_axis_cap = Some(cap);
        self
    }

    pub fn add_series(&mut self, label: impl Into<String>, color: RGBColor, series: PreparedSeries) {
        self.series.push(SeriesSlot {
            label: label.into(),
            color,
            series,
        });
    }

    pub fn add_cumulative_series(
        &mut self,
        label: impl Into<String>,
        color: RGBColor,
        series: CumulativeSeries,
    ) {
        self.add_series(label, color, series.into_inner());
    }
}

/// Stateless renderer. Holds only the immutable style; every render call
/// owns its drawing surface for the duration of the call.
#[derive(Clone, Debug)]
pub struct ChartRenderer {
    style: StyleConfig,
}

impl ChartRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// One line from one prepared series.
    pub fn render_single(&self, spec: &ChartSpec) -> crate::Result<()> {
        self.expect_arity(spec, 1)?;
        self.draw(spec)
    }

    /// Two lines on shared axes, one per semantic role.
    pub fn render_comparative(&self, spec: &ChartSpec) -> crate::Result<()> {
        self.expect_arity(spec, 2)?;
        self.draw(spec)
    }

    /// Same contract as comparative, but the series carry running totals and
    /// the y label should name the accumulated quantity.
    pub fn render_cumulative(&self, spec: &ChartSpec) -> crate::Result<()> {
        self.expect_arity(spec, 2)?;
        self.draw(spec)
    }

    fn expect_arity(&self, spec: &ChartSpec, expected: usize) -> crate::Result<()> {
        if spec.series.len() != expected {
            return Err(Error::SeriesArity {
                title: spec.title.clone(),
                expected,
                got: spec.series.len(),
            });
        }
        for slot in &spec.series {
            if slot.series.is_empty() {
                return Err(Error::EmptySeries(slot.label.clone()));
            }
        }
        Ok(())
    }

    fn draw(&self, spec: &ChartSpec) -> crate::Result<()> {
        let err = render_err(&spec.output_path);
        let style = &self.style;

        if let Some(parent) = spec.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let (x_max, y_seen) = axis_bounds(&spec.series);
        let y_max = spec
            .y_axis_cap
            .unwrap_or_else(|| (y_seen + y_seen / 20).max(1));

        let root =
            BitMapBackend::new(&spec.output_path, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background).map_err(&err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, (style.font, style.title_size as i32))
            .margin(style.margin as i32)
            .x_label_area_size(style.x_label_area as i32)
            .y_label_area_size(style.y_label_area as i32)
            .build_cartesian_2d(0u64..x_max, 0u64..y_max)
            .map_err(&err)?;

        chart
            .configure_mesh()
            .x_desc(&spec.x_label)
            .y_desc(&spec.y_label)
            .axis_desc_style((style.font, style.label_size as i32))
            .label_style((style.font, style.legend_size as i32))
            .bold_line_style(&BLACK.mix(style.grid_opacity))
            .light_line_style(&BLACK.mix(style.grid_opacity / 3.0))
            .draw()
            .map_err(&err)?;

        for slot in &spec.series {
            let stroke = ShapeStyle::from(&slot.color).stroke_width(style.line_width);
            chart
                .draw_series(LineSeries::new(slot.series.points.iter().copied(), stroke))
                .map_err(&err)?
                .label(&slot.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], stroke));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.4))
            .label_font((style.font, style.legend_size as i32))
            .draw()
            .map_err(&err)?;

        // Flush the bitmap to disk; the backend is dropped on return.
        root.present().map_err(&err)?;
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> Error + '_ {
    move |e| Error::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Upper bounds observed across every slot, clamped away from degenerate
/// zero-width ranges.
fn axis_bounds(series: &[SeriesSlot]) -> (u64, u64) {
    let mut x_max = 0u64;
    let mut y_max = 0u64;
    for slot in series {
        for &(x, y) in &slot.series.points {
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    (x_max.max(1), y_max)
}
