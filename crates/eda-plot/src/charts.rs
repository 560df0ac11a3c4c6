//! Chart rendering with plotters
//!
//! All charts render to PNG files through `BitMapBackend`. Rendering
//! is purely presentational; nothing here touches the data model.

use crate::error::render_err;
use crate::{Error, Histogram, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const CHART_SIZE: (u32, u32) = (1000, 600);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);

/// Pad a value range so marks do not sit on the plot border
fn padded(min: f64, max: f64) -> Range<f64> {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5)..(max + 0.5)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad)..(max + pad)
    }
}

/// Bar chart of per-category counts
///
/// Labels and counts are drawn in the order given; the caller decides
/// the ordering (the application sorts by descending count).
pub fn bar_chart(
    path: impl AsRef<Path>,
    title: &str,
    x_desc: &str,
    labels: &[String],
    counts: &[usize],
) -> Result<()> {
    if labels.len() != counts.len() {
        return Err(Error::InvalidInput(format!(
            "{} labels but {} counts",
            labels.len(),
            counts.len()
        )));
    }
    if labels.is_empty() {
        return Err(Error::InvalidInput("nothing to draw".to_string()));
    }

    let path = path.as_ref();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let y_max = counts.iter().copied().max().unwrap_or(1).max(1) as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..labels.len() as u32).into_segmented(),
            0u32..y_max + y_max / 10 + 1,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_desc(x_desc)
        .y_desc("count")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            plotters::series::Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(4)
                .data(counts.iter().enumerate().map(|(i, &c)| (i as u32, c as u32))),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(path = %path.display(), bars = labels.len(), "wrote bar chart");
    Ok(())
}

/// Histogram with a density curve overlaid
///
/// Bars are drawn on the density scale so the curve and the bars share
/// one y axis, matching the usual histogram-plus-KDE rendering.
pub fn histogram_chart(
    path: impl AsRef<Path>,
    title: &str,
    x_desc: &str,
    histogram: &Histogram,
    density: &[(f64, f64)],
) -> Result<()> {
    if histogram.is_empty() {
        return Err(Error::InvalidInput("empty histogram".to_string()));
    }

    let path = path.as_ref();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let curve_max = density.iter().map(|&(_, d)| d).fold(0.0, f64::max);
    let y_max = histogram.max_density().max(curve_max) * 1.1;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(padded(histogram.min(), histogram.max()), 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("density")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(histogram.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.density)],
                BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(render_err)?;

    if !density.is_empty() {
        chart
            .draw_series(LineSeries::new(density.iter().copied(), RED.stroke_width(2)))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    debug!(
        path = %path.display(),
        bins = histogram.len(),
        "wrote histogram chart"
    );
    Ok(())
}

/// Scatter plot of two numeric variables
pub fn scatter_chart(
    path: impl AsRef<Path>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    if points.is_empty() {
        return Err(Error::InvalidInput("nothing to draw".to_string()));
    }

    let path = path.as_ref();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.mix(0.5).filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(path = %path.display(), points = points.len(), "wrote scatter chart");
    Ok(())
}
