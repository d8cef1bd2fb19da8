//! SVG figure: the target function, the zero line, and each method's
//! root estimate marked and annotated as `(x, 0)`.

use std::path::Path;

use log::{debug, info};
use plotters::prelude::*;

use crate::root_finding::algorithms::Algorithm;
use crate::target;

use super::comparison::Comparison;
use super::errors::PlotError;

const SIZE: (u32, u32) = (960, 640);

fn marker_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Newton        => RED,
        Algorithm::Secant        => GREEN,
        Algorithm::FalsePosition => MAGENTA,
    }
}

fn drawing<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Evenly spaced samples of `f` on `[lo, hi]`, dropping non-finite values.
/// `n >= 2` is guaranteed by `DemoCfg::set_samples`.
fn sample(lo: f64, hi: f64, n: usize) -> Vec<(f64, f64)> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| lo + step * i as f64)
        .map(|x| (x, target::f(x)))
        .filter(|(_, y)| y.is_finite())
        .collect()
}

/// y-range covering the samples and zero, padded by 5% on each side.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let pad = 0.05 * (hi - lo).max(1.0);
    (lo - pad, hi + pad)
}

/// Draws the figure to `path`.
///
/// # Errors
/// - [`PlotError::EmptyRange`] if no sample of `f` is finite
/// - [`PlotError::Drawing`] for backend or I/O failures
pub fn render(
    comparison: &Comparison,
    path: &Path,
    domain: (f64, f64),
    samples: usize,
) -> Result<(), PlotError> {
    let (x_lo, x_hi) = domain;
    let points = sample(x_lo, x_hi, samples);
    if points.is_empty() {
        return Err(PlotError::EmptyRange { lo: x_lo, hi: x_hi });
    }
    let (y_lo, y_hi) = y_range(&points);
    debug!("plot range x=[{x_lo}, {x_hi}] y=[{y_lo:.3}, {y_hi:.3}], {} samples", points.len());

    let area = SVGBackend::new(path, SIZE).into_drawing_area();
    area.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&area)
        .caption("f(x) = e^x + 2^(-x) + cos(x) - 6", ("sans-serif", 24).into_font())
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(52)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(drawing)?
        .label("f(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(vec![(x_lo, 0.0), (x_hi, 0.0)], &BLACK))
        .map_err(drawing)?;

    // stagger labels so nearly equal roots stay readable
    let label_dy = 0.04 * (y_hi - y_lo);
    let label_dx = 0.01 * (x_hi - x_lo);
    for (k, outcome) in comparison.outcomes().iter().enumerate() {
        let Some(res) = outcome.result.as_ref() else { continue };
        let root  = res.root();
        let color = marker_color(outcome.algorithm);

        chart
            .draw_series(std::iter::once(Circle::new((root, 0.0), 5, color.filled())))
            .map_err(drawing)?
            .label(outcome.algorithm.title())
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));

        let text = format!("({root:.6}, 0)");
        let at = (root + label_dx, label_dy * (k + 1) as f64);
        chart
            .draw_series(std::iter::once(Text::new(
                text,
                at,
                ("sans-serif", 14).into_font().color(&color),
            )))
            .map_err(drawing)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing)?;

    area.present().map_err(drawing)?;
    info!("wrote plot to {}", path.display());
    Ok(())
}
