use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

const FIGURE_BACKGROUND: RGBColor = RGBColor(26, 26, 26);
const GRID: RGBColor = RGBColor(128, 128, 128);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("chart drawing failed: {0}")]
    Drawing(String),
}

fn drawing<E: std::error::Error>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Everything needed to draw one chart of a sampled function.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// caption, already prepared for display
    pub title: String,
    /// legend entry of the curve
    pub legend: String,
    pub x: Vec<f64>,
    /// non-finite values leave a gap in the curve
    pub y: Vec<f64>,
    /// visible window, independent of the sampled domain
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Liang-Barsky clipping of the segment p-q to the window.
/// Unclipped ends are returned exactly as given.
fn clip_segment(
    p: (f64, f64),
    q: (f64, f64),
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (q.0 - p.0, q.1 - p.1);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let edges = [
        (-dx, p.0 - x_range.0),
        (dx, x_range.1 - p.0),
        (-dy, p.1 - y_range.0),
        (dy, y_range.1 - p.1),
    ];
    for (pk, qk) in edges {
        if pk == 0.0 {
            // parallel to this edge
            if qk < 0.0 {
                return None;
            }
            continue;
        }
        let r = qk / pk;
        if pk < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let a = if t0 == 0.0 { p } else { (p.0 + t0 * dx, p.1 + t0 * dy) };
    let b = if t1 == 1.0 { q } else { (p.0 + t1 * dx, p.1 + t1 * dy) };
    Some((a, b))
}

/// Splits the sampled curve into the polylines visible inside the window.
/// A polyline ends at a non-finite sample or where the curve leaves the window.
pub fn visible_polylines(
    x: &[f64],
    y: &[f64],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Vec<Vec<(f64, f64)>> {
    let points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    let mut polylines = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for pair in points.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let finite = p.0.is_finite() && p.1.is_finite() && q.0.is_finite() && q.1.is_finite();
        let clipped = if finite {
            clip_segment(p, q, x_range, y_range)
        } else {
            None
        };
        match clipped {
            Some((a, b)) => {
                if current.last() != Some(&a) {
                    if current.len() >= 2 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current = vec![a];
                }
                current.push(b);
            }
            None => {
                if current.len() >= 2 {
                    polylines.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        polylines.push(current);
    }
    polylines
}

/// Draws the chart on any plotters backend: dark figure, black plot area,
/// gray grid, white zero lines and the curve in cyan with its legend entry.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> Result<(), PlotError> {
    root.fill(&FIGURE_BACKGROUND).map_err(drawing)?;
    let (x0, x1) = spec.x_range;
    let (y0, y1) = spec.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 30).into_font().color(&WHITE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(drawing)?;
    chart.plotting_area().fill(&BLACK).map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .bold_line_style(GRID.mix(0.6))
        .light_line_style(BLACK)
        .axis_style(WHITE)
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 16).into_font().color(&WHITE))
        .draw()
        .map_err(drawing)?;

    // zero reference lines
    chart
        .draw_series(LineSeries::new(vec![(x0, 0.0), (x1, 0.0)], WHITE))
        .map_err(drawing)?;
    chart
        .draw_series(LineSeries::new(vec![(0.0, y0), (0.0, y1)], WHITE))
        .map_err(drawing)?;

    let polylines = visible_polylines(&spec.x, &spec.y, spec.x_range, spec.y_range);
    for (i, polyline) in polylines.into_iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(polyline, CYAN.stroke_width(2)))
            .map_err(drawing)?;
        if i == 0 {
            series
                .label(&spec.legend)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN.stroke_width(2)));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(FIGURE_BACKGROUND.mix(0.8))
        .border_style(WHITE)
        .label_font(("sans-serif", 14).into_font().color(&WHITE))
        .draw()
        .map_err(drawing)?;
    Ok(())
}

/// Renders the chart into an RGB buffer of `size` pixels, row by row.
pub fn plot_function_rgb(spec: &ChartSpec, size: (u32, u32)) -> Result<Vec<u8>, PlotError> {
    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_chart(&root, spec)?;
        root.present().map_err(drawing)?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X_VIEW: (f64, f64) = (-20.0, 20.0);
    const Y_VIEW: (f64, f64) = (-10.0, 20.0);

    #[test]
    fn test_points_inside_are_kept_exactly() {
        let x = vec![-1.0, 0.0, 1.0, 2.0];
        let y = vec![1.0, 0.0, 1.0, 4.0];
        let polylines = visible_polylines(&x, &y, X_VIEW, Y_VIEW);
        assert_eq!(polylines, vec![vec![(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]]);
    }

    #[test]
    fn test_segment_is_cut_at_the_top() {
        let polylines = visible_polylines(&[0.0, 1.0], &[0.0, 30.0], X_VIEW, Y_VIEW);
        assert_eq!(polylines.len(), 1);
        let end = polylines[0][1];
        assert_relative_eq!(end.0, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(end.1, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_leaving_and_reentering_gives_two_polylines() {
        let polylines = visible_polylines(&[0.0, 1.0, 2.0], &[0.0, 30.0, 0.0], X_VIEW, Y_VIEW);
        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[0][0], (0.0, 0.0));
        assert_eq!(polylines[1][1], (2.0, 0.0));
    }

    #[test]
    fn test_non_finite_samples_split_the_curve() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![0.0, 1.0, f64::NAN, 1.0, 2.0];
        let polylines = visible_polylines(&x, &y, X_VIEW, Y_VIEW);
        assert_eq!(polylines, vec![vec![(0.0, 0.0), (1.0, 1.0)], vec![(3.0, 1.0), (4.0, 2.0)]]);
    }

    #[test]
    fn test_curve_outside_window_is_dropped() {
        let polylines = visible_polylines(&[0.0, 1.0], &[50.0, 60.0], X_VIEW, Y_VIEW);
        assert!(polylines.is_empty());
        let polylines = visible_polylines(&[0.0, 1.0], &[f64::INFINITY, 1.0], X_VIEW, Y_VIEW);
        assert!(polylines.is_empty());
    }

    #[test]
    fn test_vertical_and_horizontal_segments() {
        let vertical = visible_polylines(&[5.0, 5.0], &[-30.0, 30.0], X_VIEW, Y_VIEW);
        assert_eq!(vertical.len(), 1);
        assert_relative_eq!(vertical[0][0].1, -10.0, epsilon = 1e-9);
        assert_relative_eq!(vertical[0][1].1, 20.0, epsilon = 1e-9);
        assert_eq!(vertical[0][0].0, 5.0);

        let horizontal = visible_polylines(&[-30.0, 30.0], &[4.0, 4.0], X_VIEW, Y_VIEW);
        assert_eq!(horizontal.len(), 1);
        assert_relative_eq!(horizontal[0][0].0, -20.0, epsilon = 1e-9);
        assert_relative_eq!(horizontal[0][1].0, 20.0, epsilon = 1e-9);
        assert_eq!(horizontal[0][1].1, 4.0);
    }
}
