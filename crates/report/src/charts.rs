//! SVG chart rendering over the shaped views.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{ReportError, Result};
use crate::views::{RankedBarView, ScatterView};

fn render_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Render(e.to_string())
}

/// Render the ranked bar chart of one season's rates to an SVG file.
pub fn render_ranked_bar(view: &RankedBarView, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let y_max = (view.max_rate() * 1.1).max(1.0);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Passing yards per game, {} season", view.season),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((0..view.bars.len()).into_segmented(), 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(view.bars.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => view
                .bars
                .get(*i)
                .map(|(player, _)| player.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("yards per game")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(view.bars.iter().enumerate().map(|(i, (_, rate))| {
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *rate)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    log::debug!("wrote ranked bar chart to {}", path.display());
    Ok(())
}

/// Render the predicted-vs-actual scatter with identity and trend lines
/// to an SVG file.
pub fn render_scatter(view: &ScatterView, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (700, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (lo, hi) = view.bounds();
    let mut chart = ChartBuilder::on(&root)
        .caption("Predicted vs. actual yards per game", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, lo..hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("actual yards per game")
        .y_desc("predicted yards per game")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(vec![(lo, lo), (hi, hi)], &BLACK))
        .map_err(render_err)?
        .label("identity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    if let Some((slope, intercept)) = view.trend {
        chart
            .draw_series(LineSeries::new(
                vec![(lo, slope * lo + intercept), (hi, slope * hi + intercept)],
                &RED,
            ))
            .map_err(render_err)?
            .label("trend")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    }

    chart
        .draw_series(
            view.points
                .iter()
                .map(|(a, p)| Circle::new((*a, *p), 4, BLUE.filled())),
        )
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    log::debug!("wrote scatter chart to {}", path.display());
    Ok(())
}
