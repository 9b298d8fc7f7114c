//! Drawing the queue trend chart with plotters.

use plotters::coord::Shift;
use plotters::prelude::*;
use queuetrend_common::{QueueTrendError, Result};

use crate::chart::QueueTrendChart;

const FONT_FAMILY: &str = "sans-serif";
const LEGEND_WIDTH: i32 = 130;

/// Parse a `#RRGGBB` color string to an `RGBColor`, defaulting to black.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

fn draw_error<E>(err: DrawingAreaErrorKind<E>) -> QueueTrendError
where
    E: std::error::Error + Send + Sync + 'static,
{
    QueueTrendError::render_with_source("failed to draw chart", err)
}

/// Draw `chart` onto `root` and present it.
///
/// Works with any plotters backend; the file sinks pass bitmap and SVG roots.
pub fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, chart: &QueueTrendChart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = &chart.style;
    root.fill(&WHITE).map_err(draw_error)?;

    let x_max = chart.categories.len().saturating_sub(1).max(1);
    let (y_min, y_max) = chart.y_range();

    let mut ctx = ChartBuilder::on(root)
        .caption(&style.title, (FONT_FAMILY, 22))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(draw_error)?;

    let x_formatter = |x: &usize| chart.tick_label(*x).to_string();
    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .x_labels(chart.categories.len() + 1)
        .x_label_formatter(&x_formatter)
        .x_label_style(
            (FONT_FAMILY, 8)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .label_style((FONT_FAMILY, 12));
    if !style.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(draw_error)?;

    for line in &chart.lines {
        let color = parse_color(&line.color);
        ctx.draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_error)?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    // plotters legends have no heading, so the title sits just above the box.
    let (x_px, y_px) = ctx.plotting_area().get_pixel_range();
    let legend_left = (x_px.end - x_px.start) - LEGEND_WIDTH - 10;
    root.draw(&Text::new(
        style.legend_title.as_str(),
        (x_px.start + legend_left + 4, y_px.start + 6),
        (FONT_FAMILY, 13).into_font().style(FontStyle::Bold),
    ))
    .map_err(draw_error)?;

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::Coordinate(legend_left, 24))
        .label_font((FONT_FAMILY, 12))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}
