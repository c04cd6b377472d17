//! Render a [`SeriesTable`] as two overlaid line plots to **SVG** or **PNG**.
//!
//! `line1` is drawn in navy, `line2` in red, with the table title as caption and the
//! series names in the legend. The backend is picked from the file extension.

use crate::error::{Error, Result};
use crate::table::SeriesTable;
use chrono::{Datelike, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

pub const LINE1_COLOR: RGBColor = RGBColor(0, 0, 128); // navy
pub const LINE2_COLOR: RGBColor = RGBColor(255, 0, 0); // red

/// One-time registration for a "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

fn plot_err<E: std::fmt::Debug>(e: E) -> Error {
    Error::Plot(format!("{:?}", e))
}

/// X coordinates are days since the common era so both backends share one integer axis.
fn day_number(d: NaiveDate) -> i32 {
    d.num_days_from_ce()
}

fn day_label(n: &i32) -> String {
    NaiveDate::from_num_days_from_ce_opt(*n)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Plot both columns of `table` to `out_path` (`.svg` → SVG, anything else → bitmap).
pub fn plot_table<P: AsRef<Path>>(
    table: &SeriesTable,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let (first, last) = table
        .date_range()
        .ok_or_else(|| Error::Plot("no data to plot".into()))?;
    let (mut min_val, mut max_val) = table
        .value_range()
        .ok_or_else(|| Error::Plot("no numeric values to plot".into()))?;
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }
    let (mut min_x, mut max_x) = (day_number(first), day_number(last));
    if min_x == max_x {
        min_x -= 1;
        max_x += 1;
    }

    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let bounds = Bounds {
        x: (min_x, max_x),
        y: (min_val, max_val),
    };

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, table, bounds)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, table, bounds)
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: (i32, i32),
    y: (f64, f64),
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, table: &SeriesTable, bounds: Bounds) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(table.title(), ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .y_labels(10)
        .x_label_formatter(&day_label)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(plot_err)?;

    let (name1, name2) = table.names();
    let series = [
        (name1, table.line1(), LINE1_COLOR),
        (name2, table.line2(), LINE2_COLOR),
    ];
    for (name, points, color) in series {
        let style = color.stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                points.into_iter().map(|(d, v)| (day_number(d), v)),
                style,
            ))
            .map_err(plot_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], style));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
