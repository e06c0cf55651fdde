use std::{ops::Range, path::Path};

use anyhow::Context;
use plotters::prelude::*;
use stats::{Layout, MedianTable};
use tracing::info;

/// Width of a single bar, in category units.
pub const BAR_WIDTH: f64 = 0.35;
/// Figure size in inches.
pub const FIGURE_SIZE: (f64, f64) = (7.0, 4.5);
pub const DPI: f64 = 150.0;

const TITLE: &str = "Virtual vs Non-virtual Throughput (median across repeats)";
const Y_DESC: &str = "Orders per second";

const TITLE_FONT_SIZE: u32 = 25;
const AXIS_LABEL_FONT_SIZE: u32 = 21;
const TICK_LABEL_FONT_SIZE: u32 = 19;

const SERIES_COLORS: [RGBColor; 2] = [
    RGBColor(31, 119, 180), // Blue
    RGBColor(255, 127, 14), // Orange
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

pub fn pixel_size() -> (u32, u32) {
    (
        (FIGURE_SIZE.0 * DPI).round() as u32,
        (FIGURE_SIZE.1 * DPI).round() as u32,
    )
}

/// Bar centers for both series: category `i` gets `i - w/2` and `i + w/2`.
pub fn bar_centers(categories: usize, width: f64) -> [Vec<f64>; 2] {
    let offset = |sign: f64| -> Vec<f64> {
        (0..categories)
            .map(|i| i as f64 + sign * width / 2.0)
            .collect()
    };
    [offset(-1.0), offset(1.0)]
}

pub fn bars(table: &MedianTable, layout: &Layout) -> [Vec<Bar>; 2] {
    let centers = bar_centers(layout.categories.len(), BAR_WIDTH);
    std::array::from_fn(|index| {
        centers[index]
            .iter()
            .zip(table.series(layout, &layout.series[index]))
            .map(|(&center, height)| Bar {
                left: center - BAR_WIDTH / 2.0,
                right: center + BAR_WIDTH / 2.0,
                height,
            })
            .collect()
    })
}

/// Value axis range, with headroom above the tallest bar.
pub fn y_range(bars: &[Vec<Bar>; 2]) -> Range<f64> {
    let max = bars
        .iter()
        .flatten()
        .map(|b| b.height)
        .filter(|h| h.is_finite())
        .fold(0.0_f64, f64::max);

    if max > 0.0 {
        0.0..max * 1.05
    } else {
        0.0..1.0
    }
}

fn category_label(layout: &Layout, x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    layout
        .categories
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

/// Draws the grouped bar chart and writes it as PNG to `path`.
pub fn render(table: &MedianTable, layout: &Layout, path: &Path) -> anyhow::Result<()> {
    let size = pixel_size();
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let categories = layout.categories.len();
    let bars = bars(table, layout);

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(110)
        .build_cartesian_2d(-0.5..(categories as f64 - 0.5), y_range(&bars))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories)
        .x_label_formatter(&|x| category_label(layout, *x))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .y_desc(Y_DESC)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for ((series, bars), color) in layout.series.iter().zip(&bars).zip(SERIES_COLORS) {
        chart
            .draw_series(bars.iter().map(|bar| {
                Rectangle::new([(bar.left, 0.0), (bar.right, bar.height)], color.filled())
            }))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 20, y + 6)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", TICK_LABEL_FONT_SIZE))
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), width = size.0, height = size.1, "rendered chart");
    Ok(())
}
