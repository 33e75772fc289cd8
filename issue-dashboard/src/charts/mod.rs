//! PNG chart generation.
//!
//! Draws the fixed chart set from already computed [`IssueStats`]. Panels
//! with no data show a placeholder instead of failing.

mod canvas;
mod error;
mod font;
mod panel;

pub use error::ChartError;

use crate::stats::{Histogram, IssueStats};
use canvas::Canvas;
use image::{ImageFormat, RgbImage};
use panel::{bar_panel, line_panel, pie_panel, PALETTE};
use std::path::Path;
use tracing::debug;

/// Dashboard composite file name.
pub const ISSUE_CHARTS_FILE: &str = "issue_charts.png";

/// Dashboard monthly chart file name.
pub const MONTHLY_CHART_FILE: &str = "monthly_issues.png";

/// Renders the 2x2 dashboard composite: type, priority, state, weekly.
#[must_use]
pub fn issue_charts(stats: &IssueStats) -> RgbImage {
    let mut canvas = Canvas::new(1000, 600);
    let cells = canvas.bounds().grid(2, 2);

    bar_panel(&mut canvas, cells[0], "Issues by type", &stats.by_type.labelled(), PALETTE[0]);
    bar_panel(
        &mut canvas,
        cells[1],
        "Issues by priority",
        &stats.by_priority.labelled(),
        PALETTE[1],
    );
    pie_panel(&mut canvas, cells[2], "Issue state distribution", &stats.by_state.labelled());
    line_panel(
        &mut canvas,
        cells[3],
        "Issues created per week",
        &histogram_series(&stats.weekly),
        PALETTE[0],
    );

    canvas.into_image()
}

/// Renders the monthly creation bar chart.
#[must_use]
pub fn monthly_chart(stats: &IssueStats) -> RgbImage {
    let mut canvas = Canvas::new(1200, 500);
    let area = canvas.bounds();
    bar_panel(
        &mut canvas,
        area,
        "Issues created per month",
        &histogram_series(&stats.monthly),
        PALETTE[2],
    );
    canvas.into_image()
}

/// Renders the 1x2 report chart: type and priority.
#[must_use]
pub fn report_chart(stats: &IssueStats) -> RgbImage {
    let mut canvas = Canvas::new(1200, 500);
    let cells = canvas.bounds().grid(2, 1);

    bar_panel(&mut canvas, cells[0], "Issues by type", &stats.by_type.labelled(), PALETTE[0]);
    bar_panel(
        &mut canvas,
        cells[1],
        "Issues by priority",
        &stats.by_priority.labelled(),
        PALETTE[1],
    );
    canvas.into_image()
}

/// Writes `image` as a PNG, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ChartError`] if the directory cannot be created or the image
/// cannot be written.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ChartError::IoError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ChartError::ImageError {
            path: path.display().to_string(),
            source: e,
        })?;

    debug!(path = %path.display(), "Chart written");
    Ok(())
}

fn histogram_series(histogram: &Histogram) -> Vec<(String, usize)> {
    histogram
        .iter()
        .map(|(bucket, count)| (bucket.clone(), *count))
        .collect()
}
