//! Chart panels: bar, pie and line plots drawn into a region of a canvas.

use super::canvas::{line_height, Canvas, Rect};
use super::font;
use image::Rgb;

const TEXT: Rgb<u8> = Rgb([33, 37, 41]);
const AXIS: Rgb<u8> = Rgb([108, 117, 125]);
const GRID: Rgb<u8> = Rgb([233, 236, 239]);
const PLACEHOLDER: Rgb<u8> = Rgb([248, 249, 250]);

/// Default series colors.
pub(crate) const PALETTE: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
];

const TITLE_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 1;
const LEFT_AXIS_MARGIN: u32 = 44;
const BOTTOM_AXIS_MARGIN: u32 = 24;

/// A labelled series of counts.
pub(crate) type Series = [(String, usize)];

/// Draws the title and returns the remaining plot area.
fn frame(canvas: &mut Canvas, area: Rect, title: &str) -> Rect {
    let title = font::fit(&title.to_uppercase(), area.width.saturating_sub(16), TITLE_SCALE);
    canvas.text_centered(area.center_x(), area.y + 10, &title, TITLE_SCALE, TEXT);
    area.inset(12, 20 + line_height(TITLE_SCALE), 12, 10)
}

/// Fills the plot area with a "NO DATA" placeholder.
fn no_data(canvas: &mut Canvas, plot: Rect) {
    canvas.fill_rect(plot, PLACEHOLDER);
    canvas.stroke_rect(plot, GRID);
    let y = plot.y + (plot.height / 2) as i32 - (line_height(TITLE_SCALE) / 2) as i32;
    canvas.text_centered(plot.center_x(), y, "NO DATA", TITLE_SCALE, AXIS);
}

/// Integer tick step giving at most four intervals up to `max`.
fn tick_step(max: usize) -> usize {
    max.div_ceil(4).max(1)
}

/// Draws horizontal grid lines and y-axis labels, returning the axis maximum.
fn y_axis(canvas: &mut Canvas, plot: Rect, max: usize) -> usize {
    let step = tick_step(max);
    let axis_max = max.div_ceil(step).max(1) * step;

    let mut tick = 0;
    while tick <= axis_max {
        let y = value_y(plot, tick, axis_max);
        if tick > 0 {
            canvas.line((plot.x, y), (plot.right() - 1, y), GRID, 1);
        }
        let label_y = y - (line_height(LABEL_SCALE) / 2) as i32;
        canvas.text_right(plot.x - 6, label_y, &tick.to_string(), LABEL_SCALE, AXIS);
        tick += step;
    }

    canvas.line((plot.x, plot.y), (plot.x, plot.bottom() - 1), AXIS, 1);
    canvas.line((plot.x, plot.bottom() - 1), (plot.right() - 1, plot.bottom() - 1), AXIS, 1);
    axis_max
}

fn value_y(plot: Rect, value: usize, axis_max: usize) -> i32 {
    let filled = (value as f64 / axis_max as f64) * f64::from(plot.height.saturating_sub(1));
    plot.bottom() - 1 - filled.round() as i32
}

/// Draws a vertical bar chart.
pub(crate) fn bar_panel(canvas: &mut Canvas, area: Rect, title: &str, series: &Series, color: Rgb<u8>) {
    let plot = frame(canvas, area, title);
    let plot = plot.inset(LEFT_AXIS_MARGIN, 14, 0, BOTTOM_AXIS_MARGIN);
    if series.is_empty() {
        no_data(canvas, plot);
        return;
    }

    let max = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let axis_max = y_axis(canvas, plot, max);

    let slot = plot.width / series.len() as u32;
    let bar_width = (slot * 3 / 5).max(1);
    for (index, (label, count)) in series.iter().enumerate() {
        let slot_x = plot.x + (index as u32 * slot) as i32;
        let center_x = slot_x + (slot / 2) as i32;
        let top = value_y(plot, *count, axis_max);
        let bar = Rect::new(
            center_x - (bar_width / 2) as i32,
            top,
            bar_width,
            (plot.bottom() - 1 - top).max(0) as u32,
        );
        canvas.fill_rect(bar, color);

        let count_y = top - line_height(LABEL_SCALE) as i32 - 3;
        canvas.text_centered(center_x, count_y, &count.to_string(), LABEL_SCALE, TEXT);

        let label = font::fit(&label.to_uppercase(), slot.saturating_sub(4), LABEL_SCALE);
        canvas.text_centered(center_x, plot.bottom() + 6, &label, LABEL_SCALE, TEXT);
    }
}

/// Draws a pie chart with a percentage legend.
pub(crate) fn pie_panel(canvas: &mut Canvas, area: Rect, title: &str, series: &Series) {
    let plot = frame(canvas, area, title);
    let total: usize = series.iter().map(|(_, count)| *count).sum();
    if total == 0 {
        no_data(canvas, plot);
        return;
    }

    let legend_width = plot.width * 2 / 5;
    let pie_area = plot.inset(0, 0, legend_width, 0);
    let radius = (pie_area.width.min(pie_area.height) / 2).saturating_sub(4);
    let center = (
        pie_area.center_x(),
        pie_area.y + (pie_area.height / 2) as i32,
    );

    let mut start = 0.0;
    let legend_x = pie_area.right() + 4;
    let mut legend_y = center.1 - (series.len() as i32 * 18) / 2;
    for (index, (label, count)) in series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let share = *count as f64 / total as f64;
        let end = if index + 1 == series.len() { 1.0 } else { start + share };
        canvas.fill_sector(center, radius, start, end, color);
        start = end;

        canvas.fill_rect(Rect::new(legend_x, legend_y, 10, 10), color);
        let text = format!("{} {:.1}%", label.to_uppercase(), share * 100.0);
        let text = font::fit(&text, legend_width.saturating_sub(20), LABEL_SCALE);
        canvas.text(legend_x + 16, legend_y + 2, &text, LABEL_SCALE, TEXT);
        legend_y += 18;
    }
}

/// Draws a line chart with a marker per point.
pub(crate) fn line_panel(canvas: &mut Canvas, area: Rect, title: &str, series: &Series, color: Rgb<u8>) {
    let plot = frame(canvas, area, title);
    let plot = plot.inset(LEFT_AXIS_MARGIN, 14, 8, BOTTOM_AXIS_MARGIN);
    if series.is_empty() {
        no_data(canvas, plot);
        return;
    }

    let max = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let axis_max = y_axis(canvas, plot, max);

    let points: Vec<(i32, i32)> = series
        .iter()
        .enumerate()
        .map(|(index, (_, count))| (point_x(plot, index, series.len()), value_y(plot, *count, axis_max)))
        .collect();

    for pair in points.windows(2) {
        canvas.line(pair[0], pair[1], color, 2);
    }
    for point in &points {
        canvas.fill_rect(Rect::new(point.0 - 2, point.1 - 2, 5, 5), color);
    }

    // Thin labels so they do not overlap.
    let widest = series
        .iter()
        .map(|(label, _)| font::text_width(label, LABEL_SCALE) + 8)
        .max()
        .unwrap_or(1);
    let every = (widest as usize * series.len()).div_ceil(plot.width.max(1) as usize).max(1);
    for (index, (label, _)) in series.iter().enumerate().step_by(every) {
        let x = point_x(plot, index, series.len());
        canvas.text_centered(x, plot.bottom() + 6, &label.to_uppercase(), LABEL_SCALE, TEXT);
    }
}

fn point_x(plot: Rect, index: usize, len: usize) -> i32 {
    if len <= 1 {
        return plot.center_x();
    }
    let span = f64::from(plot.width.saturating_sub(1));
    plot.x + (span * index as f64 / (len - 1) as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(&str, usize)]) -> Vec<(String, usize)> {
        values
            .iter()
            .map(|(label, count)| ((*label).to_string(), *count))
            .collect()
    }

    #[test]
    fn tick_step_keeps_four_intervals() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(3), 1);
        assert_eq!(tick_step(8), 2);
        assert_eq!(tick_step(9), 3);
    }

    #[test]
    fn empty_bar_panel_draws_placeholder() {
        let mut canvas = Canvas::new(400, 300);
        let area = canvas.bounds();
        bar_panel(&mut canvas, area, "Issues by type", &[], PALETTE[0]);

        let image = canvas.into_image();
        let placeholder = image.pixels().filter(|pixel| **pixel == PLACEHOLDER).count();
        assert!(placeholder > 10_000);
    }

    #[test]
    fn bar_panel_draws_bars_in_series_color() {
        let mut canvas = Canvas::new(400, 300);
        let area = canvas.bounds();
        bar_panel(
            &mut canvas,
            area,
            "Issues by type",
            &series(&[("Bug", 4), ("Task", 2)]),
            PALETTE[0],
        );

        let image = canvas.into_image();
        assert!(image.pixels().any(|pixel| *pixel == PALETTE[0]));
        assert!(!image.pixels().any(|pixel| *pixel == PLACEHOLDER));
    }

    #[test]
    fn pie_panel_uses_one_color_per_slice() {
        let mut canvas = Canvas::new(400, 300);
        let area = canvas.bounds();
        pie_panel(&mut canvas, area, "State", &series(&[("Open", 3), ("Closed", 1)]));

        let image = canvas.into_image();
        assert!(image.pixels().any(|pixel| *pixel == PALETTE[0]));
        assert!(image.pixels().any(|pixel| *pixel == PALETTE[1]));
        assert!(!image.pixels().any(|pixel| *pixel == PALETTE[2]));
    }

    #[test]
    fn zero_total_pie_draws_placeholder() {
        let mut canvas = Canvas::new(400, 300);
        let area = canvas.bounds();
        pie_panel(&mut canvas, area, "State", &[]);

        let image = canvas.into_image();
        assert!(image.pixels().any(|pixel| *pixel == PLACEHOLDER));
    }

    #[test]
    fn single_point_line_is_centred() {
        let plot = Rect::new(0, 0, 101, 50);
        assert_eq!(point_x(plot, 0, 1), 50);
        assert_eq!(point_x(plot, 0, 3), 0);
        assert_eq!(point_x(plot, 2, 3), 100);
    }
}
