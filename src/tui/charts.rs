use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::figures::{PieFigure, ScatterFigure};
use crate::model::{PayloadRange, PAYLOAD_SLIDER_MARKS, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};

/// Shared palette for pie slices and scatter series, assigned by position.
pub const SERIES_COLORS: [Color; 10] = [
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightYellow,
];

pub fn series_color(idx: usize) -> Color {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Helper function to draw a line on a canvas
fn draw_line(
    ctx: &mut ratatui::widgets::canvas::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
) {
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

/// Render the empty-state placeholder used by both chart panels.
fn render_empty(f: &mut Frame, area: Rect, title: &str) {
    let empty = Paragraph::new("No launches match the current filter.")
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(empty, area);
}

/// Render a pie figure: slices drawn on a canvas, legend with counts below.
pub fn render_pie(f: &mut Frame, area: Rect, fig: Option<&PieFigure>) {
    let Some(fig) = fig else {
        render_empty(f, area, "Launch success");
        return;
    };
    let total = fig.total();
    if total == 0 {
        render_empty(f, area, &fig.title);
        return;
    }

    let inner = if area.width > 2 && area.height > 2 {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    } else {
        area
    };

    // Non-empty slices carry the legend; zero slices are skipped entirely.
    let drawn: Vec<(usize, &crate::figures::PieSlice)> = fig
        .slices
        .iter()
        .enumerate()
        .filter(|(_, s)| s.value > 0)
        .collect();
    let legend_rows = drawn.len().min(inner.height.saturating_sub(4) as usize) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(legend_rows)].as_ref())
        .split(inner);

    // Slice geometry: fractions of the full circle, drawn clockwise from
    // 12 o'clock as radial strokes fine enough to read as filled wedges.
    let mut start = 0.0_f64;
    let mut wedges: Vec<(f64, f64, Color, String)> = Vec::new();
    for (idx, slice) in &drawn {
        let frac = slice.value as f64 / total as f64;
        let pct = format!("{:.0}%", frac * 100.0);
        wedges.push((start, start + frac, series_color(*idx), pct));
        start += frac;
    }

    let canvas = Canvas::default()
        .x_bounds([-2.1, 2.1])
        .y_bounds([-1.35, 1.35])
        .paint(move |ctx| {
            for (from, to, color, pct) in &wedges {
                let span = to - from;
                let steps = ((span * 240.0).ceil() as usize).max(2);
                for i in 0..=steps {
                    let t = from + span * (i as f64 / steps as f64);
                    let angle = std::f64::consts::FRAC_PI_2 - t * std::f64::consts::TAU;
                    draw_line(ctx, 0.0, 0.0, angle.cos(), angle.sin(), *color);
                }
                let mid = std::f64::consts::FRAC_PI_2 - (from + span / 2.0) * std::f64::consts::TAU;
                ctx.print(
                    mid.cos() * 1.45,
                    mid.sin() * 1.15,
                    Line::from(Span::styled(pct.clone(), Style::default().fg(*color))),
                );
            }
        });
    f.render_widget(canvas, chunks[0]);

    let legend: Vec<Line> = drawn
        .iter()
        .take(legend_rows as usize)
        .map(|(idx, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(series_color(*idx))),
                Span::raw(format!(
                    "{} {} ({:.0}%)",
                    slice.label,
                    slice.value,
                    slice.value as f64 / total as f64 * 100.0
                )),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(fig.title.clone());
    f.render_widget(block, area);
}

/// Render a scatter figure: payload on x, outcome class on y, one colored
/// dataset per booster version category, point count in the footer.
pub fn render_scatter(f: &mut Frame, area: Rect, fig: Option<&ScatterFigure>, range: PayloadRange) {
    let Some(fig) = fig else {
        render_empty(f, area, "Payload vs. outcome");
        return;
    };
    if fig.points.is_empty() {
        render_empty(f, area, &fig.title);
        return;
    }

    let inner = if area.width > 2 && area.height > 2 {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    } else {
        area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)].as_ref())
        .split(inner);

    let series = fig.series();
    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(idx, (name, points))| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(series_color(idx)))
                .data(points)
        })
        .collect();

    let x_min = range.low;
    let x_max = range.high.max(range.low + 1.0);
    let x_axis = Axis::default()
        .title("Payload (kg)")
        .bounds([x_min, x_max])
        .labels(vec![
            format!("{x_min:.0}"),
            format!("{:.0}", (x_min + x_max) / 2.0),
            format!("{x_max:.0}"),
        ]);
    let y_axis = Axis::default()
        .title("Outcome")
        .bounds([0.0, 1.0])
        .labels(vec!["0 (failure)".to_string(), "1 (success)".to_string()]);

    let chart = Chart::new(datasets).x_axis(x_axis).y_axis(y_axis);
    f.render_widget(chart, chunks[0]);

    // Footer readout: the point-level payload detail the charts themselves
    // cannot show in a cell grid.
    let payloads: Vec<f64> = fig.points.iter().map(|p| p.payload_mass_kg).collect();
    let footer = Line::from(vec![
        Span::styled("launches ", Style::default().fg(Color::Gray)),
        Span::raw(format!("{}", fig.points.len())),
        Span::styled("  payload ", Style::default().fg(Color::Gray)),
        Span::raw(payload_span_text(&payloads)),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(fig.title.clone());
    f.render_widget(block, area);
}

/// "min-max kg (median m)" readout for the scatter footer.
fn payload_span_text(payloads: &[f64]) -> String {
    if payloads.is_empty() {
        return "-".to_string();
    }
    let mut sorted = payloads.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = sorted[sorted.len() / 2];
    format!(
        "{:.0}-{:.0} kg (median {:.0})",
        sorted[0],
        sorted[sorted.len() - 1],
        median
    )
}

/// Payload range control: the selected span rendered over the full slider
/// bounds, one cell per step of resolution at typical widths.
pub fn slider_line(width: usize, range: PayloadRange) -> Line<'static> {
    if width == 0 {
        return Line::from("");
    }
    let cell = |i: usize| -> f64 {
        PAYLOAD_SLIDER_MIN
            + (PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) * (i as f64 / (width.max(2) - 1) as f64)
    };
    let mut selected = String::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut rest = String::new();
    for i in 0..width {
        let v = cell(i);
        if v >= range.low && v <= range.high {
            if !rest.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut rest),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            selected.push('█');
        } else {
            if !selected.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut selected),
                    Style::default().fg(Color::Yellow),
                ));
            }
            rest.push('─');
        }
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest, Style::default().fg(Color::DarkGray)));
    }
    if !selected.is_empty() {
        spans.push(Span::styled(selected, Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Labeled tick marks under the slider. Labels that would overlap an earlier
/// one are dropped rather than smeared together.
pub fn marks_line(width: usize) -> Line<'static> {
    let mut buf = vec![' '; width];
    for mark in PAYLOAD_SLIDER_MARKS {
        let label = format!("{mark:.0}");
        if label.len() > width {
            continue;
        }
        let pos = ((mark - PAYLOAD_SLIDER_MIN) / (PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN)
            * width.saturating_sub(1).max(1) as f64)
            .round() as usize;
        let start = pos.min(width - label.len());
        // Require a free cell on each side so neighbouring labels stay apart.
        let window_start = start.saturating_sub(1);
        let window_end = (start + label.len() + 1).min(width);
        if buf[window_start..window_end].iter().all(|c| *c == ' ') {
            for (i, ch) in label.chars().enumerate() {
                buf[start + i] = ch;
            }
        }
    }
    Line::from(Span::styled(
        buf.into_iter().collect::<String>(),
        Style::default().fg(Color::Gray),
    ))
}
