mod charts;
mod export;
mod help;
mod state;

use crate::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteFilter, PAYLOAD_SLIDER_STEP};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use std::{io, time::Duration, time::Instant};

use state::UiState;

/// Run the dashboard event loop until the user quits.
///
/// The loop serializes control changes: each key event runs its handler(s) to
/// completion and the next frame shows the recomputed figures. The dataset is
/// read-only throughout.
pub fn run(data: &LaunchDataset, site: SiteFilter, range: PayloadRange) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut state = UiState::new(data, site, range);
    state.recompute_pie(data);
    state.recompute_scatter(data);
    state.info = format!(
        "{} launches loaded from {} sites",
        data.records.len(),
        data.sites.len()
    );

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, data, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match (k.modifiers, k.code) {
                    (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        break Ok(());
                    }
                    (_, KeyCode::Tab) => {
                        state.tab = (state.tab + 1) % 3;
                    }
                    (_, KeyCode::Char('?')) => {
                        state.tab = 2;
                    }
                    (_, KeyCode::Left) | (_, KeyCode::Char('h')) => {
                        state.cycle_site(data, -1);
                    }
                    (_, KeyCode::Right) | (_, KeyCode::Char('l')) => {
                        state.cycle_site(data, 1);
                    }
                    (_, KeyCode::Char('[')) => {
                        state.adjust_low(data, -PAYLOAD_SLIDER_STEP);
                    }
                    (_, KeyCode::Char(']')) => {
                        state.adjust_low(data, PAYLOAD_SLIDER_STEP);
                    }
                    (_, KeyCode::Char('{')) => {
                        state.adjust_high(data, -PAYLOAD_SLIDER_STEP);
                    }
                    (_, KeyCode::Char('}')) => {
                        state.adjust_high(data, PAYLOAD_SLIDER_STEP);
                    }
                    (_, KeyCode::Char('r')) => {
                        state.reset_filters(data);
                    }
                    (_, KeyCode::Char('e')) => {
                        match export::export_figures_json(data, &state) {
                            Ok(p) => {
                                state.last_exported_path = Some(p.to_string_lossy().to_string());
                                state.info = format!(
                                    "Exported figures: {} (press 'y' to copy path)",
                                    p.display()
                                );
                            }
                            Err(e) => {
                                state.info = format!("Figure export failed: {e:#}");
                            }
                        }
                    }
                    (_, KeyCode::Char('c')) => {
                        match export::export_records_csv(data, &state) {
                            Ok(p) => {
                                state.last_exported_path = Some(p.to_string_lossy().to_string());
                                state.info = format!(
                                    "Exported records: {} (press 'y' to copy path)",
                                    p.display()
                                );
                            }
                            Err(e) => {
                                state.info = format!("Record export failed: {e:#}");
                            }
                        }
                    }
                    (_, KeyCode::Char('y')) => {
                        if let Some(ref path) = state.last_exported_path {
                            match export::copy_to_clipboard(path) {
                                Ok(()) => {
                                    state.info = format!("Copied to clipboard: {path}");
                                }
                                Err(e) => {
                                    state.info = format!("Clipboard copy failed: {e:#}");
                                }
                            }
                        } else {
                            state.info =
                                "No exported file path to copy. Export a file first (e/c)".into();
                        }
                    }
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => {
                        if state.tab == 1 && state.records_selected > 0 {
                            state.records_selected -= 1;
                            if state.records_selected < state.records_scroll_offset {
                                state.records_scroll_offset = state.records_selected;
                            }
                        }
                    }
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => {
                        if state.tab == 1 {
                            let count = state.filtered_records(data).len();
                            if count > 0 && state.records_selected < count - 1 {
                                state.records_selected += 1;
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn draw(area: Rect, f: &mut ratatui::Frame, data: &LaunchDataset, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let tabs = Tabs::new(vec![
        Line::from("Dashboard"),
        Line::from("Records"),
        Line::from("Help"),
    ])
    .select(state.tab)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("launch-records-cli"),
    )
    .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        0 => draw_dashboard(chunks[1], f, data, state),
        1 => draw_records(chunks[1], f, data, state),
        _ => help::draw_help(chunks[1], f),
    }
}

fn draw_dashboard(area: Rect, f: &mut ratatui::Frame, data: &LaunchDataset, state: &UiState) {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6), // Filter controls (site selector + payload slider)
                Constraint::Min(0),    // Chart panels side-by-side
                Constraint::Length(3), // Status row (full width at bottom)
            ]
            .as_ref(),
        )
        .split(area);

    draw_controls(main[0], f, data, state);

    let chart_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(main[1]);
    charts::render_pie(f, chart_row[0], state.pie.as_ref());
    charts::render_scatter(f, chart_row[1], state.scatter.as_ref(), state.payload_range);

    let status = Paragraph::new(Line::from(state.info.as_str()))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, main[2]);
}

/// The control panel: the site selector and the payload range slider with
/// its labeled marks. The slider's default value comes from the dataset's
/// payload bounds; its own bounds and step are the fixed control contract.
fn draw_controls(area: Rect, f: &mut ratatui::Frame, data: &LaunchDataset, state: &UiState) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let site = state.site_filter(data);
    let site_line = Line::from(vec![
        Span::styled("Site: ", Style::default().fg(Color::Gray)),
        Span::styled(site.label().to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(format!(
            " ({} of {}) ",
            state.site_index,
            data.sites.len()
        )),
        Span::styled("←/→", Style::default().fg(Color::Magenta)),
        Span::raw(" or "),
        Span::styled("h/l", Style::default().fg(Color::Magenta)),
        Span::raw(": cycle"),
    ]);

    let payload_line = Line::from(vec![
        Span::styled("Payload: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "{:.0}-{:.0} kg",
                state.payload_range.low, state.payload_range.high
            ),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled("[/]", Style::default().fg(Color::Magenta)),
        Span::raw(" lower  "),
        Span::styled("{/}", Style::default().fg(Color::Magenta)),
        Span::raw(" upper  "),
        Span::styled("r", Style::default().fg(Color::Magenta)),
        Span::raw(" reset"),
    ]);

    let lines = vec![
        site_line,
        payload_line,
        charts::slider_line(inner_width, state.payload_range),
        charts::marks_line(inner_width),
    ];
    let controls =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(controls, area);
}

fn draw_records(area: Rect, f: &mut ratatui::Frame, data: &LaunchDataset, state: &UiState) {
    let records = state.filtered_records(data);
    let title = format!("Records ({} of {})", records.len(), data.records.len());

    if records.is_empty() {
        let empty = Paragraph::new("No launches match the current filter.")
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    // Borders plus the header row.
    let visible = area.height.saturating_sub(3) as usize;
    let mut offset = state.records_scroll_offset;
    if visible > 0 && state.records_selected >= offset + visible {
        offset = state.records_selected + 1 - visible;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<7} {:<14} {:>12}  {:<8} {}",
            "Flight", "Site", "Payload (kg)", "Outcome", "Booster"
        ),
        Style::default().fg(Color::Gray),
    ))];
    for (idx, record) in records.iter().enumerate().skip(offset).take(visible) {
        lines.push(record_line(record, idx == state.records_selected));
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn record_line(record: &LaunchRecord, selected: bool) -> Line<'static> {
    let flight = record
        .flight_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let outcome = if record.is_success() {
        Span::styled("Success", Style::default().fg(Color::Green))
    } else {
        Span::styled("Failure", Style::default().fg(Color::Red))
    };
    let base = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!(
                "{}{:<6} {:<14} {:>12.0}  ",
                if selected { ">" } else { " " },
                flight,
                record.launch_site,
                record.payload_mass_kg
            ),
            base,
        ),
        outcome,
        Span::styled(format!("  {}", record.booster_category), base),
    ])
}
