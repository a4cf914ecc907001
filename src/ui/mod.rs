//! User interface rendering.
//!
//! Pure drawing layer: every panel pulls the current derived view and
//! paints it. A failure in one panel is rendered inside that panel and
//! never disturbs the others.

mod charts;
mod formatters;
mod keymap_bar;
mod sidebar;
mod status_bar;
mod tables;
mod theme;

use crate::app::{App, ChartTab};
use crate::reactive::{DerivedView, MASS_BIN_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub use formatters::{fit_width, format_number, format_stat_value};
pub use theme::ThemeColors;

/// Draw the dashboard.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let view = app.session.current_view();

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[0]);

    sidebar::draw_sidebar(f, content[0], app, &colors);

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content[1]);

    let table_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(panels[0]);

    match &view {
        Ok(view) => {
            tables::draw_data_table(f, table_row[0], view, app.table_offset, &colors);
            tables::draw_data_grid(f, table_row[1], view, app.table_offset, &colors);
            draw_chart_panel(f, panels[1], app, view, &colors);
        }
        Err(e) => {
            // Computation failure: every sink shows it in its own panel.
            let msg = e.to_string();
            draw_panel_error(f, table_row[0], " Data Table ", &msg, &colors);
            draw_panel_error(f, table_row[1], " Data Grid ", &msg, &colors);
            draw_panel_error(f, panels[1], app.chart_tab.name(), &msg, &colors);
        }
    }

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

fn draw_chart_panel(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    view: &DerivedView,
    colors: &ThemeColors,
) {
    match app.chart_tab {
        ChartTab::SpeciesHistogram => charts::draw_species_histogram(f, area, view, colors),
        ChartTab::MassHistogram => {
            let bins = app
                .session
                .get(MASS_BIN_COUNT)
                .ok()
                .and_then(|v| v.as_count())
                .unwrap_or(0);
            if let Err(e) = charts::draw_mass_histogram(f, area, view, bins, colors) {
                draw_panel_error(f, area, " Mass Histogram ", &e.to_string(), colors);
            }
        }
        ChartTab::Scatter => charts::draw_scatter(f, area, view, colors),
    }
}

fn draw_panel_error(f: &mut Frame<'_>, area: Rect, title: &str, msg: &str, colors: &ThemeColors) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error));

    let paragraph = Paragraph::new(msg.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(colors.error).bg(colors.bg));

    f.render_widget(paragraph, area);
}
