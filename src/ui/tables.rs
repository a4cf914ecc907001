//! Table sinks: the full data table and the compact data grid.

use super::{format_number, format_stat_value, ThemeColors};
use crate::data::{Attribute, PenguinRecord};
use crate::reactive::DerivedView;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

fn measurement(record: &PenguinRecord, attr: Attribute) -> String {
    attr.value_of(record)
        .map(format_stat_value)
        .unwrap_or_else(|| "NA".to_string())
}

/// Draw the full data table.
pub(super) fn draw_data_table(
    f: &mut Frame<'_>,
    area: Rect,
    view: &DerivedView,
    offset: usize,
    colors: &ThemeColors,
) {
    let visible = area.height.saturating_sub(3) as usize;

    let header = Row::new(vec![
        "Species", "Island", "Bill L", "Bill D", "Flipper", "Mass", "Sex", "Year",
    ])
    .style(
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = view
        .records()
        .skip(offset)
        .take(visible)
        .map(|r| {
            let species_style = Style::default().fg(colors.species(r.species));
            Row::new(vec![
                Cell::from(r.species.name()).style(species_style),
                Cell::from(r.island.name()),
                Cell::from(measurement(r, Attribute::BillLength)),
                Cell::from(measurement(r, Attribute::BillDepth)),
                Cell::from(measurement(r, Attribute::FlipperLength)),
                Cell::from(measurement(r, Attribute::BodyMass)),
                Cell::from(r.sex.map(|s| s.name()).unwrap_or("NA")),
                Cell::from(r.year.to_string()),
            ])
        })
        .collect();

    let title = format!(
        " Data Table: {} records (row {}) ",
        format_number(view.len()),
        format_number(offset.min(view.len().saturating_sub(1)) + 1)
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    )
    .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(table, area);
}

/// Draw the compact data grid.
pub(super) fn draw_data_grid(
    f: &mut Frame<'_>,
    area: Rect,
    view: &DerivedView,
    offset: usize,
    colors: &ThemeColors,
) {
    let visible = area.height.saturating_sub(3) as usize;

    let header = Row::new(vec!["#", "Sp", "Mass", "Year"]).style(
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = view
        .records()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, r)| {
            let abbrev = &r.species.name()[..3];
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(abbrev).style(Style::default().fg(colors.species(r.species))),
                Cell::from(measurement(r, Attribute::BodyMass)),
                Cell::from(r.year.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Data Grid ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    )
    .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(table, area);
}
