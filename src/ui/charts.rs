//! Chart sinks: histograms and scatter plot.

use super::{format_stat_value, ThemeColors};
use crate::chart::histogram;
use crate::data::{Attribute, Species};
use crate::error::Result;
use crate::reactive::DerivedView;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

fn panel_block<'a>(title: String, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

/// Draw record counts per species as a bar chart.
pub(super) fn draw_species_histogram(
    f: &mut Frame<'_>,
    area: Rect,
    view: &DerivedView,
    colors: &ThemeColors,
) {
    let bars: Vec<Bar<'_>> = Species::ALL
        .iter()
        .map(|&species| {
            Bar::default()
                .value(view.species_count(species) as u64)
                .label(Line::from(species.name()))
                .style(Style::default().fg(colors.species(species)))
                .value_style(
                    Style::default()
                        .fg(colors.bg)
                        .bg(colors.species(species))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel_block(" Species Histogram ".to_string(), colors))
        .data(BarGroup::default().bars(&bars))
        .bar_width(11)
        .bar_gap(3);

    f.render_widget(chart, area);
}

/// Draw the body-mass histogram, binned by the mass-bins control.
///
/// Fails when the requested bin count is zero; the caller paints the error
/// into this panel only.
pub(super) fn draw_mass_histogram(
    f: &mut Frame<'_>,
    area: Rect,
    view: &DerivedView,
    bins: u32,
    colors: &ThemeColors,
) -> Result<()> {
    let values: Vec<f64> = view
        .records()
        .filter_map(|r| Attribute::BodyMass.value_of(r))
        .collect();
    let buckets = histogram(&values, bins)?;

    let bars: Vec<Bar<'_>> = buckets
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count)
                .label(Line::from(b.label()))
                .style(Style::default().fg(colors.value))
        })
        .collect();

    // Narrow bars so a high bin count still fits a terminal row.
    let bar_width = if buckets.len() > 24 { 1 } else { 4 };

    let chart = BarChart::default()
        .block(panel_block(
            format!(" Mass Histogram: {} bins ", bins),
            colors,
        ))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
    Ok(())
}

/// Draw body mass against bill depth, one point set per species.
pub(super) fn draw_scatter(
    f: &mut Frame<'_>,
    area: Rect,
    view: &DerivedView,
    colors: &ThemeColors,
) {
    let points: Vec<(Species, Vec<(f64, f64)>)> = Species::ALL
        .iter()
        .map(|&species| {
            let pts = view
                .records()
                .filter(|r| r.species == species)
                .filter_map(|r| {
                    let x = Attribute::BodyMass.value_of(r)?;
                    let y = Attribute::BillDepth.value_of(r)?;
                    Some((x, y))
                })
                .collect();
            (species, pts)
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = points
        .iter()
        .map(|(species, pts)| {
            Dataset::default()
                .name(species.name())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.species(*species)))
                .data(pts)
        })
        .collect();

    let (x_min, x_max) = axis_bounds(view, Attribute::BodyMass);
    let (y_min, y_max) = axis_bounds(view, Attribute::BillDepth);

    let chart = Chart::new(datasets)
        .block(panel_block(" Scatter Plot ".to_string(), colors))
        .x_axis(
            Axis::default()
                .title(Span::styled(
                    Attribute::BodyMass.label(),
                    Style::default().fg(colors.label),
                ))
                .style(Style::default().fg(colors.border))
                .bounds([x_min, x_max])
                .labels(bound_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    Attribute::BillDepth.label(),
                    Style::default().fg(colors.label),
                ))
                .style(Style::default().fg(colors.border))
                .bounds([y_min, y_max])
                .labels(bound_labels(y_min, y_max)),
        );

    f.render_widget(chart, area);
}

fn axis_bounds(view: &DerivedView, attr: Attribute) -> (f64, f64) {
    match view.dataset().stats(attr) {
        Some(stats) if stats.max > stats.min => (stats.min, stats.max),
        Some(stats) => (stats.min - 1.0, stats.max + 1.0),
        None => (0.0, 1.0),
    }
}

fn bound_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_stat_value(min),
        format_stat_value((min + max) / 2.0),
        format_stat_value(max),
    ]
}
