//! Sidebar panel with the dashboard controls.

use super::{fit_width, ThemeColors};
use crate::app::App;
use crate::data::Species;
use crate::reactive::{ControlDomain, ControlSpec, ControlValue};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the control sidebar.
pub(super) fn draw_sidebar(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let label_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line<'_>> = Vec::new();

    for (idx, (spec, value)) in app.session.store().controls().enumerate() {
        let focused = idx == app.focus;

        let label_style = if focused {
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.label)
        };
        lines.push(Line::from(Span::styled(
            fit_width(&spec.label, label_width),
            label_style,
        )));

        lines.push(value_line(spec, value, focused, app, colors));
        lines.push(Line::default());
    }

    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}

fn value_line<'a>(
    spec: &ControlSpec,
    value: &'a ControlValue,
    focused: bool,
    app: &App,
    colors: &ThemeColors,
) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(colors.focus_fg).bg(colors.focus_bg)
    } else {
        Style::default().fg(colors.value)
    };

    match value {
        ControlValue::Choice(choice) => Line::from(Span::styled(
            format!(" ◂ {} ▸ ", choice),
            value_style,
        )),
        ControlValue::Count(n) => {
            let bounds = match &spec.domain {
                ControlDomain::Range { min, max } => format!("  [{}..{}]", min, max),
                _ => String::new(),
            };
            Line::from(vec![
                Span::styled(format!(" ◂ {} ▸ ", n), value_style),
                Span::styled(bounds, Style::default().fg(colors.border)),
            ])
        }
        ControlValue::Selection(selected) => {
            let mut spans = Vec::new();
            for (i, species) in Species::ALL.iter().enumerate() {
                let mark = if selected.contains(species.name()) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let mut style = Style::default().fg(colors.species(*species));
                if focused && i == app.species_cursor {
                    style = style.bg(colors.focus_bg).fg(colors.focus_fg);
                }
                spans.push(Span::styled(format!(" {} {}", mark, species.name()), style));
            }
            Line::from(spans)
        }
    }
}
