//! Application state and logic.

use std::sync::Arc;

use crate::data::{Dataset, Species};
use crate::error::RookeryError;
use crate::reactive::{ControlDomain, ControlValue, Session, SELECTED_SPECIES};
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// The chart panel shown in the lower half of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    /// Record counts per species.
    #[default]
    SpeciesHistogram,
    /// Body mass distribution, binned by the mass-bins control.
    MassHistogram,
    /// Body mass vs bill depth scatter plot.
    Scatter,
}

impl ChartTab {
    /// Get the next tab in the cycle.
    pub fn next(self) -> Self {
        match self {
            ChartTab::SpeciesHistogram => ChartTab::MassHistogram,
            ChartTab::MassHistogram => ChartTab::Scatter,
            ChartTab::Scatter => ChartTab::SpeciesHistogram,
        }
    }

    /// Get the tab name.
    pub fn name(self) -> &'static str {
        match self {
            ChartTab::SpeciesHistogram => "Species Histogram",
            ChartTab::MassHistogram => "Mass Histogram",
            ChartTab::Scatter => "Scatter Plot",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The user's session: input state plus derived-view cache.
    pub session: Session,
    /// Index of the focused sidebar control.
    pub focus: usize,
    /// Cursor within the species checkbox group.
    pub species_cursor: usize,
    /// Active chart tab.
    pub chart_tab: ChartTab,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// First visible row of the data table.
    pub table_offset: usize,
}

impl App {
    /// Create a new application over a loaded dataset.
    pub fn new(dataset: Arc<Dataset>, theme: Theme) -> Self {
        let session = Session::new(dataset);
        Self {
            session,
            focus: 0,
            species_cursor: 0,
            chart_tab: ChartTab::default(),
            theme,
            status: "Ready".to_string(),
            table_offset: 0,
        }
    }

    fn focused_field(&self) -> Option<String> {
        self.session
            .store()
            .controls()
            .nth(self.focus)
            .map(|(spec, _)| spec.id.clone())
    }

    /// Move focus to the next sidebar control.
    pub fn focus_next(&mut self) {
        let n = self.session.store().len();
        if n > 0 {
            self.focus = (self.focus + 1) % n;
        }
    }

    /// Move focus to the previous sidebar control.
    pub fn focus_prev(&mut self) {
        let n = self.session.store().len();
        if n > 0 {
            self.focus = (self.focus + n - 1) % n;
        }
    }

    /// Adjust the focused control one step forward (right arrow / `l`).
    pub fn adjust_right(&mut self) {
        self.adjust(1);
    }

    /// Adjust the focused control one step backward (left arrow / `h`).
    pub fn adjust_left(&mut self) {
        self.adjust(-1);
    }

    fn adjust(&mut self, step: i64) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let store = self.session.store();
        let Ok(value) = store.get(&field) else {
            return;
        };

        let next = match value {
            ControlValue::Choice(current) => {
                let options = match self.domain_options(&field) {
                    Some(o) => o,
                    None => return,
                };
                let idx = options.iter().position(|o| o == current).unwrap_or(0);
                let idx = (idx as i64 + step).rem_euclid(options.len() as i64) as usize;
                ControlValue::Choice(options[idx].clone())
            }
            ControlValue::Count(n) => {
                let candidate = i64::from(*n) + step;
                if candidate < 0 {
                    self.status = format!("{}: already at minimum", field);
                    return;
                }
                ControlValue::Count(candidate as u32)
            }
            ControlValue::Selection(_) => {
                // Left/right moves the checkbox cursor; space toggles.
                let options = self.domain_options(&field).map(|o| o.len()).unwrap_or(0);
                if options > 0 {
                    let cur = self.species_cursor as i64 + step;
                    self.species_cursor = cur.rem_euclid(options as i64) as usize;
                }
                return;
            }
        };

        self.apply_set(&field, next);
    }

    /// Toggle the species under the checkbox cursor (space).
    pub fn toggle_selected(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field != SELECTED_SPECIES {
            return;
        }
        let Some(name) = Species::ALL
            .get(self.species_cursor)
            .map(|s| s.name().to_string())
        else {
            return;
        };
        let Ok(value) = self.session.get(&field) else {
            return;
        };
        let mut selected = value.as_selection().cloned().unwrap_or_default();
        if !selected.remove(&name) {
            selected.insert(name);
        }
        self.apply_set(&field, ControlValue::Selection(selected));
    }

    /// Validation failures are reported against the originating control and
    /// leave all state unchanged.
    fn apply_set(&mut self, field: &str, value: ControlValue) {
        match self.session.set(field, value) {
            Ok(()) => {
                self.status = format!("{} updated", field);
            }
            Err(RookeryError::Validation { field, reason }) => {
                self.status = format!("{}: {}", field, reason);
            }
            Err(e) => {
                self.status = e.to_string();
                tracing::error!("control update failed: {}", e);
            }
        }
    }

    fn domain_options(&self, field: &str) -> Option<Vec<String>> {
        self.session
            .store()
            .controls()
            .find(|(spec, _)| spec.id == field)
            .and_then(|(spec, _)| match &spec.domain {
                ControlDomain::OneOf(options) | ControlDomain::SubsetOf(options) => {
                    Some(options.clone())
                }
                ControlDomain::Range { .. } => None,
            })
    }

    /// Cycle to the next chart tab.
    pub fn next_chart(&mut self) {
        self.chart_tab = self.chart_tab.next();
        self.status = format!("Chart: {}", self.chart_tab.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll the data table down.
    pub fn scroll_table_down(&mut self, lines: usize) {
        let len = self.session.dataset().len();
        self.table_offset = (self.table_offset + lines).min(len.saturating_sub(1));
    }

    /// Scroll the data table up.
    pub fn scroll_table_up(&mut self, lines: usize) {
        self.table_offset = self.table_offset.saturating_sub(lines);
    }

    /// Copy a summary of the current view to the clipboard.
    pub fn copy_summary(&mut self) {
        match self.session.current_view() {
            Ok(view) => match util::copy_view_summary(&view) {
                Ok(()) => self.status = "View summary copied!".to_string(),
                Err(e) => self.status = format!("Copy failed: {}", e),
            },
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Copy the record at the top of the data table to the clipboard.
    pub fn copy_top_record(&mut self) {
        let offset = self.table_offset;
        match self.session.current_view() {
            Ok(view) => match view.record(offset) {
                Some(record) => match util::copy_record(record) {
                    Ok(()) => self.status = format!("Copied record {}!", offset + 1),
                    Err(e) => self.status = format!("Copy failed: {}", e),
                },
                None => self.status = "No record at cursor".to_string(),
            },
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_dataset;
    use crate::reactive::{HISTOGRAM_BIN_COUNT, SELECTED_ATTRIBUTE};

    fn app() -> App {
        App::new(load_dataset().unwrap(), Theme::GruvboxDark)
    }

    #[test]
    fn focus_wraps_around_the_declared_controls() {
        let mut app = app();
        assert_eq!(app.focus, 0);
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focus, 0);
        app.focus_prev();
        assert_eq!(app.focus, 3);
    }

    #[test]
    fn adjusting_attribute_cycles_the_choices() {
        let mut app = app();
        assert_eq!(
            app.session.get(SELECTED_ATTRIBUTE).unwrap().as_choice(),
            Some("bill_length_mm")
        );
        app.adjust_right();
        assert_eq!(
            app.session.get(SELECTED_ATTRIBUTE).unwrap().as_choice(),
            Some("bill_depth_mm")
        );
        app.adjust_left();
        app.adjust_left();
        assert_eq!(
            app.session.get(SELECTED_ATTRIBUTE).unwrap().as_choice(),
            Some("body_mass_g")
        );
    }

    #[test]
    fn bin_count_rejection_keeps_prior_value() {
        let mut app = app();
        app.focus = 1; // histogram_bin_count, default 1, domain [1, 50]
        app.adjust_left();
        assert_eq!(
            app.session.get(HISTOGRAM_BIN_COUNT).unwrap().as_count(),
            Some(1)
        );
        assert!(app.status.contains("histogram_bin_count"));
        app.adjust_right();
        assert_eq!(
            app.session.get(HISTOGRAM_BIN_COUNT).unwrap().as_count(),
            Some(2)
        );
    }

    #[test]
    fn space_toggles_the_species_under_the_cursor() {
        let mut app = app();
        app.focus = 3; // selected_species
        app.toggle_selected(); // cursor on Adelie, deselects it
        let selected = app.session.get(SELECTED_SPECIES).unwrap();
        assert!(selected.as_selection().unwrap().is_empty());

        app.adjust_right(); // cursor to Gentoo
        app.toggle_selected();
        let selected = app.session.get(SELECTED_SPECIES).unwrap();
        let selected = selected.as_selection().unwrap();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains("Gentoo"));
    }

    #[test]
    fn species_toggle_does_not_change_the_view() {
        let mut app = app();
        let before = app.session.current_view().unwrap();
        app.focus = 3;
        app.toggle_selected();
        let after = app.session.current_view().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after.len(), 344);
    }
}
