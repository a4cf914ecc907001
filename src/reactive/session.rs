//! Per-session wiring of input state, calculator and dataset.

use std::sync::Arc;

use crate::data::{Attribute, Dataset, Species};
use crate::error::Result;
use crate::reactive::{
    ControlDomain, ControlSpec, ControlValue, DerivedView, InputStore, ViewCalc, ViewCtx,
};

/// Field id of the attribute selector.
pub const SELECTED_ATTRIBUTE: &str = "selected_attribute";
/// Field id of the histogram bin-count input, domain [1, 50].
pub const HISTOGRAM_BIN_COUNT: &str = "histogram_bin_count";
/// Field id of the body-mass bin-count slider, domain [0, 100].
pub const MASS_BIN_COUNT: &str = "mass_bin_count";
/// Field id of the species checkbox group.
pub const SELECTED_SPECIES: &str = "selected_species";

/// One isolated user interaction context.
///
/// A session owns its input store and view cache and shares the immutable
/// dataset with every other session. Nothing a session does is visible to
/// another session.
#[derive(Debug)]
pub struct Session {
    dataset: Arc<Dataset>,
    store: InputStore,
    calc: ViewCalc,
}

impl Session {
    /// Create a session over a shared dataset, with the dashboard's
    /// controls declared at their defaults and the observed pass-through
    /// view computation.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_compute(dataset, ViewCalc::pass_through())
    }

    /// Create a session with a custom view computation.
    pub fn with_compute(dataset: Arc<Dataset>, calc: ViewCalc) -> Self {
        let mut store = InputStore::new();
        for spec in dashboard_controls() {
            // Declarations are static and self-consistent.
            store
                .declare(spec)
                .unwrap_or_else(|e| unreachable!("invalid control declaration: {e}"));
        }
        Self {
            dataset,
            store,
            calc,
        }
    }

    /// Update a control value. Validation failures leave state unchanged.
    pub fn set(&mut self, field: &str, value: ControlValue) -> Result<()> {
        self.store.set(field, value)
    }

    /// Get the current value of a control.
    pub fn get(&self, field: &str) -> Result<&ControlValue> {
        self.store.get(field)
    }

    /// The current derived view, recomputed if stale.
    pub fn current_view(&mut self) -> Result<Arc<DerivedView>> {
        self.calc.current_view(&self.store, &self.dataset)
    }

    /// Read access to the input store, for rendering the controls.
    pub fn store(&self) -> &InputStore {
        &self.store
    }

    /// The shared dataset handle.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }
}

/// The dashboard's control declarations.
fn dashboard_controls() -> Vec<ControlSpec> {
    vec![
        ControlSpec {
            id: SELECTED_ATTRIBUTE.to_string(),
            label: "Select Attribute".to_string(),
            domain: ControlDomain::OneOf(
                Attribute::ALL.iter().map(|a| a.name().to_string()).collect(),
            ),
            default: ControlValue::Choice(Attribute::BillLength.name().to_string()),
        },
        ControlSpec {
            id: HISTOGRAM_BIN_COUNT.to_string(),
            label: "Bin Count".to_string(),
            domain: ControlDomain::Range { min: 1, max: 50 },
            default: ControlValue::Count(1),
        },
        ControlSpec {
            id: MASS_BIN_COUNT.to_string(),
            label: "Mass Bins".to_string(),
            domain: ControlDomain::Range { min: 0, max: 100 },
            default: ControlValue::Count(50),
        },
        ControlSpec {
            id: SELECTED_SPECIES.to_string(),
            label: "Species Checkbox".to_string(),
            domain: ControlDomain::SubsetOf(
                Species::ALL.iter().map(|s| s.name().to_string()).collect(),
            ),
            default: ControlValue::selection([Species::Adelie.name()]),
        },
    ]
}

/// A filtering computation that honors the species checkboxes.
///
/// Not wired into the default session; the observed dashboard behavior is
/// the pass-through. Kept as the drop-in body for when product intent for
/// real filtering is confirmed.
#[allow(dead_code)]
pub(crate) fn species_filter(ctx: &ViewCtx<'_>) -> Result<DerivedView> {
    let selected = ctx.get(SELECTED_SPECIES)?;
    let selected = selected.as_selection().cloned().unwrap_or_default();
    let rows = ctx
        .dataset()
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| selected.contains(r.species.name()))
        .map(|(i, _)| i)
        .collect();
    Ok(DerivedView::from_rows(Arc::clone(ctx.dataset()), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_dataset;

    #[test]
    fn fresh_session_has_declared_defaults() {
        let dataset = load_dataset().unwrap();
        let session = Session::new(dataset);

        assert_eq!(
            session.get(SELECTED_ATTRIBUTE).unwrap().as_choice(),
            Some("bill_length_mm")
        );
        assert_eq!(session.get(HISTOGRAM_BIN_COUNT).unwrap().as_count(), Some(1));
        assert_eq!(session.get(MASS_BIN_COUNT).unwrap().as_count(), Some(50));
        let species = session.get(SELECTED_SPECIES).unwrap();
        let species = species.as_selection().unwrap();
        assert_eq!(species.len(), 1);
        assert!(species.contains("Adelie"));
    }

    #[test]
    fn fresh_session_view_is_the_full_dataset() {
        let dataset = load_dataset().unwrap();
        let mut session = Session::new(Arc::clone(&dataset));
        let view = session.current_view().unwrap();
        assert_eq!(view.len(), dataset.len());
    }

    #[test]
    fn species_filter_body_reads_the_checkboxes() {
        let dataset = load_dataset().unwrap();
        let mut session =
            Session::with_compute(Arc::clone(&dataset), ViewCalc::new(species_filter));

        let view = session.current_view().unwrap();
        assert_eq!(view.len(), 152); // default selection {Adelie}

        session
            .set(SELECTED_SPECIES, ControlValue::selection(["Gentoo"]))
            .unwrap();
        let view = session.current_view().unwrap();
        assert_eq!(view.len(), 124);
    }
}
