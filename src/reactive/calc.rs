//! Derived view calculator.
//!
//! A derived view is a deterministic function of (dataset, input state) at
//! the moment it was last computed. The calculator memoizes its result and
//! tracks, per run, exactly which store fields the compute body read; only
//! a newer version of one of those fields invalidates the cache. Fields the
//! body never dereferences are silently ignored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::data::{Dataset, PenguinRecord, Species};
use crate::error::{Result, RookeryError};
use crate::reactive::{ControlValue, InputStore};

/// The dataset slice considered current for display.
///
/// Holds a shared handle on the dataset plus the selected row indices;
/// records are referenced, never copied. Immutable to callers. Two calls
/// that hit the cache return the same allocation, observable through
/// [`Arc::ptr_eq`].
#[derive(Debug)]
pub struct DerivedView {
    dataset: Arc<Dataset>,
    rows: Vec<usize>,
}

impl DerivedView {
    /// A view over every row of the dataset.
    pub fn full(dataset: Arc<Dataset>) -> Self {
        let rows = (0..dataset.len()).collect();
        Self { dataset, rows }
    }

    /// A view over an explicit set of row indices.
    pub fn from_rows(dataset: Arc<Dataset>, rows: Vec<usize>) -> Self {
        Self { dataset, rows }
    }

    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Iterate over the records in the view.
    pub fn records(&self) -> impl Iterator<Item = &PenguinRecord> {
        self.rows.iter().filter_map(|&i| self.dataset.record(i))
    }

    /// Get the view's record at a view-relative index.
    pub fn record(&self, index: usize) -> Option<&PenguinRecord> {
        self.rows.get(index).and_then(|&i| self.dataset.record(i))
    }

    /// Number of records in the view for a species.
    pub fn species_count(&self, species: Species) -> usize {
        self.records().filter(|r| r.species == species).count()
    }
}

/// The read surface handed to a derived computation.
///
/// Every `get` through the context lands in the run's read log together
/// with the field's version at read time. The log becomes the exact
/// invalidation set for the cached result.
#[derive(Debug)]
pub struct ViewCtx<'a> {
    store: &'a InputStore,
    dataset: &'a Arc<Dataset>,
    reads: RefCell<HashMap<String, u64>>,
}

impl<'a> ViewCtx<'a> {
    fn new(store: &'a InputStore, dataset: &'a Arc<Dataset>) -> Self {
        Self {
            store,
            dataset,
            reads: RefCell::new(HashMap::new()),
        }
    }

    /// Read a control value, recording the dependency.
    ///
    /// An absent field is a computation failure: the session's controls are
    /// expected to be declared before any view is computed.
    pub fn get(&self, field: &str) -> Result<ControlValue> {
        let value = self.store.get(field).map_err(|_| {
            RookeryError::computation(format!("input state has no field '{}'", field))
        })?;
        let version = self.store.version(field).unwrap_or(0);
        self.reads.borrow_mut().insert(field.to_string(), version);
        Ok(value.clone())
    }

    /// The shared dataset handle.
    pub fn dataset(&self) -> &Arc<Dataset> {
        self.dataset
    }

    fn into_reads(self) -> HashMap<String, u64> {
        self.reads.into_inner()
    }
}

type ComputeFn = Box<dyn Fn(&ViewCtx<'_>) -> Result<DerivedView> + Send>;

#[derive(Debug)]
struct CacheEntry {
    view: Arc<DerivedView>,
    reads: HashMap<String, u64>,
}

/// Memoized derived-view calculator.
///
/// `&mut self` on [`ViewCalc::current_view`] serializes recomputation for a
/// session: consumers can never observe a partially written view.
pub struct ViewCalc {
    compute: ComputeFn,
    cache: Option<CacheEntry>,
}

impl std::fmt::Debug for ViewCalc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCalc")
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl ViewCalc {
    /// Create a calculator with the given compute body.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&ViewCtx<'_>) -> Result<DerivedView> + Send + 'static,
    {
        Self {
            compute: Box::new(compute),
            cache: None,
        }
    }

    /// The observed dashboard computation: returns the full dataset and
    /// reads no control, so no control change ever invalidates it.
    pub fn pass_through() -> Self {
        Self::new(|ctx| Ok(DerivedView::full(Arc::clone(ctx.dataset()))))
    }

    /// Return the current derived view, recomputing if stale.
    ///
    /// The first call computes and caches. Later calls return the cached
    /// view unless a field in the last run's read log has a newer version
    /// in the store, in which case the view is recomputed synchronously
    /// before returning. The compute body must not mutate the store or the
    /// dataset; the borrows enforce that.
    pub fn current_view(
        &mut self,
        store: &InputStore,
        dataset: &Arc<Dataset>,
    ) -> Result<Arc<DerivedView>> {
        if let Some(cache) = &self.cache {
            let stale = cache
                .reads
                .iter()
                .any(|(field, seen)| store.version(field).map_or(true, |cur| cur != *seen));
            if !stale {
                return Ok(Arc::clone(&cache.view));
            }
            tracing::debug!("derived view stale, recomputing");
        }

        let ctx = ViewCtx::new(store, dataset);
        let view = (self.compute)(&ctx)?;
        let entry = CacheEntry {
            view: Arc::new(view),
            reads: ctx.into_reads(),
        };
        let out = Arc::clone(&entry.view);
        self.cache = Some(entry);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_dataset;
    use crate::reactive::{ControlDomain, ControlSpec};

    fn store_with_bins() -> InputStore {
        let mut store = InputStore::new();
        store
            .declare(ControlSpec {
                id: "bins".to_string(),
                label: "Bins".to_string(),
                domain: ControlDomain::Range { min: 1, max: 50 },
                default: ControlValue::Count(10),
            })
            .unwrap();
        store
            .declare(ControlSpec {
                id: "attribute".to_string(),
                label: "Attribute".to_string(),
                domain: ControlDomain::OneOf(vec!["body_mass_g".to_string()]),
                default: ControlValue::Choice("body_mass_g".to_string()),
            })
            .unwrap();
        store
    }

    #[test]
    fn first_call_computes_and_caches() {
        let dataset = load_dataset().unwrap();
        let store = store_with_bins();
        let mut calc = ViewCalc::pass_through();

        let a = calc.current_view(&store, &dataset).unwrap();
        let b = calc.current_view(&store, &dataset).unwrap();
        assert_eq!(a.len(), dataset.len());
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn read_field_invalidates_cache() {
        let dataset = load_dataset().unwrap();
        let mut store = store_with_bins();
        // Body keeps the first `bins` rows; its read log is exactly {bins}.
        let mut calc = ViewCalc::new(|ctx| {
            let bins = ctx.get("bins")?.as_count().unwrap_or(0) as usize;
            let rows = (0..bins.min(ctx.dataset().len())).collect();
            Ok(DerivedView::from_rows(Arc::clone(ctx.dataset()), rows))
        });

        let a = calc.current_view(&store, &dataset).unwrap();
        assert_eq!(a.len(), 10);

        store.set("bins", ControlValue::Count(3)).unwrap();
        let b = calc.current_view(&store, &dataset).unwrap();
        assert_eq!(b.len(), 3);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unread_field_does_not_invalidate() {
        let dataset = load_dataset().unwrap();
        let mut store = store_with_bins();
        let mut calc = ViewCalc::new(|ctx| {
            let bins = ctx.get("bins")?.as_count().unwrap_or(0) as usize;
            let rows = (0..bins.min(ctx.dataset().len())).collect();
            Ok(DerivedView::from_rows(Arc::clone(ctx.dataset()), rows))
        });

        let a = calc.current_view(&store, &dataset).unwrap();
        store
            .set("attribute", ControlValue::Choice("body_mass_g".to_string()))
            .unwrap();
        let b = calc.current_view(&store, &dataset).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn pass_through_ignores_every_control() {
        let dataset = load_dataset().unwrap();
        let mut store = store_with_bins();
        let mut calc = ViewCalc::pass_through();

        let a = calc.current_view(&store, &dataset).unwrap();
        store.set("bins", ControlValue::Count(2)).unwrap();
        store
            .set("attribute", ControlValue::Choice("body_mass_g".to_string()))
            .unwrap();
        let b = calc.current_view(&store, &dataset).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.len(), 344);
    }

    #[test]
    fn absent_field_is_a_computation_error() {
        let dataset = load_dataset().unwrap();
        let store = InputStore::new();
        let mut calc = ViewCalc::new(|ctx| {
            let _ = ctx.get("bins")?;
            Ok(DerivedView::full(Arc::clone(ctx.dataset())))
        });

        let err = calc.current_view(&store, &dataset).unwrap_err();
        assert!(matches!(err, RookeryError::Computation { .. }));
    }

    #[test]
    fn view_records_reference_the_dataset() {
        let dataset = load_dataset().unwrap();
        let view = DerivedView::from_rows(Arc::clone(&dataset), vec![0, 2]);
        assert_eq!(view.len(), 2);
        assert_eq!(
            view.record(1).map(|r| r.species),
            dataset.record(2).map(|r| r.species)
        );
        assert!(view.record(2).is_none());
    }
}
