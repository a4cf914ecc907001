//! Input state store.
//!
//! Holds the current values of the declared UI controls for one session.
//! Every successful update bumps a per-field version counter; the view
//! calculator compares those counters against its read log to decide
//! whether its cached view is stale.

use std::collections::BTreeSet;

use crate::error::{Result, RookeryError};

/// The domain of values a control accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlDomain {
    /// Exactly one of an enumerated set of options.
    OneOf(Vec<String>),
    /// An integer within an inclusive range.
    Range {
        /// Lower bound, inclusive.
        min: u32,
        /// Upper bound, inclusive.
        max: u32,
    },
    /// Any subset of an enumerated set of options.
    SubsetOf(Vec<String>),
}

impl ControlDomain {
    /// Check a candidate value against this domain.
    fn check(&self, value: &ControlValue) -> std::result::Result<(), String> {
        match (self, value) {
            (ControlDomain::OneOf(options), ControlValue::Choice(choice)) => {
                if options.iter().any(|o| o == choice) {
                    Ok(())
                } else {
                    Err(format!("'{}' is not one of {}", choice, options.join(", ")))
                }
            }
            (ControlDomain::Range { min, max }, ControlValue::Count(n)) => {
                if (min..=max).contains(&n) {
                    Ok(())
                } else {
                    Err(format!("{} is outside [{}, {}]", n, min, max))
                }
            }
            (ControlDomain::SubsetOf(options), ControlValue::Selection(selected)) => {
                match selected.iter().find(|s| !options.iter().any(|o| &o == s)) {
                    None => Ok(()),
                    Some(bad) => Err(format!("'{}' is not one of {}", bad, options.join(", "))),
                }
            }
            _ => Err("value kind does not match the control's domain".to_string()),
        }
    }
}

/// The current value of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// A single selected option.
    Choice(String),
    /// An integer count (bin counts).
    Count(u32),
    /// A multi-select set of options.
    Selection(BTreeSet<String>),
}

impl ControlValue {
    /// Build a selection value from option names.
    pub fn selection<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ControlValue::Selection(options.into_iter().map(Into::into).collect())
    }

    /// The choice, if this is a choice value.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ControlValue::Choice(c) => Some(c),
            _ => None,
        }
    }

    /// The count, if this is a count value.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            ControlValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// The selected set, if this is a selection value.
    pub fn as_selection(&self) -> Option<&BTreeSet<String>> {
        match self {
            ControlValue::Selection(s) => Some(s),
            _ => None,
        }
    }
}

/// Declaration of one UI control.
#[derive(Debug, Clone)]
pub struct ControlSpec {
    /// Field identifier, unique within a store.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Accepted value domain.
    pub domain: ControlDomain,
    /// Initial value.
    pub default: ControlValue,
}

#[derive(Debug)]
struct ControlState {
    spec: ControlSpec,
    value: ControlValue,
    version: u64,
}

/// Store of current control values for one session.
///
/// Controls must be declared before use; reads of undeclared fields fail
/// with [`RookeryError::UnknownField`]. Mutation happens only through
/// [`InputStore::set`], one update at a time.
#[derive(Debug, Default)]
pub struct InputStore {
    controls: Vec<ControlState>,
    last_change: Option<String>,
}

impl InputStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a control with its domain and default value.
    ///
    /// The default must itself satisfy the domain.
    pub fn declare(&mut self, spec: ControlSpec) -> Result<()> {
        if self.controls.iter().any(|c| c.spec.id == spec.id) {
            return Err(RookeryError::validation(
                &spec.id,
                "control is already declared",
            ));
        }
        spec.domain
            .check(&spec.default)
            .map_err(|reason| RookeryError::validation(&spec.id, reason))?;
        self.controls.push(ControlState {
            value: spec.default.clone(),
            spec,
            version: 0,
        });
        Ok(())
    }

    fn state(&self, field: &str) -> Result<&ControlState> {
        self.controls
            .iter()
            .find(|c| c.spec.id == field)
            .ok_or_else(|| RookeryError::unknown_field(field))
    }

    /// Update a control value.
    ///
    /// The value is validated against the control's declared domain. An
    /// invalid value is rejected with [`RookeryError::Validation`] and
    /// leaves the stored value unchanged.
    pub fn set(&mut self, field: &str, value: ControlValue) -> Result<()> {
        let state = self
            .controls
            .iter_mut()
            .find(|c| c.spec.id == field)
            .ok_or_else(|| RookeryError::unknown_field(field))?;
        state
            .spec
            .domain
            .check(&value)
            .map_err(|reason| RookeryError::validation(field, reason))?;
        state.value = value;
        state.version += 1;
        self.last_change = Some(state.spec.id.clone());
        tracing::debug!(field, version = state.version, "control updated");
        Ok(())
    }

    /// Get the current value of a control.
    pub fn get(&self, field: &str) -> Result<&ControlValue> {
        self.state(field).map(|s| &s.value)
    }

    /// Current version counter of a field. Bumped on every successful `set`.
    pub fn version(&self, field: &str) -> Result<u64> {
        self.state(field).map(|s| s.version)
    }

    /// The field id of the most recent successful update, if any.
    pub fn last_change(&self) -> Option<&str> {
        self.last_change.as_deref()
    }

    /// Declared controls with their current values, in declaration order.
    pub fn controls(&self) -> impl Iterator<Item = (&ControlSpec, &ControlValue)> {
        self.controls.iter().map(|c| (&c.spec, &c.value))
    }

    /// Number of declared controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Check whether any control is declared.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin_store() -> InputStore {
        let mut store = InputStore::new();
        store
            .declare(ControlSpec {
                id: "bin_count".to_string(),
                label: "Bin Count".to_string(),
                domain: ControlDomain::Range { min: 1, max: 50 },
                default: ControlValue::Count(1),
            })
            .unwrap();
        store
    }

    #[test]
    fn set_validates_range_and_leaves_state_unchanged() {
        let mut store = bin_store();
        store.set("bin_count", ControlValue::Count(25)).unwrap();

        let err = store.set("bin_count", ControlValue::Count(0)).unwrap_err();
        assert!(matches!(err, RookeryError::Validation { ref field, .. } if field == "bin_count"));
        assert_eq!(store.get("bin_count").unwrap().as_count(), Some(25));

        let err = store.set("bin_count", ControlValue::Count(51)).unwrap_err();
        assert!(matches!(err, RookeryError::Validation { .. }));
        assert_eq!(store.get("bin_count").unwrap().as_count(), Some(25));
    }

    #[test]
    fn set_rejects_mismatched_value_kind() {
        let mut store = bin_store();
        let err = store
            .set("bin_count", ControlValue::Choice("ten".to_string()))
            .unwrap_err();
        assert!(matches!(err, RookeryError::Validation { .. }));
    }

    #[test]
    fn unknown_field_is_rejected_on_get_and_set() {
        let mut store = bin_store();
        assert!(matches!(
            store.get("bin_counts").unwrap_err(),
            RookeryError::UnknownField { .. }
        ));
        assert!(matches!(
            store.set("bin_counts", ControlValue::Count(5)).unwrap_err(),
            RookeryError::UnknownField { .. }
        ));
    }

    #[test]
    fn version_bumps_only_on_successful_set() {
        let mut store = bin_store();
        assert_eq!(store.version("bin_count").unwrap(), 0);
        store.set("bin_count", ControlValue::Count(3)).unwrap();
        assert_eq!(store.version("bin_count").unwrap(), 1);
        let _ = store.set("bin_count", ControlValue::Count(0));
        assert_eq!(store.version("bin_count").unwrap(), 1);
    }

    #[test]
    fn change_notification_tags_the_updated_field() {
        let mut store = bin_store();
        assert_eq!(store.last_change(), None);
        store.set("bin_count", ControlValue::Count(2)).unwrap();
        assert_eq!(store.last_change(), Some("bin_count"));
    }

    #[test]
    fn selection_domain_rejects_foreign_options() {
        let mut store = InputStore::new();
        store
            .declare(ControlSpec {
                id: "species".to_string(),
                label: "Species".to_string(),
                domain: ControlDomain::SubsetOf(vec![
                    "Adelie".to_string(),
                    "Gentoo".to_string(),
                    "Chinstrap".to_string(),
                ]),
                default: ControlValue::selection(["Adelie"]),
            })
            .unwrap();

        store
            .set("species", ControlValue::selection(["Gentoo", "Chinstrap"]))
            .unwrap();
        let err = store
            .set("species", ControlValue::selection(["Emperor"]))
            .unwrap_err();
        assert!(matches!(err, RookeryError::Validation { .. }));
        assert_eq!(
            store.get("species").unwrap().as_selection().unwrap().len(),
            2
        );

        // The empty subset is valid.
        store
            .set("species", ControlValue::selection(Vec::<String>::new()))
            .unwrap();
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let mut store = bin_store();
        let err = store
            .declare(ControlSpec {
                id: "bin_count".to_string(),
                label: "Again".to_string(),
                domain: ControlDomain::Range { min: 0, max: 9 },
                default: ControlValue::Count(0),
            })
            .unwrap_err();
        assert!(matches!(err, RookeryError::Validation { .. }));
    }
}
