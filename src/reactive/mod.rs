//! Reactive input state and derived views.
//!
//! This module implements the pipeline between user-input state and the
//! dataset view the display widgets render: a store of validated control
//! values, a memoized view calculator with execution-time read tracking,
//! and the per-session wiring of both over a shared dataset.

mod calc;
mod session;
mod store;

pub use calc::{DerivedView, ViewCalc, ViewCtx};
pub use session::{
    Session, HISTOGRAM_BIN_COUNT, MASS_BIN_COUNT, SELECTED_ATTRIBUTE, SELECTED_SPECIES,
};
pub use store::{ControlDomain, ControlSpec, ControlValue, InputStore};
