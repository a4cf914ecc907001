//! Rookery - a terminal dashboard for the Palmer penguins dataset.
//!
//! Rookery loads the penguin morphological measurements once at startup and
//! renders them as an interactive terminal dashboard: a sidebar of controls,
//! two table views and a set of charts. The controls feed a per-session
//! input store; a memoized derived-view calculator with execution-time read
//! tracking decides when the displayed view must be recomputed.
//!
//! # Example
//!
//! ```
//! use rookery::data::load_dataset;
//! use rookery::reactive::Session;
//!
//! let dataset = load_dataset().expect("embedded dataset");
//! let mut session = Session::new(dataset);
//!
//! // With no interactions, the view is the full dataset.
//! let view = session.current_view().expect("view");
//! assert_eq!(view.len(), 344);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod reactive;
pub mod ui;
pub mod util;

pub use error::{Result, RookeryError};
