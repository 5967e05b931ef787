//! Review session controller for the ControlPanel service.
//!
//! [`ReviewManager`] owns every open review session and the reply slot each
//! one writes. The HTTP listener opens sessions; the operator surface
//! resolves them.

pub mod manager;

pub use manager::{ReviewError, ReviewManager, SessionSummary, SessionView};
