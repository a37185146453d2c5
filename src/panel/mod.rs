//! Display model of the sunrise/sunset widget and its submit handler.
//!
//! The widget toolkit itself lives elsewhere; this module owns what the
//! widgets show: the three input fields, the submit control and the two
//! read-only panels.

mod handlers;
mod state;

pub use handlers::{SunPanel, SunReport};
pub use state::{BusyGuard, Form, PanelState, Phase, SubmitControl, TextPanel};
