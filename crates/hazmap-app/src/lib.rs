//! Interactive session, terminal report, and map export for hazmap.

pub mod map;
pub mod report;
pub mod session;

pub use session::{run, run_selection, SelectionOutcome, SessionData};
