//! Live recalculation for an interactive front end
//!
//! Schedule, points and profile edits recompute immediately. Curve coefficient
//! edits are debounced: only the last edit inside the quiet period is applied,
//! and `is_calculating` stays raised until it lands.

mod calculator;

pub use calculator::*;
