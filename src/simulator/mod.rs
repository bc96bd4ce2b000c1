//! Simulation engine module

mod annotations;
mod engine;
mod report;
#[cfg(feature = "python")]
mod session;


pub use annotations::*;
pub use engine::*;
pub use report::*;
#[cfg(feature = "python")]
pub use session::*;
