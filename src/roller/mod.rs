//! Seeded placement rolling

mod seed;
pub mod selector;


pub use seed::*;
pub use selector::*;
