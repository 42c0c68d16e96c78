// This module re-exports important pieces for convenience,
// so we can "use crate::environment::*" easily.
pub mod load;
pub mod types;
pub mod validate;

pub use load::*;
pub use types::*;
