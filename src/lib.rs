//! Library exports for brewenv, shared between the binary and tests.

pub mod environment;
pub mod error;
pub mod logging;
