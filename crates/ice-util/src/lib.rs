//! ice-util - shared foundation for the ICE interpreter crates.
//!
//! Holds the two error kinds every phase agrees on: syntax errors carry a
//! source position, runtime errors carry only a message. The driver decides
//! how either is rendered and which exit code it maps to.

mod error;

pub use error::{IceError, RuntimeError, SyntaxError};
