//! Protected layers and their ranking
//!
//! The registry is the only configuration the verifier needs. It is usually read from a small
//! text file with one layer name per line:
//!
//! ```text
//! # innermost first
//! Core
//! Service
//! Api
//! ```

mod errors;
mod names;
mod registry;

pub use errors::*;
pub use names::*;
pub use registry::*;
