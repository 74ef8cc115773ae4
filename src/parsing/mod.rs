//! Dataset loading from the launch records CSV.
//!
//! Loading happens exactly once at process start. A missing or malformed
//! file is fatal: the rest of the system cannot function without data, so
//! there are no retries and no fallback.

pub mod csv_parser;


pub use csv_parser::{load_dataset, LoadError};
