//! gen-error-map
//!
//! Build-time generator for the signon `GDBusErrorEntry` table.
//!
//! Scans a header declaring `SIGNON_ERROR_*` constants and writes a C source
//! file that pairs every constant with its `SIGNOND_*_ERR_NAME` D-Bus name.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), gen_error_map::GenerateError> {
//!     let count = gen_error_map::generate_file(
//!         Path::new("signon-errors.h"),
//!         Path::new("signon-errors-map.c"),
//!     )?;
//!     println!("{count} entries");
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod generator;

// Utility modules
pub mod util;

// Re-exports
pub use generator::{
    generate_file, ErrorEntry, GenerateError, Generator, LinePattern, StreamError, TableTemplate,
};

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "gen-error-map";
