//! pixwarp-test - Regression test framework for pixwarp
//!
//! This crate provides a golden-file regression framework supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! plus deterministic synthetic source images in [`images`].
//!
//! # Usage
//!
//! ```ignore
//! use pixwarp_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("rotate");
//! rp.compare_values(255.0, alpha as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//! - `RUST_LOG`: `env_logger` filter, e.g. `pixwarp=trace`

mod error;
pub mod images;
mod params;
mod png_io;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixwarp-test is at crates/pixwarp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
