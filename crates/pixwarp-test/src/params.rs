//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::png_io;
use crate::{golden_dir, regout_dir};
use pixwarp_core::PixelFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, the mode and
/// every recorded failure. Failures never panic; the test asserts on
/// [`RegParams::cleanup`] at the end so that all mismatches get reported.
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from `REGTEST_MODE`. Also installs a test-friendly
    /// `env_logger`, so `RUST_LOG=pixwarp=trace` shows the library's
    /// internal logging for the run.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two numeric values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two byte arrays for exact equality
    ///
    /// Typically used on alpha rows or raw pixel buffers. The failure
    /// message names the first differing position.
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected == actual {
            return true;
        }

        let first = expected
            .iter()
            .zip(actual)
            .position(|(a, b)| a != b)
            .unwrap_or(expected.len().min(actual.len()));
        let msg = format!(
            "Failure in {}_reg: byte comparison for index {}\n\
             sizes: {} vs {}, first difference at {}",
            self.test_name,
            self.index,
            expected.len(),
            actual.len(),
            first
        );
        self.record_failure(msg);
        false
    }

    /// Write rendered buffers as an RGBA PNG and check against golden file
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Dimensions of the rendered area
    /// * `colors` - Row-major output colors, `width * height` entries
    /// * `alphas` - Row-major output alphas, `width * height` entries
    ///
    /// # Errors
    ///
    /// Returns an error if the buffers do not match the dimensions or the
    /// file cannot be written. Mismatches against the golden file are
    /// recorded as failures, not returned.
    pub fn write_png_and_check<F: PixelFormat>(
        &mut self,
        width: u32,
        height: u32,
        colors: &[F::Color],
        alphas: &[u8],
    ) -> TestResult<()> {
        self.index += 1;

        let required = width as usize * height as usize;
        let actual = colors.len().min(alphas.len());
        if actual < required {
            return Err(TestError::SizeMismatch {
                width,
                height,
                required,
                actual,
            });
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        let local_path = format!("{}/{}.{:02}.png", dir, self.test_name, self.index);

        let data = png_io::to_rgba::<F>(&colors[..required], &alphas[..required]);
        png_io::write_rgba(&local_path, width, height, &data)?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let dir = golden_dir();
        let golden_path = format!("{}/{}_golden.{:02}.{}", dir, self.test_name, self.index, ext);

        match self.mode {
            RegTestMode::Generate => {
                fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
                    path: dir.clone(),
                    message: e.to_string(),
                })?;
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    let err = TestError::GoldenNotFound { path: golden_path };
                    self.record_failure(format!("Failure in {}_reg: {}", self.test_name, err));
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                // Encoder settings may differ; fall back to the decoded pixels
                if local_data != golden_data && !same_png_pixels(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.record_failure(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn same_png_pixels(path1: &str, path2: &str) -> bool {
    match (png_io::read_raw(path1), png_io::read_raw(path2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
