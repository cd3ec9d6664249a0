//! pixedit-test - Regression test framework for pixedit
//!
//! This crate provides a small regression harness, modelled on a classic
//! `regutils` design, plus synthetic fixture images. There are no golden
//! files: every expected value is computed or written inline.
//!
//! Two modes are supported:
//!
//! - **Compare**: record mismatches and fail at `cleanup` (default)
//! - **Display**: additionally print every comparison as it runs
//!
//! # Usage
//!
//! ```ignore
//! use pixedit_test::{RegParams, gradient_gray};
//!
//! let mut rp = RegParams::new("rotate");
//! let image = gradient_gray(4, 3).unwrap();
//! rp.compare_values(3.0, image.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{gradient_gray, random_gray, random_rgb, uniform_gray};
pub use params::{RegParams, RegTestMode};
