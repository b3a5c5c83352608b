//! # tendency
//!
//! Forecast the next value of a numeric series from the central tendency and
//! spread of its rising and falling steps.
//!
//! ## Quick Start
//!
//! ```rust
//! use tendency::prelude::*;
//!
//! let series = [10.0, 12.0, 11.0, 14.0, 13.0, 15.0, 12.0, 16.0];
//! let result = forecast(&series, None, None)?;
//! assert!(result.lower_estimate <= result.expected);
//! assert!(result.expected <= result.upper_estimate);
//! # Ok::<(), tendency::TendencyError>(())
//! ```

pub use tendency_facade::*;
