//! # avg
//! Reads a stream of whitespace-separated numbers and computes a running average over them,
//! emitting either the final result or every intermediate value as it is computed.
//!
//! Two averaging strategies are supported, selected through [`RuntimeMode`]:
//! * `CMA`, the cumulative average of every value read so far;
//! * `SMA`, the mean of per-window means over consecutive windows of `window_size` values.
//!
//! The command-line tool resolves an [`AverageOptions`] once and hands it to [`driver::run`]:
//! ```rust
//! # use avg::driver;
//! # use avg::AverageOptions;
//! # use avg::RuntimeMode;
//! let options = AverageOptions {
//!     mode: RuntimeMode::CumulativeAverage,
//!     show_intermediates: true,
//!     ..Default::default()
//! };
//!
//! let mut output = Vec::new();
//! let summary = driver::run(&options, "1 2\n3".as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(summary.num_values, 3);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "1.000000\n1.500000\n2.000000\n"
//! );
//! ```
pub mod driver;
mod options;
pub mod parsers;

pub use avg_core;

pub use crate::options::AverageOptions;
pub use crate::options::RuntimeMode;
pub use crate::options::DEFAULT_WINDOW_SIZE;
