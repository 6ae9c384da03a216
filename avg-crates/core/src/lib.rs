//! # avg-core
//! The averaging core of the `avg` tool. It provides two accumulators which consume a stream of
//! numbers one term at a time:
//! * [`CumulativeMovingAverage`][statistics::moving_averages::CumulativeMovingAverage], the
//!   running arithmetic mean of every term observed so far;
//! * [`SimpleMovingAverage`][statistics::moving_averages::SimpleMovingAverage], a two-level
//!   average which first collapses every fixed-size window of raw terms into its mean and then
//!   takes the cumulative average of those window means.
//!
//! Both implement the [`MovingAverage`][statistics::moving_averages::MovingAverage] trait:
//! ```rust
//! # use avg_core::statistics::moving_averages::MovingAverage;
//! # use avg_core::statistics::moving_averages::SimpleMovingAverage;
//! let mut average = SimpleMovingAverage::<f64>::new(3);
//! for term in [1.0, 2.0, 3.0, 4.0] {
//!     let _ = average.add_term(term);
//! }
//! // The trailing `4.0` does not complete a window, so only the first window counts.
//! assert_eq!(average.value(), 2.0);
//! ```
pub mod asserts;
pub mod statistics;

pub use convert_case;
