//! Contains the accumulators and the logging of run statistics.
pub mod moving_averages;
mod statistic_logging;

pub use statistic_logging::StatisticLogger;
