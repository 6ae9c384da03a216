pub(crate) mod cumulative_moving_average;
pub(crate) mod moving_average;
pub(crate) mod simple_moving_average;

pub use cumulative_moving_average::CumulativeMovingAverage;
pub use moving_average::MovingAverage;
pub use simple_moving_average::SimpleMovingAverage;
