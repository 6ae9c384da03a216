use std::fmt::Debug;

pub trait MovingAverage<Term>: Debug {
    /// Observes a new term and returns the updated value of the average.
    fn add_term(&mut self, new_term: Term) -> f64;

    /// Returns the moving average value; in case there are no terms, the convention is to return 0
    fn value(&self) -> f64;

    /// Forgets every observed term; afterwards [`MovingAverage::value`] returns 0 again.
    fn reset(&mut self);

    /// The number of raw terms observed since the last reset.
    fn num_terms(&self) -> u64;
}
