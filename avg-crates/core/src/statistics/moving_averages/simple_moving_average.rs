use std::fmt::Debug;

use log::trace;
use num::cast::AsPrimitive;
use num::traits::NumAssign;

use super::CumulativeMovingAverage;
use super::MovingAverage;
use crate::avg_assert_moderate;
use crate::avg_assert_simple;

/// A two-level average over fixed-size windows of raw terms.
///
/// Terms are collected into the current window; once it holds `window_size` terms, its mean is
/// fed into a [`CumulativeMovingAverage`] over window means and the window starts over. The value
/// is the mean of the window means seen so far, so it stays 0 until the first window completes.
/// Terms of a window which never completes do not contribute to the value.
#[derive(Clone, Copy, Debug)]
pub struct SimpleMovingAverage<Term> {
    current_window: CumulativeMovingAverage<Term>,
    window_averages: CumulativeMovingAverage<f64>,
    window_size: u64,
}

impl<Term: Default> SimpleMovingAverage<Term> {
    pub fn new(window_size: u64) -> SimpleMovingAverage<Term> {
        avg_assert_simple!(window_size > 0, "the window size should be positive");
        SimpleMovingAverage {
            current_window: CumulativeMovingAverage::default(),
            window_averages: CumulativeMovingAverage::default(),
            window_size,
        }
    }
}

impl<Term> SimpleMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    /// Resets both levels of the average and starts using `window_size` for new windows.
    pub fn reset_with_window_size(&mut self, window_size: u64) {
        avg_assert_simple!(window_size > 0, "the window size should be positive");
        self.reset();
        self.window_size = window_size;
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    pub fn num_completed_windows(&self) -> u64 {
        self.window_averages.num_terms()
    }

    /// The number of terms in the current, incomplete, window.
    pub fn num_pending_terms(&self) -> u64 {
        self.current_window.num_terms()
    }
}

impl<Term> MovingAverage<Term> for SimpleMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    fn add_term(&mut self, new_term: Term) -> f64 {
        let _ = self.current_window.add_term(new_term);

        if self.current_window.num_terms() == self.window_size {
            let window_average = self.current_window.value();
            let _ = self.window_averages.add_term(window_average);
            self.current_window.reset();

            trace!(
                "Window {} completed with average {window_average}",
                self.window_averages.num_terms()
            );
        }

        avg_assert_moderate!(self.current_window.num_terms() < self.window_size);
        self.window_averages.value()
    }

    fn value(&self) -> f64 {
        self.window_averages.value()
    }

    fn reset(&mut self) {
        self.current_window.reset();
        self.window_averages.reset();
    }

    fn num_terms(&self) -> u64 {
        self.window_averages.num_terms() * self.window_size + self.current_window.num_terms()
    }
}
