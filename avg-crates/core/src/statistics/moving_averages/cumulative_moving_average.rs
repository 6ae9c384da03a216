use std::fmt::Debug;
use std::fmt::Display;

use num::cast::AsPrimitive;
use num::traits::NumAssign;
use num::Zero;

use super::MovingAverage;

/// The running arithmetic mean of every term observed since the last reset.
///
/// The mean is recomputed as `sum / num_terms` after every term, which is equivalent to the
/// recurrence `CA[i+1] = (x[i+1] + i * CA[i]) / (i + 1)`. No compensated summation is done, so
/// floating-point drift on very long streams is expected.
#[derive(Default, Debug, Copy, Clone)]
pub struct CumulativeMovingAverage<Term> {
    sum: Term,
    num_terms: u64,
    average: f64,
}

impl<Term> Display for CumulativeMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<Term> MovingAverage<Term> for CumulativeMovingAverage<Term>
where
    Term: Debug + NumAssign + AsPrimitive<f64>,
{
    fn add_term(&mut self, new_term: Term) -> f64 {
        self.sum += new_term;
        self.num_terms += 1;
        self.average = self.sum.as_() / (self.num_terms as f64);
        self.average
    }

    fn value(&self) -> f64 {
        self.average
    }

    fn reset(&mut self) {
        self.sum = Term::zero();
        self.num_terms = 0;
        self.average = 0.0;
    }

    fn num_terms(&self) -> u64 {
        self.num_terms
    }
}
