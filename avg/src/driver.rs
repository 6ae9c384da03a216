//! Drives a single averaging run: values are read from the input one at a time, fed into the
//! accumulator selected by the [`RuntimeMode`], and the produced averages are written to the
//! output, one per line with six decimals.
use std::io::BufRead;
use std::io::Write;

use avg_core::statistics::moving_averages::CumulativeMovingAverage;
use avg_core::statistics::moving_averages::MovingAverage;
use avg_core::statistics::moving_averages::SimpleMovingAverage;
use log::debug;

use crate::parsers::values::ValueReader;
use crate::AverageOptions;
use crate::RuntimeMode;

/// What happened during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The number of values that were read and observed.
    pub num_values: u64,
    /// The number of averages written to the output.
    pub num_lines_written: u64,
    /// The number of completed groups of `window_size` values; only counted for
    /// [`RuntimeMode::SimpleMovingAverage`].
    pub num_completed_windows: u64,
    /// The values of a trailing, incomplete window; they do not contribute to the average.
    pub num_discarded_values: u64,
}

/// Runs the averaging described by `options` over `input`, writing to `output`.
///
/// With intermediates, a cumulative average writes a line for every value and a simple moving
/// average writes a line whenever a window of `window_size` values completes. Without them, the
/// final value is written exactly once, also when the input contains no values at all.
///
/// A simple moving average with a window size of 0 is rejected with
/// [`std::io::ErrorKind::InvalidInput`] before any input is read.
pub fn run(
    options: &AverageOptions,
    input: impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<RunSummary> {
    debug!(
        "Computing {} (window size {}, intermediates: {})",
        options.mode, options.window_size, options.show_intermediates
    );

    let mut values = ValueReader::new(input);
    let summary = match options.mode {
        RuntimeMode::CumulativeAverage => {
            let mut average = CumulativeMovingAverage::<f64>::default();
            drive(&mut average, 1, options.show_intermediates, &mut values, output)?
        }
        RuntimeMode::SimpleMovingAverage => {
            if options.window_size == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "the window size of a simple moving average should be positive",
                ));
            }

            let mut average = SimpleMovingAverage::<f64>::new(options.window_size);
            let window_size = average.window_size();
            let summary = drive(
                &mut average,
                window_size,
                options.show_intermediates,
                &mut values,
                output,
            )?;
            RunSummary {
                num_completed_windows: average.num_completed_windows(),
                num_discarded_values: average.num_pending_terms(),
                ..summary
            }
        }
    };

    debug!(
        "Read {} values and wrote {} averages",
        summary.num_values, summary.num_lines_written
    );
    Ok(summary)
}

/// Feeds every value into `average`. The values are counted in groups of `group_size`,
/// independently of the accumulator, and the current value is written whenever a group completes
/// if `show_intermediates` is set. Otherwise the final value is written once the input ends.
///
/// The accumulator-specific counters of the returned summary are left for the caller to fill in.
fn drive<Average: MovingAverage<f64>>(
    average: &mut Average,
    group_size: u64,
    show_intermediates: bool,
    values: &mut ValueReader<impl BufRead>,
    output: &mut impl Write,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut num_in_group = 0;

    while let Some(value) = values.next_value()? {
        let _ = average.add_term(value);
        num_in_group += 1;

        if num_in_group == group_size {
            num_in_group = 0;
            if show_intermediates {
                write_average(output, average.value())?;
                summary.num_lines_written += 1;
            }
        }
    }

    if !show_intermediates {
        write_average(output, average.value())?;
        summary.num_lines_written += 1;
    }
    output.flush()?;

    summary.num_values = values.num_values_read();
    Ok(summary)
}

fn write_average(output: &mut impl Write, value: f64) -> std::io::Result<()> {
    writeln!(output, "{value:.6}")
}
