mod result;

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use avg::avg_core::asserts::AVG_ASSERT_LEVEL_DEFINITION;
use avg::avg_core::asserts::AVG_ASSERT_MODERATE;
use avg::avg_core::convert_case::Case;
use avg::avg_core::statistics::StatisticLogger;
use avg::driver;
use avg::driver::RunSummary;
use avg::AverageOptions;
use avg::RuntimeMode;
use avg::DEFAULT_WINDOW_SIZE;
use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use result::AvgError;
use result::AvgResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about
)]
struct Args {
    /// The file to read the values from. When omitted, the values are read from standard input.
    ///
    /// The values are whitespace-separated decimal numbers; reading stops at the end of the input
    /// or at the first token which is not a number.
    data_file: Option<PathBuf>,

    /// The averaging strategy.
    ///
    /// - "CMA" computes the cumulative moving average of all values
    /// - "SMA" computes the simple moving average, i.e. the cumulative average of the means of
    ///   consecutive windows of "--window-size" values; values of a trailing window which is not
    ///   complete are ignored
    #[arg(
        short = 'm',
        long = "mode",
        value_parser = runtime_mode_parser,
        default_value_t = RuntimeMode::CumulativeAverage,
        verbatim_doc_comment
    )]
    mode: RuntimeMode,

    /// The number of values in a window of the simple moving average.
    ///
    /// Possible values: u64 (positive, default 10)
    #[arg(
        short = 'W',
        long = "window-size",
        value_parser = window_size_parser,
        verbatim_doc_comment
    )]
    window_size: Option<u64>,

    /// Prints every intermediate average rather than only the final one.
    ///
    /// In case of "CMA" the average is printed after every value, in case of "SMA" it is printed
    /// after every completed window.
    ///
    /// Possible values: bool
    #[arg(short = 'I', long = "show-intermediates", verbatim_doc_comment)]
    show_intermediates: bool,

    /// Enables log message output.
    ///
    /// Log messages are written to standard error, the averages to standard output.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of the run statistics to standard error.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages. The call site is the file and line from which the message originated.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(verbose: bool, omit_timestamp: bool, omit_call_site: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

/// Parses the command line. A rejected option value is reported together with the usage, like
/// every other configuration error.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|error| {
        if error.kind() != ErrorKind::ValueValidation {
            error.exit()
        }

        let _ = error.print();
        eprintln!("\n{}", Args::command().render_usage());
        std::process::exit(error.exit_code())
    })
}

fn run() -> AvgResult<()> {
    let args = parse_args();

    configure_logging(args.verbose, args.omit_timestamp, args.omit_call_site);

    if AVG_ASSERT_LEVEL_DEFINITION >= AVG_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {AVG_ASSERT_LEVEL_DEFINITION}, meaning additional invariant checks are active."
        );
    }

    if args.mode == RuntimeMode::CumulativeAverage && args.window_size.is_some() {
        warn!("The window size is ignored in {} mode.", args.mode);
    }

    let options = AverageOptions {
        mode: args.mode,
        window_size: args.window_size.unwrap_or(DEFAULT_WINDOW_SIZE),
        show_intermediates: args.show_intermediates,
    };

    let mut output = std::io::stdout().lock();
    let summary = match args.data_file.as_ref() {
        Some(path) => {
            let data_file =
                File::open(path).map_err(|error| AvgError::data_file_open(error, path.display()))?;
            info!("Reading values from {}", path.display());
            driver::run(&options, BufReader::new(data_file), &mut output)?
        }
        None => {
            info!("Reading values from standard input");
            driver::run(&options, std::io::stdin().lock(), &mut output)?
        }
    };

    if args.log_statistics {
        log_statistics(&options, summary)?;
    }

    Ok(())
}

fn log_statistics(options: &AverageOptions, summary: RunSummary) -> std::io::Result<()> {
    let mut logger = StatisticLogger::new(
        "c STAT",
        None,
        Some(Case::Camel),
        Box::new(std::io::stderr()),
    );

    logger.log_statistic("num_values", summary.num_values)?;
    logger.log_statistic("num_lines_written", summary.num_lines_written)?;
    if options.mode == RuntimeMode::SimpleMovingAverage {
        logger.log_statistic("num_completed_windows", summary.num_completed_windows)?;
        logger.log_statistic("num_discarded_values", summary.num_discarded_values)?;
    }
    logger.log_statistic_postfix()
}

fn runtime_mode_parser(s: &str) -> Result<RuntimeMode, String> {
    RuntimeMode::lookup(s)
        .ok_or_else(|| format!("'{s}' is not a valid runtime mode, expected 'CMA' or 'SMA'"))
}

fn window_size_parser(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(window_size) if window_size >= 1 => Ok(window_size),
        _ => Err(format!(
            "'{s}' is not a valid window size, expected a positive number"
        )),
    }
}
