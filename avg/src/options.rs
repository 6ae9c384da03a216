use std::fmt::Display;
use std::fmt::Formatter;

/// The window size used by [`RuntimeMode::SimpleMovingAverage`] unless another one is given.
pub const DEFAULT_WINDOW_SIZE: u64 = 10;

/// The averaging strategy applied to the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// The running mean of every value read so far.
    #[default]
    CumulativeAverage,
    /// The running mean of the means of consecutive, fixed-size windows.
    SimpleMovingAverage,
}

impl RuntimeMode {
    const NAMES: [(&'static str, RuntimeMode); 2] = [
        ("CMA", RuntimeMode::CumulativeAverage),
        ("SMA", RuntimeMode::SimpleMovingAverage),
    ];

    /// Looks up the mode with the given name. Names are case sensitive; `None` is returned for
    /// an unknown name.
    pub fn lookup(name: &str) -> Option<RuntimeMode> {
        RuntimeMode::NAMES
            .iter()
            .find(|(mode_name, _)| *mode_name == name)
            .map(|&(_, mode)| mode)
    }

    pub fn name(self) -> &'static str {
        match self {
            RuntimeMode::CumulativeAverage => "CMA",
            RuntimeMode::SimpleMovingAverage => "SMA",
        }
    }
}

impl Display for RuntimeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved configuration of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AverageOptions {
    pub mode: RuntimeMode,
    /// Only used by [`RuntimeMode::SimpleMovingAverage`]; should be positive.
    pub window_size: u64,
    /// Whether every produced value is written, rather than only the final one.
    pub show_intermediates: bool,
}

impl Default for AverageOptions {
    fn default() -> Self {
        AverageOptions {
            mode: RuntimeMode::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            show_intermediates: false,
        }
    }
}
