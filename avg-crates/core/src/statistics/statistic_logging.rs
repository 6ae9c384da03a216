//! Responsible for behaviour related to logging statistics with a specific pre-fix and closing
//! lines.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;

use convert_case::Case;
use convert_case::Casing;

/// Writes statistics in the form `{PREFIX} {NAME}={VALUE}`, optionally followed by a closing line
/// once all of them have been written.
pub struct StatisticLogger {
    // What is printed before a statistic is printed
    statistic_prefix: &'static str,
    // A closing line which is printed after all of the statistics have been printed
    after_statistics: Option<&'static str>,
    // The casing of the name of the statistic
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send>,
}

impl Debug for StatisticLogger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticLogger")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .field("statistics_writer", &"<Writer>")
            .finish()
    }
}

impl StatisticLogger {
    pub fn new(
        prefix: &'static str,
        after: Option<&'static str>,
        casing: Option<Case>,
        writer: Box<dyn Write + Send>,
    ) -> StatisticLogger {
        StatisticLogger {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer,
        }
    }

    /// Logs the provided statistic with name `name` and value `value`.
    pub fn log_statistic(&mut self, name: impl Display, value: impl Display) -> std::io::Result<()> {
        let name = if let Some(casing) = self.statistics_casing {
            name.to_string().to_case(casing)
        } else {
            name.to_string()
        };
        writeln!(
            self.statistics_writer,
            "{} {name}={value}",
            self.statistic_prefix
        )
    }

    /// Logs the postfix of the statistics (if it has been set).
    pub fn log_statistic_postfix(&mut self) -> std::io::Result<()> {
        if let Some(post_fix) = self.after_statistics {
            writeln!(self.statistics_writer, "{post_fix}")?;
        }
        self.statistics_writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[derive(Clone, Debug, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_statistics_use_prefix_and_casing() {
        let buffer = SharedBuffer::default();
        let mut logger = StatisticLogger::new(
            "c STAT",
            None,
            Some(Case::Camel),
            Box::new(buffer.clone()),
        );

        logger.log_statistic("num_values", 4).unwrap();
        logger.log_statistic("num_discarded_values", 1).unwrap();
        logger.log_statistic_postfix().unwrap();

        assert_eq!(
            buffer.contents(),
            "c STAT numValues=4\nc STAT numDiscardedValues=1\n"
        );
    }

    #[test]
    fn test_postfix_is_written_when_configured() {
        let buffer = SharedBuffer::default();
        let mut logger =
            StatisticLogger::new("%%%stat:", Some("%%%stat-end"), None, Box::new(buffer.clone()));

        logger.log_statistic("num_values", 0).unwrap();
        logger.log_statistic_postfix().unwrap();

        assert_eq!(buffer.contents(), "%%%stat: num_values=0\n%%%stat-end\n");
    }
}
