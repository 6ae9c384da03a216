//! A reader for streams of whitespace-separated numbers. The input is consumed in chunks, as they
//! are provided by the underlying [`BufRead`], and a single token buffer is re-used for every
//! number, so arbitrarily long inputs are read in constant memory.
//!
//! The first token which is not a number ends the stream, exactly as the end of the input does.
//! Nothing after such a token is read.
use std::io::BufRead;
use std::io::ErrorKind;

use log::debug;

/// Yields the numbers of the underlying input, in order, until the input is exhausted or a token
/// fails to parse as an [`f64`].
#[derive(Debug)]
pub struct ValueReader<Source> {
    source: Source,
    token: Vec<u8>,
    num_values_read: u64,
    exhausted: bool,
}

impl<Source: BufRead> ValueReader<Source> {
    pub fn new(source: Source) -> Self {
        ValueReader {
            source,
            token: vec![],
            num_values_read: 0,
            exhausted: false,
        }
    }

    /// The number of values which have been successfully parsed so far.
    pub fn num_values_read(&self) -> u64 {
        self.num_values_read
    }

    /// Reads the next value. `Ok(None)` signals that no further value is available; an error is
    /// reported once, after which the reader is exhausted.
    pub fn next_value(&mut self) -> std::io::Result<Option<f64>> {
        if self.exhausted {
            return Ok(None);
        }

        loop {
            let (num_bytes, token_complete) = {
                let data = match self.source.fill_buf() {
                    Ok(data) => data,
                    Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                    Err(error) => {
                        self.exhausted = true;
                        return Err(error);
                    }
                };

                if data.is_empty() {
                    // The end of the input terminates the token that is being read, if any.
                    (0, true)
                } else {
                    scan_token(data, &mut self.token)
                }
            };

            self.source.consume(num_bytes);

            if token_complete {
                return Ok(self.finish_token());
            }
        }
    }

    fn finish_token(&mut self) -> Option<f64> {
        if self.token.is_empty() {
            self.exhausted = true;
            return None;
        }

        let value = std::str::from_utf8(&self.token)
            .ok()
            .and_then(|token| token.parse::<f64>().ok());

        match value {
            Some(_) => self.num_values_read += 1,
            None => {
                debug!(
                    "Stopped reading at non-numeric token '{}'",
                    String::from_utf8_lossy(&self.token)
                );
                self.exhausted = true;
            }
        }

        self.token.clear();
        value
    }
}

impl<Source: BufRead> Iterator for ValueReader<Source> {
    type Item = std::io::Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().transpose()
    }
}

/// Appends the bytes of `data` to `token` until a separator follows a non-empty token. Returns the
/// number of bytes that were consumed and whether the token is complete.
fn scan_token(data: &[u8], token: &mut Vec<u8>) -> (usize, bool) {
    for (index, &byte) in data.iter().enumerate() {
        if is_separator(byte) {
            if !token.is_empty() {
                return (index + 1, true);
            }
        } else {
            token.push(byte);
        }
    }

    (data.len(), false)
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;
    use std::io::Read;

    use super::*;

    fn read_all(input: &str) -> Vec<f64> {
        ValueReader::new(input.as_bytes())
            .collect::<std::io::Result<Vec<_>>>()
            .expect("reading from a slice does not fail")
    }

    #[test]
    fn values_separated_by_any_whitespace() {
        assert_eq!(
            read_all("1 2\n3\t4\r\n  5.5\x0c-6"),
            vec![1.0, 2.0, 3.0, 4.0, 5.5, -6.0]
        );
    }

    #[test]
    fn integer_and_floating_point_notations() {
        assert_eq!(
            read_all("10 +2 -0.5 .25 3. 1e3 2.5E-1"),
            vec![10.0, 2.0, -0.5, 0.25, 3.0, 1000.0, 0.25]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(read_all("").is_empty());
        assert!(read_all(" \n\n\t ").is_empty());
    }

    #[test]
    fn last_token_without_trailing_newline() {
        assert_eq!(read_all("1\n2"), vec![1.0, 2.0]);
    }

    #[test]
    fn non_numeric_token_ends_the_stream() {
        let mut reader = ValueReader::new("1 2 three 4 5".as_bytes());

        assert_eq!(reader.next_value().unwrap(), Some(1.0));
        assert_eq!(reader.next_value().unwrap(), Some(2.0));
        assert_eq!(reader.next_value().unwrap(), None);
        assert_eq!(reader.next_value().unwrap(), None);
        assert_eq!(reader.num_values_read(), 2);
    }

    #[test]
    fn invalid_utf8_ends_the_stream() {
        let input: &[u8] = b"7 \xff\xfe 8";
        let values = ValueReader::new(input)
            .collect::<std::io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(values, vec![7.0]);
    }

    #[test]
    fn tokens_split_across_chunks() {
        let input = "123.25 4 56789 0.5\n";
        let source = BufReader::with_capacity(1, input.as_bytes());

        let values = ValueReader::new(source)
            .collect::<std::io::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(values, vec![123.25, 4.0, 56789.0, 0.5]);
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unavailable"))
        }
    }

    #[test]
    fn io_errors_are_reported_once() {
        let mut reader = ValueReader::new(BufReader::new(FailingSource));

        let error = reader.next_value().expect_err("the source fails");
        assert_eq!(error.to_string(), "device unavailable");
        assert_eq!(reader.next_value().unwrap(), None);
    }
}
