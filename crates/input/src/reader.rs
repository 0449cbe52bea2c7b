//! Blocking line reader for the turn loop.
//!
//! One call reads one line. A failed read is reported as an unrecognized line
//! so the loop can keep going. The stream closes on a clean end of input, or
//! once reads have failed [`MAX_READ_FAILURES`] times in a row.

use std::io::BufRead;

use log::{debug, warn};

use crate::map::parse_line;
use crate::types::Command;

/// Consecutive read errors tolerated before the input counts as closed.
pub const MAX_READ_FAILURES: u32 = 3;

/// What one read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A recognized command
    Command(Command),
    /// Anything else, including unreadable input; carries the trimmed text
    Unrecognized(String),
    /// The input stream reached its end
    Closed,
}

/// Reads commands line by line from any buffered source.
pub struct LineReader<R> {
    inner: R,
    line: String,
    failures: u32,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::with_capacity(16),
            failures: 0,
        }
    }

    /// Block until one line is available and classify it.
    pub fn read_event(&mut self) -> InputEvent {
        self.line.clear();
        match self.inner.read_line(&mut self.line) {
            Ok(0) => {
                debug!("input closed");
                InputEvent::Closed
            }
            Ok(_) => {
                self.failures = 0;
                match parse_line(&self.line) {
                    Some(cmd) => InputEvent::Command(cmd),
                    None => InputEvent::Unrecognized(self.line.trim().to_string()),
                }
            }
            Err(e) => {
                self.failures += 1;
                warn!(
                    "failed to read input line ({}/{}): {}",
                    self.failures, MAX_READ_FAILURES, e
                );
                if self.failures >= MAX_READ_FAILURES {
                    return InputEvent::Closed;
                }
                InputEvent::Unrecognized(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::collections::VecDeque;
    use std::io::{self, Cursor, Read};

    #[test]
    fn reads_commands_in_order() {
        let mut reader = LineReader::new(Cursor::new("w\n D \nz\nq\n"));
        assert_eq!(
            reader.read_event(),
            InputEvent::Command(Command::Move(Direction::Up))
        );
        assert_eq!(
            reader.read_event(),
            InputEvent::Command(Command::Move(Direction::Right))
        );
        assert_eq!(reader.read_event(), InputEvent::Unrecognized("z".into()));
        assert_eq!(reader.read_event(), InputEvent::Command(Command::Quit));
        assert_eq!(reader.read_event(), InputEvent::Closed);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut reader = LineReader::new(Cursor::new("a"));
        assert_eq!(
            reader.read_event(),
            InputEvent::Command(Command::Move(Direction::Left))
        );
        assert_eq!(reader.read_event(), InputEvent::Closed);
    }

    struct FailingRead;

    impl Read for FailingRead {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn read_error_is_unrecognized() {
        let mut reader = LineReader::new(io::BufReader::new(FailingRead));
        assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
    }

    #[test]
    fn repeated_read_errors_close_input() {
        let mut reader = LineReader::new(io::BufReader::new(FailingRead));
        for _ in 1..MAX_READ_FAILURES {
            assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
        }
        assert_eq!(reader.read_event(), InputEvent::Closed);
    }

    /// Replays a fixed list of read results, then reports end of input.
    struct FlakyRead {
        steps: VecDeque<Option<&'static [u8]>>,
    }

    impl Read for FlakyRead {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.steps.pop_front() {
                Some(Some(bytes)) => {
                    buf[..bytes.len()].copy_from_slice(bytes);
                    Ok(bytes.len())
                }
                Some(None) => Err(io::Error::new(io::ErrorKind::Other, "flaky")),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn successful_read_resets_failure_count() {
        let steps = VecDeque::from(vec![None, None, Some(&b"w\n"[..]), None, None]);
        let mut reader = LineReader::new(io::BufReader::new(FlakyRead { steps }));

        assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
        assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
        assert_eq!(
            reader.read_event(),
            InputEvent::Command(Command::Move(Direction::Up))
        );
        assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
        assert_eq!(reader.read_event(), InputEvent::Unrecognized(String::new()));
        assert_eq!(reader.read_event(), InputEvent::Closed);
    }

    #[test]
    fn invalid_utf8_is_unrecognized() {
        let mut reader = LineReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert!(matches!(reader.read_event(), InputEvent::Unrecognized(_)));
    }
}
