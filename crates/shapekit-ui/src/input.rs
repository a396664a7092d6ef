//! Whitespace-separated token input.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{InputError, InputResult};

/// Reads whitespace-separated tokens from a line-oriented source.
///
/// Tokens may be spread over several lines or packed onto one; each call
/// consumes exactly one token.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or [`InputError::EndOfInput`] once the source is drained.
    pub fn next_token(&mut self) -> InputResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as an `i32`.
    ///
    /// A malformed token is consumed and reported, together with the rest
    /// of its line, so the next read starts on fresh input.
    pub fn next_i32(&mut self) -> InputResult<i32> {
        let token = self.next_token()?;
        token.parse::<i32>().map_err(|_| {
            self.pending.clear();
            InputError::NotAnInteger { token }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("1 2\n\n  3\n4"));
        assert_eq!(reader.next_i32().unwrap(), 1);
        assert_eq!(reader.next_i32().unwrap(), 2);
        assert_eq!(reader.next_i32().unwrap(), 3);
        assert_eq!(reader.next_i32().unwrap(), 4);
        assert!(matches!(reader.next_i32(), Err(InputError::EndOfInput)));
    }

    #[test]
    fn test_bad_token_discards_rest_of_line() {
        let mut reader = TokenReader::new(Cursor::new("x 5 6\n7\n"));
        assert!(matches!(
            reader.next_i32(),
            Err(InputError::NotAnInteger { token }) if token == "x"
        ));
        assert_eq!(reader.next_i32().unwrap(), 7);
    }

    #[test]
    fn test_out_of_range_integer_is_rejected() {
        let mut reader = TokenReader::new(Cursor::new("99999999999\n"));
        assert!(matches!(
            reader.next_i32(),
            Err(InputError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_negative_numbers() {
        let mut reader = TokenReader::new(Cursor::new("-3 +4"));
        assert_eq!(reader.next_i32().unwrap(), -3);
        assert_eq!(reader.next_i32().unwrap(), 4);
    }
}
