//! Console input scanning.
//!
//! The tutorial mixes two read styles: whole lines (the user's name, the
//! final wait-for-Enter) and whitespace-delimited integer tokens that may
//! share a line or arrive on separate lines. [`Scanner`] buffers the tokens
//! of the most recently consumed line so `2 5` typed on one line satisfies
//! two integer reads, matching stream-extraction semantics.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::PrimerError;

pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-delimited token, pulling further lines as needed.
    pub fn next_token(&mut self) -> Result<String, PrimerError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PrimerError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Next token parsed as an integer. A non-numeric token fails the run
    /// rather than leaving the stream in a poisoned state.
    pub fn next_int(&mut self) -> Result<i64, PrimerError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| PrimerError::InvalidNumber { token })
    }

    /// One full line of text with the trailing newline stripped. Embedded
    /// spaces are preserved.
    pub fn read_line(&mut self) -> Result<String, PrimerError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PrimerError::UnexpectedEof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Drop any buffered tokens and consume one raw line if the stream has
    /// one. End of input is fine here; the line is discarded either way.
    pub fn discard_line(&mut self) -> Result<(), PrimerError> {
        self.pending.clear();
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner<Cursor<Vec<u8>>> {
        Scanner::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_tokens_share_a_line() {
        let mut s = scanner("2 5\n");
        assert_eq!(s.next_int().unwrap(), 2);
        assert_eq!(s.next_int().unwrap(), 5);
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut s = scanner("2\n\n   5\n");
        assert_eq!(s.next_int().unwrap(), 2);
        assert_eq!(s.next_int().unwrap(), 5);
    }

    #[test]
    fn test_negative_integers() {
        let mut s = scanner("-3 -4\n");
        assert_eq!(s.next_int().unwrap(), -3);
        assert_eq!(s.next_int().unwrap(), -4);
    }

    #[test]
    fn test_invalid_number_reports_token() {
        let mut s = scanner("two\n");
        match s.next_int() {
            Err(PrimerError::InvalidNumber { token }) => assert_eq!(token, "two"),
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_eof_on_token_read() {
        let mut s = scanner("");
        assert!(matches!(s.next_token(), Err(PrimerError::UnexpectedEof)));
    }

    #[test]
    fn test_read_line_keeps_spaces() {
        let mut s = scanner("Ada Lovelace\n");
        assert_eq!(s.read_line().unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut s = scanner("Ada\r\n");
        assert_eq!(s.read_line().unwrap(), "Ada");
    }

    #[test]
    fn test_discard_line_clears_leftover_tokens() {
        let mut s = scanner("3 extra tokens\nskipped\nnext\n");
        assert_eq!(s.next_int().unwrap(), 3);
        s.discard_line().unwrap();
        assert_eq!(s.next_token().unwrap(), "next");
    }

    #[test]
    fn test_discard_line_at_eof_is_ok() {
        let mut s = scanner("");
        assert!(s.discard_line().is_ok());
    }
}
