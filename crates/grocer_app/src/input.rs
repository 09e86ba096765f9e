use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-token reader over line-buffered operator input.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(ToOwned::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Forget the rest of the line the last token came from.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Make `token` the next one returned, ahead of the rest of the line.
    pub fn unread(&mut self, token: String) {
        self.pending.push_front(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines_and_skip_blank_ones() {
        let mut reader = TokenReader::new("1 Peas\n\n   2\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Peas"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn discard_drops_only_the_current_line() {
        let mut reader = TokenReader::new("abc def 3\n4\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("abc"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn unread_token_comes_back_first_and_is_discarded_with_its_line() {
        let mut reader = TokenReader::new("2x y\n4\n".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2x"));
        reader.unread("x".to_string());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("x"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut reader = TokenReader::new("4".as_bytes());

        assert_eq!(reader.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
