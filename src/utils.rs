//! Common utilities

/// Characters which terminate a line, in addition to the `\r\n` pair.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Iterator over the lines of a string, excluding the line terminator.
///
/// Every character in `LINE_BREAKS` ends a line, and `\r\n` counts as a single break. A
/// trailing terminator does not produce an extra empty line.
pub struct LineIter<'a>(&'a str);

impl<'a> LineIter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        let (line, remaining) = match self.0.find(LINE_BREAKS) {
            Some(idx) => {
                let rest = &self.0[idx..];
                let break_len = if rest.starts_with("\r\n") {
                    2
                } else {
                    // `find` stopped on a char boundary, so this is never `None`
                    rest.chars().next().map_or(1, char::len_utf8)
                };
                (&self.0[..idx], &rest[break_len..])
            }
            None => (self.0, ""),
        };

        self.0 = remaining;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::LineIter;

    fn lines(text: &str) -> Vec<&str> {
        LineIter::new(text).collect()
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn trailing_newline() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(lines("\n\na\n"), vec!["", "", "a"]);
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(lines("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn unicode_breaks() {
        assert_eq!(
            lines("a\u{2028}b\u{85}c\x0bd\x0ce\x1cf"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
        assert_eq!(lines("é\u{2029}"), vec!["é"]);
    }
}
