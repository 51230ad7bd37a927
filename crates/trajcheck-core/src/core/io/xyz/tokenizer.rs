const DELIMITER: char = ' ';

/// Returns the part of `line` starting at character `column`, or `""` if the line is shorter.
pub(crate) fn from_column(line: &str, column: usize) -> &str {
    match line.char_indices().nth(column) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Lazily splits a fixed-column field into space-delimited tokens.
///
/// Runs of spaces act as a single delimiter and the last token is flushed at the end of the
/// line even without a trailing space. Only the space character delimits; tabs and carriage
/// returns stay inside the token they touch.
pub(crate) struct FieldTokens<'a> {
    rest: &'a str,
}

impl<'a> FieldTokens<'a> {
    pub(crate) fn new(line: &'a str, start_column: usize) -> Self {
        Self {
            rest: from_column(line, start_column),
        }
    }
}

impl<'a> Iterator for FieldTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.rest.trim_start_matches(DELIMITER);
        if field.is_empty() {
            self.rest = "";
            return None;
        }
        let end = field.find(DELIMITER).unwrap_or(field.len());
        let (token, rest) = field.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Parses one coordinate component.
///
/// Accepts the invariant decimal notation only: digits, sign, `.` and an exponent marker,
/// optionally surrounded by ASCII whitespace such as the `\r` of a CRLF line ending.
/// Named values such as `inf` or `NaN` and values that overflow `f32` are rejected.
pub(crate) fn parse_component(token: &str) -> Option<f32> {
    let number = token.trim_matches(|c: char| c.is_ascii_whitespace());
    let is_numeric = number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_numeric {
        return None;
    }
    number.parse::<f32>().ok().filter(|value| value.is_finite())
}
