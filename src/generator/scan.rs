//! Line recognition
//!
//! A line is an entry when, after optional leading whitespace, it starts with
//! the constant prefix (any case). The identifier is the run of letters,
//! digits and underscores right after the prefix; the rest of the line is
//! dropped.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`.

use regex::{Regex, RegexBuilder};

use super::error::GenerateError;

/// Compiled size cap; a sane prefix stays far below it
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Split `text` into lines, each keeping its terminator.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) if self.rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// One recognized source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// Whitespace before the constant, carried into the output line
    pub indent: String,
    /// Identifier after the prefix, original case; may be empty
    pub suffix: String,
    /// Source line had a terminator (written back as `\n`)
    pub terminated: bool,
}

/// Anchored pattern for one constant prefix
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    pub fn new(prefix: &str) -> Result<Self, GenerateError> {
        let pattern = format!(r"(?i)^(\s*){}([A-Z0-9_]*)", regex::escape(prefix));
        let regex = RegexBuilder::new(&pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|source| GenerateError::Pattern {
                prefix: prefix.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// Match a single line. `line` may still carry its terminator.
    pub fn scan_line(
        &self,
        line: &str,
    ) -> Option<ErrorEntry> {
        let stripped = line
            .strip_suffix('\n')
            .or_else(|| line.strip_suffix('\r'));
        let (body, terminated) = match stripped {
            Some(body) => (body, true),
            None => (line, false),
        };

        let caps = self.regex.captures(body)?;
        Some(ErrorEntry {
            indent: caps[1].to_string(),
            suffix: caps[2].to_string(),
            terminated,
        })
    }
}
