//! Lazy line-by-line rewriting of residue names.

use crate::records::{is_coordinate_record, RESNAME_END, RESNAME_START};
use std::borrow::Cow;
use std::io::{self, BufRead};

/// Rewrite the residue-name field of a single line.
///
/// Coordinate records keep everything outside the residue-name columns
/// untouched; the field itself is replaced by `name_to` right-justified to
/// width 3. Any other line is returned unchanged, borrowed from the input.
///
/// Slicing is character-based and saturates, so a malformed coordinate
/// record shorter than the field span yields a truncated line with the new
/// name appended rather than a panic.
pub fn rewrite_line<'a>(line: &'a str, name_to: &str) -> Cow<'a, str> {
    if !is_coordinate_record(line) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    out.extend(line.chars().take(RESNAME_START));
    out.push_str(&format!("{name_to:>3}"));
    out.extend(line.chars().skip(RESNAME_END));
    Cow::Owned(out)
}

/// Streaming rewriter over a line-oriented source.
///
/// Yields one output line per input line, preserving order and the original
/// line terminators. The source is consumed in a single forward pass with no
/// lookahead; nothing is retained across lines.
pub struct RewrittenLines<R> {
    source: R,
    name_to: String,
}

impl<R: BufRead> RewrittenLines<R> {
    /// Wrap a line source with the replacement residue name to apply.
    pub fn new(source: R, name_to: &str) -> Self {
        Self {
            source,
            name_to: name_to.to_string(),
        }
    }
}

impl<R: BufRead> Iterator for RewrittenLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.source.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(rewrite_line(&line, &self.name_to).into_owned())),
            Err(e) => Some(Err(e)),
        }
    }
}
