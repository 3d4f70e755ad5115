use std::error;
use std::fmt;

/// Raised when a line inside a record looks like a field assignment but
/// cannot be split into a name and data part.
///
/// This is the only condition that aborts parsing of a file: without a
/// usable `name = data` split the scanner cannot tell field content from
/// record structure anymore. Everything else (missing fields, unbalanced
/// records, non-numeric years) degrades to a default value or a skipped
/// record instead.
#[derive(Debug)]
pub struct InputError {
    /// the offending line, verbatim
    pub line: String,
    /// zero-based line number in the source, if known
    pub lineno: Option<usize>,
}

impl InputError {
    pub(crate) fn new(line: &str) -> InputError {
        InputError {
            line: line.to_string(),
            lineno: None,
        }
    }

    pub(crate) fn at(mut self, lineno: usize) -> InputError {
        self.lineno = Some(lineno);
        self
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lineno {
            Some(lineno) => write!(
                f,
                "expected 'name = data' at line {lineno}, but found no '=': {line}",
                lineno = lineno + 1,
                line = self.line.trim()
            ),
            None => write!(
                f,
                "expected 'name = data', but found no '=': {line}",
                line = self.line.trim()
            ),
        }
    }
}

impl error::Error for InputError {}
