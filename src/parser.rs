use std::collections::HashMap;
use std::fs;
use std::io;
use std::io::Read;
use std::mem;
use std::path;
use std::str;

use crate::errors::InputError;
use crate::fields;
use crate::types::{Entry, FieldValue};

/// Parser reading a `.bib` file allowing iteration over [`Entry`] instances.
pub struct Parser {
    pub(crate) src: String,
}

impl Parser {
    /// Use a file at some filepath as source for the parsing process.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Parser, io::Error> {
        let mut fd = fs::File::open(path)?;
        let mut buf = String::new();
        fd.read_to_string(&mut buf)?;
        Ok(Parser { src: buf })
    }

    /// Use a string as source for the parsing process.
    pub fn from_string(data: String) -> Parser {
        Parser { src: data }
    }

    /// A streaming iterator over the entries of the source.
    pub fn iter(&self) -> Entries {
        Entries {
            lines: self.src.lines(),
            lineno: 0,
            in_record: false,
            brace_depth: 0,
            pending: HashMap::new(),
            skipped: 0,
        }
    }

    /// Parse all entries at once, in source order.
    pub fn entries(&self) -> Result<Vec<Entry>, InputError> {
        self.iter().collect()
    }
}

impl str::FromStr for Parser {
    type Err = io::Error;

    /// Use a string as source for the parsing process.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(Parser {
            src: data.to_string(),
        })
    }
}

/// A stateful iterator yielding one [`Entry`] after another.
///
/// The scan is a single pass over the source lines. Two pieces of state are
/// threaded across the pass: whether we are inside an `@...{` record, and
/// the running brace depth since that record's opening line. A record is
/// complete exactly when the depth returns to zero; its entry is yielded in
/// the order the closing brace appears in the source.
pub struct Entries<'s> {
    pub(crate) lines: str::Lines<'s>,
    pub(crate) lineno: usize,
    pub(crate) in_record: bool,
    pub(crate) brace_depth: i32,
    pub(crate) pending: HashMap<String, FieldValue>,
    pub(crate) skipped: usize,
}

impl<'s> Entries<'s> {
    /// Number of records dropped because their braces never balanced before
    /// the end of input. Meaningful once the iterator is exhausted.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Advance the state machine by one line. Returns an entry if this line
    /// brought the current record's brace depth back to zero.
    fn feed(&mut self, line: &str) -> Result<Option<Entry>, InputError> {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('%') {
            // comments and blank lines are inert, even inside a record
            return Ok(None);
        }

        if self.in_record && self.brace_depth > 0 && line.contains('=') {
            let (key, value) = fields::parse_field_line(line)?;
            // last write wins on duplicate field names
            self.pending.insert(key, value);
            self.brace_depth += fields::brace_delta(line);
        } else if !self.in_record && trimmed.starts_with('@') {
            self.in_record = true;
            self.brace_depth = fields::brace_delta(line);
            self.pending.clear();
        } else if self.in_record {
            // continuation line, e.g. a closing “}” or the tail of a
            // multi-line value: only the brace count matters
            self.brace_depth += fields::brace_delta(line);
        } else {
            return Ok(None);
        }

        if self.in_record && self.brace_depth == 0 {
            self.in_record = false;
            return Ok(Some(self.take_entry()));
        }
        Ok(None)
    }

    /// Build an entry from the accumulated fields; anything missing gets
    /// its default.
    fn take_entry(&mut self) -> Entry {
        let mut fields = mem::take(&mut self.pending);
        Entry {
            author: fields.remove("author").map(FieldValue::into_text).unwrap_or_default(),
            title: fields.remove("title").map(FieldValue::into_text).unwrap_or_default(),
            year: fields.remove("year").and_then(|value| value.year()),
            journal: fields.remove("journal").map(FieldValue::into_text).unwrap_or_default(),
            file: fields.remove("file").map(FieldValue::into_text).unwrap_or_default(),
        }
    }
}

impl<'s> Iterator for Entries<'s> {
    type Item = Result<Entry, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(line) => line,
                None => {
                    if self.in_record {
                        // braces never balanced: drop the partial record
                        self.in_record = false;
                        self.pending.clear();
                        self.skipped += 1;
                    }
                    return None;
                }
            };
            let lineno = self.lineno;
            self.lineno += 1;

            match self.feed(line) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => {}
                Err(err) => return Some(Err(err.at(lineno))),
            }
        }
    }
}
