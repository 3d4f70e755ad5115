//! Predicate-based filtering over parsed entries.
//!
//! A typical session parses a `.bib` file once and then narrows the entries
//! down with a handful of match functions, e.g. “year is 2012 and the
//! author list mentions Aschwanden”. [`scan`] combines the supplied
//! predicates with logical AND and yields the matching entries lazily.

use crate::types::Entry;

/// A caller-supplied match function from entry to boolean.
pub type Predicate<'p> = Box<dyn Fn(&Entry) -> bool + 'p>;

/// Lazily filter `entries` down to those satisfying *all* `predicates`.
///
/// Predicates are evaluated in the order they were supplied and evaluation
/// short-circuits on the first mismatch. An empty predicate list passes
/// every entry through. `scan` itself never fails; a panicking predicate
/// propagates to the caller untouched.
pub fn scan<'p, 'e, I>(entries: I, predicates: Vec<Predicate<'p>>) -> Scan<'p, I::IntoIter>
where
    I: IntoIterator<Item = &'e Entry>,
{
    Scan {
        entries: entries.into_iter(),
        predicates,
    }
}

/// The iterator returned by [`scan`]: a single forward pass over the input,
/// finite and not restartable once exhausted.
pub struct Scan<'p, I> {
    entries: I,
    predicates: Vec<Predicate<'p>>,
}

impl<'p, 'e, I> Iterator for Scan<'p, I>
where
    I: Iterator<Item = &'e Entry>,
{
    type Item = &'e Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .by_ref()
            .find(|entry| self.predicates.iter().all(|check| check(entry)))
    }
}

/// Matches entries published in the given year.
pub fn year_is<'p>(year: i32) -> Predicate<'p> {
    Box::new(move |entry| entry.year == Some(year))
}

/// Matches entries whose author list contains `needle` (case-sensitive).
pub fn author_contains<'p>(needle: &'p str) -> Predicate<'p> {
    Box::new(move |entry| entry.author.contains(needle))
}

/// Matches entries whose title contains `needle` (case-sensitive).
pub fn title_contains<'p>(needle: &'p str) -> Predicate<'p> {
    Box::new(move |entry| entry.title.contains(needle))
}

/// Matches entries whose journal name contains `needle` (case-sensitive).
pub fn journal_contains<'p>(needle: &'p str) -> Predicate<'p> {
    Box::new(move |entry| entry.journal.contains(needle))
}
