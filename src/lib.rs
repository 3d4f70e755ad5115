//! This crate reads `.bib` files in pure, safe rust and filters the
//! parsed entries with caller-supplied match functions.
//!
//! `.bib` files are popular in reference management since many resources
//! allow to export metadata in a BibTeχ or BibLaTeχ file. One entry in
//! such a file can look like this:
//!
//! ```tex
//! @Article{wilson2013,
//!   Author = {Wilson, N.J. and Flowers, G.E.},
//!   Title = {Environmental controls on the thermal structure
//!            of alpine glaciers},
//!   Year = {2013},
//!   Journal = {The Cryosphere},
//!   File = {/home/doc/wilson2013.pdf},
//! }
//! ```
//!
//! The parser is a line-oriented state machine: it enters a record at a
//! line starting with `@`, tracks the running depth of unescaped curly
//! braces across lines, collects `name = data` field lines on the way, and
//! completes the record when the depth returns to zero. The five fields
//! relevant for searching a bibliography (author, title, year, journal,
//! file) are kept; everything else is dropped. Comment lines starting with
//! `%` and blank lines are ignored anywhere, and a record whose braces
//! never balance is skipped without disturbing the entries parsed before
//! it. Full BibTeχ grammar support (`@string` macros, cross-references,
//! accent unescaping) is a non-goal.
//!
//! The API is built around iterating over the file's entries and scanning
//! them with predicates:
//!
//! ```rust
//! use bibscan::{scan, year_is, author_contains, Parser};
//! use std::str::FromStr;
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     //let p = Parser::from_file("refs.bib")?;
//!     let p = Parser::from_str("@Article{w13,\n  Author = {Wilson, N.J.},\n  Year = {2013},\n}")?;
//!     let entries = p.entries()?;
//!     for entry in scan(&entries, vec![year_is(2013), author_contains("Wilson")]) {
//!         println!("{} ({:?}): {}", entry.author, entry.year, entry.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The entire source string is kept in memory; the entries themselves are
//! produced lazily, one per closed record.

mod errors;
mod fields;
mod parser;
mod scan;
mod types;

pub use crate::errors::InputError;
pub use crate::fields::{brace_delta, parse_field_line};
pub use crate::parser::{Entries, Parser};
pub use crate::scan::{author_contains, journal_contains, scan, title_contains, year_is};
pub use crate::scan::{Predicate, Scan};
pub use crate::types::{Entry, FieldValue};
