//! Line-level helpers for the entry parser: splitting one `name = data`
//! field line into a key-value pair and counting a line's net brace depth.

use crate::errors::InputError;
use crate::types::{FieldValue, TRACKED_FIELDS};

/// Parse one field line like `Author = {Last, F. and Last2, F2.},` into a
/// lowercased key and a [`FieldValue`].
///
/// The line is split on the first `=` only, so later `=` characters stay in
/// the data part verbatim. The data is trimmed of surrounding whitespace,
/// one trailing comma and one layer of curly braces. A `year` value that is
/// not a base-10 integer becomes [`FieldValue::None`], as does the value of
/// any field name outside the five tracked ones.
///
/// Returns an [`InputError`] if the line contains no `=` at all. Callers
/// that cannot tolerate that must check for `=` before calling.
pub fn parse_field_line(line: &str) -> Result<(String, FieldValue), InputError> {
    let (name, data) = match line.split_once('=') {
        Some(pair) => pair,
        None => return Err(InputError::new(line)),
    };

    let key = name.trim().to_ascii_lowercase();
    let data = trim_data(data);

    let value = if !TRACKED_FIELDS.contains(&key.as_str()) {
        FieldValue::None
    } else if key == "year" {
        match data.parse::<i32>() {
            Ok(year) => FieldValue::Year(year),
            Err(_) => FieldValue::None,
        }
    } else {
        FieldValue::Text(data.to_string())
    };

    Ok((key, value))
}

/// Strip whitespace, then a single trailing comma, then one layer of braces.
/// Deliberately not a nested-brace grammar: inner braces survive untouched.
fn trim_data(raw: &str) -> &str {
    let data = raw.trim();
    let data = data.strip_suffix(',').unwrap_or(data);
    let data = data.trim_end();
    let data = data.strip_prefix('{').unwrap_or(data);
    data.strip_suffix('}').unwrap_or(data)
}

/// Net brace depth contributed by one line: unescaped `{` count minus
/// unescaped `}` count. A backslash escapes the character after it.
pub fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut escaped = false;
    for chr in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match chr {
            '\\' => escaped = true,
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_line() -> Result<(), InputError> {
        let line = "Author = {Wilson, N.J. and Flowers, G.F.}";
        let expected = (
            "author".to_string(),
            FieldValue::Text("Wilson, N.J. and Flowers, G.F.".to_string()),
        );
        assert_eq!(parse_field_line(line)?, expected);
        // parsing has no hidden state, so a second call agrees with the first
        assert_eq!(parse_field_line(line)?, expected);
        Ok(())
    }

    #[test]
    fn test_year_coercion() -> Result<(), InputError> {
        let (key, value) = parse_field_line("Year = {2011}")?;
        assert_eq!(key, "year");
        assert_eq!(value, FieldValue::Year(2011));

        // a non-numeric year is absent, not an error
        let (key, value) = parse_field_line("Year = {2003a}")?;
        assert_eq!(key, "year");
        assert_eq!(value, FieldValue::None);
        Ok(())
    }

    #[test]
    fn test_key_case_and_trailing_comma() -> Result<(), InputError> {
        let (key, value) = parse_field_line("  TITLE = {Some Title},")?;
        assert_eq!(key, "title");
        assert_eq!(value, FieldValue::Text("Some Title".to_string()));
        Ok(())
    }

    #[test]
    fn test_untracked_key_is_dropped() -> Result<(), InputError> {
        let (key, value) = parse_field_line("Publisher = {Addison-Wesley},")?;
        assert_eq!(key, "publisher");
        assert_eq!(value, FieldValue::None);
        Ok(())
    }

    #[test]
    fn test_split_on_first_assignment_only() -> Result<(), InputError> {
        let (key, value) = parse_field_line("File = {/tmp/a=b.pdf},")?;
        assert_eq!(key, "file");
        assert_eq!(value, FieldValue::Text("/tmp/a=b.pdf".to_string()));
        Ok(())
    }

    #[test]
    fn test_one_brace_layer_only() -> Result<(), InputError> {
        let (_, value) = parse_field_line("Title = {The {CO2} Budget},")?;
        assert_eq!(value, FieldValue::Text("The {CO2} Budget".to_string()));
        Ok(())
    }

    #[test]
    fn test_missing_assignment_is_an_error() {
        let err = parse_field_line("  just some words  ").unwrap_err();
        assert!(err.to_string().contains("no '='"));
    }

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("@Article{key2013,"), 1);
        assert_eq!(brace_delta("  Title = {Some Title},"), 0);
        assert_eq!(brace_delta("}"), -1);
        assert_eq!(brace_delta("no braces at all"), 0);
        // escaped braces do not change the depth
        assert_eq!(brace_delta(r"Title = {100\% \{sic\}},"), 0);
        assert_eq!(brace_delta(r"\{\{\{"), 0);
    }
}
