//! Kirby content file model
//!
//! A Kirby `.txt` content file is a list of `Name: value` fields separated by
//! lines consisting of `----`. The document keeps every byte of the input so
//! that rewriting one field leaves the rest of the file untouched.

use std::fmt;
use std::ops::Range;

const SEPARATOR: &str = "----";

#[derive(Debug, Clone)]
struct Segment {
    raw: String,
    /// Field name as written, if the segment is a field
    name: Option<String>,
    /// Byte range of the value inside `raw`
    value: Range<usize>,
}

impl Segment {
    fn parse(raw: String) -> Self {
        let (name, value) = match locate_field(&raw) {
            Some((name, value)) => (Some(name), value),
            None => (None, 0..0),
        };
        Self { raw, name, value }
    }
}

/// Finds `Name:` at the start of the segment and the span of its value
/// (leading and trailing whitespace excluded).
fn locate_field(raw: &str) -> Option<(String, Range<usize>)> {
    let start = raw.len() - raw.trim_start().len();
    let colon = start + raw[start..].find(':')?;
    let name = &raw[start..colon];
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return None;
    }

    let after = colon + 1;
    let rest = &raw[after..];
    if rest.trim().is_empty() {
        return Some((name.to_string(), after..after));
    }
    let value_start = after + (rest.len() - rest.trim_start().len());
    let value_end = raw.trim_end().len();
    Some((name.to_string(), value_start..value_end))
}

/// Parsed content file.
#[derive(Debug, Clone)]
pub struct KirbyDocument {
    segments: Vec<Segment>,
    /// Separator lines exactly as found, line ending included
    separators: Vec<String>,
}

impl KirbyDocument {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut separators = Vec::new();
        let mut current = String::new();

        for line in text.split_inclusive('\n') {
            if line.trim() == SEPARATOR {
                segments.push(Segment::parse(std::mem::take(&mut current)));
                separators.push(line.to_string());
            } else {
                current.push_str(line);
            }
        }
        segments.push(Segment::parse(current));

        Self { segments, separators }
    }

    /// Field names in file order.
    pub fn field_names(&self) -> Vec<&str> {
        self.segments.iter().filter_map(|s| s.name.as_deref()).collect()
    }

    fn find(&self, name: &str) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }

    /// Trimmed value of a field, matched case-insensitively.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.find(name).map(|s| &s.raw[s.value.clone()])
    }

    /// Replaces the value of an existing field. Returns false when the field
    /// does not exist; nothing is changed in that case.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let Some(segment) = self
            .segments
            .iter_mut()
            .find(|s| s.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
        else {
            return false;
        };

        let range = segment.value.clone();
        let mut replacement = value.to_string();
        // `Name:value` without a space would otherwise glue the new value on
        if range.start == range.end && !segment.raw[..range.start].ends_with(char::is_whitespace) {
            replacement.insert(0, ' ');
        }
        segment.raw.replace_range(range.clone(), &replacement);
        segment.value = range.start + (replacement.len() - value.len())..range.start + replacement.len();
        true
    }
}

impl fmt::Display for KirbyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            f.write_str(&segment.raw)?;
            if let Some(separator) = self.separators.get(i) {
                f.write_str(separator)?;
            }
        }
        Ok(())
    }
}
