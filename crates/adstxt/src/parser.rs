//! ads.txt text parser
//!
//! Classifies each line of input as blank, full-line comment, variable
//! assignment, or data entry, and extracts fields positionally. Parsing is
//! deliberately best-effort: files in the wild are hand-edited and
//! inconsistent, so malformed lines degrade into sparse entries instead of
//! failing the whole parse.

use crate::entry::AdsTxtEntry;
use crate::record::AdsTxtRecord;

/// Parser for ads.txt content
pub struct AdsTxtParser;

impl AdsTxtParser {
    /// Parse complete ads.txt text into a record
    ///
    /// Never fails. Input that is entirely blank lines and comments yields an
    /// empty record.
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt::AdsTxtParser;
    ///
    /// let content = "openx.com, 343560932, DIRECT\n# a comment\nsubdomain=a.example.com";
    ///
    /// let record = AdsTxtParser::parse(content);
    /// assert_eq!(record.entry_count(), 1);
    /// assert_eq!(record.variables().len(), 1);
    /// ```
    pub fn parse(content: &str) -> AdsTxtRecord {
        let mut record = AdsTxtRecord::new();

        for line in content.split('\n') {
            let line = line.trim();

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            // Full-line comments are discarded wholesale, even if the rest of
            // the line would parse as an entry
            if line.starts_with('#') {
                continue;
            }

            // Variable lines win over entry parsing, commas and all
            if let Some((name, value)) = Self::parse_variable_line(line) {
                record.append_variable(name, value);
                continue;
            }

            record.push_entry(Self::parse_entry_line(line));
        }

        record
    }

    /// Match a variable assignment line, returning `(name, value)`
    ///
    /// The accepted shape is `NAME=VALUE` with nothing else on the line:
    /// NAME is one or more ASCII letters optionally followed by exactly one
    /// extra non-whitespace character, VALUE is one or more non-whitespace
    /// characters. Anything else falls through to entry parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt::AdsTxtParser;
    ///
    /// assert_eq!(
    ///     AdsTxtParser::parse_variable_line("subdomain=a.example.com"),
    ///     Some(("subdomain", "a.example.com"))
    /// );
    /// assert_eq!(AdsTxtParser::parse_variable_line("contact=Jane Doe"), None);
    /// ```
    pub fn parse_variable_line(line: &str) -> Option<(&str, &str)> {
        let (name, value) = line.split_once('=')?;

        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return None;
        }

        let suffix = name.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        if suffix.len() == name.len() {
            // No leading letters
            return None;
        }
        let mut extra = suffix.chars();
        match extra.next() {
            None => {}
            Some(c) if !c.is_whitespace() && extra.next().is_none() => {}
            _ => return None,
        }

        Some((name, value))
    }

    /// Parse a single data line into an entry
    ///
    /// Fields are comma-separated and assigned positionally: domain,
    /// publisher account ID, account type, certificate authority ID. Fields
    /// beyond the fourth are discarded. A `#` in the last field starts a
    /// trailing comment.
    pub fn parse_entry_line(line: &str) -> AdsTxtEntry {
        let mut fields: Vec<&str> = line.split(',').collect();

        let mut comment = None;
        if let Some(last) = fields.last_mut() {
            if let Some((data, trailing)) = last.split_once('#') {
                comment = Some(trailing.trim().to_string());
                *last = data;
            }
        }

        let mut entry = AdsTxtEntry::default();
        for (index, value) in fields.iter().enumerate() {
            entry.set_field(index, value.trim());
        }
        entry.comment = comment;
        entry
    }
}
