//! ads.txt record representation

use std::io::{Read, Write};

use indexmap::IndexMap;

use crate::entry::AdsTxtEntry;
use crate::error::Result;
use crate::variable::VariableValue;

/// A complete parsed ads.txt file
///
/// Holds the declared entries in source order plus the free-form variables,
/// keyed by name in first-seen order. A record is an ordinary owned value:
/// callers may freely add entries or variables before writing it back out.
///
/// # Examples
///
/// ```
/// use adstxt::AdsTxtRecord;
///
/// let content = "openx.com, 343560932, DIRECT, 38f6ae102b\nsubdomain=a.example.com";
///
/// let record = AdsTxtRecord::parse(content);
/// assert_eq!(record.entry_count(), 1);
/// assert_eq!(
///     record.variable("subdomain").and_then(|v| v.as_scalar()),
///     Some("a.example.com")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdsTxtRecord {
    /// Declared advertising-system entries, in source order
    #[cfg_attr(feature = "serde", serde(rename = "fields", default))]
    entries: Vec<AdsTxtEntry>,
    /// Free-form variables, keyed by name in first-seen order
    #[cfg_attr(feature = "serde", serde(default))]
    variables: IndexMap<String, VariableValue>,
}

impl AdsTxtRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse ads.txt text into a record
    ///
    /// Never fails; see [`crate::AdsTxtParser::parse`].
    pub fn parse(content: &str) -> Self {
        crate::parser::AdsTxtParser::parse(content)
    }

    /// Read all bytes from a stream, decode them as UTF-8, and parse
    ///
    /// Transport and decoding problems are the only failure modes; content
    /// shape never is.
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt::AdsTxtRecord;
    ///
    /// let record = AdsTxtRecord::from_reader("kargo.com,105,DIRECT".as_bytes())?;
    /// assert_eq!(record.entry_count(), 1);
    /// # Ok::<(), adstxt::Error>(())
    /// ```
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8(bytes)?;
        Ok(Self::parse(&content))
    }

    /// Get all entries
    pub fn entries(&self) -> &[AdsTxtEntry] {
        &self.entries
    }

    /// Get a mutable view of all entries
    pub fn entries_mut(&mut self) -> &mut Vec<AdsTxtEntry> {
        &mut self.entries
    }

    /// Number of entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the record has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, preserving insertion order
    pub fn push_entry(&mut self, entry: AdsTxtEntry) {
        self.entries.push(entry);
    }

    /// Get all variables in first-seen order
    pub fn variables(&self) -> &IndexMap<String, VariableValue> {
        &self.variables
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&VariableValue> {
        self.variables.get(name)
    }

    /// Record one occurrence of a variable
    ///
    /// A new name is stored as a scalar; a repeated name accumulates values
    /// in first-seen order, promoting the scalar to a sequence on the second
    /// occurrence.
    pub fn append_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        match self.variables.entry(name.into()) {
            indexmap::map::Entry::Occupied(mut occupied) => occupied.get_mut().push(value.into()),
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(VariableValue::Scalar(value.into()));
            }
        }
    }

    /// Replace a variable wholesale, dropping any accumulated values
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<VariableValue>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Write the record back to ads.txt text
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt::AdsTxtRecord;
    ///
    /// let record = AdsTxtRecord::parse("openx.com, 343560932 ,DIRECT\ncontact=adops@example.com");
    /// assert_eq!(
    ///     record.to_adstxt_string(),
    ///     "openx.com, 343560932, DIRECT\ncontact=adops@example.com\n"
    /// );
    /// ```
    pub fn to_adstxt_string(&self) -> String {
        crate::writer::AdsTxtWriter::to_string(self, None)
    }

    /// Write the record back to ads.txt text, prefixed with a comment banner
    pub fn to_adstxt_string_with_header(&self, header: &str) -> String {
        crate::writer::AdsTxtWriter::to_string(self, Some(header))
    }

    /// Write the record to an output stream
    ///
    /// Produces bytes identical to [`Self::to_adstxt_string`].
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        crate::writer::AdsTxtWriter::write_to(self, writer, None)
    }

    /// Write the record to an output stream with a header banner
    pub fn write_to_with_header<W: Write>(&self, writer: &mut W, header: &str) -> Result<()> {
        crate::writer::AdsTxtWriter::write_to(self, writer, Some(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = AdsTxtRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.entry_count(), 0);
        assert!(record.variables().is_empty());
    }

    #[test]
    fn test_mutation_after_parse() {
        let mut record = AdsTxtRecord::parse("openx.com,1,DIRECT");

        record.push_entry(
            AdsTxtEntry::new("kargo.com")
                .with_publisher_account_id("105")
                .with_account_type("RESELLER"),
        );
        record.append_variable("contact", "adops@example.com");

        assert_eq!(record.entry_count(), 2);
        assert_eq!(
            record.to_adstxt_string(),
            "openx.com, 1, DIRECT\nkargo.com, 105, RESELLER\ncontact=adops@example.com\n"
        );
    }

    #[test]
    fn test_append_variable_promotion() {
        let mut record = AdsTxtRecord::new();
        record.append_variable("subdomain", "a.example.com");
        record.append_variable("subdomain", "b.example.com");

        assert_eq!(
            record.variable("subdomain"),
            Some(&VariableValue::Multi(vec![
                "a.example.com".to_string(),
                "b.example.com".to_string()
            ]))
        );
    }

    #[test]
    fn test_set_variable_replaces() {
        let mut record = AdsTxtRecord::new();
        record.append_variable("contact", "old@example.com");
        record.set_variable("contact", "new@example.com");

        assert_eq!(
            record.variable("contact").and_then(|v| v.as_scalar()),
            Some("new@example.com")
        );
    }

    #[test]
    fn test_variable_insertion_order() {
        let mut record = AdsTxtRecord::new();
        record.append_variable("zebra", "1");
        record.append_variable("alpha", "2");
        record.append_variable("middle", "3");

        let names: Vec<&str> = record.variables().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_from_reader() {
        let record = AdsTxtRecord::from_reader("openx.com,1,DIRECT\n".as_bytes()).unwrap();
        assert_eq!(record.entry_count(), 1);
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let result = AdsTxtRecord::from_reader(&[0xffu8, 0xfe, 0xfd][..]);
        assert!(matches!(result, Err(crate::Error::Encoding(_))));
    }

    #[test]
    fn test_write_to_matches_string() {
        let record = AdsTxtRecord::parse("openx.com,1,DIRECT # web\nsubdomain=a.example.com");

        let mut buffer = Vec::new();
        record.write_to(&mut buffer).unwrap();

        assert_eq!(buffer, record.to_adstxt_string().into_bytes());
    }
}
