//! ads.txt text writer
//!
//! The inverse of the parser: turns a record back into newline-terminated
//! text. Output is append-only; lines are never re-flowed after being
//! emitted, so the string and stream variants produce identical bytes.

use std::io::Write;

use crate::entry::AdsTxtEntry;
use crate::error::Result;
use crate::record::AdsTxtRecord;

/// Writer for ads.txt content
pub struct AdsTxtWriter;

impl AdsTxtWriter {
    /// Render a record as ads.txt text
    ///
    /// An optional header becomes a two-line comment banner: the header
    /// itself (prefixed with `# ` unless it already starts with `#`) followed
    /// by a lone `#` line. Entries come next in order, then variables in
    /// first-seen order, one `name=value` line per accumulated value. Every
    /// line is `\n`-terminated.
    ///
    /// # Examples
    ///
    /// ```
    /// use adstxt::{AdsTxtRecord, AdsTxtWriter};
    ///
    /// let record = AdsTxtRecord::parse("openx.com,343560932,DIRECT");
    ///
    /// let text = AdsTxtWriter::to_string(&record, Some("Ads.txt for example.com"));
    /// assert_eq!(
    ///     text,
    ///     "# Ads.txt for example.com\n#\nopenx.com, 343560932, DIRECT\n"
    /// );
    /// ```
    pub fn to_string(record: &AdsTxtRecord, header: Option<&str>) -> String {
        let mut output = String::new();

        if let Some(header) = header {
            let header = header.trim();
            if !header.starts_with('#') {
                output.push_str("# ");
            }
            output.push_str(header);
            output.push_str("\n#\n");
        }

        for entry in record.entries() {
            output.push_str(&Self::entry_line(entry));
            output.push('\n');
        }

        for (name, value) in record.variables() {
            for item in value.values() {
                output.push_str(name);
                output.push('=');
                output.push_str(item);
                output.push('\n');
            }
        }

        output
    }

    /// Render one entry as a data line, without the trailing newline
    ///
    /// Present positional fields are joined with `", "`; absent fields are
    /// omitted rather than padded. A comment is appended as ` # comment`.
    pub fn entry_line(entry: &AdsTxtEntry) -> String {
        let mut line = entry.domain.clone();

        for field in [
            &entry.publisher_account_id,
            &entry.account_type,
            &entry.certificate_authority_id,
        ] {
            if let Some(value) = field {
                line.push_str(", ");
                line.push_str(value);
            }
        }

        if let Some(comment) = &entry.comment {
            line.push_str(" # ");
            line.push_str(comment);
        }

        line
    }

    /// Write a record to an output stream
    ///
    /// Byte-identical to [`Self::to_string`] for the same record and header.
    pub fn write_to<W: Write>(
        record: &AdsTxtRecord,
        writer: &mut W,
        header: Option<&str>,
    ) -> Result<()> {
        writer.write_all(Self::to_string(record, header).as_bytes())?;
        Ok(())
    }
}
