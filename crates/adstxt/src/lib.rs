//! # adstxt
//!
//! A parser and writer for the ads.txt format, the plaintext file domains
//! publish to declare which advertising systems are authorized to sell their
//! inventory.
//!
//! ## Format Structure
//!
//! ```text
//! # Ads.txt for example.com
//! openx.com, 343560932, DIRECT, 38f6ae102b
//! kargo.com, 105, DIRECT # top banner
//! subdomain=divisionone.example.com
//! contact=adops@example.com
//! ```
//!
//! Data lines declare one advertising system each (domain, publisher account
//! ID, account type, optional certificate authority ID, optional trailing
//! comment). `name=value` lines declare free-form variables. Full-line
//! comments and blank lines are ignored.
//!
//! ## Quick Start
//!
//! ### Parsing
//!
//! ```rust
//! use adstxt::AdsTxtRecord;
//!
//! let text = "openx.com, 343560932, DIRECT, 38f6ae102b\nsubdomain=divisionone.example.com";
//!
//! let record = AdsTxtRecord::parse(text);
//! assert_eq!(record.entry_count(), 1);
//! assert_eq!(record.entries()[0].domain, "openx.com");
//! assert!(record.variable("subdomain").is_some());
//! ```
//!
//! Parsing never fails: ads.txt files in the wild are frequently hand-edited
//! and inconsistent, so malformed lines degrade into sparse entries or are
//! skipped instead of producing errors. Text that is entirely noise parses to
//! an empty record.
//!
//! ### Writing
//!
//! ```rust
//! use adstxt::{AdsTxtEntry, AdsTxtRecord};
//!
//! let mut record = AdsTxtRecord::new();
//! record.push_entry(
//!     AdsTxtEntry::new("openx.com")
//!         .with_publisher_account_id("343560932")
//!         .with_account_type("DIRECT"),
//! );
//! record.append_variable("contact", "adops@example.com");
//!
//! let text = record.to_adstxt_string();
//! assert_eq!(text, "openx.com, 343560932, DIRECT\ncontact=adops@example.com\n");
//! ```

pub mod entry;
pub mod error;
pub mod parser;
pub mod record;
pub mod variable;
pub mod writer;

pub use entry::AdsTxtEntry;
pub use error::{Error, Result};
pub use parser::AdsTxtParser;
pub use record::AdsTxtRecord;
pub use variable::VariableValue;
pub use writer::AdsTxtWriter;
