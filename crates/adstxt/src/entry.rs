//! Single ads.txt authorization entry

/// One advertising-system declaration line
///
/// Fields follow the positional layout of a data line:
/// `domain, publisherAccountID, accountType, certificateAuthorityID`.
/// A line with fewer comma-separated values simply leaves the higher-indexed
/// fields unset. The account type is stored verbatim and not validated
/// against the `DIRECT`/`RESELLER` vocabulary.
///
/// # Examples
///
/// ```
/// use adstxt::AdsTxtEntry;
///
/// let entry = AdsTxtEntry::new("openx.com")
///     .with_publisher_account_id("343560932")
///     .with_account_type("DIRECT")
///     .with_certificate_authority_id("38f6ae102b");
///
/// assert_eq!(entry.domain, "openx.com");
/// assert_eq!(entry.certificate_authority_id.as_deref(), Some("38f6ae102b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdsTxtEntry {
    /// Domain of the advertising system
    pub domain: String,
    /// Publisher's account ID within that system
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "publisherAccountID",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub publisher_account_id: Option<String>,
    /// Relationship type, typically `DIRECT` or `RESELLER` (stored verbatim)
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "accountType",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub account_type: Option<String>,
    /// Certificate authority ID used by the ads.cert standard
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "certificateAuthorityID",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub certificate_authority_id: Option<String>,
    /// Trailing comment captured from the data line, `#` and whitespace stripped
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub comment: Option<String>,
}

impl AdsTxtEntry {
    /// Create an entry with only the advertising-system domain set
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Set the publisher account ID
    pub fn with_publisher_account_id(mut self, id: impl Into<String>) -> Self {
        self.publisher_account_id = Some(id.into());
        self
    }

    /// Set the account type
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    /// Set the certificate authority ID
    pub fn with_certificate_authority_id(mut self, id: impl Into<String>) -> Self {
        self.certificate_authority_id = Some(id.into());
        self
    }

    /// Set the trailing comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Assign a positional field by its index on the data line
    ///
    /// Index 0 is the domain, 1 the publisher account ID, 2 the account type,
    /// 3 the certificate authority ID. Higher indices are silently discarded,
    /// matching the parser's behavior for over-long lines.
    pub fn set_field(&mut self, index: usize, value: &str) {
        match index {
            0 => self.domain = value.to_string(),
            1 => self.publisher_account_id = Some(value.to_string()),
            2 => self.account_type = Some(value.to_string()),
            3 => self.certificate_authority_id = Some(value.to_string()),
            _ => {}
        }
    }
}
