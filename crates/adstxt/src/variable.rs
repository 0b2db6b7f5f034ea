//! Variable values with scalar-to-sequence promotion

/// Value of an ads.txt variable
///
/// A variable that appears once in a file holds a single string; a variable
/// that appears on several lines accumulates every value in first-seen order.
/// The two shapes are modeled explicitly so the promotion logic needs no
/// runtime type inspection.
///
/// # Examples
///
/// ```
/// use adstxt::VariableValue;
///
/// let mut value = VariableValue::scalar("divisionone.example.com");
/// value.push("divisiontwo.example.com");
///
/// assert_eq!(value.as_scalar(), None);
/// assert_eq!(
///     value.values().collect::<Vec<_>>(),
///     vec!["divisionone.example.com", "divisiontwo.example.com"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum VariableValue {
    /// The variable appeared exactly once
    Scalar(String),
    /// The variable appeared more than once; values in source order
    Multi(Vec<String>),
}

impl VariableValue {
    /// Create a scalar value
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Append another occurrence of the variable
    ///
    /// A scalar is promoted to a two-element sequence; a sequence grows by
    /// one element.
    pub fn push(&mut self, value: impl Into<String>) {
        match self {
            Self::Scalar(existing) => {
                let existing = std::mem::take(existing);
                *self = Self::Multi(vec![existing, value.into()]);
            }
            Self::Multi(values) => values.push(value.into()),
        }
    }

    /// Get the value as a single string, if the variable appeared once
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Multi(_) => None,
        }
    }

    /// Iterate over all values in source order
    ///
    /// A scalar yields exactly one item.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice = match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Multi(values) => values.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Number of accumulated values
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Multi(values) => values.len(),
        }
    }

    /// A variable value is never empty; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}
