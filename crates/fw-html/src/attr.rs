//! Attribute values.

/// Value of an HTML attribute.
///
/// Boolean values render as bare flags (`true`) or are omitted (`false`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Text value, escaped on output.
    Text(String),
    /// Boolean flag.
    Bool(bool),
}

impl AttrValue {
    /// Text content, or `None` for boolean flags.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(AttrValue::from("a"), AttrValue::Text("a".to_owned()));
        assert_eq!(AttrValue::from(3_i64), AttrValue::Text("3".to_owned()));
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(AttrValue::from("x").as_str(), Some("x"));
        assert_eq!(AttrValue::Bool(true).as_str(), None);
    }
}
