//! Equality filters over named record fields

use super::record::Record;

/// An equality filter on a single named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    value: String,
}

impl Filter {
    /// Create a filter matching records whose `field` equals `value`.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether a record satisfies this filter.
    ///
    /// A record that does not expose the filtered field never matches.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        record.field(&self.field).as_deref() == Some(self.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct TestRecord {
        email: String,
    }

    impl Record for TestRecord {
        fn field(&self, name: &str) -> Option<String> {
            match name {
                "email" => Some(self.email.clone()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_matches_equal_value() {
        let record = TestRecord {
            email: "jon@doe.com".to_string(),
        };
        let filter = Filter::equals("email", "jon@doe.com");

        assert!(filter.matches(&record));
    }

    #[test]
    fn test_rejects_different_value() {
        let record = TestRecord {
            email: "jon@doe.com".to_string(),
        };
        let filter = Filter::equals("email", "jane@doe.com");

        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let record = TestRecord {
            email: "jon@doe.com".to_string(),
        };
        let filter = Filter::equals("username", "jon");

        assert!(!filter.matches(&record));
    }

    #[test]
    fn test_accessors() {
        let filter = Filter::equals("email", "jon@doe.com");
        assert_eq!(filter.field(), "email");
        assert_eq!(filter.value(), "jon@doe.com");
    }
}
