//! Serde utilities for listing payloads.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Module to handle identifiers that arrive either as strings or as numbers.
/// The value is always kept as a string.
pub mod string_or_number {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes an identifier from a string or integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer identifier")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::string_or_number::deserialize")]
        id: String,
    }

    #[test]
    fn test_accepts_string_id() {
        let w: Wrapper = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        assert_eq!(w.id, "42");
    }

    #[test]
    fn test_accepts_numeric_id() {
        let w: Wrapper = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(w.id, "42");
    }

    #[test]
    fn test_rejects_other_types() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"id":[1]}"#);
        assert!(result.is_err());
    }
}
