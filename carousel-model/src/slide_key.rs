use std::fmt;

use crate::error::ModelError;

/// Stable identifier for a slide.
///
/// Renderers use the key to keep per-slide state (animations, caches) attached
/// to the same slide while it moves through the presentable window. This is a
/// thin wrapper around `String` so call sites opt in explicitly and
/// serialization stays compact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SlideKey(String);

impl SlideKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ModelError::EmptyKey);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SlideKey> for String {
    fn from(key: SlideKey) -> Self {
        key.0
    }
}

impl TryFrom<&str> for SlideKey {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SlideKey::new(value)
    }
}

impl TryFrom<String> for SlideKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SlideKey::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_key() {
        assert_eq!(SlideKey::new(""), Err(ModelError::EmptyKey));
    }

    #[test]
    fn displays_raw_value() {
        let key = SlideKey::new("hero").unwrap();
        assert_eq!(key.to_string(), "hero");
        assert_eq!(key.as_str(), "hero");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_transparently() {
        let key = SlideKey::new("hero").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"hero\"");
        assert_eq!(serde_json::from_str::<SlideKey>("\"hero\"").unwrap(), key);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_empty_key() {
        let err = serde_json::from_str::<SlideKey>("\"\"").unwrap_err();
        assert!(err.to_string().contains("slide key cannot be empty"), "{err}");
    }
}
