use std::collections::HashSet;

use crate::error::{ModelError, Result};
use crate::slide_key::SlideKey;

/// A single slide: a stable key plus an opaque payload for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<T> {
    pub key: SlideKey,
    pub content: T,
}

impl<T> Slide<T> {
    pub fn new(key: SlideKey, content: T) -> Self {
        Self { key, content }
    }
}

/// Ordered, non-empty collection of slides with unique keys.
///
/// The set is immutable once built; changing the slides means building a new
/// set and handing it to the controller as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet<T> {
    slides: Vec<Slide<T>>,
}

impl<T> SlideSet<T> {
    pub fn new(slides: Vec<Slide<T>>) -> Result<Self> {
        if slides.is_empty() {
            return Err(ModelError::EmptySlideSet);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(&slide.key) {
                return Err(ModelError::DuplicateKey(slide.key.clone()));
            }
        }

        Ok(Self { slides })
    }

    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide<T>> {
        self.slides.get(index)
    }

    pub fn key(&self, index: usize) -> Option<&SlideKey> {
        self.slides.get(index).map(|slide| &slide.key)
    }

    pub fn position(&self, key: &SlideKey) -> Option<usize> {
        self.slides.iter().position(|slide| &slide.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide<T>> {
        self.slides.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SlideKey> + '_ {
        self.slides.iter().map(|slide| &slide.key)
    }

}

impl SlideSet<()> {
    /// Build a payload-less set from raw keys. Handy for tests and tooling
    /// that only care about navigation.
    pub fn from_keys<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides = keys
            .into_iter()
            .map(|key| SlideKey::new(key).map(|key| Slide::new(key, ())))
            .collect::<Result<Vec<_>>>()?;
        Self::new(slides)
    }
}

impl<T> TryFrom<Vec<Slide<T>>> for SlideSet<T> {
    type Error = ModelError;

    fn try_from(slides: Vec<Slide<T>>) -> Result<Self> {
        SlideSet::new(slides)
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a Slide<T>;
    type IntoIter = std::slice::Iter<'a, Slide<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SlideSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.slides.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for SlideSet<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slides = Vec::<Slide<T>>::deserialize(deserializer)?;
        SlideSet::new(slides).map_err(serde::de::Error::custom)
    }
}
