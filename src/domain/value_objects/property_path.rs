//! Property Path Value Object
//!
//! A validated key path into a hierarchical [`PropertyStore`](crate::PropertyStore).
//! Paths are written in dotted form (`repl_services.alpha.deployment_service`)
//! or built from explicit segments when a segment itself contains a dot.

use std::fmt;
use std::str::FromStr;

use crate::error::PropertyError;

/// Ordered, non-empty list of key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    /// Separator used by the dotted string form
    pub const SEPARATOR: char = '.';

    /// Build a path from explicit segments.
    ///
    /// Fails if there are no segments or any segment is empty.
    pub fn new<I, S>(segments: I) -> Result<Self, PropertyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        Self::validate(&segments, || {
            segments.join(&Self::SEPARATOR.to_string())
        })?;
        Ok(Self(segments))
    }

    /// Parse the dotted string form.
    pub fn parse(dotted: &str) -> Result<Self, PropertyError> {
        let segments: Vec<String> = dotted.split(Self::SEPARATOR).map(str::to_string).collect();
        Self::validate(&segments, || dotted.to_string())?;
        Ok(Self(segments))
    }

    /// Segments that are known to be non-empty.
    pub(crate) fn from_trusted(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty() && segments.iter().all(|s| !s.is_empty()));
        Self(segments)
    }

    fn validate(segments: &[String], render: impl Fn() -> String) -> Result<(), PropertyError> {
        if segments.is_empty() {
            return Err(PropertyError::InvalidPath {
                path: render(),
                reason: "path has no segments".to_string(),
            });
        }
        if segments.iter().any(String::is_empty) {
            return Err(PropertyError::InvalidPath {
                path: render(),
                reason: "path contains an empty segment".to_string(),
            });
        }
        Ok(())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend the path by one segment.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, PropertyError> {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self::new(segments)
    }

    /// Split into parent segments and the final key.
    pub(crate) fn split_last(&self) -> (&[String], &str) {
        match self.0.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(&Self::SEPARATOR.to_string()))
    }
}

impl FromStr for PropertyPath {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
