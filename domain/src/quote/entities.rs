//! Quote entity and identifier

use serde::{Deserialize, Serialize};

/// Author shown when the source does not name one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Identifier of a quote as reported by the source (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        QuoteId::new(s)
    }
}

impl From<String> for QuoteId {
    fn from(s: String) -> Self {
        QuoteId::new(s)
    }
}

/// A quote fetched from the remote source
///
/// Quotes are ephemeral: only the most recently displayed one is kept,
/// by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
    id: Option<QuoteId>,
}

impl Quote {
    /// Create a quote with an unknown author, no tags and no identifier
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: UNKNOWN_AUTHOR.to_string(),
            tags: Vec::new(),
            id: None,
        }
    }

    /// Set the author; blank names fall back to [`UNKNOWN_AUTHOR`]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = if author.trim().is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            author
        };
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id(mut self, id: impl Into<QuoteId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn id(&self) -> Option<&QuoteId> {
        self.id.as_ref()
    }

    /// Author as displayed: dash-prefixed
    pub fn author_line(&self) -> String {
        format!("— {}", self.author)
    }

    /// Tags as displayed: `Tags: a, b`, or blank when there are none
    pub fn tags_line(&self) -> String {
        if self.tags.is_empty() {
            String::new()
        } else {
            format!("Tags: {}", self.tags.join(", "))
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" {}", self.text, self.author_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_defaults() {
        let q = Quote::new("Stay hungry.");
        assert_eq!(q.text(), "Stay hungry.");
        assert_eq!(q.author(), UNKNOWN_AUTHOR);
        assert!(q.tags().is_empty());
        assert!(q.id().is_none());
    }

    #[test]
    fn test_blank_author_falls_back() {
        let q = Quote::new("x").with_author("   ");
        assert_eq!(q.author(), "Unknown");
    }

    #[test]
    fn test_display_lines() {
        let q = Quote::new("X")
            .with_author("Y")
            .with_tags(["a", "b"])
            .with_id("1");
        assert_eq!(q.author_line(), "— Y");
        assert_eq!(q.tags_line(), "Tags: a, b");
        assert_eq!(q.id().map(QuoteId::as_str), Some("1"));
    }

    #[test]
    fn test_tags_line_blank_without_tags() {
        assert_eq!(Quote::new("X").tags_line(), "");
    }

    #[test]
    fn test_display_impl() {
        let q = Quote::new("Less is more.").with_author("Mies");
        assert_eq!(q.to_string(), "\"Less is more.\" — Mies");
    }
}
