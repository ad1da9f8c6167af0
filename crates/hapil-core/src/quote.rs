//! Quote record type.

use serde::{Deserialize, Serialize};

/// Unique identifier of a quote within the data set.
pub type QuoteId = u64;

/// One excerpt from the bundled data set.
///
/// `text` keeps its embedded line breaks verbatim; the card renders it with
/// `white-space: pre-line`. Unknown JSON fields are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Stable id, used as the rendering key of the quote card
    pub id: QuoteId,
    /// Excerpt body
    pub text: String,
    /// Source work title
    pub book: String,
    /// Source work author
    pub author: String,
}

impl QuoteRecord {
    pub fn new(
        id: QuoteId,
        text: impl Into<String>,
        book: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            book: book.into(),
            author: author.into(),
        }
    }

    /// Attribution shown under the excerpt: `"{book} - {author}"`.
    pub fn source_line(&self) -> String {
        format!("{} - {}", self.book, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_line() {
        let quote = QuoteRecord::new(1, "하늘을 우러러", "하늘과 바람과 별과 시", "윤동주");
        assert_eq!(quote.source_line(), "하늘과 바람과 별과 시 - 윤동주");
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"id": 3, "text": "a\nb", "book": "B", "author": "A", "tags": ["x"]}"#;
        let quote: QuoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(quote.id, 3);
        assert_eq!(quote.text, "a\nb");
    }

    #[test]
    fn test_deserialize_requires_all_fields() {
        let json = r#"{"id": 3, "text": "a", "book": "B"}"#;
        assert!(serde_json::from_str::<QuoteRecord>(json).is_err());
    }
}
