//! Error types for the ingest library.
//!
//! One library-level error enum covers the whole parse surface. Structure
//! and calendar errors abort a document's parse; token-format errors are
//! scoped to the offending element and carry enough context (law ID, raw
//! token, containing parent) to localize the bad source data.

use thiserror::Error;

/// Main error type for statute ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Invalid law ID format or filename convention.
    #[error("Invalid law ID: '{0}'. Expected era digits + type code + serial (e.g. 320AC0000000046)")]
    InvalidLawId(String),

    /// A structurally required element is absent.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// An era-relative date does not resolve to a valid calendar date.
    #[error("No calendar date for {era} year {year}, month {month}, day {day}")]
    CalendarConversion {
        era: String,
        year: i32,
        month: u32,
        day: u32,
    },

    /// A numbering token cannot be parsed into its ordinal form.
    #[error("Unparseable numbering token '{token}' at {context} in law {law_id}")]
    TokenFormat {
        law_id: String,
        token: String,
        context: String,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error reading a statute file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::InvalidLawId("INVALID".to_string());
        assert!(err.to_string().contains("INVALID"));
        assert!(err.to_string().contains("320AC0000000046"));
    }

    #[test]
    fn test_token_format_display() {
        let err = IngestError::TokenFormat {
            law_id: "322AC0000000049".to_string(),
            token: "第二".to_string(),
            context: "Article/@Num".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("第二"));
        assert!(msg.contains("Article/@Num"));
        assert!(msg.contains("322AC0000000049"));
    }

    #[test]
    fn test_missing_element_display() {
        let err = IngestError::MissingElement {
            element: "LawBody".to_string(),
            context: "322AC0000000049".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required XML element: LawBody in 322AC0000000049"
        );
    }
}
