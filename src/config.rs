//! Configuration constants and validation functions for statute ingestion.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

/// Base URL for public law pages on e-Gov.
pub const EGOV_LAW_BASE_URL: &str = "https://laws.e-gov.go.jp/law";

/// Promulgation month assumed when the root attribute is absent.
pub const DEFAULT_PROMULGATE_MONTH: u32 = 1;

/// Promulgation day assumed when the root attribute is absent.
pub const DEFAULT_PROMULGATE_DAY: u32 = 1;

/// Law ID pattern: era-year digits, a two-character type code, a ten-digit
/// serial (e.g. 320AC0000000046).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LAW_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}[A-Z][A-Z0-9]\d{10}$").expect("valid regex"));

/// Validate law ID format.
///
/// The parser itself treats law IDs as opaque; this check is for callers
/// that enforce the corpus naming convention.
///
/// # Examples
/// ```
/// use horei_ingest::config::validate_law_id;
///
/// assert!(validate_law_id("320AC0000000046").is_ok());
/// assert!(validate_law_id("415M60000100003").is_ok());
/// assert!(validate_law_id("INVALID").is_err());
/// ```
pub fn validate_law_id(law_id: &str) -> Result<()> {
    if LAW_ID_PATTERN.is_match(law_id) {
        Ok(())
    } else {
        Err(IngestError::InvalidLawId(law_id.to_string()))
    }
}

/// Derive the law ID from a statute filename.
///
/// The corpus convention puts the law ID before the first underscore of the
/// file stem (e.g. `322AC0000000049_19470407_000000000000000.xml`). This is
/// a contract with the document source, not derived from content.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use horei_ingest::config::law_id_from_path;
///
/// let path = Path::new("laws/322AC0000000049_19470407_000000000000000.xml");
/// assert_eq!(law_id_from_path(path).unwrap(), "322AC0000000049");
/// ```
pub fn law_id_from_path(path: &Path) -> Result<String> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let law_id = stem.split('_').next().unwrap_or("");
    if law_id.is_empty() {
        return Err(IngestError::InvalidLawId(path.display().to_string()));
    }
    Ok(law_id.to_string())
}

/// Public e-Gov URL for a law.
///
/// # Examples
/// ```
/// use horei_ingest::config::egov_law_url;
///
/// assert_eq!(
///     egov_law_url("322AC0000000049"),
///     "https://laws.e-gov.go.jp/law/322AC0000000049"
/// );
/// ```
#[must_use]
pub fn egov_law_url(law_id: &str) -> String {
    format!("{EGOV_LAW_BASE_URL}/{law_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_law_id_valid() {
        assert!(validate_law_id("320AC0000000046").is_ok());
        assert!(validate_law_id("322AC0000000049").is_ok());
        assert!(validate_law_id("415M60000100003").is_ok());
    }

    #[test]
    fn test_validate_law_id_invalid() {
        assert!(validate_law_id("").is_err());
        assert!(validate_law_id("320AC000000046").is_err()); // 9-digit serial
        assert!(validate_law_id("320ac0000000046").is_err()); // Lowercase code
        assert!(validate_law_id("BWBR0018451").is_err()); // Different corpus
        assert!(validate_law_id("320AC0000000046X").is_err()); // Trailing junk
    }

    #[test]
    fn test_law_id_from_path() {
        let path = Path::new("/data/322AC0000000049_19470407_000000000000000.xml");
        assert_eq!(law_id_from_path(path).unwrap(), "322AC0000000049");
    }

    #[test]
    fn test_law_id_from_path_without_underscore() {
        let path = Path::new("322AC0000000049.xml");
        assert_eq!(law_id_from_path(path).unwrap(), "322AC0000000049");
    }

    #[test]
    fn test_law_id_from_path_empty_stem() {
        assert!(law_id_from_path(Path::new("")).is_err());
        assert!(law_id_from_path(Path::new("_trailing.xml")).is_err());
    }

    #[test]
    fn test_egov_law_url() {
        assert_eq!(
            egov_law_url("320AC0000000046"),
            "https://laws.e-gov.go.jp/law/320AC0000000046"
        );
    }
}
