//! Era-to-Gregorian calendar conversion.
//!
//! Japanese statutes date themselves by era name and era-relative year,
//! where era year 1 is the era's first calendar year. Five eras appear in
//! the Standard Law XML corpus: Meiji, Taisho, Showa, Heisei and Reiwa.

use chrono::NaiveDate;

use crate::error::{IngestError, Result};

/// A named era recognized by the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// 明治 (1868-)
    Meiji,
    /// 大正 (1912-)
    Taisho,
    /// 昭和 (1926-)
    Showa,
    /// 平成 (1989-)
    Heisei,
    /// 令和 (2019-)
    Reiwa,
}

impl Era {
    /// Parse the romanized era name used in the `Era` root attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Meiji" => Some(Self::Meiji),
            "Taisho" => Some(Self::Taisho),
            "Showa" => Some(Self::Showa),
            "Heisei" => Some(Self::Heisei),
            "Reiwa" => Some(Self::Reiwa),
            _ => None,
        }
    }

    /// First Gregorian year of the era (era year 1).
    #[must_use]
    pub fn start_year(self) -> i32 {
        match self {
            Self::Meiji => 1868,
            Self::Taisho => 1912,
            Self::Showa => 1926,
            Self::Heisei => 1989,
            Self::Reiwa => 2019,
        }
    }

    /// Romanized name as it appears in the XML.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Meiji => "Meiji",
            Self::Taisho => "Taisho",
            Self::Showa => "Showa",
            Self::Heisei => "Heisei",
            Self::Reiwa => "Reiwa",
        }
    }

    /// Kanji era name (元号).
    #[must_use]
    pub fn kanji(self) -> &'static str {
        match self {
            Self::Meiji => "明治",
            Self::Taisho => "大正",
            Self::Showa => "昭和",
            Self::Heisei => "平成",
            Self::Reiwa => "令和",
        }
    }
}

/// Kanji era name for a raw `Era` attribute value.
///
/// Unrecognized names pass through unchanged; a handful of historical
/// documents carry free-text era values.
///
/// # Examples
/// ```
/// use horei_ingest::era::kanji_name;
///
/// assert_eq!(kanji_name("Reiwa"), "令和");
/// assert_eq!(kanji_name("Keio"), "Keio");
/// ```
#[must_use]
pub fn kanji_name(era_name: &str) -> String {
    Era::from_name(era_name)
        .map(|era| era.kanji().to_string())
        .unwrap_or_else(|| era_name.to_string())
}

/// Convert an era-relative date to a Gregorian [`NaiveDate`].
///
/// Era year 1 maps to the era's start year, so
/// `calendar_year = start_year + year - 1`. An unrecognized era name falls
/// back to the Meiji start year rather than failing; part of the historical
/// corpus depends on this.
///
/// # Errors
/// [`IngestError::CalendarConversion`] when the resulting year/month/day is
/// not a valid calendar date.
pub fn to_gregorian(era_name: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let start_year = match Era::from_name(era_name) {
        Some(era) => era.start_year(),
        None => {
            tracing::warn!(
                era = %era_name,
                "Unknown era name, falling back to the Meiji start year"
            );
            Era::Meiji.start_year()
        }
    };

    let gregorian_year = start_year + year - 1;
    NaiveDate::from_ymd_opt(gregorian_year, month, day).ok_or_else(|| {
        IngestError::CalendarConversion {
            era: era_name.to_string(),
            year,
            month,
            day,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_start_years() {
        assert_eq!(Era::Meiji.start_year(), 1868);
        assert_eq!(Era::Taisho.start_year(), 1912);
        assert_eq!(Era::Showa.start_year(), 1926);
        assert_eq!(Era::Heisei.start_year(), 1989);
        assert_eq!(Era::Reiwa.start_year(), 2019);
    }

    #[test]
    fn test_first_era_year_is_start_year() {
        for era in [Era::Meiji, Era::Taisho, Era::Showa, Era::Heisei, Era::Reiwa] {
            let date = to_gregorian(era.name(), 1, 1, 1).unwrap();
            assert_eq!(date.format("%Y").to_string(), era.start_year().to_string());
        }
    }

    #[test]
    fn test_reiwa_promulgation_date() {
        let date = to_gregorian("Reiwa", 1, 5, 1).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 5, 1).unwrap());
    }

    #[test]
    fn test_showa_year_offset() {
        // Showa 22 = 1947
        let date = to_gregorian("Showa", 22, 4, 7).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1947, 4, 7).unwrap());
    }

    #[test]
    fn test_unknown_era_falls_back_to_meiji() {
        let date = to_gregorian("Keio", 1, 1, 1).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1868, 1, 1).unwrap());
    }

    #[test]
    fn test_invalid_date_fails() {
        let err = to_gregorian("Reiwa", 1, 13, 1).unwrap_err();
        assert!(matches!(err, IngestError::CalendarConversion { .. }));

        let err = to_gregorian("Heisei", 2, 2, 30).unwrap_err();
        assert!(matches!(err, IngestError::CalendarConversion { .. }));
    }

    #[test]
    fn test_kanji_names() {
        assert_eq!(Era::Meiji.kanji(), "明治");
        assert_eq!(Era::Reiwa.kanji(), "令和");
        assert_eq!(kanji_name("Showa"), "昭和");
        assert_eq!(kanji_name("Ansei"), "Ansei");
    }
}
