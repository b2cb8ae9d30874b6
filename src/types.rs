//! Core entity types for parsed statutes.
//!
//! These are the value types handed to the persistence and
//! reference-extraction collaborators. Every entity is built once during a
//! parse call and never mutated afterwards; collection order always follows
//! source document order.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a law, from the root element's `LawType` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LawType {
    /// 法律
    Act,
    /// 政令
    CabinetOrder,
    /// 省令
    Ordinance,
    /// 勅令
    ImperialOrdinance,
    /// 規則
    Rule,
    /// その他
    Other,
}

impl LawType {
    /// Map a `LawType` source code to a variant.
    ///
    /// Unrecognized codes become [`LawType::Other`]; historical documents
    /// carry codes outside the current vocabulary and must not fail the
    /// parse.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "Act" => Self::Act,
            "CabinetOrder" => Self::CabinetOrder,
            "Ordinance" => Self::Ordinance,
            "ImperialOrdinance" => Self::ImperialOrdinance,
            "Rule" => Self::Rule,
            _ => Self::Other,
        }
    }

    /// The source code string for this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Act => "Act",
            Self::CabinetOrder => "CabinetOrder",
            Self::Ordinance => "Ordinance",
            Self::ImperialOrdinance => "ImperialOrdinance",
            Self::Rule => "Rule",
            Self::Other => "Other",
        }
    }
}

/// A law parsed from one Standard Law XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Law {
    /// Law ID, externally assigned via the filename convention
    /// (e.g. "320AC0000000046").
    pub law_id: String,

    /// Law category.
    pub law_type: LawType,

    /// Law number text (e.g. "昭和二十年法律第四十六号").
    pub law_num: String,

    /// Law title.
    pub law_title: String,

    /// Title reading (kana), when present on the title element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law_title_kana: Option<String>,

    /// Common abbreviation, when present on the title element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    /// Era name (元号) in kanji; unrecognized source values are kept as-is.
    pub era: String,

    /// Era-relative year of promulgation.
    pub year: i32,

    /// Serial number within the era year.
    pub num: u32,

    /// Promulgation date in the Gregorian calendar.
    pub promulgate_date: NaiveDate,

    /// Enforcement date, when known. Not derived from the document; set by
    /// downstream collaborators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_date: Option<NaiveDate>,
}

/// An article (条), the broadest subdivision of a statute's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier carrying the verbatim source numbering token
    /// (e.g. "320AC0000000046_art2_2").
    pub article_id: String,

    /// Owning law ID. Supplementary-provision articles share this scope.
    pub law_id: String,

    /// Base ordinal of the numbering token; 0 for the synthesized article
    /// of a statute without article subdivision.
    pub article_num: u32,

    /// Article title (e.g. "第二条").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_title: Option<String>,

    /// Article caption (e.g. "（定義）").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_caption: Option<String>,

    /// Lead text: the content of the first paragraph that carries any.
    pub content: String,

    /// Paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph (項) within an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Identifier (e.g. "320AC0000000046_art1_para2").
    pub paragraph_id: String,

    /// Owning parent identifier: an article, the synthesized main article,
    /// or a supplementary provision for its direct paragraphs.
    pub article_id: String,

    /// 1-based paragraph number.
    pub paragraph_num: u32,

    /// Space-joined sentence fragments; empty when the paragraph carries no
    /// sentence container.
    pub content: String,

    /// Items in document order.
    pub items: Vec<Item>,
}

/// An item (号) within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier (e.g. "320AC0000000046_art1_para1_item3").
    pub item_id: String,

    /// Owning paragraph ID.
    pub paragraph_id: String,

    /// Item number.
    pub item_num: u32,

    /// Item title (e.g. "一"); the stringified ordinal when the source has
    /// no title element. Never empty.
    pub item_title: String,

    /// Space-joined sentence fragments.
    pub content: String,
}

/// Kind of a supplementary provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplProvisionType {
    /// Original enactment provisions.
    New,
    /// Provisions added by an amending law.
    Amend,
    /// Unrecognized source code.
    Other,
}

impl SupplProvisionType {
    /// Map a `Type` attribute value to a variant. A missing attribute is
    /// treated as `New` by the parser; unrecognized codes become `Other`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "New" => Self::New,
            "Amend" => Self::Amend,
            _ => Self::Other,
        }
    }
}

/// A supplementary provision (附則): transitional or amending rules,
/// structurally parallel to the main body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplProvision {
    /// Identifier (e.g. "320AC0000000046_suppl_Amend_昭和二二年法律第九七号").
    pub suppl_provision_id: String,

    /// Owning law ID.
    pub law_id: String,

    /// Number of the amending law, for `Amend` provisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amend_law_num: Option<String>,

    /// Provision kind.
    pub suppl_provision_type: SupplProvisionType,

    /// Extract (抄) flag: the provision is reproduced only in part.
    pub extract: bool,

    /// Articles in document order, identified in the law's scope.
    pub articles: Vec<Article>,

    /// Direct paragraphs in document order, identified in this provision's
    /// scope.
    pub paragraphs: Vec<Paragraph>,
}

/// Kind of a cross-reference between statute locations.
///
/// Serialized with the Japanese labels the reference corpus already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    /// 準用: apply by reference.
    #[serde(rename = "準用")]
    Apply,
    /// みなす: deem.
    #[serde(rename = "みなす")]
    Deem,
    /// 読み替え: text substitution.
    #[serde(rename = "読み替え")]
    Replace,
    /// なお従う: continued application.
    #[serde(rename = "なお従う")]
    Follow,
    /// による: according to.
    #[serde(rename = "による")]
    AccordingTo,
    /// 基づく: based on.
    #[serde(rename = "基づく")]
    BasedOn,
    /// その他
    #[serde(rename = "その他")]
    Other,
}

/// A directed cross-reference between two statute locations.
///
/// Not built by this crate: the reference-extraction collaborator populates
/// these, using exactly the identifiers the parser derives. All location
/// fields finer than the law are optional, so a reference can point at any
/// granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Reference ID.
    pub reference_id: String,

    /// Source law ID.
    pub source_law_id: String,

    /// Source article ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_article_id: Option<String>,

    /// Source paragraph ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_paragraph_id: Option<String>,

    /// Source item ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_item_id: Option<String>,

    /// Target law ID.
    pub target_law_id: String,

    /// Target article ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_article_id: Option<String>,

    /// Target paragraph ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_paragraph_id: Option<String>,

    /// Target item ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_item_id: Option<String>,

    /// Reference kind.
    pub reference_type: ReferenceType,

    /// Verbatim source text of the reference.
    pub reference_text: String,

    /// Extraction confidence in [0, 1].
    pub confidence_score: f64,

    /// Extraction date.
    pub extracted_at: NaiveDate,

    /// Whether the reference has been verified downstream.
    pub ai_verified: bool,

    /// Open metadata map for extractor-specific fields.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Reference {
    /// Create a law-to-law reference with defaulted optional fields.
    #[must_use]
    pub fn new(
        reference_id: impl Into<String>,
        source_law_id: impl Into<String>,
        target_law_id: impl Into<String>,
        reference_type: ReferenceType,
        extracted_at: NaiveDate,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            source_law_id: source_law_id.into(),
            source_article_id: None,
            source_paragraph_id: None,
            source_item_id: None,
            target_law_id: target_law_id.into(),
            target_article_id: None,
            target_paragraph_id: None,
            target_item_id: None,
            reference_type,
            reference_text: String::new(),
            confidence_score: 1.0,
            extracted_at,
            ai_verified: false,
            metadata: HashMap::new(),
        }
    }
}

/// A fully parsed statute: the law plus its main body and supplementary
/// provision trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statute {
    /// Law metadata.
    pub law: Law,

    /// Main-body articles in document order.
    pub articles: Vec<Article>,

    /// Supplementary provisions in document order.
    pub suppl_provisions: Vec<SupplProvision>,
}
