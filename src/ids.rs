//! Deterministic hierarchical identifier derivation.
//!
//! Every identifier is a pure function of the parent identifier and the raw
//! numbering token from the source document. The reference-extraction
//! pipeline matches on these strings byte-for-byte, so the derivation rules
//! are a compatibility contract: the raw article token is embedded verbatim,
//! branch suffix included, and no counter or registry is involved.

/// Identifier for an article within a law's scope.
///
/// The raw `Num` token is used verbatim so source numbering survives
/// exactly, including inserted-article branch suffixes.
///
/// # Examples
/// ```
/// use horei_ingest::ids::article_id;
///
/// assert_eq!(article_id("320AC0000000046", "1"), "320AC0000000046_art1");
/// assert_eq!(article_id("320AC0000000046", "2_2"), "320AC0000000046_art2_2");
/// ```
#[must_use]
pub fn article_id(law_id: &str, raw_num: &str) -> String {
    format!("{law_id}_art{raw_num}")
}

/// Identifier for the implicit article synthesized when a provision holds
/// paragraphs without any article subdivision.
#[must_use]
pub fn main_article_id(law_id: &str) -> String {
    format!("{law_id}_main")
}

/// Identifier for a paragraph within an article's scope.
#[must_use]
pub fn paragraph_id(article_id: &str, paragraph_num: u32) -> String {
    format!("{article_id}_para{paragraph_num}")
}

/// Identifier for an item within a paragraph's scope.
#[must_use]
pub fn item_id(paragraph_id: &str, item_num: u32) -> String {
    format!("{paragraph_id}_item{item_num}")
}

/// Identifier for a supplementary provision.
///
/// Amending-law numbers may contain spaces; they are replaced with
/// underscores to keep the identifier a single token.
///
/// # Examples
/// ```
/// use horei_ingest::ids::suppl_provision_id;
///
/// assert_eq!(
///     suppl_provision_id("320AC0000000046", "New", None),
///     "320AC0000000046_suppl_New"
/// );
/// assert_eq!(
///     suppl_provision_id("320AC0000000046", "Amend", Some("X Y")),
///     "320AC0000000046_suppl_Amend_X_Y"
/// );
/// ```
#[must_use]
pub fn suppl_provision_id(law_id: &str, type_code: &str, amend_law_num: Option<&str>) -> String {
    let mut id = format!("{law_id}_suppl_{type_code}");
    if let Some(num) = amend_law_num {
        id.push('_');
        id.push_str(&num.replace(' ', "_"));
    }
    id
}

/// Base ordinal of a possibly branch-suffixed numbering token.
///
/// Inserted articles carry tokens like `2_2` (article 2, branch 2); the
/// base ordinal is the integer before the first underscore. Returns `None`
/// for tokens that do not start with an integer.
#[must_use]
pub fn base_ordinal(token: &str) -> Option<u32> {
    let base = token.split('_').next().unwrap_or(token);
    base.parse().ok()
}
