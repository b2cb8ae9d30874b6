//! Recursive-descent parser for Standard Law XML documents.
//!
//! The parser walks a fully loaded [`roxmltree::Document`] and builds the
//! entity tree top-down: law metadata first, then the main body's articles,
//! then each supplementary provision. Parent identifiers are threaded
//! downward through every construction step, so each subtree builder is a
//! pure function of its element and parent ID and sibling subtrees never
//! share state.
//!
//! Failure policy: non-well-formed XML and missing structural containers
//! (`LawBody`, `LawTitle`) abort the whole parse. A numbering token that
//! cannot be read as its expected ordinal form fails only that element; the
//! traversal logs the error with its context and continues with siblings.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::config::{law_id_from_path, DEFAULT_PROMULGATE_DAY, DEFAULT_PROMULGATE_MONTH};
use crate::era::{kanji_name, to_gregorian};
use crate::error::{IngestError, Result};
use crate::ids::{article_id, base_ordinal, item_id, main_article_id, paragraph_id, suppl_provision_id};
use crate::types::{
    Article, Item, Law, LawType, Paragraph, Statute, SupplProvision, SupplProvisionType,
};
use crate::xml::{child_text, find_child, find_children, joined_sentences, text_of};

/// Parse a statute file from disk.
///
/// The law ID is taken from the filename, per the corpus convention
/// (see [`crate::config::law_id_from_path`]).
pub fn parse_statute_file(path: &Path) -> Result<Statute> {
    let law_id = law_id_from_path(path)?;
    let xml = fs::read_to_string(path)?;
    let doc = Document::parse(&xml)?;
    parse_statute(&doc, &law_id)
}

/// Parse a complete statute from a loaded document.
pub fn parse_statute(doc: &Document<'_>, law_id: &str) -> Result<Statute> {
    Ok(Statute {
        law: parse_law(doc, law_id)?,
        articles: parse_articles(doc, law_id)?,
        suppl_provisions: parse_suppl_provisions(doc, law_id)?,
    })
}

/// Parse law-level metadata from the document root.
///
/// # Errors
/// [`IngestError::MissingElement`] when `LawBody` or `LawTitle` is absent;
/// [`IngestError::CalendarConversion`] when the promulgation date does not
/// resolve; [`IngestError::TokenFormat`] when a root numeric attribute is
/// not an integer.
pub fn parse_law(doc: &Document<'_>, law_id: &str) -> Result<Law> {
    let root = doc.root_element();

    let era = root.attribute("Era").unwrap_or_default();
    let year: i32 = numeric_attr(root, "Year", 0, law_id)?;
    let num: u32 = numeric_attr(root, "Num", 0, law_id)?;
    let law_type = LawType::from_code(root.attribute("LawType").unwrap_or_default());

    let month: u32 = numeric_attr(root, "PromulgateMonth", DEFAULT_PROMULGATE_MONTH, law_id)?;
    let day: u32 = numeric_attr(root, "PromulgateDay", DEFAULT_PROMULGATE_DAY, law_id)?;
    let promulgate_date = to_gregorian(era, year, month, day)?;

    let law_body = find_child(root, "LawBody").ok_or_else(|| missing("LawBody", law_id))?;
    let law_title = find_child(law_body, "LawTitle").ok_or_else(|| missing("LawTitle", law_id))?;

    Ok(Law {
        law_id: law_id.to_string(),
        law_type,
        law_num: find_child(root, "LawNum").map(text_of).unwrap_or_default(),
        law_title: text_of(law_title),
        law_title_kana: law_title.attribute("Kana").map(str::to_string),
        abbreviation: law_title.attribute("Abbrev").map(str::to_string),
        era: kanji_name(era),
        year,
        num,
        promulgate_date,
        enforce_date: None,
    })
}

/// Parse the main body's articles.
///
/// Visits `MainProvision` and then every `Chapter` under `LawBody`, in
/// document order.
pub fn parse_articles(doc: &Document<'_>, law_id: &str) -> Result<Vec<Article>> {
    let law_body =
        find_child(doc.root_element(), "LawBody").ok_or_else(|| missing("LawBody", law_id))?;

    let mut articles = Vec::new();
    if let Some(main) = find_child(law_body, "MainProvision") {
        articles.extend(section_articles(main, law_id));
    }
    for chapter in find_children(law_body, "Chapter") {
        articles.extend(section_articles(chapter, law_id));
    }
    Ok(articles)
}

/// Parse every supplementary provision under `LawBody`, in document order.
pub fn parse_suppl_provisions(doc: &Document<'_>, law_id: &str) -> Result<Vec<SupplProvision>> {
    let law_body =
        find_child(doc.root_element(), "LawBody").ok_or_else(|| missing("LawBody", law_id))?;

    Ok(find_children(law_body, "SupplProvision")
        .map(|elem| parse_suppl_provision(elem, law_id))
        .collect())
}

/// Parse one `SupplProvision` element.
///
/// Article identifiers inside a supplementary provision stay in the law's
/// scope; the reference corpus matches on those IDs. Direct paragraphs are
/// scoped to the provision's own identifier.
pub fn parse_suppl_provision(elem: Node<'_, '_>, law_id: &str) -> SupplProvision {
    let type_code = elem.attribute("Type").unwrap_or("New");
    let amend_law_num = elem.attribute("AmendLawNum").map(str::to_string);
    let id = suppl_provision_id(law_id, type_code, amend_law_num.as_deref());

    let mut articles = Vec::new();
    for article_elem in find_children(elem, "Article") {
        match parse_article(article_elem, law_id) {
            Ok(article) => articles.push(article),
            Err(err) => tracing::warn!(
                law_id = %law_id,
                error = %err,
                "Skipping supplementary article with invalid numbering"
            ),
        }
    }

    let paragraphs = collect_paragraphs(elem, &id, law_id);

    SupplProvision {
        suppl_provision_id: id,
        law_id: law_id.to_string(),
        amend_law_num,
        suppl_provision_type: SupplProvisionType::from_code(type_code),
        extract: elem.attribute("Extract") == Some("true"),
        articles,
        paragraphs,
    }
}

/// Parse an `Article` element in the given law's identifier scope.
///
/// # Errors
/// [`IngestError::TokenFormat`] when the `Num` token does not start with an
/// integer ordinal.
pub fn parse_article(elem: Node<'_, '_>, law_id: &str) -> Result<Article> {
    let raw_num = elem.attribute("Num").unwrap_or("0");
    let article_num = base_ordinal(raw_num).ok_or_else(|| IngestError::TokenFormat {
        law_id: law_id.to_string(),
        token: raw_num.to_string(),
        context: "Article/@Num".to_string(),
    })?;

    let id = article_id(law_id, raw_num);
    let paragraphs = collect_paragraphs(elem, &id, law_id);

    Ok(Article {
        article_id: id,
        law_id: law_id.to_string(),
        article_num,
        article_title: child_text(elem, "ArticleTitle"),
        article_caption: child_text(elem, "ArticleCaption"),
        content: lead_content(&paragraphs),
        paragraphs,
    })
}

/// Parse a `Paragraph` element under the given parent identifier scope.
///
/// # Errors
/// [`IngestError::TokenFormat`] when the `Num` attribute is not an integer.
pub fn parse_paragraph(elem: Node<'_, '_>, parent_id: &str, law_id: &str) -> Result<Paragraph> {
    let raw_num = elem.attribute("Num").unwrap_or("1");
    let paragraph_num: u32 = raw_num.parse().map_err(|_| IngestError::TokenFormat {
        law_id: law_id.to_string(),
        token: raw_num.to_string(),
        context: format!("{parent_id}/Paragraph/@Num"),
    })?;

    let id = paragraph_id(parent_id, paragraph_num);

    let mut items = Vec::new();
    for item_elem in find_children(elem, "Item") {
        match parse_item(item_elem, &id, law_id) {
            Ok(item) => items.push(item),
            Err(err) => tracing::warn!(
                law_id = %law_id,
                error = %err,
                "Skipping item with invalid numbering"
            ),
        }
    }

    Ok(Paragraph {
        paragraph_id: id,
        article_id: parent_id.to_string(),
        paragraph_num,
        content: joined_sentences(elem, "ParagraphSentence"),
        items,
    })
}

/// Parse an `Item` element under the given paragraph's identifier scope.
///
/// # Errors
/// [`IngestError::TokenFormat`] when the `Num` attribute is not an integer.
pub fn parse_item(elem: Node<'_, '_>, paragraph_id: &str, law_id: &str) -> Result<Item> {
    let raw_num = elem.attribute("Num").unwrap_or("1");
    let item_num: u32 = raw_num.parse().map_err(|_| IngestError::TokenFormat {
        law_id: law_id.to_string(),
        token: raw_num.to_string(),
        context: format!("{paragraph_id}/Item/@Num"),
    })?;

    Ok(Item {
        item_id: item_id(paragraph_id, item_num),
        paragraph_id: paragraph_id.to_string(),
        item_num,
        item_title: child_text(elem, "ItemTitle").unwrap_or_else(|| item_num.to_string()),
        content: joined_sentences(elem, "ItemSentence"),
    })
}

/// Extract the articles directly under a provision or chapter element.
///
/// A subtree holding paragraphs without any article subdivision gets a
/// single synthesized article with ordinal 0, so those paragraphs keep
/// their place in the hierarchy.
fn section_articles(section: Node<'_, '_>, law_id: &str) -> Vec<Article> {
    let mut articles = Vec::new();

    let mut has_article_elements = false;
    for elem in find_children(section, "Article") {
        has_article_elements = true;
        match parse_article(elem, law_id) {
            Ok(article) => articles.push(article),
            Err(err) => tracing::warn!(
                law_id = %law_id,
                error = %err,
                "Skipping article with invalid numbering"
            ),
        }
    }

    if !has_article_elements && find_children(section, "Paragraph").next().is_some() {
        let id = main_article_id(law_id);
        let paragraphs = collect_paragraphs(section, &id, law_id);
        let content = lead_content(&paragraphs);
        articles.push(Article {
            article_id: id,
            law_id: law_id.to_string(),
            article_num: 0,
            article_title: None,
            article_caption: None,
            content,
            paragraphs,
        });
    }

    articles
}

/// Parse the `Paragraph` children of an element, skipping the ones whose
/// numbering cannot be interpreted.
fn collect_paragraphs(parent: Node<'_, '_>, parent_id: &str, law_id: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for elem in find_children(parent, "Paragraph") {
        match parse_paragraph(elem, parent_id, law_id) {
            Ok(paragraph) => paragraphs.push(paragraph),
            Err(err) => tracing::warn!(
                law_id = %law_id,
                error = %err,
                "Skipping paragraph with invalid numbering"
            ),
        }
    }
    paragraphs
}

/// Article lead text mirrors the first paragraph that carries any content.
fn lead_content(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.content.as_str())
        .find(|content| !content.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn missing(element: &str, context: &str) -> IngestError {
    IngestError::MissingElement {
        element: element.to_string(),
        context: context.to_string(),
    }
}

fn numeric_attr<T>(node: Node<'_, '_>, name: &str, default: T, law_id: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    match node.attribute(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| IngestError::TokenFormat {
            law_id: law_id.to_string(),
            token: raw.to_string(),
            context: format!("Law/@{name}"),
        }),
    }
}
