//! XML utility functions for navigating Standard Law DOM trees.

use roxmltree::Node;

/// Tag name without any namespace prefix.
#[must_use]
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// First child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use horei_ingest::xml::find_child;
///
/// let xml = r#"<LawBody><LawTitle>title</LawTitle></LawBody>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_child(doc.root_element(), "LawTitle").is_some());
/// assert!(find_child(doc.root_element(), "EnactStatement").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && tag_name(*child) == tag)
}

/// All child elements with the given tag name, in document order.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && tag_name(*child) == tag)
}

/// Trimmed text content of an element, or the empty string.
#[must_use]
pub fn text_of(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of a named child element; `None` when the child is absent
/// or carries no text.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag)
        .and_then(|child| child.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Space-joined `Sentence` fragments under a named sentence container.
///
/// Returns the empty string when the container or its fragments are absent.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use horei_ingest::xml::joined_sentences;
///
/// let xml = r#"<Paragraph>
///   <ParagraphSentence><Sentence>First.</Sentence><Sentence>Second.</Sentence></ParagraphSentence>
/// </Paragraph>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(
///     joined_sentences(doc.root_element(), "ParagraphSentence"),
///     "First. Second."
/// );
/// ```
#[must_use]
pub fn joined_sentences(node: Node<'_, '_>, container_tag: &str) -> String {
    let Some(container) = find_child(node, container_tag) else {
        return String::new();
    };

    find_children(container, "Sentence")
        .filter_map(|sentence| sentence.text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_tag_name_strips_namespace() {
        let xml = r#"<ns:Law xmlns:ns="http://example.com"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(tag_name(doc.root_element()), "Law");
    }

    #[test]
    fn test_find_child() {
        let xml = r#"<Law><LawNum>num</LawNum><LawBody/></Law>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "LawNum").is_some());
        assert!(find_child(root, "LawBody").is_some());
        assert!(find_child(root, "Missing").is_none());
    }

    #[test]
    fn test_find_children_in_document_order() {
        let xml = r#"<Chapter><Article Num="1"/><Other/><Article Num="2"/></Chapter>"#;
        let doc = Document::parse(xml).unwrap();

        let nums: Vec<_> = find_children(doc.root_element(), "Article")
            .filter_map(|n| n.attribute("Num"))
            .collect();
        assert_eq!(nums, vec!["1", "2"]);
    }

    #[test]
    fn test_text_of_trims() {
        let xml = "<LawTitle>  労働基準法  </LawTitle>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(text_of(doc.root_element()), "労働基準法");
    }

    #[test]
    fn test_child_text() {
        let xml = "<Item><ItemTitle>一</ItemTitle><Empty></Empty></Item>";
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(child_text(root, "ItemTitle"), Some("一".to_string()));
        assert_eq!(child_text(root, "Empty"), None);
        assert_eq!(child_text(root, "Missing"), None);
    }

    #[test]
    fn test_joined_sentences() {
        let xml = r#"<Item>
            <ItemSentence><Sentence>A.</Sentence><Sentence>B.</Sentence></ItemSentence>
        </Item>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(joined_sentences(doc.root_element(), "ItemSentence"), "A. B.");
    }

    #[test]
    fn test_joined_sentences_absent_container() {
        let xml = "<Paragraph/>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(joined_sentences(doc.root_element(), "ParagraphSentence"), "");
    }

    #[test]
    fn test_joined_sentences_empty_fragments_skipped() {
        let xml = r#"<Paragraph>
            <ParagraphSentence><Sentence>Text.</Sentence><Sentence/></ParagraphSentence>
        </Paragraph>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            joined_sentences(doc.root_element(), "ParagraphSentence"),
            "Text."
        );
    }
}
