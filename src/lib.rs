//! Horei ingest - Parse Japanese Standard Law XML into normalized statute
//! entities.
//!
//! This crate is the ingestion front-end of a legal-reference pipeline: it
//! reads one Standard Law XML document per statute and produces the
//! normalized entity tree (law metadata, articles, paragraphs, items and
//! supplementary provisions) consumed by the persistence and
//! reference-extraction stages. Each parse call is a pure function of the
//! document bytes and the supplied law ID, so a corpus can be processed in
//! parallel with one parse per document and no shared state.
//!
//! # Example
//!
//! ```
//! use horei_ingest::parser::parse_statute;
//!
//! let xml = r#"<Law Era="Reiwa" Year="1" LawType="Act" Num="1"
//!               PromulgateMonth="5" PromulgateDay="1">
//!   <LawNum>令和元年法律第一号</LawNum>
//!   <LawBody>
//!     <LawTitle>サンプル法</LawTitle>
//!     <MainProvision>
//!       <Article Num="1">
//!         <Paragraph Num="1">
//!           <ParagraphSentence><Sentence>第一文。</Sentence></ParagraphSentence>
//!         </Paragraph>
//!       </Article>
//!     </MainProvision>
//!   </LawBody>
//! </Law>"#;
//!
//! let doc = roxmltree::Document::parse(xml).unwrap();
//! let statute = parse_statute(&doc, "501AC0000000001").unwrap();
//! assert_eq!(statute.law.law_title, "サンプル法");
//! assert_eq!(statute.articles[0].article_id, "501AC0000000001_art1");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, law-ID validation and the filename convention
//! - [`types`]: Core entity types (Law, Article, Reference, etc.)
//! - [`error`]: Error types and Result alias
//! - [`era`]: Era-to-Gregorian calendar conversion
//! - [`ids`]: Deterministic hierarchical identifier derivation
//! - [`xml`]: XML DOM navigation utilities
//! - [`parser`]: The document-tree parser

pub mod config;
pub mod era;
pub mod error;
pub mod ids;
pub mod parser;
pub mod types;
pub mod xml;

// Re-export the main entry points
pub use parser::{
    parse_articles, parse_law, parse_statute, parse_statute_file, parse_suppl_provisions,
};

// Re-export commonly used items
pub use config::{law_id_from_path, validate_law_id};
pub use error::{IngestError, Result};
pub use types::{
    Article, Item, Law, LawType, Paragraph, Reference, ReferenceType, Statute, SupplProvision,
    SupplProvisionType,
};
