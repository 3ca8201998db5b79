//! HP Prime keyword documentation registry.
//!
//! Maps each PPL keyword to a structured documentation record (syntax,
//! example, description). The records are compile-time literals; the
//! registry is read-only after construction and can be shared freely
//! across threads.

mod records;
mod render;

pub use render::{render_markdown, LANGUAGE_ID};

use std::collections::HashMap;

/// The three documentation section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Syntax,
    Example,
    Description,
}

/// How a section is labeled in the rendered markdown.
///
/// The source material mixes three styles per record (markdown headings,
/// inline-code tags, and no label at all), sometimes in Spanish. The label
/// text is stored per record and reproduced as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// No header; the body stands alone.
    None,
    /// A `### text` markdown heading.
    Heading(&'static str),
    /// An inline-code tag, rendered as `` `text:` ``.
    Tag(&'static str),
}

/// Section content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Formal syntax lines, rendered as a fenced code block.
    Syntax(&'static [&'static str]),
    /// Worked example: fenced code lines plus an optional trailing note.
    Example {
        code: &'static [&'static str],
        note: Option<&'static str>,
    },
    /// Free-text paragraphs.
    Description(&'static [&'static str]),
}

impl Body {
    pub fn kind(&self) -> SectionKind {
        match self {
            Body::Syntax(_) => SectionKind::Syntax,
            Body::Example { .. } => SectionKind::Example,
            Body::Description(_) => SectionKind::Description,
        }
    }
}

/// One labeled section of a documentation record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub label: Label,
    pub body: Body,
}

/// The full hoverable content for one keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRecord {
    /// Exact, case-sensitive identifier this record is indexed under
    pub keyword: &'static str,
    /// Sections in their per-record order; the section set, ordering, and
    /// label text vary between records and are preserved as authored.
    pub sections: &'static [Section],
}

impl DocRecord {
    /// Lines of the formal syntax block, empty for keywords without one.
    pub fn syntax_lines(&self) -> &'static [&'static str] {
        self.sections
            .iter()
            .find_map(|s| match s.body {
                Body::Syntax(lines) => Some(lines),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// The example code lines and optional trailing note, if the record
    /// has a worked example.
    pub fn example(&self) -> Option<(&'static [&'static str], Option<&'static str>)> {
        self.sections.iter().find_map(|s| match s.body {
            Body::Example { code, note } => Some((code, note)),
            _ => None,
        })
    }

    /// The description paragraphs, empty if the record has none.
    pub fn description_paragraphs(&self) -> &'static [&'static str] {
        self.sections
            .iter()
            .find_map(|s| match s.body {
                Body::Description(paragraphs) => Some(paragraphs),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Which section kinds are present, in recorded order.
    pub fn section_kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.sections.iter().map(|s| s.body.kind())
    }
}

/// Immutable keyword -> documentation mapping
pub struct DocRegistry {
    map: HashMap<&'static str, &'static DocRecord>,
}

impl DocRegistry {
    /// Build the registry from the literal record table.
    pub fn new() -> Self {
        let map = records::RECORDS
            .iter()
            .map(|record| (record.keyword, record))
            .collect();
        Self { map }
    }

    /// Exact, case-sensitive lookup. Absence is the routine outcome for
    /// most hovered words and is signaled with `None`, never an error.
    pub fn lookup(&self, word: &str) -> Option<&'static DocRecord> {
        self.map.get(word).copied()
    }

    /// All registered keywords, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for DocRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_identity() {
        let registry = DocRegistry::new();
        for record in records::RECORDS {
            let found = registry.lookup(record.keyword);
            assert!(found.is_some(), "missing record for {}", record.keyword);
            assert_eq!(found.unwrap().keyword, record.keyword);
        }
    }

    #[test]
    fn test_keywords_are_unique() {
        let registry = DocRegistry::new();
        assert_eq!(registry.len(), records::RECORDS.len());
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let registry = DocRegistry::new();
        assert!(registry.lookup("MAKEMAT").is_some());
        assert!(registry.lookup("makemat").is_none());
        assert!(registry.lookup("MakeMat").is_none());
        assert!(registry.lookup(" MAKEMAT").is_none());
        assert!(registry.lookup("MAKEMAT ").is_none());
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("NONEXISTENT_TOKEN").is_none());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let registry = DocRegistry::new();
        let first = registry.lookup("ROTATE").unwrap();
        let second = registry.lookup("ROTATE").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_makemat_record() {
        let registry = DocRegistry::new();
        let record = registry.lookup("MAKEMAT").unwrap();
        assert_eq!(record.syntax_lines(), ["MAKEMAT(expression, rows, columns)"]);
        let (code, note) = record.example().unwrap();
        assert_eq!(code, ["MAKEMAT(0,3,3)"]);
        assert!(note.unwrap().contains("matrix of zeros 3 × 3"));
    }

    #[test]
    fn test_left_record_edge_cases() {
        let registry = DocRegistry::new();
        let record = registry.lookup("LEFT").unwrap();
        let description = record.description_paragraphs().join(" ");
        assert!(description.contains("first n characters"));
        assert!(description.contains("If n ≥ DIM(str) or n < 0, returns str"));
        assert!(description.contains("If n == 0 returns the empty string"));
    }

    #[test]
    fn test_rotate_record_examples() {
        let registry = DocRegistry::new();
        let record = registry.lookup("ROTATE").unwrap();
        let (code, _) = record.example().unwrap();
        assert!(code.iter().any(|l| l.contains(r#"ROTATE("12345",2) returns "34512""#)));
        assert!(code.iter().any(|l| l.contains(r#"ROTATE("12345",-1) returns "51234""#)));
        assert!(code.iter().any(|l| l.contains(r#"ROTATE("12345",6) returns "12345""#)));
    }

    #[test]
    fn test_rect_default_argument_order() {
        let registry = DocRegistry::new();
        let record = registry.lookup("RECT").unwrap();
        let description = record.description_paragraphs().join(" ");
        assert!(description.contains("correspond first to the leftmost parameters"));
        assert!(description
            .contains("they should have referred to x2 and y2 instead of border color and fill color"));
    }

    #[test]
    fn test_section_order_is_preserved() {
        let registry = DocRegistry::new();

        // Records with a worked example keep syntax -> example -> description.
        let left = registry.lookup("LEFT").unwrap();
        let kinds: Vec<_> = left.section_kinds().collect();
        assert_eq!(
            kinds,
            [SectionKind::Syntax, SectionKind::Example, SectionKind::Description]
        );

        // Records without one have no example section at all.
        let begin = registry.lookup("BEGIN").unwrap();
        let kinds: Vec<_> = begin.section_kinds().collect();
        assert_eq!(kinds, [SectionKind::Syntax, SectionKind::Description]);
        assert!(begin.example().is_none());
    }

    #[test]
    fn test_mixed_language_content_is_preserved() {
        let registry = DocRegistry::new();

        // MAKEMAT keeps its Spanish syntax heading.
        let makemat = registry.lookup("MAKEMAT").unwrap();
        assert_eq!(makemat.sections[0].label, Label::Heading("Sintaxis"));

        // DIMGROB's description was never translated.
        let dimgrob = registry.lookup("DIMGROB").unwrap();
        assert_eq!(dimgrob.sections[1].label, Label::Tag("Descripción"));
        assert!(dimgrob.description_paragraphs()[0].starts_with("Establece las dimensiones"));
    }

    #[test]
    fn test_non_ascii_keyword() {
        let registry = DocRegistry::new();
        let record = registry.lookup("C→PX").unwrap();
        assert_eq!(record.syntax_lines(), ["C→PX(x,y) or C→PX({x,y})"]);
        assert!(record.example().is_none());
    }
}
