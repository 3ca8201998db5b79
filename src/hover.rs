//! Hover provider for PPL documents.

use crate::docs::{render_markdown, DocRegistry};
use crate::server::{Hover, MarkupContent, Position, Range};

/// Hover provider backed by the keyword documentation registry
pub struct HoverProvider {
    registry: DocRegistry,
}

impl HoverProvider {
    /// Create a new hover provider
    pub fn new() -> Self {
        Self {
            registry: DocRegistry::new(),
        }
    }

    /// The underlying documentation registry
    pub fn registry(&self) -> &DocRegistry {
        &self.registry
    }

    /// Get hover information at the given position.
    ///
    /// Returns `None` for positions outside the document, comment or empty
    /// lines, and words without documentation; for hover that is the
    /// common, expected outcome.
    pub fn get_hover(&self, content: &str, line: usize, character: usize) -> Option<Hover> {
        let current_line = content.lines().nth(line)?;
        let trimmed = current_line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") {
            return None;
        }

        let (word, (start, end)) = word_at_position(current_line, character)?;
        let record = self.registry.lookup(&word)?;

        Some(Hover {
            contents: MarkupContent {
                kind: "markdown".to_string(),
                value: render_markdown(record),
            },
            range: Some(Range {
                start: Position {
                    line: line as u32,
                    character: start as u32,
                },
                end: Position {
                    line: line as u32,
                    character: end as u32,
                },
            }),
        })
    }
}

impl Default for HoverProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// PPL word characters. `→` is part of identifiers such as `C→PX`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '→'
}

/// Get the word under `position` and its column span (in characters).
fn word_at_position(line: &str, position: usize) -> Option<(String, (usize, usize))> {
    let chars: Vec<char> = line.chars().collect();
    if position >= chars.len() || !is_word_char(chars[position]) {
        return None;
    }

    let mut start = position;
    let mut end = position;

    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    Some((chars[start..end].iter().collect(), (start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_on_keyword() {
        let provider = HoverProvider::new();
        let hover = provider.get_hover("MAKEMAT(0,3,3);", 0, 2);
        assert!(hover.is_some());
        let hover = hover.unwrap();
        assert_eq!(hover.contents.kind, "markdown");
        assert!(hover.contents.value.contains("MAKEMAT(expression, rows, columns)"));

        let range = hover.range.unwrap();
        assert_eq!(range.start.character, 0);
        assert_eq!(range.end.character, 7);
    }

    #[test]
    fn test_hover_on_second_line() {
        let provider = HoverProvider::new();
        let content = "EXPORT DEMO()\nBEGIN\n LOCAL n:=3;\nEND;";
        let hover = provider.get_hover(content, 2, 2);
        assert!(hover.is_some());
        assert!(hover.unwrap().contents.value.contains("LOCAL var1,var2"));
    }

    #[test]
    fn test_hover_on_unknown_word() {
        let provider = HoverProvider::new();
        assert!(provider.get_hover("myvariable:=5;", 0, 2).is_none());
    }

    #[test]
    fn test_hover_is_case_sensitive() {
        let provider = HoverProvider::new();
        assert!(provider.get_hover("makemat(0,3,3);", 0, 2).is_none());
    }

    #[test]
    fn test_hover_skips_comments_and_blank_lines() {
        let provider = HoverProvider::new();
        assert!(provider.get_hover("// MAKEMAT is great", 0, 4).is_none());
        assert!(provider.get_hover("", 0, 0).is_none());
    }

    #[test]
    fn test_hover_out_of_range() {
        let provider = HoverProvider::new();
        assert!(provider.get_hover("KILL;", 5, 0).is_none());
        assert!(provider.get_hover("KILL;", 0, 40).is_none());
    }

    #[test]
    fn test_word_extraction_with_arrow() {
        let (word, span) = word_at_position("X:=C→PX(1,2);", 5).unwrap();
        assert_eq!(word, "C→PX");
        assert_eq!(span, (3, 7));

        let provider = HoverProvider::new();
        let hover = provider.get_hover("X:=C→PX(1,2);", 0, 5).unwrap();
        assert!(hover.contents.value.contains("Converts Cartesian coordinates"));
    }

    #[test]
    fn test_word_extraction_with_underscore_suffix() {
        let (word, _) = word_at_position("RECT_P(40, 90, 320, 240);", 4).unwrap();
        assert_eq!(word, "RECT_P");
    }

    #[test]
    fn test_word_boundary_on_punctuation() {
        assert!(word_at_position("KILL;", 4).is_none());
        assert!(word_at_position("A B", 1).is_none());
    }
}
