//! Markdown rendering for documentation records.
//!
//! Presentation lives here, not in the records: the same data could be
//! re-rendered for a different host surface without touching the content.

use super::{Body, DocRecord, Label};

/// Fence tag for PPL code blocks
pub const LANGUAGE_ID: &str = "hp-prime";

/// Render a record to hover markdown.
///
/// Sections appear in the record's own order, each under its recorded
/// label, separated by horizontal rules. A section the record does not
/// have is not rendered at all, headerless.
pub fn render_markdown(record: &DocRecord) -> String {
    let mut out = String::new();

    for (i, section) in record.sections.iter().enumerate() {
        if i > 0 {
            out.push_str("---\n\n");
        }

        match section.label {
            Label::None => {}
            Label::Heading(text) => {
                out.push_str("### ");
                out.push_str(text);
                out.push_str("\n\n");
            }
            Label::Tag(text) => {
                out.push('`');
                out.push_str(text);
                out.push_str(":`\n\n");
            }
        }

        match section.body {
            Body::Syntax(lines) => push_code_block(&mut out, lines),
            Body::Example { code, note } => {
                push_code_block(&mut out, code);
                if let Some(note) = note {
                    out.push_str(note);
                    out.push_str("\n\n");
                }
            }
            Body::Description(paragraphs) => {
                for paragraph in paragraphs {
                    out.push_str(paragraph);
                    out.push_str("\n\n");
                }
            }
        }
    }

    out
}

fn push_code_block(out: &mut String, lines: &[&str]) {
    out.push_str("```");
    out.push_str(LANGUAGE_ID);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n\n");
}

#[cfg(test)]
mod tests {
    use super::super::DocRegistry;
    use super::*;

    #[test]
    fn test_render_record_with_example() {
        let registry = DocRegistry::new();
        let record = registry.lookup("LEFT").unwrap();
        let markdown = render_markdown(record);

        assert_eq!(markdown.matches("`Example:`").count(), 1);
        assert!(markdown.contains("```hp-prime\nLEFT(str,n)\n```"));
        assert!(markdown.contains(r#"LEFT("MOMOGUMBO",3) returns "MOM""#));
        // Syntax | example | description, two rules between them.
        assert_eq!(markdown.matches("---\n").count(), 2);
    }

    #[test]
    fn test_render_record_without_example_has_no_example_header() {
        let registry = DocRegistry::new();
        let record = registry.lookup("BEGIN").unwrap();
        let markdown = render_markdown(record);

        assert!(!markdown.contains("Example"));
        assert_eq!(markdown.matches("---\n").count(), 1);
        assert!(markdown.contains("BEGIN command1; command2; ...; commandN; END;"));
    }

    #[test]
    fn test_render_heading_style_record() {
        let registry = DocRegistry::new();
        let record = registry.lookup("MAKEMAT").unwrap();
        let markdown = render_markdown(record);

        assert!(markdown.contains("### Sintaxis\n"));
        assert!(markdown.contains("### Example of use\n"));
        assert!(markdown.contains("### MAKEMAT\n"));
        // The example's trailing note lands outside the code fence.
        assert!(markdown.contains("```\n\nReturns a matrix of zeros 3 × 3"));
    }

    #[test]
    fn test_render_spanish_tag() {
        let registry = DocRegistry::new();
        let record = registry.lookup("DIMGROB").unwrap();
        let markdown = render_markdown(record);

        assert!(markdown.contains("`Descripción:`"));
        assert!(!markdown.contains("`Description:`"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let registry = DocRegistry::new();
        let record = registry.lookup("ROTATE").unwrap();
        assert_eq!(render_markdown(record), render_markdown(record));
    }
}
