//! Source-annotated rendering of violations, for humans at a terminal.

use annotate_snippets::display_list::{DisplayList, FormatOptions};
use annotate_snippets::snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation};

use crate::validate::Violation;

/// Where a violation's line came from.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub line: &'a str,
    pub line_number: usize,
    pub origin: Option<&'a str>,
}

impl Violation {
    fn annotations<'a>(&self, label: &'a str, line: &str) -> Vec<SourceAnnotation<'a>> {
        let (start, end) = self.range;
        if start == end {
            return Vec::new();
        }
        vec![SourceAnnotation {
            range: (char_offset(line, start), char_offset(line, end)),
            label,
            annotation_type: AnnotationType::Error,
        }]
    }

    pub fn create_snippet<'a>(&self, title: &'a str, label: &'a str, location: Location<'a>) -> Snippet<'a> {
        Snippet {
            title: Some(Annotation {
                label: Some(title),
                id: None,
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![],
            slices: vec![Slice {
                source: location.line,
                line_start: location.line_number,
                origin: location.origin,
                fold: false,
                annotations: self.annotations(label, location.line),
            }],
            opt: FormatOptions::default(),
        }
    }
}

/// Renders one violation as an annotated snippet of its line.
pub fn render(violation: &Violation, location: Location<'_>, color: bool) -> String {
    let title = violation.to_string();
    let label = violation.reason.to_string();
    let mut snippet = violation.create_snippet(&title, &label, location);
    snippet.opt.color = color;
    DisplayList::from(snippet).to_string()
}

fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapePolicy;
    use crate::lexer::Statement;
    use crate::validate::validate;

    use pretty_assertions::assert_eq;

    fn violations(line: &str, policy: ShapePolicy) -> Vec<Violation> {
        validate(&Statement::tokenize(line, 10), policy).violations().to_vec()
    }

    #[test]
    fn snippet_points_at_offending_token() {
        let line = "ADD AREG BREG";
        let found = violations(line, ShapePolicy::Lenient);
        let location = Location { line, line_number: 12, origin: Some("prog.asm") };
        let snippet = found[1].create_snippet("title", "label", location);

        assert_eq!(snippet.slices.len(), 1);
        assert_eq!(snippet.slices[0].line_start, 12);
        assert_eq!(snippet.slices[0].origin, Some("prog.asm"));
        assert_eq!(snippet.slices[0].annotations.len(), 1);
        assert_eq!(snippet.slices[0].annotations[0].range, (4, 8));
    }

    #[test]
    fn ranges_are_in_chars() {
        let line = "Ω1 DS";
        let found = violations(line, ShapePolicy::Lenient);
        let location = Location { line, line_number: 1, origin: None };
        let snippet = found[0].create_snippet("title", "label", location);
        assert_eq!(snippet.slices[0].annotations[0].range, (3, 5));
    }

    #[test]
    fn blank_line_has_no_annotation() {
        let found = violations("", ShapePolicy::Strict);
        let location = Location { line: "", line_number: 5, origin: None };
        let snippet = found[0].create_snippet("title", "label", location);
        assert!(snippet.slices[0].annotations.is_empty());
    }

    #[test]
    fn rendered_text_names_the_problem() {
        let line = "LOOP EQU";
        let found = violations(line, ShapePolicy::Lenient);
        let rendered = render(&found[0], Location { line, line_number: 3, origin: Some("prog.asm") }, false);

        assert!(rendered.contains("Invalid Mnemonic Instruction 'EQU'"), "{}", rendered);
        assert!(rendered.contains("reserved word from Assembler Directives"), "{}", rendered);
        assert!(rendered.contains("prog.asm"), "{}", rendered);
        assert!(rendered.contains("LOOP EQU"), "{}", rendered);
    }
}
