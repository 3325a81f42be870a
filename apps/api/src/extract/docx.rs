use std::path::Path;

use docx_rs::{Break, BreakType, DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::ExtractError;

/// Joins the body paragraphs with `\n`. Empty paragraphs stay as empty lines;
/// table contents are not included.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        // Page and column breaks carry no text
                        RunChild::Break(br) if *br == Break::new(BreakType::TextWrapping) => {
                            out.push('\n')
                        }
                        _ => {}
                    }
                }
            }
            // Hyperlinked text (e.g. a LinkedIn URL) is still resume content
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}
