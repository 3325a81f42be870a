use std::path::Path;

use tracing::debug;

use super::ExtractError;

/// Extracts text page by page, appending a newline after each page. Blank
/// lines around a page's text are dropped; lines within it are kept.
///
/// A page with no extractable text (e.g. a scanned image) is an error, not
/// skipped.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    debug!("PDF has {} page(s)", pages.len());
    join_pages(pages)
}

fn join_pages(pages: Vec<String>) -> Result<String, ExtractError> {
    let mut text = String::new();
    for (index, page) in pages.into_iter().enumerate() {
        if page.trim().is_empty() {
            return Err(ExtractError::EmptyPage { page: index + 1 });
        }
        // pdf-extract pads each page with layout blank lines
        text.push_str(page.trim_matches(|c| c == '\n' || c == '\r'));
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one Helvetica text line per page; an empty string
    /// produces a page with no content operations.
    fn pdf_fixture(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn write_fixture(dir: &Path, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join("fixture.pdf");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_join_pages_appends_newline_per_page() {
        let text = join_pages(vec!["Jane Doe".into(), "Rust, Go".into()]).unwrap();
        assert_eq!(text, "Jane Doe\nRust, Go\n");
    }

    #[test]
    fn test_join_pages_drops_surrounding_blank_lines() {
        let pages = vec!["\n\nJane Doe\nRust".into(), "\r\n\nSkills\n\n".into()];
        assert_eq!(join_pages(pages).unwrap(), "Jane Doe\nRust\nSkills\n");
    }

    #[test]
    fn test_join_pages_rejects_blank_page() {
        let err = join_pages(vec!["Jane Doe".into(), " \n ".into(), "More".into()]).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyPage { page: 2 }));
    }

    #[test]
    fn test_join_pages_empty_document_is_empty_text() {
        assert_eq!(join_pages(vec![]).unwrap(), "");
    }

    #[test]
    fn test_extract_multi_page_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), &pdf_fixture(&["Alpha", "Bravo", "Charlie"]));

        let text = extract(&path).unwrap();

        assert_eq!(text, "Alpha\nBravo\nCharlie\n");
    }

    #[test]
    fn test_extract_fails_on_page_without_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), &pdf_fixture(&["Alpha", ""]));

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyPage { page: 2 }));
    }

    #[test]
    fn test_extract_rejects_non_pdf_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), b"this is not a pdf");

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
