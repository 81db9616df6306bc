//! Plain-text output.
//!
//! Each page is written as its header block (first page only), the content
//! lines and a footer line. Pages are separated by a form feed on its own line.

use mailmerge_model::{Document, NamedDocument, Page};

/// Printed under the header in place of the PDF rule.
pub const RULE: &str = "------------------------------------------------------------";

/// Separator written between pages.
pub const PAGE_BREAK: &str = "\u{c}";

pub fn render_text(document: &Document) -> String {
    document
        .pages
        .iter()
        .map(render_page)
        .collect::<Vec<_>>()
        .join(&format!("\n{PAGE_BREAK}\n"))
}

/// Every document in order, separated like pages.
pub fn render_combined_text(documents: &[NamedDocument]) -> String {
    documents
        .iter()
        .map(|named| render_text(&named.document))
        .collect::<Vec<_>>()
        .join(&format!("\n{PAGE_BREAK}\n"))
}

fn render_page(page: &Page) -> String {
    let mut lines = Vec::with_capacity(page.lines.len() + 6);
    if let Some(header) = &page.header {
        lines.push(header.reference_line());
        lines.push(header.date_line());
        lines.push(RULE.to_string());
        lines.push(String::new());
    }
    lines.extend(page.lines.iter().map(|line| line.text.clone()));
    if let Some(footer) = &page.footer {
        lines.push(String::new());
        lines.push(format!("{} | {}", footer.left_text(), footer.right_text()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use mailmerge_core::layout_document;
    use mailmerge_model::{LayoutOptions, PageHeader};

    use super::*;

    fn document(text: &str) -> Document {
        layout_document(
            text,
            PageHeader {
                reference: "REF001".to_string(),
                date: "10/17/2026".to_string(),
            },
            &LayoutOptions::default(),
            "10/17/2026, 9:00:00 AM",
        )
    }

    #[test]
    fn single_page_letter() {
        let text = render_text(&document("Dear Alice,\n\nWelcome aboard."));
        insta::assert_snapshot!(text, @r"
        Reference: REF001
        Date: 10/17/2026
        ------------------------------------------------------------

        Dear Alice,

        Welcome aboard.

        Generated on: 10/17/2026, 9:00:00 AM | Page 1 of 1
        ");
    }

    #[test]
    fn continuation_pages_have_no_header() {
        let body = vec!["x"; 50].join("\n");
        let text = render_text(&document(&body));
        let pages: Vec<&str> = text.split(PAGE_BREAK).collect();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].starts_with("Reference: REF001"));
        assert!(!pages[1].contains("Reference:"));
        assert!(pages[1].trim_end().ends_with("Page 2 of 2"));
    }
}
