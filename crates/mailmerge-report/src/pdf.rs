//! PDF output.
//!
//! Page geometry comes from the document's [`LayoutOptions`], where positions
//! are measured from the top edge. PDF coordinates start at the bottom, so
//! every y value is flipped against the page height before drawing.

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    PdfLayerIndex, PdfPageIndex, Point,
};

use mailmerge_core::text_width;
use mailmerge_model::{Document, LayoutOptions, NamedDocument, Page};

use crate::error::{ReportError, Result};

const LAYER_NAME: &str = "Content";
const RULE_THICKNESS: f32 = 0.5;

/// Render one document to PDF bytes.
pub fn render_pdf(document: &Document, title: &str) -> Result<Vec<u8>> {
    build_pdf(
        title,
        document.pages.iter().map(|page| (&document.layout, page)),
    )
}

/// Render every document into a single PDF, one after another.
pub fn render_combined_pdf(documents: &[NamedDocument], title: &str) -> Result<Vec<u8>> {
    build_pdf(
        title,
        documents.iter().flat_map(|named| {
            let layout = &named.document.layout;
            named.document.pages.iter().map(move |page| (layout, page))
        }),
    )
}

fn build_pdf<'a>(
    title: &str,
    pages: impl IntoIterator<Item = (&'a LayoutOptions, &'a Page)>,
) -> Result<Vec<u8>> {
    let mut pages = pages.into_iter();
    let (first_layout, first_page) = pages.next().ok_or(ReportError::NoPages)?;

    let (doc, page_index, layer_index) = PdfDocument::new(
        title,
        Mm(first_layout.page_width),
        Mm(first_layout.page_height),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    draw_page(&layer(&doc, page_index, layer_index), first_page, first_layout, &font);
    for (layout, page) in pages {
        let (page_index, layer_index) =
            doc.add_page(Mm(layout.page_width), Mm(layout.page_height), LAYER_NAME);
        draw_page(&layer(&doc, page_index, layer_index), page, layout, &font);
    }

    doc.save_to_bytes()
        .map_err(|err| ReportError::Pdf(err.to_string()))
}

fn layer(doc: &PdfDocumentReference, page: PdfPageIndex, layer: PdfLayerIndex) -> PdfLayerReference {
    doc.get_page(page).get_layer(layer)
}

fn draw_page(layer: &PdfLayerReference, page: &Page, layout: &LayoutOptions, font: &IndirectFontRef) {
    let from_top = |y: f32| Mm(layout.page_height - y);

    if let Some(header) = &page.header {
        layer.use_text(
            header.reference_line(),
            layout.header_font_size,
            Mm(layout.margin),
            from_top(layout.header_reference_y),
            font,
        );
        layer.use_text(
            header.date_line(),
            layout.header_font_size,
            Mm(layout.margin),
            from_top(layout.header_date_y),
            font,
        );
        layer.set_outline_thickness(RULE_THICKNESS);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(layout.margin), from_top(layout.rule_y)), false),
                (Point::new(Mm(layout.rule_end_x), from_top(layout.rule_y)), false),
            ],
            is_closed: false,
        });
    }

    for line in &page.lines {
        if line.text.is_empty() {
            continue;
        }
        layer.use_text(
            line.text.as_str(),
            layout.body_font_size,
            Mm(layout.margin),
            from_top(line.y),
            font,
        );
    }

    if let Some(footer) = &page.footer {
        let y = from_top(layout.footer_y());
        layer.use_text(
            footer.left_text(),
            layout.footer_font_size,
            Mm(layout.margin),
            y,
            font,
        );
        // Right-aligned against footer_right_x.
        let right = footer.right_text();
        let x = layout.footer_right_x - text_width(&right, layout.footer_font_size);
        layer.use_text(right, layout.footer_font_size, Mm(x), y, font);
    }
}

#[cfg(test)]
mod tests {
    use mailmerge_core::layout_document;
    use mailmerge_model::PageHeader;

    use super::*;

    fn document(lines: usize) -> Document {
        let text = vec!["content"; lines].join("\n");
        layout_document(
            &text,
            PageHeader {
                reference: "REF001".to_string(),
                date: "10/17/2026".to_string(),
            },
            &LayoutOptions::default(),
            "10/17/2026, 9:00:00 AM",
        )
    }

    #[test]
    fn produces_pdf_bytes() {
        let bytes = render_pdf(&document(3), "letter").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn multi_page_document_renders() {
        let document = document(120);
        assert!(document.page_count() > 2);
        let bytes = render_pdf(&document, "letter").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn rendering_no_pages_is_an_error() {
        let err = render_combined_pdf(&[], "all").unwrap_err();
        assert!(matches!(err, ReportError::NoPages));
    }
}
