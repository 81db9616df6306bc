//! Pagination of rendered text onto fixed-size pages.
//!
//! Layout runs in two passes. [`paginate`] wraps the text and places lines top to
//! bottom, starting a new page whenever the next line would cross the bottom
//! margin. [`apply_footers`] then stamps every committed page with the generation
//! timestamp and its `Page X of N` counter, once `N` is known.

use mailmerge_model::{Document, LayoutOptions, Page, PageFooter, PageHeader, PlacedLine};

use crate::wrap::wrap_text;

/// Wrap `text` and lay it out on pages. The header goes on page one only.
///
/// Page one holds `floor((page_height - margin - content_top) / line_height)` lines;
/// continuation pages start at the top margin. Content is never truncated.
pub fn paginate(text: &str, header: PageHeader, layout: &LayoutOptions) -> Document {
    let wrapped = wrap_text(text, layout.wrap_width, layout.body_font_size);

    let mut pages = Vec::new();
    let mut page = Page::new(1);
    page.header = Some(header);
    let mut top = layout.content_top;
    let mut capacity = layout.lines_per_page(top).max(1);

    for line in wrapped {
        if page.lines.len() == capacity {
            let next = Page::new(page.number + 1);
            pages.push(std::mem::replace(&mut page, next));
            top = layout.margin;
            capacity = layout.lines_per_page(top).max(1);
        }
        let y = top + page.lines.len() as f32 * layout.line_height;
        page.lines.push(PlacedLine { text: line, y });
    }
    pages.push(page);

    Document {
        layout: layout.clone(),
        pages,
    }
}

/// Stamp every page with its footer. Existing footers are replaced.
pub fn apply_footers(document: &mut Document, generated_on: &str) {
    let page_count = document.pages.len();
    for page in &mut document.pages {
        page.footer = Some(PageFooter {
            generated_on: generated_on.to_string(),
            page_number: page.number,
            page_count,
        });
    }
}

/// Paginate and stamp footers in one call.
pub fn layout_document(
    text: &str,
    header: PageHeader,
    layout: &LayoutOptions,
    generated_on: &str,
) -> Document {
    let mut document = paginate(text, header, layout);
    apply_footers(&mut document, generated_on);
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> PageHeader {
        PageHeader {
            reference: "REF001".to_string(),
            date: "1/1/2026".to_string(),
        }
    }

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn first_page_starts_below_header() {
        let layout = LayoutOptions::default();
        let document = paginate("hello", header(), &layout);
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.pages[0].lines[0].y, layout.content_top);
        assert_eq!(document.header(), Some(&header()));
    }

    #[test]
    fn overflow_starts_new_page_at_top_margin() {
        let layout = LayoutOptions::default();
        let first_capacity = layout.lines_per_page(layout.content_top);
        let document = paginate(&numbered_lines(first_capacity + 1), header(), &layout);

        assert_eq!(document.page_count(), 2);
        assert_eq!(document.pages[0].lines.len(), first_capacity);
        let second = &document.pages[1];
        assert!(second.header.is_none());
        assert_eq!(second.lines[0].y, layout.margin);
        assert_eq!(second.lines[0].text, format!("line {}", first_capacity + 1));
    }

    #[test]
    fn no_line_crosses_bottom_margin() {
        let layout = LayoutOptions::default();
        let document = paginate(&numbered_lines(200), header(), &layout);
        for page in &document.pages {
            for line in &page.lines {
                assert!(line.y + layout.line_height <= layout.content_bottom());
            }
        }
    }

    #[test]
    fn footers_count_final_pages() {
        let layout = LayoutOptions::default();
        let document = layout_document(&numbered_lines(100), header(), &layout, "now");
        let count = document.page_count();
        assert_eq!(count, 3);
        for (idx, page) in document.pages.iter().enumerate() {
            let footer = page.footer.as_ref().unwrap();
            assert_eq!(footer.right_text(), format!("Page {} of {count}", idx + 1));
            assert_eq!(footer.left_text(), "Generated on: now");
        }
    }

    #[test]
    fn long_url_stays_within_page_width() {
        let layout = LayoutOptions::default();
        let text = format!("See https://example.com/{} for details", "a".repeat(120));
        let document = paginate(&text, header(), &layout);
        for line in document.content_lines() {
            let right = layout.margin + crate::metrics::text_width(line, layout.body_font_size);
            assert!(right <= layout.page_width, "{line:?} ends at {right}mm");
        }
    }

    #[test]
    fn empty_text_yields_one_page_with_blank_line() {
        let document = paginate("", header(), &LayoutOptions::default());
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.content_lines().collect::<Vec<_>>(), vec![""]);
    }
}
