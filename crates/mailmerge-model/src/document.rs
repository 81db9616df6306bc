//! Laid-out documents: pages of positioned text lines.

use serde::{Deserialize, Serialize};

use crate::options::LayoutOptions;

/// A content line and its baseline position on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    /// Millimetres from the top edge.
    pub y: f32,
}

/// Header block printed once, on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub reference: String,
    pub date: String,
}

impl PageHeader {
    pub fn reference_line(&self) -> String {
        format!("Reference: {}", self.reference)
    }

    pub fn date_line(&self) -> String {
        format!("Date: {}", self.date)
    }
}

/// Footer stamped on every page once the page count is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFooter {
    pub generated_on: String,
    pub page_number: usize,
    pub page_count: usize,
}

impl PageFooter {
    /// Left-aligned footer text.
    pub fn left_text(&self) -> String {
        format!("Generated on: {}", self.generated_on)
    }

    /// Right-aligned footer text.
    pub fn right_text(&self) -> String {
        format!("Page {} of {}", self.page_number, self.page_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub header: Option<PageHeader>,
    pub lines: Vec<PlacedLine>,
    pub footer: Option<PageFooter>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            header: None,
            lines: Vec::new(),
            footer: None,
        }
    }
}

/// The paginated rendering of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub layout: LayoutOptions,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every content line across all pages, in reading order, without header or footer.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(|line| line.text.as_str()))
    }

    pub fn header(&self) -> Option<&PageHeader> {
        self.pages.first().and_then(|page| page.header.as_ref())
    }
}

/// A document together with the artifact name it is written under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedDocument {
    /// 1-based position of the source record.
    pub ordinal: usize,
    pub display_name: String,
    pub file_name: String,
    pub document: Document,
}
