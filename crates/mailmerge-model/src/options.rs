//! Configuration options for ingestion and document layout.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// How delimited table text is split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvMode {
    /// Split every line on commas and strip whitespace and quote characters.
    ///
    /// A quoted field containing a comma is split like any other field.
    #[default]
    Naive,
    /// RFC 4180 quoting: quoted fields may contain delimiters and newlines.
    Quoted,
}

/// Fixed page geometry used when laying out a document.
///
/// All distances are millimetres measured from the top-left corner of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub page_width: f32,
    pub page_height: f32,
    /// Left margin, top margin of continuation pages and bottom margin.
    pub margin: f32,
    /// Baseline of the reference line on page one.
    pub header_reference_y: f32,
    /// Baseline of the generation-date line on page one.
    pub header_date_y: f32,
    /// Vertical position of the separator rule under the header.
    pub rule_y: f32,
    /// Right end of the separator rule.
    pub rule_end_x: f32,
    /// First content line on page one, below the header block.
    pub content_top: f32,
    pub line_height: f32,
    /// Maximum width of a wrapped content line.
    pub wrap_width: f32,
    /// Right edge used to align the page counter in the footer.
    pub footer_right_x: f32,
    /// Distance of the footer baseline above the bottom edge.
    pub footer_offset: f32,
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub footer_font_size: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            header_reference_y: 20.0,
            header_date_y: 30.0,
            rule_y: 35.0,
            rule_end_x: 190.0,
            content_top: 50.0,
            line_height: 6.0,
            wrap_width: 170.0,
            footer_right_x: 170.0,
            footer_offset: 10.0,
            header_font_size: 12.0,
            body_font_size: 11.0,
            footer_font_size: 8.0,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest position a content line may reach before a new page starts.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Baseline of the footer line.
    pub fn footer_y(&self) -> f32 {
        self.page_height - self.footer_offset
    }

    /// Number of content lines that fit on a page starting at `top`.
    pub fn lines_per_page(&self, top: f32) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        let available = self.content_bottom() - top;
        if available < 0.0 {
            0
        } else {
            (available / self.line_height).floor() as usize
        }
    }

    /// Reject geometry that cannot hold a single content line.
    pub fn validate(&self) -> Result<()> {
        if self.line_height <= 0.0 {
            return Err(ModelError::Message(format!(
                "line height must be positive, got {}",
                self.line_height
            )));
        }
        if self.wrap_width <= 0.0 {
            return Err(ModelError::Message(format!(
                "wrap width must be positive, got {}",
                self.wrap_width
            )));
        }
        for (label, top) in [("content top", self.content_top), ("margin", self.margin)] {
            if self.lines_per_page(top) == 0 {
                return Err(ModelError::Message(format!(
                    "{label} {top}mm leaves no room for content on a {}mm page",
                    self.page_height
                )));
            }
        }
        Ok(())
    }

    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_wrap_width(mut self, wrap_width: f32) -> Self {
        self.wrap_width = wrap_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_matches_reference_geometry() {
        let layout = LayoutOptions::default();
        assert_eq!(layout.lines_per_page(layout.content_top), 37);
        assert_eq!(layout.lines_per_page(layout.margin), 42);
    }

    #[test]
    fn zero_line_height_fits_nothing() {
        let layout = LayoutOptions::default().with_line_height(0.0);
        assert_eq!(layout.lines_per_page(layout.content_top), 0);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn page_too_short_for_header_is_rejected() {
        let layout = LayoutOptions::default().with_page_size(210.0, 60.0);
        assert!(layout.validate().is_err());
    }
}
