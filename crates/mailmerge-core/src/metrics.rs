//! Text measurement with the standard Helvetica metrics.
//!
//! Widths come from the Helvetica AFM (units per 1000 em) for printable ASCII.
//! Other characters are measured as a digit.

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;
const FALLBACK_WIDTH: u16 = 556;

/// Advance widths for characters 0x20 (space) through 0x7E (tilde).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0 - 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A - Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a - z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

fn char_units(ch: char) -> u16 {
    let code = ch as u32;
    if (0x20..=0x7e).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize]
    } else if ch == '\t' {
        HELVETICA_WIDTHS[0]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in millimetres when set at `font_size` points.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_units(ch))).sum();
    units as f32 / 1000.0 * font_size * MM_PER_INCH / POINTS_PER_INCH
}
