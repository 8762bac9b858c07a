/// Convert layout Y (top-down) to PDF Y (bottom-up).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Distance in millimeters from the top of a text line box to its
/// baseline. Both adapters use this so glyphs land at the same height.
pub fn baseline_offset_mm(size_pt: f32) -> f32 {
    size_pt * 0.8 * (25.4 / 72.0)
}

/// Map text to WinAnsi bytes; glyphs outside Latin-1 degrade to '?'.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

/// Rough Helvetica run width in points (the average glyph is about half an
/// em). Used only to anchor right- and center-aligned runs; left-aligned
/// text needs no measurement at all.
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}
