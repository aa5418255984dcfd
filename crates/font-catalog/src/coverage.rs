use std::collections::BTreeSet;

use crate::record::Coverage;

/// Code points every font maps and that say nothing about its scripts.
pub const IGNORED_CODEPOINTS: [u32; 5] = [0x00, 0x0D, 0x20, 0xA0, 0xFEFF];

/// Compress a charset into inclusive `(start, end)` ranges of `%04X` hex.
pub fn charset_to_ranges(charset: &BTreeSet<u32>) -> Vec<(String, String)> {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    for &codepoint in charset.iter().filter(|cp| !IGNORED_CODEPOINTS.contains(cp)) {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == codepoint => *end = codepoint,
            _ => ranges.push((codepoint, codepoint)),
        }
    }
    ranges.into_iter().map(|(start, end)| (format!("{start:04X}"), format!("{end:04X}"))).collect()
}

/// Whether every character of `text` is covered.
///
/// Fonts without computed coverage support nothing.
pub fn charset_supports_text(coverage: &Coverage, text: &str) -> bool {
    match coverage {
        Coverage::Computed(charset) => text.chars().all(|c| charset.contains(&u32::from(c))),
        Coverage::Unavailable => false,
    }
}
