//! Exemplar character notation.
//!
//! CLDR stores exemplar sets as a bracketed, space-separated list such as
//! `[a b c {ch} d-f é]`. [`parse`] turns that into display units in
//! source order: single characters, or whole clusters for `{...}` groups.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::ExemplarError;

/// Maximum number of exemplar units used for a sample string.
pub const EXEMPLAR_CUTOFF_SIZE: usize = 50;

/// Parse exemplar notation into display units.
///
/// Ranges (`a-e`) expand to every code point after the preceding
/// single-character unit up to and including the right operand.
/// Duplicates are kept.
pub fn parse(source: &str) -> Result<Vec<String>, ExemplarError> {
    let chars: Vec<char> = source.chars().collect();
    let body = match chars.split_first() {
        Some(('[', rest)) => rest,
        _ => return Err(ExemplarError::MissingOpenBracket),
    };
    let body = body.strip_suffix(&[']']).unwrap_or(body);

    let mut units: Vec<String> = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        match body[pos] {
            ' ' => pos += 1,
            '{' => {
                let start = pos;
                let mut cluster = String::new();
                pos += 1;
                loop {
                    match body.get(pos) {
                        None => return Err(ExemplarError::UnterminatedCluster { offset: start }),
                        Some('}') => break,
                        Some(_) => {
                            let (next, ch) = read_char(body, pos)?;
                            cluster.push(ch);
                            pos = next;
                        }
                    }
                }
                units.push(cluster);
                pos += 1;
            }
            '-' => {
                let offset = pos;
                let previous =
                    units.last().ok_or(ExemplarError::RangeWithoutStart { offset })?;
                let mut previous_chars = previous.chars();
                let first = match (previous_chars.next(), previous_chars.next()) {
                    (Some(ch), None) => ch,
                    _ => {
                        return Err(ExemplarError::RangeAfterCluster {
                            offset,
                            previous: previous.clone(),
                        });
                    }
                };
                if pos + 1 >= body.len() {
                    return Err(ExemplarError::RangeWithoutEnd { offset });
                }
                let (next, last) = read_char(body, pos + 1)?;
                units.extend(
                    (u32::from(first) + 1..=u32::from(last))
                        .filter_map(char::from_u32)
                        .map(String::from),
                );
                pos = next;
            }
            _ => {
                let (next, ch) = read_char(body, pos)?;
                units.push(ch.to_string());
                pos = next;
            }
        }
    }

    Ok(units)
}

/// Decode one possibly-escaped character starting at `pos`.
///
/// Returns the offset just past it and the decoded character.
fn read_char(body: &[char], pos: usize) -> Result<(usize, char), ExemplarError> {
    match body[pos] {
        found @ (' ' | '-' | '{' | '}') => Err(ExemplarError::UnexpectedChar { offset: pos, found }),
        '\\' => match body.get(pos + 1) {
            None => Err(ExemplarError::DanglingEscape),
            Some('u') => {
                let start = pos + 2;
                let digits = body[start..].iter().take_while(|c| c.is_ascii_hexdigit()).count();
                if !(4..=6).contains(&digits) {
                    return Err(ExemplarError::HexDigitCount { offset: pos, digits });
                }
                let hex: String = body[start..start + digits].iter().collect();
                let ch = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(ExemplarError::InvalidCodePoint { offset: pos })?;
                Ok((start + digits, ch))
            }
            Some(&ch) => Ok((pos + 2, ch)),
        },
        ch => Ok((pos + 1, ch)),
    }
}

/// Whether a unit starts with a letter, number, punctuation or symbol.
fn is_displayable(unit: &str) -> bool {
    unit.chars().next().is_some_and(|ch| {
        !matches!(
            get_general_category(ch),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
    })
}

/// Build a space-joined sample string from the first displayable units.
pub fn sample_text_from_exemplar(units: &[String]) -> String {
    units
        .iter()
        .filter(|unit| is_displayable(unit))
        .take(EXEMPLAR_CUTOFF_SIZE)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
