//! Choosing which binaries represent a family on a target platform.
//!
//! Two passes narrow the candidate set. The platform pass drops every
//! binary built for another platform, and drops a generic binary only when
//! a basically-the-same twin built for the target platform exists. The hint
//! pass then drops a binary only when a basically-the-same twin with the
//! platform's desired hint status exists.

use std::collections::HashSet;

use log::debug;

use crate::{
    error::{Error, Result},
    introspect::FontIntrospector,
    record::{FontRecord, Platform},
};

/// Allowed family sizes: Regular; Regular and Bold; the four classic
/// styles; or the full weight range.
pub const MEMBER_COUNTS: [usize; 4] = [1, 2, 4, 7];

/// The members chosen for one family on one platform.
#[derive(Debug, Clone)]
pub struct FamilySelection<'a> {
    pub key: String,
    pub platform: Platform,
    /// The Regular upright member.
    pub representative: &'a FontRecord,
    /// Sorted by weight, style and path.
    pub members: Vec<&'a FontRecord>,
}

/// One entry of a family's style list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    pub style: &'static str,
    pub weight: u16,
}

impl FamilySelection<'_> {
    pub fn styles(&self) -> Vec<StyleEntry> {
        self.members
            .iter()
            .map(|font| StyleEntry { style: font.style.css_style(), weight: font.weight.css_weight() })
            .collect()
    }

    /// Display name from the representative's family name record.
    pub fn display_name(&self, introspector: &dyn FontIntrospector) -> Result<String> {
        let name = introspector.family_name(&self.representative.path)?;
        Ok(name.strip_suffix(" Regular").map(String::from).unwrap_or(name))
    }

    /// CSS generic family of the representative.
    pub fn category(&self) -> Option<&'static str> {
        css_category(&self.representative.family)
    }
}

fn is_candidate(font: &FontRecord, key: &str) -> bool {
    font.key == key && font.variant.as_deref() != Some("UI") && font.file_name().ends_with("tf")
}

/// Pick the members of family `key` for `platform` out of `fonts`.
pub fn select<'a>(
    key: &str,
    platform: Platform,
    fonts: impl IntoIterator<Item = &'a FontRecord>,
) -> Result<FamilySelection<'a>> {
    let mut members: HashSet<&FontRecord> =
        fonts.into_iter().filter(|font| is_candidate(font, key)).collect();

    let mut dropped = HashSet::new();
    for font in &members {
        match font.platform {
            Some(p) if p == platform => dropped.extend(
                members
                    .iter()
                    .filter(|alt| font.basically_same(alt) && alt.platform != font.platform),
            ),
            Some(_) => {
                dropped.insert(*font);
            }
            None => {}
        }
    }
    members.retain(|font| !dropped.contains(font));

    let desired = platform.desired_hint_status();
    let dropped: HashSet<&FontRecord> = members
        .iter()
        .filter(|font| font.hint_status == desired)
        .flat_map(|font| {
            members
                .iter()
                .filter(move |alt| font.basically_same(alt) && alt.hint_status != font.hint_status)
        })
        .copied()
        .collect();
    members.retain(|font| !dropped.contains(font));

    let representatives: Vec<&FontRecord> =
        members.iter().copied().filter(|font| font.is_regular_upright()).collect();
    let [representative] = representatives[..] else {
        return Err(Error::Representative {
            key: key.to_string(),
            platform,
            found: representatives.len(),
        });
    };

    if !MEMBER_COUNTS.contains(&members.len()) {
        return Err(Error::MemberCount { key: key.to_string(), platform, count: members.len() });
    }

    let mut members: Vec<&FontRecord> = members.into_iter().collect();
    members.sort_by(|a, b| (a.weight, a.style, &a.path).cmp(&(b.weight, b.style, &b.path)));
    debug!("{key} on {platform}: {} members", members.len());

    Ok(FamilySelection { key: key.to_string(), platform, representative, members })
}

/// CSS generic family for a display family name.
pub fn css_category(family: &str) -> Option<&'static str> {
    match family {
        "Noto Naskh" | "Noto Serif" | "Tinos" => Some("serif"),
        "Arimo" | "Noto Kufi" | "Noto Sans" => Some("sans-serif"),
        "Cousine" => Some("monospace"),
        _ => None,
    }
}
