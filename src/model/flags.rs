use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    api::api_structs::TeamRecord,
    model::{constants::REGIONAL_INDICATOR_BASE, structures::flag_style::FlagStyle}
};

lazy_static! {
    // Country prefixes used in team ids. England, Scotland and Wales use the
    // subdivision tag sequences since they have no regional indicator pair.
    static ref FLAG_TABLE: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("arg", "\u{1F1E6}\u{1F1F7}");
        m.insert("aut", "\u{1F1E6}\u{1F1F9}");
        m.insert("bel", "\u{1F1E7}\u{1F1EA}");
        m.insert("bra", "\u{1F1E7}\u{1F1F7}");
        m.insert("cro", "\u{1F1ED}\u{1F1F7}");
        m.insert("cze", "\u{1F1E8}\u{1F1FF}");
        m.insert("den", "\u{1F1E9}\u{1F1F0}");
        m.insert("eng", "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}");
        m.insert("esp", "\u{1F1EA}\u{1F1F8}");
        m.insert("fra", "\u{1F1EB}\u{1F1F7}");
        m.insert("ger", "\u{1F1E9}\u{1F1EA}");
        m.insert("gre", "\u{1F1EC}\u{1F1F7}");
        m.insert("ita", "\u{1F1EE}\u{1F1F9}");
        m.insert("ned", "\u{1F1F3}\u{1F1F1}");
        m.insert("nor", "\u{1F1F3}\u{1F1F4}");
        m.insert("pol", "\u{1F1F5}\u{1F1F1}");
        m.insert("por", "\u{1F1F5}\u{1F1F9}");
        m.insert("sco", "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}");
        m.insert("srb", "\u{1F1F7}\u{1F1F8}");
        m.insert("sui", "\u{1F1E8}\u{1F1ED}");
        m.insert("swe", "\u{1F1F8}\u{1F1EA}");
        m.insert("tur", "\u{1F1F9}\u{1F1F7}");
        m.insert("ukr", "\u{1F1FA}\u{1F1E6}");
        m.insert("usa", "\u{1F1FA}\u{1F1F8}");
        m.insert("wal", "\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}");
        m
    };
}

/// Maps a team to the decorative flag shown before its name.
///
/// Implementations pick which field of the team carries the country code
/// and how that code becomes a glyph. An unrecognised or missing code yields
/// an empty string, never an error.
pub trait FlagLookup {
    /// The country code this strategy reads from `team`.
    fn country_code<'a>(&self, team: &'a TeamRecord) -> Option<&'a str>;

    /// The glyph for `code`, or an empty string.
    fn glyph(&self, code: Option<&str>) -> String;

    fn flag_for(&self, team: &TeamRecord) -> String {
        self.glyph(self.country_code(team))
    }
}

/// Looks the id prefix (`ita` in `ita/juventus`) up in a fixed table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFlags;

impl FlagLookup for TableFlags {
    fn country_code<'a>(&self, team: &'a TeamRecord) -> Option<&'a str> {
        team.id_prefix()
    }

    fn glyph(&self, code: Option<&str>) -> String {
        code.and_then(|c| FLAG_TABLE.get(c.to_ascii_lowercase().as_str()))
            .map(|g| g.to_string())
            .unwrap_or_default()
    }
}

/// Builds the regional indicator pair for a two letter ISO code.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalIndicatorFlags;

impl FlagLookup for RegionalIndicatorFlags {
    fn country_code<'a>(&self, team: &'a TeamRecord) -> Option<&'a str> {
        team.country_iso2.as_deref()
    }

    fn glyph(&self, code: Option<&str>) -> String {
        let code = match code {
            Some(c) if c.len() == 2 && c.bytes().all(|b| b.is_ascii_alphabetic()) => c,
            _ => return String::new()
        };

        code.bytes()
            .map(|b| b.to_ascii_uppercase() - b'A')
            .filter_map(|offset| char::from_u32(REGIONAL_INDICATOR_BASE + offset as u32))
            .collect()
    }
}

pub fn flag_lookup(style: FlagStyle) -> Box<dyn FlagLookup + Send + Sync> {
    match style {
        FlagStyle::Table => Box::new(TableFlags),
        FlagStyle::RegionalIndicator => Box::new(RegionalIndicatorFlags)
    }
}
