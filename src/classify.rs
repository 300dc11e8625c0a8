// src/classify.rs
//
// Competition heading → category. Explicit table, first prefix match wins.

use crate::data::Flag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompetitionType {
    Individual,
    Pair,
    SmallGroup,
    LargeGroup,
    Unknown,
}

impl CompetitionType {
    /// The participation flag for this category. `None` for `Unknown`.
    pub fn flag(self) -> Option<Flag> {
        match self {
            CompetitionType::Individual => Some(Flag::Individual),
            CompetitionType::Pair       => Some(Flag::Pair),
            CompetitionType::SmallGroup => Some(Flag::SmallGroup),
            CompetitionType::LargeGroup => Some(Flag::LargeGroup),
            CompetitionType::Unknown    => None,
        }
    }
}

/// Heading prefixes, checked in order. The portal titles its competitions in
/// German; the English names are accepted as well.
pub const PREFIXES: &[(&str, CompetitionType)] = &[
    ("Einzel",      CompetitionType::Individual),
    ("Individual",  CompetitionType::Individual),
    ("Paar",        CompetitionType::Pair),
    ("Pair",        CompetitionType::Pair),
    ("Kleingruppe", CompetitionType::SmallGroup),
    ("Small Group", CompetitionType::SmallGroup),
    ("Großgruppe",  CompetitionType::LargeGroup),
    ("Large Group", CompetitionType::LargeGroup),
];

pub fn classify(title: &str) -> CompetitionType {
    let title = title.trim_start();
    PREFIXES
        .iter()
        .find(|(prefix, _)| title.starts_with(prefix))
        .map(|(_, kind)| *kind)
        .unwrap_or(CompetitionType::Unknown)
}
