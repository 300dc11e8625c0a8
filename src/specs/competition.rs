// src/specs/competition.rs
//
// One competition's result page: a heading naming the category and a table
// whose first cell lists the competitors of each start, e.g. "42, 57".

use crate::classify::classify;
use crate::config::consts::{SEL_COMPETITION_TITLE, SEL_TABLE_ROWS};
use crate::core::Page;
use crate::data::{parse_id, Flag, RegistrantId};
use crate::error::{Error, Result};

pub const ID_DELIMITER: &str = ", ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionSheet {
    pub title: String,
    /// Category flag the title classifies to.
    pub flag: Flag,
    /// Every id referenced, in row order. A team start contributes several.
    pub ids: Vec<RegistrantId>,
}

pub fn parse(page: &Page) -> Result<CompetitionSheet> {
    let title = s!(page.first(SEL_COMPETITION_TITLE)?.text());
    let Some(flag) = classify(&title).flag() else {
        return Err(Error::ClassificationMiss { title, url: page.url().to_string() });
    };

    let mut ids = Vec::new();
    for row in page.rows(SEL_TABLE_ROWS)? {
        // header-only rows carry no <td>
        let Some(first) = row.first() else { continue };
        ids.extend(split_ids(first.text())?);
    }
    Ok(CompetitionSheet { title, flag, ids })
}

/// "42, 57" → [42, 57]. Any token that is not a positive integer fails.
pub fn split_ids(text: &str) -> Result<Vec<RegistrantId>> {
    text.split(ID_DELIMITER).map(parse_id).collect()
}
