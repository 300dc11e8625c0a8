// src/specs/roster.rs
//
// "Manage all registrants" table.
//
// Column layout (0-based):
//   0 Id | 1 Last name | 2 First name | 3 Age | 4 Gender | 5 Club | 6,7 (unused) | 8 Status | 9 Email

use crate::config::consts::SEL_TABLE_ROWS;
use crate::core::Page;
use crate::data::{parse_id, Registrant};
use crate::error::Result;

pub const MIN_COLUMNS: usize = 10;
pub const DELETED: &str = "Deleted";

const COL_ID: usize = 0;
const COL_LAST: usize = 1;
const COL_FIRST: usize = 2;
const COL_AGE: usize = 3;
const COL_GENDER: usize = 4;
const COL_CLUB: usize = 5;
const COL_STATUS: usize = 8;
const COL_MAIL: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub age: String,
    pub gender: String,
    pub club: String,
    pub status: String,
    pub mail: String,
}

impl RosterRow {
    /// Build from the cell texts of one table row.
    pub fn from_cells(mut cells: Vec<String>) -> Option<Self> {
        if cells.len() < MIN_COLUMNS {
            return None;
        }
        let mut take = |i: usize| std::mem::take(&mut cells[i]);
        Some(Self {
            id: take(COL_ID),
            last_name: take(COL_LAST),
            first_name: take(COL_FIRST),
            age: take(COL_AGE),
            gender: take(COL_GENDER),
            club: take(COL_CLUB),
            status: take(COL_STATUS),
            mail: take(COL_MAIL),
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.status == DELETED
    }

    /// "First Last", all flags cleared. Fails only on a bad id.
    pub fn into_registrant(self) -> Result<Registrant> {
        let id = parse_id(&self.id)?;
        let name = join!(&self.first_name, " ", &self.last_name);
        Ok(Registrant::new(id, name, self.age, self.gender, self.club, self.mail))
    }
}

/// All roster rows in page order, deleted ones included.
pub fn parse(page: &Page) -> Result<Vec<RosterRow>> {
    page.rows(SEL_TABLE_ROWS)?
        .into_iter()
        .enumerate()
        .map(|(i, cells)| {
            let n = cells.len();
            let texts = cells.into_iter().map(|c| s!(c.text())).collect();
            RosterRow::from_cells(texts).ok_or_else(|| {
                page.missing(format!("roster row {} has {n} cells, need {MIN_COLUMNS}", i + 1))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_cells_maps_columns() {
        let row = RosterRow::from_cells(cells(&[
            "42", "Mueller", "Anna", "24", "f", "ClubX", "x", "y", "Active", "a@x.com",
        ]))
        .unwrap();
        assert_eq!(row.first_name, "Anna");
        assert_eq!(row.status, "Active");
        assert_eq!(row.mail, "a@x.com");
        assert!(!row.is_deleted());

        let r = row.into_registrant().unwrap();
        assert_eq!(r.id(), 42);
        assert_eq!(r.name(), "Anna Mueller");
    }

    #[test]
    fn short_rows_are_rejected() {
        assert!(RosterRow::from_cells(cells(&["1", "A", "B"])).is_none());
    }

    #[test]
    fn parse_reports_short_row_as_extraction_failure() {
        let page = Page::new(
            Url::parse("https://portal.test/registrants/manage_all").unwrap(),
            "<table><tbody><tr><td>1</td><td>Only</td></tr></tbody></table>",
        );
        let err = parse(&page).unwrap_err();
        assert!(err.to_string().contains("has 2 cells"));
    }
}
