// src/specs/results.rs
//
// Results index: one row per competition, detail link in the third cell.

use url::Url;

use crate::config::consts::SEL_COMPETITION_LINKS;
use crate::core::Page;
use crate::error::Result;

/// Competition detail links in page order, duplicates dropped.
pub fn competition_links(page: &Page) -> Result<Vec<Url>> {
    let mut out: Vec<Url> = Vec::new();
    for a in page.query_all(SEL_COMPETITION_LINKS)? {
        let url = a.link_target(page)?.clone();
        if !out.contains(&url) {
            out.push(url);
        }
    }
    Ok(out)
}
