// src/scrape/roster.rs
use tracing::{debug, info};

use crate::config::options::SiteOptions;
use crate::core::Browser;
use crate::error::Result;
use crate::specs::roster::{self, RosterRow};
use crate::store::RegistrantCollection;

/// Build the base collection from the roster page. The only step that creates
/// registrants; it must finish before any merger starts.
pub async fn load<B: Browser + ?Sized>(browser: &B, site: &SiteOptions) -> Result<RegistrantCollection> {
    let page = browser.open(&site.roster_url()).await?;
    let rows = roster::parse(&page)?;
    drop(page);

    let total = rows.len();
    let collection = build(rows)?;
    info!(rows = total, registrants = collection.len(), "roster loaded");
    Ok(collection)
}

/// Deleted rows are dropped; every other row must carry a valid, unique id.
pub fn build(rows: Vec<RosterRow>) -> Result<RegistrantCollection> {
    let mut collection = RegistrantCollection::new();
    for row in rows {
        if row.is_deleted() {
            debug!(id = %row.id, "skipping deleted registrant");
            continue;
        }
        collection.insert(row.into_registrant()?)?;
    }
    Ok(collection)
}
