// src/scrape/lodging.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::aggregate::{EventSender, MergeEvent};
use crate::config::options::{LodgingOptions, SiteOptions};
use crate::core::Browser;
use crate::data::{Flag, FlagUpdate};
use crate::error::Result;
use crate::specs::lodging;

/// Merge the lodging summary. One page, rows in order.
pub async fn merge<B: Browser + ?Sized>(
    browser: Arc<B>,
    site: SiteOptions,
    nights: LodgingOptions,
    tx: EventSender,
) -> Result<()> {
    let page = browser.open(&site.lodging_url()).await?;
    let rows = lodging::parse(&page)?;
    let source = page.url().to_string();
    drop(page);

    info!(rows = rows.len(), "merging lodging selections");
    if tx.send(MergeEvent::Planned { pages: 1 }).await.is_err() {
        return Ok(()); // aggregator gone
    }

    for row in rows {
        let flags = nights_for(&row.label, &nights);
        let sent = if flags.is_empty() {
            tx.send(MergeEvent::Check { id: row.id, source: source.clone() }).await
        } else {
            let mut sent = Ok(());
            for flag in flags {
                let update = FlagUpdate { id: row.id, flag };
                sent = tx.send(MergeEvent::Set { update, source: source.clone() }).await;
                if sent.is_err() { break; }
            }
            sent
        };
        if sent.is_err() {
            return Ok(()); // aggregator gone
        }
    }
    if tx.send(MergeEvent::PageDone { label: s!("Lodging") }).await.is_err() {
        debug!("aggregator closed before lodging completion");
    }
    Ok(())
}

/// Nights selected by one label. Both markers may be present.
pub fn nights_for(label: &str, nights: &LodgingOptions) -> Vec<Flag> {
    let mut out = Vec::with_capacity(2);
    if label.contains(nights.first_night.as_str()) {
        out.push(Flag::LodgingNight1);
    }
    if label.contains(nights.second_night.as_str()) {
        out.push(Flag::LodgingNight2);
    }
    out
}
