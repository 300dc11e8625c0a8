// src/scrape/competitions.rs
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

use crate::aggregate::{EventSender, MergeEvent};
use crate::config::options::SiteOptions;
use crate::core::Browser;
use crate::data::FlagUpdate;
use crate::error::{Error, Result};
use crate::specs::{competition, results};

/// Read the results index, then merge every linked competition page through a
/// pool of at most `workers` concurrent page fetches.
pub async fn merge<B: Browser + 'static>(
    browser: Arc<B>,
    site: SiteOptions,
    workers: usize,
    tx: EventSender,
) -> Result<()> {
    let index = browser.open(&site.results_url()).await?;
    let links = results::competition_links(&index)?;
    drop(index);

    if links.is_empty() {
        warn!("results index lists no competitions");
        return Ok(());
    }
    if tx.send(MergeEvent::Planned { pages: links.len() }).await.is_err() {
        return Ok(());
    }

    let workers = workers.min(links.len()).max(1);
    info!(competitions = links.len(), workers, "merging competition results");

    // Concurrency
    let links = Arc::new(links);
    let counter = Arc::new(AtomicUsize::new(0));
    let mut pool = JoinSet::new();

    for _ in 0..workers {
        let browser = Arc::clone(&browser);
        let links = Arc::clone(&links);
        let idx = Arc::clone(&counter);
        let tx = tx.clone();

        pool.spawn(async move {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                let Some(url) = links.get(i) else { break };
                if !merge_page(&*browser, url, &tx).await? {
                    break; // aggregator gone
                }
            }
            Ok::<_, Error>(())
        });
    }
    drop(tx);

    // First failure wins; dropping `pool` aborts the remaining workers.
    while let Some(joined) = pool.join_next().await {
        joined??;
    }
    Ok(())
}

/// Send one flag update per id listed on the page. `Ok(false)` when the
/// receiving side has hung up.
pub async fn merge_page<B: Browser + ?Sized>(browser: &B, url: &Url, tx: &EventSender) -> Result<bool> {
    let page = browser.open(url).await?;
    let sheet = competition::parse(&page)?;
    let source = page.url().to_string();
    drop(page);

    let flag = sheet.flag;
    debug!(title = %sheet.title, ?flag, ids = sheet.ids.len(), "competition page read");

    for id in sheet.ids {
        let event = MergeEvent::Set { update: FlagUpdate { id, flag }, source: source.clone() };
        if tx.send(event).await.is_err() {
            return Ok(false);
        }
    }
    Ok(tx.send(MergeEvent::PageDone { label: sheet.title }).await.is_ok())
}
