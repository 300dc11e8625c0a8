// src/runner.rs
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::info;

use crate::{
    aggregate::{self, Aggregator},
    config::options::AppOptions,
    core::Browser,
    data::Flag,
    error::Result,
    file,
    progress::Progress,
    scrape::{self, competitions, lodging, Credentials},
    store::RegistrantCollection,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub registrants: usize,
    pub files_written: Vec<PathBuf>,
}

/// Whole pipeline: sign in, load the roster, merge competitions and lodging,
/// export. The first error from any step ends the run before anything is written.
pub async fn run<B: Browser + 'static>(
    browser: Arc<B>,
    opts: &AppOptions,
    creds: &Credentials,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    progress.log("Logging in");
    scrape::sign_in(&*browser, &opts.site, creds).await?;
    progress.finish();

    progress.log("Loading registrants");
    let roster = scrape::roster::load(&*browser, &opts.site).await?;
    progress.log(&format!("{} registrants loaded", roster.len()));
    progress.finish();

    progress.log("Merging competitions and lodging");
    let merged = merge(browser, opts, roster, progress).await?;
    progress.finish();

    let files_written = file::export(&merged, &opts.export)?;
    Ok(RunSummary { registrants: merged.len(), files_written })
}

/// Run both mergers against `roster` and return the merged collection.
///
/// The mergers run as concurrent tasks and only send events; this function is
/// the one place registrants are mutated.
pub async fn merge<B: Browser + 'static>(
    browser: Arc<B>,
    opts: &AppOptions,
    roster: RegistrantCollection,
    progress: &mut dyn Progress,
) -> Result<RegistrantCollection> {
    let (tx, mut rx) = aggregate::channel();
    let mut tasks = JoinSet::new();
    tasks.spawn(competitions::merge(
        Arc::clone(&browser),
        opts.site.clone(),
        opts.scrape.workers,
        tx.clone(),
    ));
    tasks.spawn(lodging::merge(browser, opts.site.clone(), opts.lodging.clone(), tx));

    // Returning early drops `tasks`, which aborts whatever is still running.
    let mut agg = Aggregator::new(roster);
    loop {
        tokio::select! {
            Some(event) = rx.recv() => agg.handle(event, progress)?,
            Some(joined) = tasks.join_next() => joined??,
            else => break,
        }
    }

    let (applied, changed) = agg.stats();
    let merged = agg.into_inner();
    info!(
        applied,
        changed,
        ek = merged.count(Flag::Individual),
        pk = merged.count(Flag::Pair),
        kg = merged.count(Flag::SmallGroup),
        gg = merged.count(Flag::LargeGroup),
        night1 = merged.count(Flag::LodgingNight1),
        night2 = merged.count(Flag::LodgingNight2),
        "merge complete"
    );
    Ok(merged)
}
