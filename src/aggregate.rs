// src/aggregate.rs
//
// Single owner of the registrant collection while the mergers run.
// Merger tasks never touch registrants; they send `MergeEvent`s and the
// aggregator applies them one at a time.

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::consts::UPDATE_CHANNEL_CAPACITY;
use crate::data::{FlagUpdate, RegistrantId};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::store::RegistrantCollection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeEvent {
    /// A merger is about to process this many pages.
    Planned { pages: usize },
    /// Switch a flag on. `source` is the page that referenced the id.
    Set { update: FlagUpdate, source: String },
    /// The id must exist, nothing is set (e.g. a lodging row with no known night).
    Check { id: RegistrantId, source: String },
    /// One page fully sent.
    PageDone { label: String },
}

pub type EventSender = mpsc::Sender<MergeEvent>;
pub type EventReceiver = mpsc::Receiver<MergeEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::channel(UPDATE_CHANNEL_CAPACITY)
}

pub struct Aggregator {
    collection: RegistrantCollection,
    applied: usize,
    changed: usize,
}

impl Aggregator {
    pub fn new(collection: RegistrantCollection) -> Self {
        Self { collection, applied: 0, changed: 0 }
    }

    /// Apply one event. Unknown ids fail here, before anything is changed.
    pub fn handle(&mut self, event: MergeEvent, progress: &mut dyn Progress) -> Result<()> {
        match event {
            MergeEvent::Planned { pages } => progress.begin(pages),
            MergeEvent::Set { update, source } => {
                self.applied += 1;
                if self.collection.apply(update, &source)? {
                    self.changed += 1;
                }
            }
            MergeEvent::Check { id, source } => {
                if !self.collection.contains(id) {
                    return Err(Error::UnknownRegistrant { id, source_page: source });
                }
            }
            MergeEvent::PageDone { label } => {
                debug!(page = %label, "merged");
                progress.item_done(&label);
            }
        }
        Ok(())
    }

    /// Updates received / updates that flipped a flag.
    pub fn stats(&self) -> (usize, usize) {
        (self.applied, self.changed)
    }

    pub fn collection(&self) -> &RegistrantCollection { &self.collection }

    pub fn into_inner(self) -> RegistrantCollection { self.collection }
}
