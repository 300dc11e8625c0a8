// src/store.rs
use std::collections::HashMap;

use crate::data::{Flag, FlagUpdate, Registrant, RegistrantId};
use crate::error::{Error, Result};

/// All registrants of one run, keyed by id, iterated in roster order.
///
/// Ids are fixed once the roster is loaded: `apply` never inserts, and flags
/// only ever go from false to true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrantCollection {
    records: Vec<Registrant>,
    index: HashMap<RegistrantId, usize>,
}

impl RegistrantCollection {
    pub fn new() -> Self { Self::default() }

    /// Roster loading only. A second record with the same id is rejected.
    pub(crate) fn insert(&mut self, registrant: Registrant) -> Result<()> {
        let id = registrant.id();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateRegistrant(id));
        }
        self.index.insert(id, self.records.len());
        self.records.push(registrant);
        Ok(())
    }

    /// Set one flag. Returns whether anything changed.
    /// `source_page` names the page that referenced the id, for the error.
    pub fn apply(&mut self, update: FlagUpdate, source_page: &str) -> Result<bool> {
        let ix = *self.index.get(&update.id).ok_or_else(|| Error::UnknownRegistrant {
            id: update.id,
            source_page: s!(source_page),
        })?;
        Ok(self.records[ix].set(update.flag))
    }

    pub fn get(&self, id: RegistrantId) -> Option<&Registrant> {
        self.index.get(&id).map(|&ix| &self.records[ix])
    }

    pub fn contains(&self, id: RegistrantId) -> bool { self.index.contains_key(&id) }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Registrant> { self.records.iter() }

    pub fn as_slice(&self) -> &[Registrant] { &self.records }

    /// Number of registrants with `flag` set.
    pub fn count(&self, flag: Flag) -> usize {
        self.records.iter().filter(|r| r.flag(flag)).count()
    }
}

impl<'a> IntoIterator for &'a RegistrantCollection {
    type Item = &'a Registrant;
    type IntoIter = std::slice::Iter<'a, Registrant>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
