// src/data.rs
//
// Typed record schema for the merged report.
//
// - Registrant: one person from the roster. Descriptive fields are fixed at
//               creation; only the six flags change afterwards, and only
//               through `set` (false -> true).
// - Flag / FlagUpdate: the closed set of things a merger may switch on, and
//                      the message that carries one such switch.

use serde::Serialize;

use crate::error::{Error, Result};

pub type RegistrantId = u32;

/// Field names of the exported record, in output order.
pub const FIELDS: [&str; 12] = [
    "id", "name", "age", "gender", "club", "mail",
    "ek", "pk", "kg", "gg", "lodgingNight1", "lodgingNight2",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registrant {
    id: RegistrantId,
    name: String,
    age: String,
    gender: String,
    club: String,
    mail: String,
    ek: bool,
    pk: bool,
    kg: bool,
    gg: bool,
    #[serde(rename = "lodgingNight1")]
    lodging_night1: bool,
    #[serde(rename = "lodgingNight2")]
    lodging_night2: bool,
}

impl Registrant {
    /// New registrant with every flag cleared.
    pub fn new(
        id: RegistrantId,
        name: String,
        age: String,
        gender: String,
        club: String,
        mail: String,
    ) -> Self {
        Self {
            id, name, age, gender, club, mail,
            ek: false,
            pk: false,
            kg: false,
            gg: false,
            lodging_night1: false,
            lodging_night2: false,
        }
    }

    pub fn id(&self) -> RegistrantId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn age(&self) -> &str { &self.age }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn club(&self) -> &str { &self.club }
    pub fn mail(&self) -> &str { &self.mail }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Individual    => self.ek,
            Flag::Pair          => self.pk,
            Flag::SmallGroup    => self.kg,
            Flag::LargeGroup    => self.gg,
            Flag::LodgingNight1 => self.lodging_night1,
            Flag::LodgingNight2 => self.lodging_night2,
        }
    }

    /// Switch a flag on. Returns true if it was off before.
    pub(crate) fn set(&mut self, flag: Flag) -> bool {
        let slot = match flag {
            Flag::Individual    => &mut self.ek,
            Flag::Pair          => &mut self.pk,
            Flag::SmallGroup    => &mut self.kg,
            Flag::LargeGroup    => &mut self.gg,
            Flag::LodgingNight1 => &mut self.lodging_night1,
            Flag::LodgingNight2 => &mut self.lodging_night2,
        };
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Cells in `FIELDS` order, for tabular export. Flags are `1` when set
    /// and empty otherwise.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.age.clone(),
            self.gender.clone(),
            self.club.clone(),
            self.mail.clone(),
            cell(self.ek),
            cell(self.pk),
            cell(self.kg),
            cell(self.gg),
            cell(self.lodging_night1),
            cell(self.lodging_night2),
        ]
    }
}

fn cell(flag: bool) -> String {
    if flag { s!("1") } else { String::new() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Individual,
    Pair,
    SmallGroup,
    LargeGroup,
    LodgingNight1,
    LodgingNight2,
}

impl Flag {
    pub const ALL: [Flag; 6] = [
        Flag::Individual, Flag::Pair, Flag::SmallGroup, Flag::LargeGroup,
        Flag::LodgingNight1, Flag::LodgingNight2,
    ];
}

/// "Registrant `id` has `flag`". There is no way to express clearing a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagUpdate {
    pub id: RegistrantId,
    pub flag: Flag,
}

/// Parse a registrant id out of cell or link text. Zero is not a valid id.
pub fn parse_id(text: &str) -> Result<RegistrantId> {
    match text.trim().parse::<RegistrantId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::IdParse { text: s!(text) }),
    }
}
