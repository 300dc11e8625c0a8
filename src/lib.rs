// src/lib.rs

#[macro_use]
pub mod macros;

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;

pub use classify::{classify, CompetitionType};
pub use data::{Flag, FlagUpdate, Registrant, RegistrantId};
pub use error::{Error, Result};
pub use store::RegistrantCollection;
