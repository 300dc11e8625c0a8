// src/scrape/mod.rs
pub mod auth;
pub mod competitions;
pub mod lodging;
pub mod roster;

pub use auth::{sign_in, Credentials};
