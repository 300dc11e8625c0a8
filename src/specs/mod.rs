// src/specs/mod.rs
//! Page readers for the registration portal: each submodule turns one
//! fetched [`Page`](crate::core::Page) into typed rows. Nothing here navigates
//! or touches the registrant collection.
//!
//! Missing tables or cells are `Error::Extraction`; ids go through
//! [`parse_id`](crate::data::parse_id).
pub mod competition;
pub mod lodging;
pub mod results;
pub mod roster;
pub mod sign_in;
