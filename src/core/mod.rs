// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{Element, Page};
pub use net::{Browser, HttpBrowser};
