// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub site: SiteOptions,
    pub scrape: ScrapeOptions,
    pub lodging: LodgingOptions,
    pub export: ExportOptions,
}

/// Where the portal lives and how long a single page may take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub base: Url,
    pub timeout: Duration,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SiteOptions {
    pub fn with_base(base: Url) -> Self {
        Self { base, ..Self::default() }
    }

    pub fn sign_in_url(&self) -> Url { self.page(SIGN_IN_PATH) }
    pub fn roster_url(&self) -> Url { self.page(ROSTER_PATH) }
    pub fn results_url(&self) -> Url { self.page(RESULTS_PATH) }
    pub fn lodging_url(&self) -> Url { self.page(LODGING_PATH) }

    fn page(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Upper bound on competition pages processed at once.
    pub workers: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { workers: WORKERS }
    }
}

/// Substrings of a lodging label that select each night.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LodgingOptions {
    pub first_night: String,
    pub second_night: String,
}

impl Default for LodgingOptions {
    fn default() -> Self {
        Self {
            first_night: s!(FIRST_NIGHT_MARKER),
            second_night: s!(SECOND_NIGHT_MARKER),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub json: bool,
    pub csv: bool,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            json: false,
            csv: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn json_path(&self) -> PathBuf { self.out_dir.join(JSON_FILE) }
    pub fn csv_path(&self) -> PathBuf { self.out_dir.join(CSV_FILE) }
}
