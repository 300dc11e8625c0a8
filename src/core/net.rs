// src/core/net.rs
//
// Browsing session over HTTP: one cookie-carrying client shared by every step.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::html::Page;
use crate::config::consts::USER_AGENT;
use crate::config::options::SiteOptions;
use crate::error::{Error, Result};

/// Page access used by the pipeline. One instance is one session: cookies set
/// by `submit` (sign-in) apply to every later `open`.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Navigate to `url` and return the final page.
    async fn open(&self, url: &Url) -> Result<Page>;

    /// Post a url-encoded form and return the page it lands on.
    async fn submit(&self, url: &Url, fields: &[(String, String)]) -> Result<Page>;
}

pub struct HttpBrowser {
    client: reqwest::Client,
}

impl HttpBrowser {
    pub fn new(site: &SiteOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(site.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    async fn read(url: &Url, response: reqwest::Response) -> Result<Page> {
        let nav = |source| Error::Navigation { url: url.to_string(), source };
        let response = response.error_for_status().map_err(nav)?;
        let final_url = response.url().clone();
        let body = response.text().await.map_err(nav)?;
        debug!(url = %final_url, bytes = body.len(), "page opened");
        Ok(Page::new(final_url, body))
    }
}

#[async_trait]
impl Browser for HttpBrowser {
    async fn open(&self, url: &Url) -> Result<Page> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| Error::Navigation { url: url.to_string(), source })?;
        Self::read(url, response).await
    }

    async fn submit(&self, url: &Url, fields: &[(String, String)]) -> Result<Page> {
        let response = self
            .client
            .post(url.clone())
            .form(fields)
            .send()
            .await
            .map_err(|source| Error::Navigation { url: url.to_string(), source })?;
        Self::read(url, response).await
    }
}
