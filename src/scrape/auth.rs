// src/scrape/auth.rs
use std::fmt;

use tracing::info;

use crate::config::consts::{FIELD_EMAIL, FIELD_PASSWORD};
use crate::config::options::SiteOptions;
use crate::core::Browser;
use crate::error::{Error, Result};
use crate::specs::sign_in;

#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Sign the session in. Afterwards every page opened through `browser` is
/// fetched as this user.
pub async fn sign_in<B: Browser + ?Sized>(
    browser: &B,
    site: &SiteOptions,
    creds: &Credentials,
) -> Result<()> {
    let page = browser.open(&site.sign_in_url()).await?;
    let form = sign_in::parse_form(&page)?;
    drop(page);

    let mut fields = form.hidden;
    fields.push((s!(FIELD_EMAIL), creds.user.clone()));
    fields.push((s!(FIELD_PASSWORD), creds.password.clone()));

    let landed = browser
        .submit(&form.action, &fields)
        .await
        .map_err(|e| Error::Authentication(format!("sign-in request failed: {e}")))?;

    if sign_in::shows_sign_in(&landed) {
        return Err(Error::Authentication(format!(
            "portal did not accept the credentials for '{}'",
            creds.user
        )));
    }
    info!(user = %creds.user, url = %landed.url(), "signed in");
    Ok(())
}
