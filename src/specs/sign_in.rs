// src/specs/sign_in.rs
//
// The Devise-style login form: `user[email]`, `user[password]`, plus hidden
// inputs (CSRF token etc.) that have to be posted back.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::FIELD_PASSWORD;
use crate::core::Page;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInForm {
    pub action: Url,
    pub hidden: Vec<(String, String)>,
}

/// Locate the form holding the password input.
pub fn parse_form(page: &Page) -> Result<SignInForm> {
    let doc = Html::parse_document(page.body());
    let form_sel = parse_selector(page, "form")?;
    let hidden_sel = parse_selector(page, r#"input[type="hidden"]"#)?;

    let form = doc
        .select(&form_sel)
        .find(|f| has_password_input(f))
        .ok_or_else(|| page.missing("no sign-in form with a password field"))?;

    let action = match form.value().attr("action").map(str::trim) {
        Some(a) if !a.is_empty() => page
            .url()
            .join(a)
            .map_err(|e| page.missing(format!("bad form action '{a}': {e}")))?,
        _ => page.url().clone(),
    };

    let hidden = form
        .select(&hidden_sel)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or("");
            Some((s!(name), s!(value)))
        })
        .collect();

    Ok(SignInForm { action, hidden })
}

/// True while the page still asks for a password, i.e. we are not signed in.
pub fn shows_sign_in(page: &Page) -> bool {
    let doc = Html::parse_document(page.body());
    match Selector::parse("form") {
        Ok(sel) => doc.select(&sel).any(|f| has_password_input(&f)),
        Err(_) => false,
    }
}

fn has_password_input(form: &ElementRef<'_>) -> bool {
    form.descendants()
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() == "input" && e.value().attr("name") == Some(FIELD_PASSWORD))
}

fn parse_selector(page: &Page, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| page.missing(format!("invalid selector '{css}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: &str = r#"
        <html><body>
          <form action="/search"><input name="q"></form>
          <form class="new_user" id="new_user" action="/users/sign_in" method="post">
            <input name="utf8" type="hidden" value="&#x2713;">
            <input type="hidden" name="authenticity_token" value="tok123">
            <input id="user_email" name="user[email]" type="email">
            <input id="user_password" name="user[password]" type="password">
          </form>
        </body></html>
    "#;

    fn page(body: &str) -> Page {
        Page::new(Url::parse("https://portal.test/users/sign_in").unwrap(), body)
    }

    #[test]
    fn picks_the_password_form_and_its_hidden_fields() {
        let form = parse_form(&page(LOGIN)).unwrap();
        assert_eq!(form.action.as_str(), "https://portal.test/users/sign_in");
        assert_eq!(
            form.hidden,
            vec![
                (s!("utf8"), s!("✓")),
                (s!("authenticity_token"), s!("tok123")),
            ]
        );
    }

    #[test]
    fn missing_form_is_an_error() {
        assert!(parse_form(&page("<html><body>Welcome</body></html>")).is_err());
    }

    #[test]
    fn detects_sign_in_page() {
        assert!(shows_sign_in(&page(LOGIN)));
        assert!(!shows_sign_in(&page("<html><body><a href='/users/sign_out'>Out</a></body></html>")));
    }
}
