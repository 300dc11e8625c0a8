// tests/common/mod.rs
//
// In-memory portal: serves canned HTML per path and records traffic.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use reg_scrape::config::consts::*;
use reg_scrape::config::options::{AppOptions, SiteOptions};
use reg_scrape::core::{Browser, Page};
use reg_scrape::scrape::Credentials;
use reg_scrape::{Error, Result};

pub const BASE: &str = "https://portal.test";
pub const PASSWORD: &str = "hunter2";

pub struct StaticSite {
    pages: HashMap<String, String>,
    delay: Option<Duration>,
    signed_in: AtomicBool,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    opened: Mutex<Vec<String>>,
}

impl StaticSite {
    pub fn new() -> Self {
        let mut site = Self {
            pages: HashMap::new(),
            delay: None,
            signed_in: AtomicBool::new(false),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            opened: Mutex::new(Vec::new()),
        };
        site.put(SIGN_IN_PATH, LOGIN_HTML);
        site.put(RESULTS_PATH, &results_html(&[]));
        site.put(LODGING_PATH, &lodging_html(&[]));
        site
    }

    pub fn put(&mut self, path: &str, html: &str) -> &mut Self {
        self.pages.insert(path.to_string(), html.to_string());
        self
    }

    /// Every `open` sleeps this long, so concurrent fetches overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn is_signed_in(&self) -> bool { self.signed_in.load(Ordering::SeqCst) }

    pub fn max_in_flight(&self) -> usize { self.max_in_flight.load(Ordering::SeqCst) }

    pub fn opened(&self) -> Vec<String> { self.opened.lock().unwrap().clone() }
}

#[async_trait]
impl Browser for StaticSite {
    async fn open(&self, url: &Url) -> Result<Page> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.opened.lock().unwrap().push(url.path().to_string());

        match self.pages.get(url.path()) {
            Some(html) => Ok(Page::new(url.clone(), html.clone())),
            None => Err(Error::extraction(url.as_str(), "HTTP 404")),
        }
    }

    async fn submit(&self, url: &Url, fields: &[(String, String)]) -> Result<Page> {
        let field = |name: &str| fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());
        let ok = field("authenticity_token") == Some("tok123") && field(FIELD_PASSWORD) == Some(PASSWORD);
        if ok {
            self.signed_in.store(true, Ordering::SeqCst);
            Ok(Page::new(url.join("/").unwrap(), "<html><body><a href='/users/sign_out'>Sign out</a></body></html>"))
        } else {
            Ok(Page::new(url.clone(), LOGIN_HTML))
        }
    }
}

pub fn options() -> AppOptions {
    AppOptions {
        site: SiteOptions::with_base(Url::parse(BASE).unwrap()),
        ..Default::default()
    }
}

pub fn credentials(password: &str) -> Credentials {
    Credentials { user: "orga@portal.test".into(), password: password.into() }
}

/* ---------------- fixtures ---------------- */

pub const LOGIN_HTML: &str = r#"
<html><body>
  <form class="new_user" id="new_user" action="/users/sign_in" method="post">
    <input type="hidden" name="authenticity_token" value="tok123">
    <input id="user_email" name="user[email]" type="email">
    <input id="user_password" name="user[password]" type="password">
  </form>
</body></html>"#;

/// `[id, last, first, age, gender, club, status]` + mail → one 10-column roster row.
pub struct RosterEntry<'a> {
    pub id: &'a str,
    pub last: &'a str,
    pub first: &'a str,
    pub age: &'a str,
    pub gender: &'a str,
    pub club: &'a str,
    pub status: &'a str,
    pub mail: &'a str,
}

pub fn person<'a>(id: &'a str, last: &'a str, first: &'a str) -> RosterEntry<'a> {
    RosterEntry { id, last, first, age: "20", gender: "m", club: "Club", status: "Active", mail: "p@x.test" }
}

pub fn roster_html(entries: &[RosterEntry<'_>]) -> String {
    let rows: String = entries
        .iter()
        .map(|e| {
            format!(
                "<tr>\n  <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>2019-10-01</td><td>paid</td><td>{}</td><td>{}</td>\n</tr>",
                e.id, e.last, e.first, e.age, e.gender, e.club, e.status, e.mail
            )
        })
        .collect();
    format!(
        "<html><body><table><thead><tr><th>Id</th><th>Last</th></tr></thead>\
         <tbody>{rows}</tbody></table></body></html>"
    )
}

pub fn results_html(paths: &[&str]) -> String {
    let rows: String = paths
        .iter()
        .enumerate()
        .map(|(i, p)| format!("<tr><td>{i}</td><td>Comp {i}</td><td><a href=\"{p}\">Results</a></td></tr>"))
        .collect();
    format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
}

pub fn competition_html(title: &str, id_cells: &[&str]) -> String {
    let rows: String = id_cells
        .iter()
        .enumerate()
        .map(|(i, ids)| format!("<tr><td>{ids}</td><td>{}.</td><td>98.5</td></tr>", i + 1))
        .collect();
    format!(
        "<html><body><div id=\"main\"><h2>{title}</h2>\
         <table><thead><tr><th>Id</th><th>Place</th></tr></thead><tbody>{rows}</tbody></table>\
         </div></body></html>"
    )
}

pub fn lodging_html(rows: &[(&str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(label, href)| format!("<tr><td>{label}</td><td>15,00 €</td><td><a href=\"{href}\">Person</a></td></tr>"))
        .collect();
    format!("<html><body><table id=\"lodgings\"><tbody>{rows}</tbody></table></body></html>")
}
