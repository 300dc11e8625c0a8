// src/core/html.rs
//
// Owned page handle + element snapshots.
//
// `scraper::Html` is not `Send`, so a `Page` keeps the raw body and parses
// on query. Everything handed out (`Element`) is owned text/URLs and can
// cross await points and task boundaries freely.

use scraper::{ElementRef, Html, Selector};
use tracing::trace;
use url::Url;

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// One fetched page. Dropping it closes it.
#[derive(Debug)]
pub struct Page {
    url: Url,
    body: String,
}

/// Snapshot of one element: its visible text and, if present, its link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    text: String,
    link: Option<Url>,
}

impl Page {
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self { url, body: body.into() }
    }

    pub fn url(&self) -> &Url { &self.url }
    pub fn body(&self) -> &str { &self.body }

    /// Every element matching `css`, in document order.
    pub fn query_all(&self, css: &str) -> Result<Vec<Element>> {
        let sel = self.selector(css)?;
        let doc = Html::parse_document(&self.body);
        let found = doc.select(&sel).map(|el| self.snapshot(el)).collect();
        Ok(found)
    }

    /// First element matching `css`; missing is an extraction failure.
    pub fn first(&self, css: &str) -> Result<Element> {
        self.query_all(css)?
            .into_iter()
            .next()
            .ok_or_else(|| self.missing(format!("no element matches '{css}'")))
    }

    /// Rows matching `css`, each as its direct `<td>` children.
    pub fn rows(&self, css: &str) -> Result<Vec<Vec<Element>>> {
        let sel = self.selector(css)?;
        let doc = Html::parse_document(&self.body);
        let rows = doc
            .select(&sel)
            .map(|tr| {
                tr.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|c| c.value().name().eq_ignore_ascii_case("td"))
                    .map(|td| self.snapshot(td))
                    .collect::<Vec<_>>()
            })
            .collect();
        Ok(rows)
    }

    /// `ExtractionFailure` pointing at this page.
    pub fn missing(&self, reason: impl Into<String>) -> Error {
        Error::extraction(self.url.as_str(), reason)
    }

    fn selector(&self, css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| self.missing(format!("invalid selector '{css}': {e}")))
    }

    fn snapshot(&self, el: ElementRef<'_>) -> Element {
        let text = normalize_ws(&el.text().collect::<String>());
        let href = if el.value().name().eq_ignore_ascii_case("a") {
            el.value().attr("href")
        } else {
            el.descendants()
                .filter_map(ElementRef::wrap)
                .find(|d| d.value().name().eq_ignore_ascii_case("a") && d.value().attr("href").is_some())
                .and_then(|a| a.value().attr("href"))
        };
        let link = href.and_then(|h| self.url.join(h.trim()).ok());
        Element { text, link }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        trace!(url = %self.url, "page closed");
    }
}

impl Element {
    pub fn text(&self) -> &str { &self.text }

    pub fn link(&self) -> Option<&Url> { self.link.as_ref() }

    /// The element's link, resolved against its page. Missing is an extraction failure.
    pub fn link_target(&self, page: &Page) -> Result<&Url> {
        self.link
            .as_ref()
            .ok_or_else(|| page.missing(format!("no link in element '{}'", self.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Page {
        Page::new(Url::parse("https://portal.test/results").unwrap(), body)
    }

    const TABLE: &str = r#"
        <html><body><div id="main"><h2>  Einzel
            Junioren </h2>
        <table>
          <thead><tr><th>Id</th><th>Name</th></tr></thead>
          <tbody>
            <tr><td>42, 57</td><td>Anna</td><td><a href="/competitions/3/results">Show</a></td></tr>
            <tr><td>8</td><td>Bob <b>B.</b></td><td><span><a href="https://other.test/x/9">x</a></span></td></tr>
          </tbody>
        </table></div></body></html>
    "#;

    #[test]
    fn rows_return_direct_cells_with_normalized_text() {
        let rows = page(TABLE).rows("tbody tr").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][0].text(), "42, 57");
        assert_eq!(rows[1][1].text(), "Bob B.");
    }

    #[test]
    fn links_resolve_against_page_url() {
        let p = page(TABLE);
        let rows = p.rows("tbody tr").unwrap();
        assert_eq!(
            rows[0][2].link_target(&p).unwrap().as_str(),
            "https://portal.test/competitions/3/results"
        );
        assert_eq!(rows[1][2].link().unwrap().as_str(), "https://other.test/x/9");
        assert!(rows[0][0].link_target(&p).is_err());
    }

    #[test]
    fn first_reads_heading_and_reports_missing() {
        let p = page(TABLE);
        assert_eq!(p.first("#main h2").unwrap().text(), "Einzel Junioren");
        let err = p.first("#nope").unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }

    #[test]
    fn invalid_selector_is_extraction_failure() {
        let err = page(TABLE).query_all("td:::").unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }

    #[test]
    fn nth_child_selector_picks_link_cells() {
        let links = page(TABLE).query_all("tbody tr td:nth-child(3) a").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text(), "Show");
    }
}
