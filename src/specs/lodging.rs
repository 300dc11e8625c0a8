// src/specs/lodging.rs
//
// Lodging payment summary: label in the first cell, registrant link in the third.

use crate::config::consts::SEL_LODGING_ROWS;
use crate::core::sanitize::last_path_segment;
use crate::core::Page;
use crate::data::{parse_id, RegistrantId};
use crate::error::Result;

const COL_LABEL: usize = 0;
const COL_REGISTRANT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LodgingRow {
    pub label: String,
    pub id: RegistrantId,
}

pub fn parse(page: &Page) -> Result<Vec<LodgingRow>> {
    let mut out = Vec::new();
    for (i, cells) in page.rows(SEL_LODGING_ROWS)?.into_iter().enumerate() {
        let (Some(label), Some(reg)) = (cells.get(COL_LABEL), cells.get(COL_REGISTRANT)) else {
            return Err(page.missing(format!("lodging row {} has {} cells", i + 1, cells.len())));
        };
        let link = reg.link_target(page)?;
        let id = parse_id(last_path_segment(link.path()))?;
        out.push(LodgingRow { label: s!(label.text()), id });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use url::Url;

    fn page(body: &str) -> Page {
        Page::new(
            Url::parse("https://portal.test/en/payment_summary/lodgings/1").unwrap(),
            format!("<table><tbody>{body}</tbody></table>"),
        )
    }

    #[test]
    fn reads_label_and_id_from_link() {
        let rows = parse(&page(
            r#"<tr><td>Gym  Nov 15, 2019 - Nov 16, 2019</td><td>10 €</td><td><a href="/registrants/42">Anna</a></td></tr>
               <tr><td>Gym Nov 17, 2019</td><td>10 €</td><td><a href="/en/registrants/7/">Bob</a></td></tr>"#,
        ))
        .unwrap();
        assert_eq!(
            rows,
            vec![
                LodgingRow { label: s!("Gym Nov 15, 2019 - Nov 16, 2019"), id: 42 },
                LodgingRow { label: s!("Gym Nov 17, 2019"), id: 7 },
            ]
        );
    }

    #[test]
    fn non_numeric_link_segment_is_id_parse_failure() {
        let err = parse(&page(
            r#"<tr><td>x</td><td>y</td><td><a href="/registrants/abc">?</a></td></tr>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, Error::IdParse { .. }));
    }

    #[test]
    fn missing_link_or_cell_is_extraction_failure() {
        let no_link = parse(&page("<tr><td>x</td><td>y</td><td>Anna</td></tr>")).unwrap_err();
        assert!(matches!(no_link, Error::Extraction { .. }));
        let short = parse(&page("<tr><td>x</td></tr>")).unwrap_err();
        assert!(matches!(short, Error::Extraction { .. }));
    }
}
