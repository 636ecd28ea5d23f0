// src/specs/surveys.rs

use scraper::Html;

use crate::core::dom;
use crate::error::Result;

/// Row of the feedback-survey list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub id: String,
    pub survey: String,
    pub session: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    /// Take-survey link; rows without an anchor (closed or already
    /// submitted surveys) have none.
    pub url: Option<String>,
}

/// Extract every survey row, in document order.
pub fn parse_surveys(html_doc: &str) -> Result<Vec<Survey>> {
    let doc = Html::parse_document(html_doc);
    let tbody = dom::require(&doc, "tbody", "survey table body")?;
    let anchor = dom::sel("a");

    let mut out = Vec::new();
    for row in dom::rows(tbody) {
        let cells = dom::cells(row);
        let text = |ix, what| dom::cell(&cells, ix, what).map(dom::text_of);
        out.push(Survey {
            id: text(0, "survey id cell")?,
            survey: text(1, "survey title cell")?,
            session: text(2, "survey session cell")?,
            start_date: text(3, "survey start date cell")?,
            end_date: text(4, "survey end date cell")?,
            status: text(5, "survey status cell")?,
            url: dom::cell(&cells, 6, "survey action cell")?
                .select(&anchor)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_owned),
        });
    }
    Ok(out)
}
