// src/specs/forms.rs

use scraper::{ElementRef, Html};

use crate::core::dom;
use crate::error::Result;

/// Row of the course feedback-form list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub subject: String,
    pub teacher: String,
    pub status: String,
    /// Submit endpoint with the trigger button baked in, shaped
    /// `action?button=clicked`. Rows with no live button have none.
    pub url: Option<String>,
}

/// Extract every feedback-form row, in document order.
pub fn parse_forms(html_doc: &str) -> Result<Vec<Form>> {
    let doc = Html::parse_document(html_doc);
    let tbody = dom::require(&doc, "tbody", "form table body")?;

    let mut out = Vec::new();
    for row in dom::rows(tbody) {
        let cells = dom::cells(row);
        let text = |ix, what| dom::cell(&cells, ix, what).map(dom::text_of);
        out.push(Form {
            id: text(0, "form id cell")?,
            subject: text(1, "form subject cell")?,
            teacher: text(2, "form teacher cell")?,
            status: text(3, "form status cell")?,
            url: action_url(row, &cells),
        });
    }
    Ok(out)
}

/// Enclosing `<form action>` plus the 5th cell's button `name`.
/// Any missing piece means no actionable URL, which is a valid row
/// state, not an error.
fn action_url(row: ElementRef<'_>, cells: &[ElementRef<'_>]) -> Option<String> {
    let form = dom::ancestor(row, "form")?;
    let action = form.value().attr("action")?;
    let button = cells.get(4)?.select(&dom::sel("button")).next()?;
    let name = button.value().attr("name")?;
    Some(format!("{action}?{name}=clicked"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <form action="/feedback/submit" method="post">
          <table><tbody>
            <tr>
              <td>12</td><td>CS301 Data Structures</td><td>Dr. Iyer</td><td>Pending</td>
              <td><button type="submit" name="form_12">Fill</button></td>
            </tr>
            <tr>
              <td>11</td><td>CS302 Operating Systems</td><td>Dr. Nair</td><td>Submitted</td>
              <td></td>
            </tr>
          </tbody></table>
        </form>
    "#;

    #[test]
    fn builds_action_url_from_form_and_button() {
        let forms = parse_forms(PAGE).unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].id, "12");
        assert_eq!(forms[0].subject, "CS301 Data Structures");
        assert_eq!(forms[0].teacher, "Dr. Iyer");
        assert_eq!(forms[0].status, "Pending");
        assert_eq!(
            forms[0].url.as_deref(),
            Some("/feedback/submit?form_12=clicked")
        );
    }

    #[test]
    fn missing_button_is_none_not_error() {
        let forms = parse_forms(PAGE).unwrap();
        assert_eq!(forms[1].url, None);
    }

    #[test]
    fn missing_enclosing_form_is_none() {
        let doc = r#"
            <table><tbody>
              <tr>
                <td>12</td><td>CS301</td><td>Dr. Iyer</td><td>Pending</td>
                <td><button name="form_12">Fill</button></td>
              </tr>
            </tbody></table>
        "#;
        let forms = parse_forms(doc).unwrap();
        assert_eq!(forms[0].url, None);
    }

    #[test]
    fn button_without_name_is_none() {
        let doc = PAGE.replace(r#" name="form_12""#, "");
        let forms = parse_forms(&doc).unwrap();
        assert_eq!(forms[0].url, None);
    }

    #[test]
    fn short_row_is_malformed() {
        let doc = r#"<table><tbody><tr><td>12</td></tr></tbody></table>"#;
        assert!(parse_forms(doc).is_err());
    }
}
