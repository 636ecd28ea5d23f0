// src/specs/dashboard.rs

use scraper::Html;

use crate::core::dom;
use crate::error::{ExtractError, Result};

/// Display name shown beside the user icon in the portal top bar.
///
/// `Ok(None)` means the icon is not on the page at all: the portal
/// served the login page instead, so there is no session. Callers use
/// this as a logged-in probe; absence is a state, not an error. An
/// icon *without* the name span next to it is a malformed page.
pub fn display_name(html_doc: &str) -> Result<Option<String>> {
    let doc = Html::parse_document(html_doc);
    let Some(icon) = dom::find(&doc, "i.icon-user") else {
        return Ok(None);
    };
    let holder = dom::parent_element(icon).ok_or_else(|| ExtractError::missing("user icon holder"))?;
    let name = dom::require_in(holder, "span.text", "user name span")?;
    Ok(Some(dom::text_of(name)))
}
