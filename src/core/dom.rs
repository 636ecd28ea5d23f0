// src/core/dom.rs
//
// DOM lookups shared by the page specs. Which classes and labels a
// page uses is the spec's business; this module only knows how to
// find things and walk the tree.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};

/// Compile a selector. Only ever called with literal patterns, so a
/// parse failure is a typo in a spec, not bad page data.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// First match in the document, if any.
pub fn find<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    doc.select(&sel(css)).next()
}

/// First match among an element's descendants, if any.
pub fn find_in<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    scope.select(&sel(css)).next()
}

/// First match in the document, or a malformed-page error naming the
/// missing piece.
pub fn require<'a>(doc: &'a Html, css: &str, what: &'static str) -> Result<ElementRef<'a>> {
    find(doc, css).ok_or_else(|| ExtractError::missing(what))
}

/// Scoped counterpart of [`require`].
pub fn require_in<'a>(
    scope: ElementRef<'a>,
    css: &str,
    what: &'static str,
) -> Result<ElementRef<'a>> {
    find_in(scope, css).ok_or_else(|| ExtractError::missing(what))
}

/// First element matching `css` whose collapsed text equals `label`
/// exactly. The pages carry no ids on their label cells, so exact
/// text is the only stable handle.
pub fn find_labeled<'a>(doc: &'a Html, css: &str, label: &str) -> Option<ElementRef<'a>> {
    doc.select(&sel(css)).find(|el| text_of(*el) == label)
}

/// Scoped counterpart of [`find_labeled`].
pub fn find_labeled_in<'a>(
    scope: ElementRef<'a>,
    css: &str,
    label: &str,
) -> Option<ElementRef<'a>> {
    scope.select(&sel(css)).find(|el| text_of(*el) == label)
}

/// Next `td` sibling of a label cell, skipping whatever sits between.
pub fn following_cell(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "td")
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Nearest enclosing element with the given tag name.
pub fn ancestor<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == name)
}

/// Label lookup: `<th>` with exact text `label`, then its value cell.
pub fn value_cell<'a>(doc: &'a Html, label: &str) -> Result<ElementRef<'a>> {
    let th = find_labeled(doc, "th", label)
        .ok_or_else(|| ExtractError::missing(format!("`{label}` label")))?;
    following_cell(th).ok_or_else(|| ExtractError::missing(format!("`{label}` value cell")))
}

/// Scoped counterpart of [`value_cell`].
pub fn value_cell_in<'a>(scope: ElementRef<'a>, label: &str) -> Result<ElementRef<'a>> {
    let th = find_labeled_in(scope, "th", label)
        .ok_or_else(|| ExtractError::missing(format!("`{label}` label")))?;
    following_cell(th).ok_or_else(|| ExtractError::missing(format!("`{label}` value cell")))
}

/// Collapsed text of the value cell for `label`.
pub fn label_value(doc: &Html, label: &str) -> Result<String> {
    Ok(text_of(value_cell(doc, label)?))
}

/// Scoped counterpart of [`label_value`].
pub fn label_value_in(scope: ElementRef<'_>, label: &str) -> Result<String> {
    Ok(text_of(value_cell_in(scope, label)?))
}

/// Required attribute on an element.
pub fn attr(el: ElementRef<'_>, name: &str, what: &'static str) -> Result<String> {
    el.value()
        .attr(name)
        .map(str::to_owned)
        .ok_or_else(|| ExtractError::missing(what))
}

/// `tr` children of a table body, in document order.
pub fn rows(tbody: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    tbody
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
        .collect()
}

/// `td` children of a row, in document order.
pub fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .collect()
}

/// Positional cell access. A short row is a malformed page, never an
/// out-of-bounds panic.
pub fn cell<'a>(cells: &[ElementRef<'a>], ix: usize, what: &'static str) -> Result<ElementRef<'a>> {
    cells.get(ix).copied().ok_or_else(|| ExtractError::missing(what))
}

/// Descendant text joined into one line, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<String>())
}

/// Descendant text as separate lines: one per text node, trimmed,
/// blanks dropped. `<br>`-stacked cell content comes out one field
/// per line.
pub fn text_lines(el: ElementRef<'_>) -> Vec<String> {
    el.text()
        .map(collapse_ws)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Squeeze runs of whitespace to single spaces and trim the ends.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_ws_squeezes_and_trims() {
        assert_eq!(collapse_ws("  a \n\t b  "), "a b");
        assert_eq!(collapse_ws(""), "");
        assert_eq!(collapse_ws(" \n "), "");
    }

    #[test]
    fn label_lookup_finds_value_cell() {
        let doc = Html::parse_document(
            r#"<table><tr><th>Name</th><td> Ann  Varghese </td></tr></table>"#,
        );
        assert_eq!(label_value(&doc, "Name").unwrap(), "Ann Varghese");
    }

    #[test]
    fn label_lookup_skips_interleaved_th() {
        // Value cell is not the immediate sibling here.
        let doc = Html::parse_document(
            r#"<table><tr><th>Roll</th><th>ignored</th><td>42</td></tr></table>"#,
        );
        assert_eq!(label_value(&doc, "Roll").unwrap(), "42");
    }

    #[test]
    fn missing_label_is_malformed() {
        let doc = Html::parse_document(r#"<table><tr><th>Other</th><td>x</td></tr></table>"#);
        let err = label_value(&doc, "Name").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn label_without_value_cell_is_malformed() {
        let doc = Html::parse_document(r#"<table><tr><th>Name</th></tr></table>"#);
        assert!(label_value(&doc, "Name").is_err());
    }

    #[test]
    fn ancestor_walks_to_enclosing_form() {
        let doc = Html::parse_document(
            r#"<form action="/f"><table><tbody><tr><td>x</td></tr></tbody></table></form>"#,
        );
        let td = find(&doc, "td").unwrap();
        let form = ancestor(td, "form").unwrap();
        assert_eq!(form.value().attr("action"), Some("/f"));
        assert!(ancestor(td, "section").is_none());
    }

    #[test]
    fn cell_out_of_range_is_typed_error() {
        let doc = Html::parse_document(r#"<table><tbody><tr><td>a</td></tr></tbody></table>"#);
        let row = find(&doc, "tr").unwrap();
        let tds = cells(row);
        assert!(cell(&tds, 0, "first").is_ok());
        assert!(matches!(
            cell(&tds, 5, "sixth").unwrap_err(),
            ExtractError::Malformed(_)
        ));
    }

    #[test]
    fn text_lines_split_on_br() {
        let doc = Html::parse_document(r#"<td>PHY<br>Lecture<br> Dr. Iyer </td>"#);
        let td = find(&doc, "td").unwrap();
        assert_eq!(text_lines(td), vec!["PHY", "Lecture", "Dr. Iyer"]);
    }

    #[test]
    fn text_lines_drop_blank_nodes() {
        let doc = Html::parse_document("<td>\n  MAT\n  <br>\n  Tutorial\n</td>");
        let td = find(&doc, "td").unwrap();
        assert_eq!(text_lines(td), vec!["MAT", "Tutorial"]);
    }
}
