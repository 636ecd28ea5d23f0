// src/specs/attendance.rs

use scraper::{ElementRef, Html};

use crate::core::{decode, dom};
use crate::error::{ExtractError, Result};
use crate::specs::subjects::SubjectMap;

/// Roll number and aggregate attendance percentage from the summary
/// table. The logged-in student's row is the first body row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub roll_number: u32,
    /// Whole percent, 0–100.
    pub attendance: u32,
}

pub fn parse_summary(html_doc: &str) -> Result<AttendanceSummary> {
    let doc = Html::parse_document(html_doc);
    let tbody = dom::require(&doc, "tbody", "attendance table body")?;
    let row = dom::rows(tbody)
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::missing("attendance row"))?;
    let cells = dom::cells(row);

    let roll = dom::cell(&cells, 1, "roll number cell")?;
    // Percentage sits second from the right regardless of how many
    // month columns the table grew that semester.
    let pct = cells
        .len()
        .checked_sub(2)
        .and_then(|ix| cells.get(ix).copied())
        .ok_or_else(|| ExtractError::missing("attendance percent cell"))?;

    Ok(AttendanceSummary {
        roll_number: decode::int(&dom::text_of(roll), "roll number")?,
        attendance: decode::trailing_int(&dom::text_of(pct))?,
    })
}

/// Update `subjects` from a subject-wise attendance table.
///
/// Header `th.span2` cells carry the subject names; the first body row
/// carries the parallel `present/total` cells. Each header label is
/// paired with its column index up front, then only subjects the
/// caller tracks are read; everything else is skipped.
pub fn parse_subject_attendance(html_doc: &str, subjects: &mut SubjectMap) -> Result<()> {
    let doc = Html::parse_document(html_doc);
    let table = dom::require(&doc, "table", "attendance table")?;
    let head = dom::require_in(table, "thead tr", "attendance header row")?;
    let body = dom::require_in(table, "tbody tr", "attendance body row")?;

    let label_sel = dom::sel("th.span2");
    let ratio_sel = dom::sel("td.span2");
    let labels: Vec<String> = head.select(&label_sel).map(dom::text_of).collect();
    let ratio_cells: Vec<ElementRef<'_>> = body.select(&ratio_sel).collect();

    for (ix, label) in labels.iter().enumerate() {
        if !subjects.contains(label) {
            log::debug!("attendance column {label:?} not tracked, skipping");
            continue;
        }
        let cell = ratio_cells
            .get(ix)
            .copied()
            .ok_or_else(|| ExtractError::missing(format!("attendance cell for `{label}`")))?;
        let (present, total) = decode::ratio(&dom::text_of(cell))?;
        subjects.record(label, present, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::subjects::SubjectMap;

    const SUMMARY_PAGE: &str = r#"
        <table>
          <thead><tr><th>Name</th><th>Roll</th><th>Jun</th><th>Jul</th><th>%</th><th>Action</th></tr></thead>
          <tbody>
            <tr><td>Ann Varghese</td><td>42</td><td>18/20</td><td>20/22</td><td>90%</td><td></td></tr>
            <tr><td>Basil John</td><td>43</td><td>15/20</td><td>19/22</td><td>81%</td><td></td></tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn summary_reads_first_row_only() {
        let s = parse_summary(SUMMARY_PAGE).unwrap();
        assert_eq!(s.roll_number, 42);
        assert_eq!(s.attendance, 90);
    }

    #[test]
    fn summary_without_rows_is_malformed() {
        let doc = "<table><tbody></tbody></table>";
        assert!(parse_summary(doc).is_err());
    }

    #[test]
    fn summary_with_short_row_is_malformed() {
        let doc = "<table><tbody><tr><td>only</td></tr></tbody></table>";
        assert!(parse_summary(doc).is_err());
    }

    const SUBJECT_PAGE: &str = r#"
        <table>
          <thead><tr>
            <th>Roll</th>
            <th class="span2">CS301</th>
            <th class="span2">CS302</th>
            <th class="span2">PE101</th>
          </tr></thead>
          <tbody><tr>
            <td>42</td>
            <td class="span2">10/12</td>
            <td class="span2">8/10</td>
            <td class="span2">4/4</td>
          </tr></tbody>
        </table>
    "#;

    #[test]
    fn updates_tracked_subjects_and_skips_rest() {
        let mut map = SubjectMap::from_names(["CS301", "CS302"]);
        parse_subject_attendance(SUBJECT_PAGE, &mut map).unwrap();

        let cs301 = map.get("CS301").unwrap();
        assert_eq!((cs301.present_classes, cs301.total_classes), (10, 12));
        let cs302 = map.get("CS302").unwrap();
        assert_eq!((cs302.present_classes, cs302.total_classes), (8, 10));
        // PE101 was in the header but never tracked.
        assert!(!map.contains("PE101"));
    }

    #[test]
    fn second_pass_yields_duty_leaves() {
        let updated = SUBJECT_PAGE.replace("10/12", "12/15");
        let mut map = SubjectMap::from_names(["CS301"]);
        parse_subject_attendance(SUBJECT_PAGE, &mut map).unwrap();
        parse_subject_attendance(&updated, &mut map).unwrap();

        let a = map.get("CS301").unwrap();
        assert_eq!(a.present_classes, 12);
        assert_eq!(a.total_classes, 15);
        assert_eq!(a.duty_leaves, Some(2));
    }

    #[test]
    fn tracked_subject_without_cell_is_malformed() {
        let doc = r#"
            <table>
              <thead><tr><th class="span2">CS301</th></tr></thead>
              <tbody><tr><td>no span2 cells</td></tr></tbody>
            </table>
        "#;
        let mut map = SubjectMap::from_names(["CS301"]);
        assert!(parse_subject_attendance(doc, &mut map).is_err());
    }

    #[test]
    fn garbled_ratio_is_malformed() {
        let doc = SUBJECT_PAGE.replace("10/12", "ten of twelve");
        let mut map = SubjectMap::from_names(["CS301"]);
        assert!(parse_subject_attendance(&doc, &mut map).is_err());
    }
}
