// src/specs/timetable.rs

use scraper::Html;

use crate::core::dom;
use crate::error::{ExtractError, Result};

/// One class slot. Cells stack subject, type and professor on
/// separate lines; the later lines are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableEntry {
    pub subject_name: String,
    pub subject_type: Option<String>,
    pub professor: Option<String>,
}

/// Class slots of one weekday, in period order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTimetable {
    // Trimmed lines per slot cell; entries are shaped on demand.
    slots: Vec<Vec<String>>,
}

impl DayTimetable {
    /// Entries in period order, built lazily. Call again to restart.
    /// A slot with no content still yields an entry with an empty
    /// subject, since period positions are meaningful.
    pub fn entries(&self) -> impl Iterator<Item = TimetableEntry> + '_ {
        self.slots.iter().map(|lines| TimetableEntry {
            subject_name: lines.first().cloned().unwrap_or_default(),
            subject_type: lines.get(1).cloned(),
            professor: lines.get(2).cloned(),
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Extract the class slots for `day`, 1-indexed from the first table
/// row (1 = Monday on this portal).
pub fn parse_day(html_doc: &str, day: usize) -> Result<DayTimetable> {
    if !(1..=7).contains(&day) {
        return Err(ExtractError::Malformed(format!("day {day} out of range 1-7")));
    }
    let doc = Html::parse_document(html_doc);
    let table = dom::require(
        &doc,
        "table.items.table.table-striped.table-bordered",
        "timetable",
    )?;
    let tbody = dom::require_in(table, "tbody", "timetable body")?;
    let row = dom::rows(tbody)
        .into_iter()
        .nth(day - 1)
        .ok_or_else(|| ExtractError::missing(format!("timetable row for day {day}")))?;

    // First cell is the day label; the rest are class slots.
    let slots = dom::cells(row)
        .into_iter()
        .skip(1)
        .map(dom::text_lines)
        .collect();
    Ok(DayTimetable { slots })
}
