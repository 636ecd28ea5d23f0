// src/specs/subjects.rs

use indexmap::IndexMap;
use scraper::Html;

use crate::core::dom;
use crate::error::{ExtractError, Result};

/// Attendance counters for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectAttendance {
    pub present_classes: u32,
    pub total_classes: u32,
    /// Absolute present-class difference between the two most recent
    /// readings. Only set once a second reading exists.
    pub duty_leaves: Option<u32>,
}

/// Subject name → attendance, in portal row order.
///
/// Seeded from the subjects page with nothing recorded yet; attendance
/// pages fill the counters in through [`record`](SubjectMap::record).
/// Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectMap {
    entries: IndexMap<String, Option<SubjectAttendance>>,
}

impl SubjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from subject names, none with attendance yet.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Recorded attendance for a subject, if any reading happened yet.
    pub fn get(&self, name: &str) -> Option<&SubjectAttendance> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    /// Subject names in portal row order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, attendance)` pairs in portal row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SubjectAttendance>)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a fresh `present/total` reading for a tracked subject.
    ///
    /// A later reading overwrites the counters and keeps the absolute
    /// present-class difference as `duty_leaves`. Untracked names are
    /// ignored; tracking is decided at seed time.
    pub fn record(&mut self, name: &str, present: u32, total: u32) {
        let Some(slot) = self.entries.get_mut(name) else {
            return;
        };
        let duty_leaves = slot.as_ref().map(|prev| prev.present_classes.abs_diff(present));
        *slot = Some(SubjectAttendance {
            present_classes: present,
            total_classes: total,
            duty_leaves,
        });
    }
}

/// Ordered subject names from the subjects table. The final row is
/// the semester summary and carries no subject, so it is dropped.
pub fn parse_subjects(html_doc: &str) -> Result<Vec<String>> {
    let doc = Html::parse_document(html_doc);
    let table = dom::require(
        &doc,
        "table.items.table.table-striped.table-bordered.table-condensed",
        "subjects table",
    )?;
    let tbody = dom::require_in(table, "tbody", "subjects table body")?;
    let rows = dom::rows(tbody);

    let mut names = Vec::new();
    for row in rows.iter().take(rows.len().saturating_sub(1)) {
        let cells = dom::cells(*row);
        names.push(dom::text_of(dom::cell(&cells, 1, "subject name cell")?));
    }
    Ok(names)
}

/// Assignment extraction has no implementation. Fails loudly so a
/// caller never mistakes it for an empty-but-valid result.
pub fn parse_assignments(_html_doc: &str, _subjects: &mut SubjectMap) -> Result<()> {
    Err(ExtractError::Unimplemented("assignment extraction"))
}
