// src/config/consts.rs

/// Portal root. Image paths on the pages are site-relative and get
/// this prefix.
pub const BASE_URL: &str = "https://sctce.etlab.in";

/// Department code → full name, as printed on the profile pages.
/// Codes missing from the table pass through unchanged.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("AD", "Artificial Intelligence And Data Science"),
    ("CE", "Civil Engineering"),
    ("CSE", "Computer Science And Engineering"),
    ("ECE", "Electronics And Communication Engineering"),
    ("EEE", "Electrical And Electronics Engineering"),
    ("IT", "Information Technology"),
    ("ME", "Mechanical Engineering"),
    ("MCA", "Master Of Computer Applications"),
];
