// src/specs/profile.rs

use scraper::Html;

use crate::config::consts::BASE_URL;
use crate::core::{decode, dom};
use crate::error::{ExtractError, Result};

/// Header block of the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Absolute URL of the profile photo.
    pub profile_pic: String,
    /// Full department name when the printed code is known.
    pub department: String,
    pub year: u32,
}

/// Everything the account sidebar shows about the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarProfile {
    pub name: String,
    pub uni_reg_no: String,
    pub admission_no: String,
    pub mobile_no: String,
    /// Decoded plain-text address.
    pub email: String,
    pub academic_year: String,
    /// State line of the permanent address block.
    pub state: String,
    /// Absolute URL of the signature image.
    pub sign: String,
    /// Absolute URL of the profile photo.
    pub profile_pic: String,
}

/// Extract the profile header: labeled name, photo, and the
/// "Studying in ..." line with department and year.
pub fn parse_profile(html_doc: &str) -> Result<Profile> {
    let doc = Html::parse_document(html_doc);

    let name = dom::label_value(&doc, "Name")?;
    let photo = dom::require(&doc, "img#photo", "profile photo")?;
    let src = dom::attr(photo, "src", "profile photo src")?;

    let studying = dom::require(&doc, "center", "studying-in line")?;
    let (department, year) = split_studying(&dom::text_of(studying))?;

    Ok(Profile {
        name,
        profile_pic: join!(BASE_URL, &src),
        department,
        year,
    })
}

/// "Studying in CSE 2021" → (full department name, year). With the
/// filler "in" dropped the line must be exactly three tokens: the
/// `Studying` marker, the department code, the year.
fn split_studying(text: &str) -> Result<(String, u32)> {
    let tokens: Vec<&str> = text.split_whitespace().filter(|t| *t != "in").collect();
    match tokens[..] {
        ["Studying", code, year] => Ok((decode::department(code), decode::int(year, "year")?)),
        _ => Err(ExtractError::Malformed(format!(
            "unexpected studying-in line {text:?}"
        ))),
    }
}

/// Extract the account sidebar: eight labeled rows, the obfuscated
/// email, the permanent-address state, and the two images.
pub fn parse_sidebar(html_doc: &str) -> Result<SidebarProfile> {
    let doc = Html::parse_document(html_doc);

    let email_cell = dom::value_cell(&doc, "Email")?;
    let link = dom::require_in(email_cell, "a[data-cfemail]", "obfuscated email link")?;
    let email = decode::email(&dom::attr(link, "data-cfemail", "obfuscated email attr")?)?;

    // "Permanent Address" is a heading span; the State row sits in the
    // same block, so the label lookup is scoped to the heading's parent.
    let heading = dom::find_labeled(&doc, "span", "Permanent Address")
        .ok_or_else(|| ExtractError::missing("permanent address heading"))?;
    let block = dom::parent_element(heading)
        .ok_or_else(|| ExtractError::missing("permanent address block"))?;
    let state = dom::label_value_in(block, "State")?;

    let sign_src = dom::attr(
        dom::require(&doc, "img#sign", "signature image")?,
        "src",
        "signature src",
    )?;
    let photo_src = dom::attr(
        dom::require(&doc, "img#photo", "profile photo")?,
        "src",
        "profile photo src",
    )?;

    Ok(SidebarProfile {
        name: dom::label_value(&doc, "Name")?,
        uni_reg_no: dom::label_value(&doc, "University Reg No")?,
        admission_no: dom::label_value(&doc, "Admission No")?,
        mobile_no: dom::label_value(&doc, "Mobile No")?,
        email,
        academic_year: dom::label_value(&doc, "Academic Year")?,
        state,
        sign: join!(BASE_URL, &sign_src),
        profile_pic: join!(BASE_URL, &photo_src),
    })
}
