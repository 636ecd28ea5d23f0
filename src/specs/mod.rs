// src/specs/mod.rs
//! # Page extraction specs
//!
//! One module per portal page. Each spec encodes *where the ground
//! truth lives in that page's HTML* and *how to extract it robustly*,
//! and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing**: raw document text in, typed records out.
//! - **Selector choices** per page (classes, labels, cell positions);
//!   every markup-shape assumption sits in exactly one spec.
//! - **Light shaping** into the record structs declared beside each
//!   extractor.
//!
//! ## What does **not** live here
//! - **Networking, sessions, cookies**: an external collaborator
//!   fetches the pages.
//! - **Caching/persistence and serialization**: callers own the
//!   records once returned.
//! - **Cross-page orchestration**: the one cross-call piece of state,
//!   the subject map, is owned and threaded through by the caller.
//!
//! ## Conventions & invariants
//! - Extractors are pure: same document, same result.
//! - A missing label, table, row or column is a typed
//!   [`Malformed`](crate::ExtractError::Malformed) error, never a
//!   panic; the only "absent is fine" cases are documented on the
//!   extractor (dashboard name probe, survey/form action links).
//! - Specs are testable offline against fixture documents.

pub mod attendance;
pub mod dashboard;
pub mod forms;
pub mod profile;
pub mod subjects;
pub mod surveys;
pub mod timetable;
