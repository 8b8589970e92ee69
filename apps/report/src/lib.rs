//! Employer report service: narrative breakdown, citation cross-references
//! and report assembly, plus the HTTP surface that exposes them.
//!
//! Render adapters link against [`crossref`] and implement
//! [`crossref::anchors::AnchorHost`] to drive a
//! [`crossref::controller::CrossReferenceController`].

pub mod config;
pub mod crossref;
pub mod errors;
pub mod models;
pub mod narrative;
pub mod report;
pub mod routes;
pub mod state;
