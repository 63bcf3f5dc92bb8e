//! Payloads for the narrative report service.
//!
//! The pillar engine never talks to the network. This crate only shapes
//! what goes out (birth data, gender, the computed chart, the prompt and
//! the expected response schema) and validates what comes back. Whoever
//! owns the HTTP call passes the raw response text to [`Report::from_json`].
//!
//! The service may return its own pillars. [`Report::reconcile`] records
//! where they disagree; with the default [`OverridePolicy::KeepComputed`]
//! the locally computed chart always wins.

pub mod error;
pub mod report;
pub mod request;

pub use error::ReportError;
pub use report::{Analysis, Discrepancy, OverridePolicy, Reconciled, Report};
pub use request::{Gender, ReportRequest, SYSTEM_INSTRUCTION, response_schema};
