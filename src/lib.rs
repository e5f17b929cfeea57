//! Casewatch - USCIS case status poller
//!
//! Polls the case-status page for a receipt number, tracks the headline
//! status across runs in a flat-file record, and renders a report for
//! console output and optional email notification.

pub mod cli;
pub mod config;
pub mod elapsed;
pub mod error;
pub mod fetch;
pub mod mail;
pub mod page;
pub mod report;
pub mod tracker;

pub use error::CasewatchError;
