//! Audit logging for wizard sessions
//!
//! Records every wizard transition and submission in an append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one event with timestamp, session id, the action taken
//!   and the steps before and after it.
//! - `AuditLogger`: appends entries to the audit log file using a
//!   line-delimited JSON format (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use dogwood::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::started(session_id, "Personal Info"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EventKind};
pub use logger::AuditLogger;
