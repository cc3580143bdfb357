//! CLI command for reading the wizard audit log

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::DogwoodPaths;
use crate::error::{DogwoodError, DogwoodResult};
use crate::models::SessionId;

/// Entries of one session, by full id or by the short form shown on screen
fn session_entries(logger: &AuditLogger, id: &str) -> DogwoodResult<Vec<AuditEntry>> {
    if let Ok(session_id) = id.parse::<SessionId>() {
        return logger.read_session(session_id);
    }

    let prefix = id.trim().trim_start_matches("ses-").to_lowercase();
    if prefix.is_empty() {
        return Err(DogwoodError::Validation(
            "Session id must not be empty".to_string(),
        ));
    }

    Ok(logger
        .read_all()?
        .into_iter()
        .filter(|e| e.session_id.as_uuid().to_string().starts_with(&prefix))
        .collect())
}

/// The most recent `limit` entries, optionally narrowed to one session
fn recent_entries(
    logger: &AuditLogger,
    limit: usize,
    session: Option<&str>,
) -> DogwoodResult<Vec<AuditEntry>> {
    match session {
        Some(id) => {
            let mut entries = session_entries(logger, id)?;
            let start = entries.len().saturating_sub(limit);
            entries.drain(..start);
            Ok(entries)
        }
        None => logger.read_recent(limit),
    }
}

/// Handle `dogwood log`
pub fn handle_log_command(
    paths: &DogwoodPaths,
    limit: usize,
    session: Option<&str>,
) -> DogwoodResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = recent_entries(&logger, limit, session)?;

    if entries.is_empty() {
        println!("No wizard activity recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_short_session_id_matches() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let session = SessionId::new();
        logger.log(&AuditEntry::started(session, "Personal Info")).unwrap();
        logger.log(&AuditEntry::started(SessionId::new(), "Personal Info")).unwrap();

        let short = session.to_string();
        let entries = session_entries(&logger, &short).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].session_id, session);

        let full = session.as_uuid().to_string();
        assert_eq!(session_entries(&logger, &full).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_session_id_rejected() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        logger.log(&AuditEntry::started(SessionId::new(), "Personal Info")).unwrap();

        for id in ["", "   ", "ses-"] {
            let err = session_entries(&logger, id).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_limit_applies_to_session_filter() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let session = SessionId::new();
        for _ in 0..3 {
            logger.log(&AuditEntry::started(session, "Personal Info")).unwrap();
        }
        logger.log(&AuditEntry::started(SessionId::new(), "Personal Info")).unwrap();

        let short = session.to_string();
        assert_eq!(recent_entries(&logger, 2, Some(&short)).unwrap().len(), 2);
        assert_eq!(recent_entries(&logger, 10, Some(&short)).unwrap().len(), 3);
        assert_eq!(recent_entries(&logger, 10, None).unwrap().len(), 4);
    }
}
