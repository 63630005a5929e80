//! Audit history command

use super::session::Session;
use crate::error::PocketbookResult;

/// Print the last `count` audit entries, oldest first
pub fn handle_history_command(session: &Session, count: usize) -> PocketbookResult<()> {
    let entries = session.audit().read_recent(count)?;

    if entries.is_empty() {
        if session.settings().audit_enabled {
            println!("No history recorded yet.");
        } else {
            println!("No history recorded (audit logging is disabled).");
        }
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
