use std::io::{self, Write};

use crate::events::{Event, EventKind};

pub static NO_ACTIVITY: &str = "No activity found for this user.";

static DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

// shown for events that arrive without a timestamp
static ZERO_DATE: &str = "0001-01-01 00:00";

/// Writes one line per event in the order given, or the no-activity line
/// when there is nothing to show.
pub fn render<W: Write>(events: &[Event], out: &mut W) -> io::Result<()> {
    if events.is_empty() {
        writeln!(out, "{}", NO_ACTIVITY)?;
        return Ok(());
    }

    for event in events {
        writeln!(out, "{}", line(event))?;
    }

    Ok(())
}

pub fn line(event: &Event) -> String {
    // the timestamp keeps the offset it was decoded with
    let date = match event.created_at {
        Some(created_at) => created_at.format(DATE_FORMAT).to_string(),
        None => ZERO_DATE.to_string(),
    };
    let repo = &event.repo.name;

    match event.kind() {
        EventKind::Push => format!(
            "- Pushed {} commits to {} ({})",
            event.payload.commit_count(),
            repo,
            date
        ),
        EventKind::Issues => format!(
            "- {} an issue '{}' in {} ({})",
            event.payload.action(),
            event.payload.issue_title(),
            repo,
            date
        ),
        EventKind::Watch => format!("- Starred  {} ({})", repo, date),
        EventKind::Create => {
            format!("- Created a repository called {} ({})", repo, date)
        }
        EventKind::PullRequest => {
            format!("- Opened a pull request in {} ({})", repo, date)
        }
        EventKind::Other(tag) => format!("- {} in {} ({})", tag, repo, date),
    }
}
