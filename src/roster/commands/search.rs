use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = roster
        .search_by_name(query)
        .into_iter()
        .cloned()
        .collect();

    let message = if matches.is_empty() {
        CmdMessage::warning("No students found.")
    } else {
        CmdMessage::info(format!("Found {} student(s):", matches.len()))
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_students(matches))
}
