use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    let students = roster.all();
    let message = if students.is_empty() {
        CmdMessage::warning("No students in the system.")
    } else {
        CmdMessage::info(format!("Total students: {}", students.len()))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_students(students))
}
