use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, id: u32) -> Result<CmdResult> {
    let result = if roster.delete(id) {
        CmdResult::default()
            .with_affected_ids(vec![id])
            .with_message(CmdMessage::success("Student deleted successfully!"))
    } else {
        CmdResult::default().with_message(CmdMessage::error(
            "Student not found or failed to delete.",
        ))
    };
    Ok(result)
}
