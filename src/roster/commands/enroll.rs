use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::roster::Roster;

pub fn enroll(roster: &mut Roster, id: u32, course: &str) -> Result<CmdResult> {
    let course = require_course(course)?;
    let result = if roster.enroll_in_course(id, course) {
        CmdResult::default()
            .with_affected_ids(vec![id])
            .with_message(CmdMessage::success(
                "Student enrolled in course successfully!",
            ))
    } else {
        CmdResult::default().with_message(CmdMessage::error("Student not found."))
    };
    Ok(result)
}

pub fn unenroll(roster: &mut Roster, id: u32, course: &str) -> Result<CmdResult> {
    let course = require_course(course)?;
    let result = if roster.remove_from_course(id, course) {
        CmdResult::default()
            .with_affected_ids(vec![id])
            .with_message(CmdMessage::success(
                "Student removed from course successfully!",
            ))
    } else {
        CmdResult::default().with_message(CmdMessage::error(
            "Student is not enrolled in this course or failed to remove.",
        ))
    };
    Ok(result)
}

fn require_course(course: &str) -> Result<&str> {
    let course = course.trim();
    if course.is_empty() {
        return Err(RosterError::Api("Course name cannot be empty".into()));
    }
    Ok(course)
}
