use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster, id: u32) -> Result<CmdResult> {
    let result = match roster.get(id) {
        Some(student) => CmdResult::default()
            .with_message(CmdMessage::info("Student found:"))
            .with_listed_students(vec![student.clone()]),
        None => CmdResult::default().with_message(CmdMessage::error("Student not found.")),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::RosterFixture;

    #[test]
    fn finds_by_id() {
        let roster = RosterFixture::new()
            .with_student("Ann", &["CS101"])
            .with_student("Bob", &[])
            .build();

        let result = run(&roster, 1001).unwrap();
        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].name(), "Bob");
    }

    #[test]
    fn unknown_id_lists_nothing() {
        let roster = RosterFixture::new().with_students(1).build();
        let result = run(&roster, 1).unwrap();
        assert!(result.listed_students.is_empty());
        assert!(result.has_errors());
    }
}
