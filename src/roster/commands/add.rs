use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, name: String, email: String, age: u32) -> Result<CmdResult> {
    let id = roster.create(name, email, age)?;
    Ok(CmdResult::default()
        .with_affected_ids(vec![id])
        .with_message(CmdMessage::success(format!(
            "Student added successfully! (ID: {})",
            id
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::FIRST_ID;

    #[test]
    fn assigns_sequential_ids() {
        let mut roster = Roster::new();
        let first = run(&mut roster, "Ann".into(), "a@x.com".into(), 30).unwrap();
        let second = run(&mut roster, "Bob".into(), "b@x.com".into(), 22).unwrap();

        assert_eq!(first.affected_ids, vec![FIRST_ID]);
        assert_eq!(second.affected_ids, vec![FIRST_ID + 1]);
        assert_eq!(roster.count(), 2);
        assert!(first.messages[0].content.contains("1000"));
    }

    #[test]
    fn accepts_empty_fields() {
        let mut roster = Roster::new();
        let result = run(&mut roster, String::new(), String::new(), 0).unwrap();
        let student = roster.get(result.affected_ids[0]).unwrap();
        assert_eq!(student.name(), "");
        assert_eq!(student.age(), 0);
    }

    #[test]
    fn full_id_space_is_an_error() {
        let mut roster = Roster::with_first_id(u32::MAX);
        run(&mut roster, "Ann".into(), String::new(), 1).unwrap();
        assert!(matches!(
            run(&mut roster, "Bob".into(), String::new(), 1),
            Err(crate::error::RosterError::IdSpaceExhausted)
        ));
        assert_eq!(roster.count(), 1);
    }
}
