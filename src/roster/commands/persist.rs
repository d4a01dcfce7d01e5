//! The load/save bridge between the in-memory roster and a [`DataStore`].

use crate::commands::{CmdMessage, CmdResult};
use crate::config::IdPolicy;
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;
use tracing::info;

pub fn save<S: DataStore>(roster: &Roster, store: &mut S) -> Result<CmdResult> {
    let students = roster.all();
    store.save(&students)?;
    info!(count = students.len(), "saved roster");
    Ok(CmdResult::default().with_message(CmdMessage::success("Data saved successfully!")))
}

/// Adds every persisted record to `roster`.
///
/// With [`IdPolicy::Reassign`] the records get fresh ids and their courses are
/// re-applied against the new id. With [`IdPolicy::Preserve`] the file ids are
/// kept and a duplicate id aborts the load; records restored before the
/// duplicate stay in the roster.
pub fn load<S: DataStore>(
    roster: &mut Roster,
    store: &mut S,
    policy: IdPolicy,
) -> Result<CmdResult> {
    let loaded = store.load()?;
    let mut ids = Vec::with_capacity(loaded.len());

    for student in loaded {
        let id = match policy {
            IdPolicy::Preserve => roster.restore(student)?,
            IdPolicy::Reassign => {
                let id = roster.create(student.name(), student.email(), student.age())?;
                for course in student.courses() {
                    roster.enroll_in_course(id, course);
                }
                id
            }
        };
        ids.push(id);
    }

    info!(count = ids.len(), ?policy, "loaded roster");
    let message = CmdMessage::info(format!("Loaded {} students.", ids.len()));
    Ok(CmdResult::default()
        .with_affected_ids(ids)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::RosterFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_roster_saves_zero_lines() {
        let roster = Roster::new();
        let mut store = InMemoryStore::new();
        save(&roster, &mut store).unwrap();
        assert_eq!(store.contents(), Some(""));

        let mut fresh = Roster::new();
        load(&mut fresh, &mut store, IdPolicy::Preserve).unwrap();
        assert_eq!(fresh.count(), 0);
    }

    #[test]
    fn save_writes_one_line_per_student() {
        let roster = RosterFixture::new()
            .with_student("Ann", &["CS101"])
            .with_student("Bob", &[])
            .build();
        let mut store = InMemoryStore::new();
        save(&roster, &mut store).unwrap();
        assert_eq!(
            store.contents(),
            Some("1000,Ann,ann@example.com,20,CS101\n1001,Bob,bob@example.com,20\n")
        );
    }

    #[test]
    fn save_failure_propagates() {
        let roster = RosterFixture::new().with_students(1).build();
        let mut store = InMemoryStore::new().failing_saves();
        assert!(matches!(save(&roster, &mut store), Err(RosterError::Io(_))));
    }

    #[test]
    fn ann_round_trips() {
        let mut roster = Roster::new();
        let id = roster.create("Ann", "a@x.com", 30).unwrap();
        assert_eq!(id, 1000);
        roster.enroll_in_course(id, "CS101");

        let mut store = InMemoryStore::new();
        save(&roster, &mut store).unwrap();

        let mut fresh = Roster::new();
        load(&mut fresh, &mut store, IdPolicy::Preserve).unwrap();
        let ann = &fresh.all()[0];
        assert_eq!(ann.name(), "Ann");
        assert_eq!(ann.email(), "a@x.com");
        assert_eq!(ann.age(), 30);
        assert_eq!(ann.courses(), ["CS101".to_string()]);
    }

    #[test]
    fn preserve_keeps_ids_and_advances_counter() {
        let mut roster = RosterFixture::new().with_students(3).build();
        roster.delete(1001);
        let mut store = InMemoryStore::new();
        save(&roster, &mut store).unwrap();

        let mut fresh = Roster::new();
        let result = load(&mut fresh, &mut store, IdPolicy::Preserve).unwrap();
        assert_eq!(result.affected_ids, vec![1000, 1002]);
        assert_eq!(fresh.next_id(), Some(1003));
        assert_eq!(result.messages[0].content, "Loaded 2 students.");
    }

    #[test]
    fn reassign_renumbers_but_keeps_data() {
        // Under Reassign, ids come from the fresh roster's counter, not the file.
        let mut store = InMemoryStore::with_contents(
            "2000,Ann,a@x.com,30,CS101,MATH200\n2005,Bob,b@x.com,22\n",
        );
        let mut fresh = Roster::new();
        let result = load(&mut fresh, &mut store, IdPolicy::Reassign).unwrap();

        assert_eq!(result.affected_ids, vec![1000, 1001]);
        let ann = fresh.get(1000).unwrap();
        assert_eq!(ann.name(), "Ann");
        assert_eq!(
            ann.courses(),
            ["CS101".to_string(), "MATH200".to_string()]
        );
        assert_eq!(fresh.get(1001).unwrap().email(), "b@x.com");
        assert!(fresh.get(2000).is_none());
    }

    #[test]
    fn round_trip_preserves_count_fields_and_courses() {
        let roster = RosterFixture::new()
            .with_student("Ann", &["CS101", "MATH200"])
            .with_student("Bob", &[])
            .with_student("Cyd", &["PHY150"])
            .build();
        let mut store = InMemoryStore::new();
        save(&roster, &mut store).unwrap();

        for policy in [IdPolicy::Preserve, IdPolicy::Reassign] {
            let mut reloaded = Roster::new();
            load(&mut reloaded, &mut store, policy).unwrap();
            assert_eq!(reloaded.count(), roster.count());
            for (before, after) in roster.all().iter().zip(reloaded.all().iter()) {
                assert_eq!(before.name(), after.name());
                assert_eq!(before.email(), after.email());
                assert_eq!(before.age(), after.age());
                assert_eq!(before.courses(), after.courses());
            }
        }
    }

    #[test]
    fn duplicate_ids_abort_preserving_load() {
        let mut store = InMemoryStore::with_contents("7,Ann,a,1\n7,Bob,b,2\n");
        let mut fresh = Roster::new();
        assert!(matches!(
            load(&mut fresh, &mut store, IdPolicy::Preserve),
            Err(RosterError::DuplicateId(7))
        ));
    }

    #[test]
    fn malformed_file_aborts_load() {
        let mut store = InMemoryStore::with_contents("1000,Ann,a@x.com,thirty\n");
        let mut fresh = Roster::new();
        assert!(matches!(
            load(&mut fresh, &mut store, IdPolicy::Preserve),
            Err(RosterError::Parse { line: 1, .. })
        ));
        assert_eq!(fresh.count(), 0);
    }
}
