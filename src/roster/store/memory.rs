use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Saved snapshots go through the line codec so that tests see the same
/// round-trip behaviour as the file backend.
#[derive(Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `text` as if it had been read from a data file.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            fail_saves: false,
        }
    }

    /// Makes every subsequent `save` fail like an unwritable file.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The raw text of the last save, `None` if nothing was ever written.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Student>> {
        match &self.contents {
            Some(text) => crate::codec::decode(text),
            None => {
                self.contents = Some(String::new());
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_saves {
            return Err(RosterError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.contents = Some(crate::codec::encode(students));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::roster::Roster;

    pub struct RosterFixture {
        pub roster: Roster,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                roster: Roster::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                self.roster
                    .create(
                        format!("Student {}", i + 1),
                        format!("student{}@example.com", i + 1),
                        18 + i as u32,
                    )
                    .expect("fixture roster ran out of ids");
            }
            self
        }

        pub fn with_student(mut self, name: &str, courses: &[&str]) -> Self {
            let id = self
                .roster
                .create(name, format!("{}@example.com", name.to_lowercase()), 20)
                .expect("fixture roster ran out of ids");
            for course in courses {
                self.roster.enroll_in_course(id, course);
            }
            self
        }

        pub fn build(self) -> Roster {
            self.roster
        }
    }
}
