//! # Record Store
//!
//! [`Roster`] is the in-memory keyed collection of students and the sole
//! authority for id assignment. Records are kept in a `BTreeMap`, so every
//! listing comes back in ascending id order regardless of insertion order.
//!
//! Ids come from a per-roster counter (`next_id`) seeded at [`FIRST_ID`]. It is
//! bumped exactly once per successful [`Roster::create`] and never rewinds, so a
//! deleted id is never handed out again. The counter is kept one step wider than
//! an id so that it can sit past `u32::MAX`; `create` then fails with
//! [`RosterError::IdSpaceExhausted`].

use crate::error::{Result, RosterError};
use crate::model::Student;
use std::collections::BTreeMap;

pub const FIRST_ID: u32 = 1000;

#[derive(Debug, Clone)]
pub struct Roster {
    students: BTreeMap<u32, Student>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::with_first_id(FIRST_ID)
    }

    pub fn with_first_id(first_id: u32) -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: u64::from(first_id),
        }
    }

    /// The id the next `create` will hand out, `None` once every id is used up.
    pub fn next_id(&self) -> Option<u32> {
        u32::try_from(self.next_id).ok()
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Result<u32> {
        let id = self.next_id().ok_or(RosterError::IdSpaceExhausted)?;
        if self.students.contains_key(&id) {
            return Err(RosterError::DuplicateId(id));
        }
        self.students.insert(id, Student::new(id, name, email, age));
        self.next_id += 1;
        Ok(id)
    }

    /// Inserts a detached record under its own id.
    ///
    /// Fails if the id is already taken. The counter is moved past the
    /// restored id so later `create` calls cannot collide with it.
    pub fn restore(&mut self, student: Student) -> Result<u32> {
        let id = student.id();
        if self.students.contains_key(&id) {
            return Err(RosterError::DuplicateId(id));
        }
        self.students.insert(id, student);
        self.bump_past(id);
        Ok(id)
    }

    pub fn delete(&mut self, id: u32) -> bool {
        self.students.remove(&id).is_some()
    }

    pub fn get(&self, id: u32) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    /// Moves a record to a new id, rejecting collisions.
    pub fn change_id(&mut self, old: u32, new: u32) -> Result<()> {
        if old == new {
            return if self.students.contains_key(&old) {
                Ok(())
            } else {
                Err(RosterError::StudentNotFound(old))
            };
        }
        if self.students.contains_key(&new) {
            return Err(RosterError::DuplicateId(new));
        }
        let mut student = self
            .students
            .remove(&old)
            .ok_or(RosterError::StudentNotFound(old))?;
        student.set_id(new);
        self.students.insert(new, student);
        self.bump_past(new);
        Ok(())
    }

    /// Case-insensitive (ASCII) substring match on names, in id order.
    /// An empty query matches every student.
    pub fn search_by_name(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_ascii_lowercase();
        self.students
            .values()
            .filter(|s| s.name().to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// Returns false only when the student does not exist; re-enrolling is a
    /// successful no-op.
    pub fn enroll_in_course(&mut self, id: u32, course: &str) -> bool {
        match self.students.get_mut(&id) {
            Some(student) => {
                student.add_course(course);
                true
            }
            None => false,
        }
    }

    /// Returns false when the student does not exist or is not enrolled.
    pub fn remove_from_course(&mut self, id: u32, course: &str) -> bool {
        match self.students.get_mut(&id) {
            Some(student) => student.remove_course(course),
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Copies of every record in ascending id order.
    pub fn all(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    /// Drops every record. The counter is left alone.
    pub fn clear(&mut self) {
        self.students.clear();
    }

    fn bump_past(&mut self, id: u32) {
        self.next_id = self.next_id.max(u64::from(id) + 1);
    }
}
