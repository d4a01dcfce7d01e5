//! # API Facade
//!
//! [`RosterApi`] is the single entry point for every roster operation. It owns
//! the in-memory [`Roster`] and the persistence backend, and dispatches each
//! call to the matching command in `commands/*.rs`.
//!
//! The facade does no business logic and no terminal I/O: it returns
//! `Result<CmdResult>` and leaves rendering to the caller.
//!
//! `RosterApi<S: DataStore>` is generic over the backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::roster::Roster;
use crate::store::DataStore;

pub struct RosterApi<S: DataStore> {
    roster: Roster,
    store: S,
    id_policy: IdPolicy,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_roster(Roster::new(), store)
    }

    pub fn with_roster(roster: Roster, store: S) -> Self {
        Self {
            roster,
            store,
            id_policy: IdPolicy::default(),
        }
    }

    pub fn with_id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }

    pub fn add_student(&mut self, name: String, email: String, age: u32) -> Result<CmdResult> {
        commands::add::run(&mut self.roster, name, email, age)
    }

    pub fn delete_student(&mut self, id: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.roster, id)
    }

    pub fn find_student(&self, id: u32) -> Result<CmdResult> {
        commands::find::run(&self.roster, id)
    }

    pub fn search_students(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.roster, query)
    }

    pub fn list_students(&self) -> Result<CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn enroll(&mut self, id: u32, course: &str) -> Result<CmdResult> {
        commands::enroll::enroll(&mut self.roster, id, course)
    }

    pub fn unenroll(&mut self, id: u32, course: &str) -> Result<CmdResult> {
        commands::enroll::unenroll(&mut self.roster, id, course)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::persist::load(&mut self.roster, &mut self.store, self.id_policy)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::persist::save(&self.roster, &mut self.store)
    }

    /// Whether a student with `id` exists. Lets a UI bail out before asking
    /// follow-up questions.
    pub fn has_student(&self, id: u32) -> bool {
        self.roster.get(id).is_some()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::config::{IdPolicy, RosterConfig};
