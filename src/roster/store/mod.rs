//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary: it loads and saves the
//! full record set in one go. The in-memory [`crate::roster::Roster`] never
//! talks to the filesystem itself; the API bridges the two.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single flat file in the line format described in
//!   [`crate::codec`]. A missing file is created empty on first load.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait DataStore {
    /// Read every persisted record, in file order.
    fn load(&mut self) -> Result<Vec<Student>>;

    /// Replace the persisted records with `students`, in the order given.
    fn save(&mut self, students: &[Student]) -> Result<()>;
}
