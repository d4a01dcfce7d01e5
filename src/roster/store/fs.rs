use super::DataStore;
use crate::codec;
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Production backend: one flat data file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }

    fn create_empty(&self) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, "").map_err(RosterError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "data file does not exist, creating an empty one");
            self.create_empty()?;
            return Ok(Vec::new());
        }

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "data file vanished, creating an empty one");
                self.create_empty()?;
                return Ok(Vec::new());
            }
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "unable to open data file for reading"
                );
                return Ok(Vec::new());
            }
        };

        let students = codec::decode(&utf8_text(bytes)?)?;
        debug!(path = %self.path.display(), count = students.len(), "decoded data file");
        Ok(students)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, codec::encode(students)).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "unable to open data file for writing");
            RosterError::Io(e)
        })?;
        debug!(path = %self.path.display(), count = students.len(), "wrote data file");
        Ok(())
    }
}

/// Invalid UTF-8 is a `Parse` error on the line where it starts.
fn utf8_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        RosterError::Parse {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
            reason: "not valid UTF-8".to_string(),
        }
    })
}
