use std::fmt;

/// One student's identity and enrollment data.
///
/// The id is read-only: it is assigned by [`crate::roster::Roster`] and can
/// only be changed through [`crate::roster::Roster::change_id`], which rejects
/// collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: u32,
    name: String,
    email: String,
    age: u32,
    courses: Vec<String>,
}

impl Student {
    /// Builds a detached record. It only enters a roster via `create` (fresh id)
    /// or `restore` (validated id).
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            courses: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Appends `course` unless already enrolled. Returns whether it was added.
    pub fn add_course(&mut self, course: impl Into<String>) -> bool {
        let course = course.into();
        if self.is_enrolled_in(&course) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Removes `course` if present. Returns whether anything was removed.
    pub fn remove_course(&mut self, course: &str) -> bool {
        match self.courses.iter().position(|c| c == course) {
            Some(pos) => {
                self.courses.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn is_enrolled_in(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    pub fn describe(&self) -> String {
        let courses = if self.courses.is_empty() {
            "None".to_string()
        } else {
            self.courses.join(", ")
        };
        format!(
            "Student ID: {}\nName: {}\nEmail: {}\nAge: {}\nCourses: {}",
            self.id, self.name, self.email, self.age, courses
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
