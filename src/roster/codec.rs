//! # Line Codec
//!
//! Converts students to and from the persisted text format:
//!
//! ```text
//! <id>,<name>,<email>,<age>[,<course>]*\n
//! ```
//!
//! One record per line, no header, no quoting. A value that contains the
//! delimiter or a line break cannot be represented and will split into extra
//! fields on the next load; the encoder logs a warning when it writes one.

use crate::error::{Result, RosterError};
use crate::model::Student;
use tracing::warn;

pub const DELIMITER: char = ',';

pub fn encode_line(student: &Student) -> String {
    let mut fields = vec![
        student.id().to_string(),
        student.name().to_string(),
        student.email().to_string(),
        student.age().to_string(),
    ];
    fields.extend(student.courses().iter().cloned());

    for field in &fields[1..] {
        if is_unrepresentable(field) {
            warn!(
                id = student.id(),
                field = %field,
                "value contains the delimiter or a line break and will not load back intact"
            );
        }
    }

    fields.join(&DELIMITER.to_string())
}

/// Encodes every student, one `\n`-terminated line each, in the given order.
pub fn encode(students: &[Student]) -> String {
    let mut out = String::new();
    for student in students {
        out.push_str(&encode_line(student));
        out.push('\n');
    }
    out
}

/// Parses one line. `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, line_no: usize) -> Result<Student> {
    let mut fields = line.split(DELIMITER);

    let mut next_field = |what: &str| {
        fields.next().ok_or_else(|| RosterError::Parse {
            line: line_no,
            reason: format!("missing {} field", what),
        })
    };

    let id = parse_number(next_field("id")?, "id", line_no)?;
    let name = next_field("name")?;
    let email = next_field("email")?;
    let age = parse_number(next_field("age")?, "age", line_no)?;

    let mut student = Student::new(id, name, email, age);
    for course in fields.filter(|c| !c.is_empty()) {
        student.add_course(course);
    }
    Ok(student)
}

/// Parses a whole file. Blank lines are skipped; the first malformed line
/// aborts the decode.
pub fn decode(text: &str) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        students.push(decode_line(line, idx + 1)?);
    }
    Ok(students)
}

fn parse_number(field: &str, what: &str, line_no: usize) -> Result<u32> {
    field.trim().parse().map_err(|_| RosterError::Parse {
        line: line_no,
        reason: format!("{} {:?} is not a non-negative integer", what, field),
    })
}

fn is_unrepresentable(value: &str) -> bool {
    value.contains(DELIMITER) || value.contains('\n') || value.contains('\r')
}
