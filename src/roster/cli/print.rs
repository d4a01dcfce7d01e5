use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Student;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    for student in students {
        writeln!(out)?;
        writeln!(out, "{}", student.describe())?;
    }
    Ok(())
}

pub(super) fn print_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("----- {} -----", title).bold())
}

pub(super) fn print_error<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.red())
}
