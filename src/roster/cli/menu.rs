//! The interactive loop: print the menu, read a choice, run it, repeat.
//!
//! Generic over the input and output streams so the whole loop can be driven
//! from in-memory buffers.

use super::print::{print_error, print_heading, print_messages, print_students};
use super::prompt::{ask, ask_number, Number};
use super::setup::{menu_text, ChoiceError, MenuChoice};
use roster::api::{CmdResult, RosterApi};
use roster::error::{Result, RosterError};
use roster::store::DataStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What the loop does after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

pub(super) struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut RosterApi<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(super) fn new(api: &'a mut RosterApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    /// Runs until the user picks Exit or the input ends. Both paths save.
    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", menu_text())?;
            let line = match ask(&mut self.input, &mut self.out, "Enter your choice: ")? {
                Some(line) => line,
                None => return self.finish(true),
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(ChoiceError::NotANumber) => {
                    print_error(&mut self.out, "Invalid input. Please enter a number.")?;
                    continue;
                }
                Err(ChoiceError::OutOfRange) => {
                    print_error(&mut self.out, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            debug!(?choice, "menu choice");

            match self.dispatch(choice)? {
                Flow::Continue => {}
                Flow::Exit => return self.finish(false),
                Flow::EndOfInput => return self.finish(true),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::FindById => self.find(),
            MenuChoice::SearchByName => self.search(),
            MenuChoice::ListAll => self.list(),
            MenuChoice::Enroll => self.enrollment(true),
            MenuChoice::Unenroll => self.enrollment(false),
            MenuChoice::Save => {
                self.save()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Add Student")?;
        let Some(name) = ask(&mut self.input, &mut self.out, "Enter name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(email) = ask(&mut self.input, &mut self.out, "Enter email: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let invalid = "Invalid age. Please enter a non-negative number.";
        let age = match self.number("Enter age: ", invalid)? {
            Ok(age) => age,
            Err(flow) => return Ok(flow),
        };
        let result = self.api.add_student(name, email, age);
        self.report(result)
    }

    fn delete(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Delete Student")?;
        let id = match self.student_id()? {
            Ok(id) => id,
            Err(flow) => return Ok(flow),
        };
        let result = self.api.delete_student(id);
        self.report(result)
    }

    fn find(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Search Student by ID")?;
        let id = match self.student_id()? {
            Ok(id) => id,
            Err(flow) => return Ok(flow),
        };
        let result = self.api.find_student(id);
        self.report(result)
    }

    fn search(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "Search Students by Name")?;
        let Some(query) = ask(&mut self.input, &mut self.out, "Enter name (or part of name): ")?
        else {
            return Ok(Flow::EndOfInput);
        };
        let result = self.api.search_students(&query);
        self.report(result)
    }

    fn list(&mut self) -> Result<Flow> {
        print_heading(&mut self.out, "All Students")?;
        let result = self.api.list_students();
        self.report(result)
    }

    fn enrollment(&mut self, enroll: bool) -> Result<Flow> {
        let title = if enroll {
            "Enroll Student in Course"
        } else {
            "Remove Student from Course"
        };
        print_heading(&mut self.out, title)?;

        let id = match self.student_id()? {
            Ok(id) => id,
            Err(flow) => return Ok(flow),
        };
        if !self.api.has_student(id) {
            print_error(&mut self.out, "Student not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(course) = ask(&mut self.input, &mut self.out, "Enter course name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let result = if enroll {
            self.api.enroll(id, &course)
        } else {
            self.api.unenroll(id, &course)
        };
        self.report(result)
    }

    fn save(&mut self) -> Result<()> {
        print_heading(&mut self.out, "Saving Data")?;
        let result = self.api.save();
        if let Err(e) = &result {
            warn!(error = %e, "save failed");
            print_error(&mut self.out, "Failed to save data.")?;
        }
        self.report(result)?;
        Ok(())
    }

    fn finish(&mut self, end_of_input: bool) -> Result<()> {
        if end_of_input {
            writeln!(self.out)?;
        }
        writeln!(self.out, "Saving data before exit...")?;
        self.save()?;
        writeln!(self.out, "Exiting program. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints a command outcome. API errors are reported, not propagated, so
    /// one bad action never ends the session.
    fn report(&mut self, result: Result<CmdResult>) -> Result<Flow> {
        match result {
            Ok(result) => {
                print_messages(&mut self.out, &result.messages)?;
                print_students(&mut self.out, &result.listed_students)?;
            }
            Err(RosterError::Api(msg)) => print_error(&mut self.out, &msg)?,
            Err(e) => print_error(&mut self.out, &format!("Error: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn student_id(&mut self) -> Result<std::result::Result<u32, Flow>> {
        self.number("Enter student ID: ", "Invalid student ID.")
    }

    /// Reads a number. `Err(flow)` means the action should stop with `flow`.
    fn number(&mut self, label: &str, invalid: &str) -> Result<std::result::Result<u32, Flow>> {
        match ask_number(&mut self.input, &mut self.out, label)? {
            Number::Value(n) => Ok(Ok(n)),
            Number::Invalid => {
                print_error(&mut self.out, invalid)?;
                Ok(Err(Flow::Continue))
            }
            Number::EndOfInput => Ok(Err(Flow::EndOfInput)),
        }
    }
}
