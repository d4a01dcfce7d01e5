use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive student roster with flat-file persistence", long_about = None)]
pub struct Cli {
    /// Path of the data file (overrides the config file)
    #[arg(long, env = "ROSTER_DATA_FILE", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, env = "ROSTER_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Numbered menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    FindById,
    SearchByName,
    ListAll,
    Enroll,
    Unenroll,
    Save,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::Delete,
            MenuChoice::FindById,
            MenuChoice::SearchByName,
            MenuChoice::ListAll,
            MenuChoice::Enroll,
            MenuChoice::Unenroll,
            MenuChoice::Save,
            MenuChoice::Exit,
        ]
    }

    pub fn number(self) -> usize {
        Self::all()
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::FindById => "Search Student by ID",
            MenuChoice::SearchByName => "Search Students by Name",
            MenuChoice::ListAll => "List All Students",
            MenuChoice::Enroll => "Enroll Student in Course",
            MenuChoice::Unenroll => "Remove Student from Course",
            MenuChoice::Save => "Save Data",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<MenuChoice, ChoiceError> {
        let n: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        if n < 1 {
            return Err(ChoiceError::OutOfRange);
        }
        Self::all()
            .get((n - 1) as usize)
            .copied()
            .ok_or(ChoiceError::OutOfRange)
    }
}

/// The menu as printed before every prompt.
pub fn menu_text() -> String {
    let mut output = String::new();
    output.push_str("\n===== Student Management System =====\n");
    for choice in MenuChoice::all() {
        output.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_number() {
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            assert_eq!(MenuChoice::parse(&(i + 1).to_string()), Ok(*choice));
        }
        assert_eq!(MenuChoice::parse(" 9 "), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(MenuChoice::parse("abc"), Err(ChoiceError::NotANumber));
        assert_eq!(MenuChoice::parse(""), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(MenuChoice::parse("0"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("10"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("-3"), Err(ChoiceError::OutOfRange));
    }

    #[test]
    fn menu_lists_all_entries() {
        let text = menu_text();
        assert!(text.contains("1. Add Student\n"));
        assert!(text.contains("7. Remove Student from Course\n"));
        assert!(text.contains("9. Exit\n"));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["roster", "--data-file", "students.csv", "-v"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("students.csv")));
        assert!(cli.verbose);
    }
}
