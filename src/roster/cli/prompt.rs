use std::io::{self, BufRead, Write};

/// Writes `label`, then reads one line. `None` means the input is exhausted.
pub(super) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Outcome of asking for a number.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Number {
    Value(u32),
    Invalid,
    EndOfInput,
}

pub(super) fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Number> {
    Ok(match ask(input, out, label)? {
        None => Number::EndOfInput,
        Some(line) => match line.trim().parse() {
            Ok(n) => Number::Value(n),
            Err(_) => Number::Invalid,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_line_without_terminator() {
        let mut input = Cursor::new("Ann Smith\r\nnext\n");
        let mut out = Vec::new();
        let line = ask(&mut input, &mut out, "Enter name: ").unwrap();
        assert_eq!(line.as_deref(), Some("Ann Smith"));
        assert_eq!(String::from_utf8(out).unwrap(), "Enter name: ");
    }

    #[test]
    fn empty_line_is_some_empty() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(ask(&mut input, &mut out, "").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn eof_is_none() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(ask(&mut input, &mut out, "> ").unwrap(), None);
    }

    #[test]
    fn numbers() {
        let mut input = Cursor::new(" 42 \nforty\n");
        let mut out = Vec::new();
        assert_eq!(ask_number(&mut input, &mut out, "").unwrap(), Number::Value(42));
        assert_eq!(
            ask_number(&mut input, &mut out, "").unwrap(),
            Number::Invalid
        );
        assert_eq!(
            ask_number(&mut input, &mut out, "").unwrap(),
            Number::EndOfInput
        );
    }
}
